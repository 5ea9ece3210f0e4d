//! Testing infrastructure for letterbox integration tests.
//!
//! - `TestWorld`: isolated data directory plus a configured CLI invocation
//! - `fixtures`: letter builders and a sample mailbox pinned to [`fixtures::NOW`]
//! - `assertions`: checks over the JSON output envelope

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use fixtures::LetterBuilder;
pub use world::{CliResult, TestWorld};
