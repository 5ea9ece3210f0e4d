// NOTE: letterbox Architecture Rationale
//
// Why inject "now" everywhere (not read the clock in views)?
// - Delivery state flips at an exact instant; tests and `--now` must be able to pin it
// - The same letter rendered twice in one command must agree with itself
//
// Why re-read letters.json on every call?
// - Deletions from another process must be visible immediately
// - The store is small; there is no cache to invalidate

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand, LetterCommand};
pub use commands::run;
