//! # Presentation Layer
//!
//! Console output for the letterbox CLI, split the same way for every command:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> [ serde_json ] --> Output
//!    (Controller)      (Converter)       (Data)          (Driver)  ==(Text)==> [ View ] --> Output
//!                                                                                 (Layout)
//! ```
//!
//! ## Rules
//!
//! ### 1. The JSON Test
//! ViewModels keep raw data next to any pre-localized string: a letter row carries
//! `delivery.span` (bucket + milliseconds) as well as `delivery.display_duration`.
//! JSON output is an API; scripts should not have to parse "2 days ago".
//!
//! ### 2. One "now" per command
//! Presenters receive the instant the handler read from its clock and never call
//! the clock themselves, so every row in one output is resolved at the same time.
//!
//! ## Directory Guide
//!
//! * `view_models/` - Serializable data contracts plus the `CreateView` bridge.
//! * `presenters/` - Turn runtime results into `CommandResultViewModel`s (badges, tips).
//! * `views/` - `fmt::Display` layouts, colors and formatting.
//! * `renderers/` - JSON vs text switch.
//! * `formatters/` - Small string helpers used by views.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel, ViewMode};
