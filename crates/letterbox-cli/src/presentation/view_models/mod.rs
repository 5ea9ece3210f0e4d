pub mod common;
pub mod config;
pub mod guide;
pub mod letter;
pub mod result;

use std::fmt;

pub use common::{Guidance, StatusBadge, StatusLevel, ViewMode};
pub use config::ConfigViewModel;
pub use guide::GuideViewModel;
pub use letter::{
    DeleteResultViewModel, LetterDetailViewModel, LetterListViewModel, LetterNotFoundViewModel,
};
pub use result::CommandResultViewModel;

/// Bridge from a ViewModel to its text layout.
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a>;
}
