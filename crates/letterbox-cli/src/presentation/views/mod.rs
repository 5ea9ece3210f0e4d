pub mod config;
pub mod guide;
pub mod letter;

pub use config::ConfigView;
pub use guide::GuideView;
pub use letter::{DeleteResultView, LetterDetailTextView, LetterListView, LetterNotFoundView};
