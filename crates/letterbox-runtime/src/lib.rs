pub mod clock;
pub mod config;
pub mod error;
pub mod feed;
pub mod mailbox;
pub mod notice;
pub mod source;
pub mod storage;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{Config, resolve_data_dir};
pub use error::{Error, Result};
pub use feed::{FeedStatus, LetterFeed};
pub use mailbox::{DeleteOutcome, Mailbox, ProjectedPage};
pub use notice::{Notice, NoticeLevel};
pub use source::{Cursor, LetterDeleter, LetterSource, Page, PageRequest};
pub use storage::JsonLetterStore;
