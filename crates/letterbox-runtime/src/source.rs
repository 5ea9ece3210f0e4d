use letterbox_types::{Direction, Letter, LetterId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Result;

/// Opaque position in a paginated collection, issued by a [`LetterSource`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub direction: Direction,
    pub cursor: Option<Cursor>,
    pub page_size: usize,
}

impl PageRequest {
    pub fn first(direction: Direction, page_size: usize) -> Self {
        Self {
            direction,
            cursor: None,
            page_size,
        }
    }

    pub fn after(mut self, cursor: Option<Cursor>) -> Self {
        self.cursor = cursor;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub records: Vec<T>,
    /// `None` once the collection is exhausted.
    pub next_cursor: Option<Cursor>,
}

impl<T> Page<T> {
    pub fn is_last(&self) -> bool {
        self.next_cursor.is_none()
    }
}

/// Read side of the letter backend.
pub trait LetterSource {
    /// One page of the viewer's received or sent letters.
    fn fetch_page(&self, viewer: &UserId, request: &PageRequest) -> Result<Page<Letter>>;

    /// `Ok(None)` when the letter is missing or not visible to `viewer`.
    fn fetch_by_id(&self, id: &LetterId, viewer: &UserId) -> Result<Option<Letter>>;
}

/// Delete side of the letter backend.
pub trait LetterDeleter {
    /// Remove a letter on behalf of one of its parties.
    fn delete(&self, id: &LetterId, requested_by: &UserId) -> Result<()>;
}

impl<T: LetterSource + ?Sized> LetterSource for &T {
    fn fetch_page(&self, viewer: &UserId, request: &PageRequest) -> Result<Page<Letter>> {
        (**self).fetch_page(viewer, request)
    }

    fn fetch_by_id(&self, id: &LetterId, viewer: &UserId) -> Result<Option<Letter>> {
        (**self).fetch_by_id(id, viewer)
    }
}

impl<T: LetterDeleter + ?Sized> LetterDeleter for &T {
    fn delete(&self, id: &LetterId, requested_by: &UserId) -> Result<()> {
        (**self).delete(id, requested_by)
    }
}
