use letterbox_engine::{LetterListProjector, LetterRow};
use letterbox_types::{Direction, Letter, LetterId, Timestamp, UserId};
use serde::Serialize;

use crate::Result;
use crate::notice::Notice;
use crate::source::{Cursor, LetterDeleter, LetterSource, PageRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedStatus {
    LoadingFirstPage,
    CanLoadMore,
    Exhausted,
}

/// Accumulated pages of one mailbox segment.
///
/// Holds raw letters only; rows are projected on demand so a single feed can
/// be rendered at any instant. Switching segment discards loaded pages.
#[derive(Debug, Clone)]
pub struct LetterFeed {
    viewer: UserId,
    direction: Direction,
    page_size: usize,
    letters: Vec<Letter>,
    next_cursor: Option<Cursor>,
    status: FeedStatus,
}

impl LetterFeed {
    pub fn new(viewer: UserId, direction: Direction, page_size: usize) -> Self {
        Self {
            viewer,
            direction,
            page_size: page_size.max(1),
            letters: Vec::new(),
            next_cursor: None,
            status: FeedStatus::LoadingFirstPage,
        }
    }

    pub fn viewer(&self) -> &UserId {
        &self.viewer
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn status(&self) -> FeedStatus {
        self.status
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    pub fn next_cursor(&self) -> Option<&Cursor> {
        self.next_cursor.as_ref()
    }

    /// Select the other segment. A no-op when `direction` is already active.
    pub fn select(&mut self, direction: Direction) {
        if self.direction == direction {
            return;
        }
        self.direction = direction;
        self.letters.clear();
        self.next_cursor = None;
        self.status = FeedStatus::LoadingFirstPage;
    }

    /// Fetch the next page. Returns the number of letters appended; 0 once exhausted.
    ///
    /// On error the feed is left unchanged so the same page can be requested again.
    pub fn load_more<S: LetterSource + ?Sized>(&mut self, source: &S) -> Result<usize> {
        if self.status == FeedStatus::Exhausted {
            return Ok(0);
        }

        let request =
            PageRequest::first(self.direction, self.page_size).after(self.next_cursor.clone());
        let page = source.fetch_page(&self.viewer, &request)?;

        let added = page.records.len();
        self.letters.extend(page.records);
        self.status = if page.next_cursor.is_some() {
            FeedStatus::CanLoadMore
        } else {
            FeedStatus::Exhausted
        };
        self.next_cursor = page.next_cursor;

        Ok(added)
    }

    pub fn load_all<S: LetterSource + ?Sized>(&mut self, source: &S) -> Result<usize> {
        let mut total = 0;
        while self.status != FeedStatus::Exhausted {
            total += self.load_more(source)?;
        }
        Ok(total)
    }

    pub fn rows(&self, projector: &LetterListProjector, now: Timestamp) -> Vec<LetterRow> {
        projector.project(&self.letters, &self.viewer, now)
    }

    /// Delete through `deleter`; the letter leaves the feed only after the
    /// deleter confirms. Failures keep it in place and yield an error notice.
    pub fn delete<D: LetterDeleter + ?Sized>(&mut self, deleter: &D, id: &LetterId) -> Notice {
        let result = deleter.delete(id, &self.viewer);
        if result.is_ok() {
            self.letters.retain(|letter| &letter.letter_id != id);
        }
        Notice::for_deletion(id, &result)
    }
}
