use letterbox_engine::{LetterDetailView, LetterRow};
use letterbox_runtime::{Cursor, Notice};
use letterbox_types::{Direction, LetterId, Timestamp, UserId};
use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};
use crate::presentation::views::letter::{
    DeleteResultView, LetterDetailTextView, LetterListView, LetterNotFoundView,
};

#[derive(Debug, Serialize)]
pub struct LetterListViewModel {
    pub viewer: UserId,
    pub direction: Direction,
    pub now: Timestamp,
    pub letters: Vec<LetterRow>,
    pub pending_count: usize,
    pub next_cursor: Option<Cursor>,
}

impl CreateView for LetterListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(LetterListView::new(self, mode))
    }
}

#[derive(Debug, Serialize)]
pub struct LetterDetailViewModel {
    pub now: Timestamp,
    pub letter: LetterDetailView,
}

impl CreateView for LetterDetailViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(LetterDetailTextView::new(self))
    }
}

#[derive(Debug, Serialize)]
pub struct LetterNotFoundViewModel {
    pub letter_id: LetterId,
    pub viewer: UserId,
}

impl CreateView for LetterNotFoundViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(LetterNotFoundView::new(self))
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteResultViewModel {
    pub letter_id: LetterId,
    pub deleted: bool,
    pub notice: Notice,
}

impl CreateView for DeleteResultViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(DeleteResultView::new(self))
    }
}
