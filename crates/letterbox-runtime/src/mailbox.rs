use std::sync::Arc;

use letterbox_engine::{
    DeliveryStateResolver, EnglishLocalizer, LetterDetailProjector, LetterDetailView,
    LetterListProjector, LetterRow, Localizer,
};
use letterbox_types::{Direction, LetterId, Timestamp, UserId};
use serde::Serialize;

use crate::config::Config;
use crate::feed::LetterFeed;
use crate::notice::Notice;
use crate::source::{Cursor, LetterDeleter, LetterSource, PageRequest};
use crate::{Error, Result};

/// One projected page of a mailbox segment.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectedPage {
    pub direction: Direction,
    pub rows: Vec<LetterRow>,
    pub next_cursor: Option<Cursor>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteOutcome {
    pub letter_id: LetterId,
    pub deleted: bool,
    pub notice: Notice,
}

/// A viewer's mailbox over some letter backend.
///
/// Wires the source to the projectors; `now` is always supplied by the caller.
pub struct Mailbox<S> {
    source: S,
    viewer: UserId,
    page_size: usize,
    list: LetterListProjector,
    detail: LetterDetailProjector,
}

impl<S> Mailbox<S>
where
    S: LetterSource + LetterDeleter,
{
    pub fn new(source: S, viewer: UserId, config: &Config) -> Self {
        Self::with_localizer(source, viewer, config, Arc::new(EnglishLocalizer))
    }

    pub fn with_localizer(
        source: S,
        viewer: UserId,
        config: &Config,
        localizer: Arc<dyn Localizer>,
    ) -> Self {
        let resolver = DeliveryStateResolver::new(localizer).with_anchor(config.elapsed_anchor);
        Self {
            source,
            viewer,
            page_size: config.effective_page_size(),
            list: LetterListProjector::new(resolver.clone()),
            detail: LetterDetailProjector::new(resolver),
        }
    }

    pub fn viewer(&self) -> &UserId {
        &self.viewer
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn list_projector(&self) -> &LetterListProjector {
        &self.list
    }

    /// Page size override for a single request; falls back to the configured size.
    pub fn page(
        &self,
        direction: Direction,
        cursor: Option<Cursor>,
        page_size: Option<usize>,
        now: Timestamp,
    ) -> Result<ProjectedPage> {
        let page_size = page_size.unwrap_or(self.page_size).max(1);
        let request = PageRequest::first(direction, page_size).after(cursor);
        let page = self.source.fetch_page(&self.viewer, &request)?;

        Ok(ProjectedPage {
            direction,
            rows: self.list.project(&page.records, &self.viewer, now),
            next_cursor: page.next_cursor,
        })
    }

    pub fn feed(&self, direction: Direction) -> LetterFeed {
        LetterFeed::new(self.viewer.clone(), direction, self.page_size)
    }

    /// Single-record fetch; a missing or hidden letter is [`Error::NotFound`].
    pub fn open(&self, id: &LetterId, now: Timestamp) -> Result<LetterDetailView> {
        let record = self.source.fetch_by_id(id, &self.viewer)?;
        self.detail
            .project(record.as_ref(), &self.viewer, now)
            .map_err(|_| Error::NotFound(id.clone()))
    }

    pub fn delete(&self, id: &LetterId) -> DeleteOutcome {
        let result = self.source.delete(id, &self.viewer);
        DeleteOutcome {
            letter_id: id.clone(),
            deleted: result.is_ok(),
            notice: Notice::for_deletion(id, &result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::JsonLetterStore;
    use letterbox_engine::ElapsedAnchor;
    use letterbox_types::{Letter, MILLIS_PER_DAY, MILLIS_PER_HOUR};
    use tempfile::TempDir;

    const DAY: i64 = MILLIS_PER_DAY as i64;
    const HOUR: i64 = MILLIS_PER_HOUR as i64;

    fn letter(id: &str, from: &str, to: &str, created_at: i64, deliver_at: i64) -> Letter {
        Letter {
            letter_id: LetterId::new(id),
            sender_id: UserId::new(from),
            recipient_id: UserId::new(to),
            title: format!("Letter {}", id),
            content: format!("Body of {}", id),
            created_at: Timestamp::from_millis(created_at),
            deliver_at: Timestamp::from_millis(deliver_at),
        }
    }

    fn mailbox(viewer: &str, config: &Config) -> (TempDir, Mailbox<JsonLetterStore>) {
        let dir = TempDir::new().unwrap();
        let store = JsonLetterStore::open(dir.path());
        store
            .save(&[
                letter("capsule", "alice", "bob", 0, 3 * DAY),
                letter("note", "bob", "alice", DAY, DAY),
                letter("hello", "carol", "bob", 2 * DAY, 2 * DAY),
            ])
            .unwrap();
        (dir, Mailbox::new(store, UserId::new(viewer), config))
    }

    #[test]
    fn test_received_page_projects_rows() {
        let (_dir, mb) = mailbox("bob", &Config::default());
        let page = mb
            .page(Direction::Received, None, None, Timestamp::from_millis(DAY))
            .unwrap();

        let ids: Vec<&str> = page.rows.iter().map(|r| r.letter_id.as_str()).collect();
        assert_eq!(ids, vec!["hello", "capsule"]);
        assert!(page.rows[0].delivery.is_pending());
        assert_eq!(page.rows[1].delivery.display_duration, "2 ☀️ 🌙");
        assert!(page.next_cursor.is_none());
    }

    #[test]
    fn test_page_size_override_issues_cursor() {
        let (_dir, mb) = mailbox("bob", &Config::default());
        let page = mb
            .page(Direction::Received, None, Some(1), Timestamp::from_millis(DAY))
            .unwrap();
        assert_eq!(page.rows.len(), 1);
        assert_eq!(page.next_cursor, Some(Cursor::new("1")));
    }

    #[test]
    fn test_open_respects_anchor_config() {
        let (_dir, mb) = mailbox("bob", &Config::default());
        let now = Timestamp::from_millis(3 * DAY + HOUR);
        let view = mb.open(&LetterId::new("capsule"), now).unwrap();
        assert_eq!(view.delivery.display_duration, "1 hour ago");

        let config = Config {
            elapsed_anchor: ElapsedAnchor::Created,
            ..Config::default()
        };
        let (_dir, mb) = mailbox("bob", &config);
        let view = mb.open(&LetterId::new("capsule"), now).unwrap();
        assert_eq!(view.delivery.display_duration, "3 days ago");
    }

    #[test]
    fn test_open_missing_or_foreign_letter() {
        let (_dir, mb) = mailbox("eve", &Config::default());
        let err = mb
            .open(&LetterId::new("capsule"), Timestamp::from_millis(0))
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(id) if id.as_str() == "capsule"));
    }

    #[test]
    fn test_delete_outcomes() {
        let (_dir, mb) = mailbox("bob", &Config::default());

        let ok = mb.delete(&LetterId::new("capsule"));
        assert!(ok.deleted);
        assert_eq!(ok.notice, Notice::success("Letter deleted"));

        let again = mb.delete(&LetterId::new("capsule"));
        assert!(!again.deleted);
        assert!(again.notice.is_error());

        assert_eq!(mb.source().load().unwrap().len(), 2);
    }
}
