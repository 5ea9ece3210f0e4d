use letterbox_types::{Letter, LetterId, Timestamp, UserId};
use serde::Serialize;

use crate::delivery::{DeliveryState, DeliveryStateResolver};

/// One letter as shown in a mailbox list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LetterRow {
    pub letter_id: LetterId,
    pub title: String,
    pub other_party: UserId,
    pub is_sender: bool,
    pub created_at: Timestamp,
    pub deliver_at: Timestamp,
    pub delivery: DeliveryState,
}

/// Maps a page of raw letters to list rows.
///
/// Output order equals input order; nothing is sorted, filtered or fetched.
#[derive(Debug, Clone, Default)]
pub struct LetterListProjector {
    resolver: DeliveryStateResolver,
}

impl LetterListProjector {
    pub fn new(resolver: DeliveryStateResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &DeliveryStateResolver {
        &self.resolver
    }

    pub fn project(&self, page: &[Letter], viewer: &UserId, now: Timestamp) -> Vec<LetterRow> {
        let rows: Vec<LetterRow> = page
            .iter()
            .map(|letter| self.project_row(letter, viewer, now))
            .collect();

        tracing::debug!(rows = rows.len(), viewer = %viewer, "projected letter page");
        rows
    }

    pub fn project_row(&self, letter: &Letter, viewer: &UserId, now: Timestamp) -> LetterRow {
        LetterRow {
            letter_id: letter.letter_id.clone(),
            title: letter.title.clone(),
            other_party: letter.other_party(viewer).clone(),
            is_sender: letter.is_sent_by(viewer),
            created_at: letter.created_at,
            deliver_at: letter.deliver_at,
            delivery: self.resolver.resolve(letter, now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use letterbox_types::MILLIS_PER_DAY;

    const DAY: i64 = MILLIS_PER_DAY as i64;

    fn letter(id: &str, from: &str, to: &str, deliver_in_days: i64) -> Letter {
        Letter {
            letter_id: LetterId::new(id),
            sender_id: UserId::new(from),
            recipient_id: UserId::new(to),
            title: format!("title {}", id),
            content: "body".to_string(),
            created_at: Timestamp::from_millis(0),
            deliver_at: Timestamp::from_millis(deliver_in_days * DAY),
        }
    }

    #[test]
    fn test_project_preserves_order_and_marks_sender() {
        let page = vec![
            letter("b", "bob", "alice", 0),
            letter("a", "alice", "bob", 5),
            letter("c", "carol", "alice", 2),
        ];
        let viewer = UserId::new("alice");
        let rows = LetterListProjector::default().project(&page, &viewer, Timestamp::from_millis(DAY));

        let ids: Vec<&str> = rows.iter().map(|r| r.letter_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);

        assert!(!rows[0].is_sender);
        assert_eq!(rows[0].other_party.as_str(), "bob");
        assert!(rows[1].is_sender);
        assert_eq!(rows[1].other_party.as_str(), "bob");
        assert!(rows[1].delivery.is_pending());
        assert_eq!(rows[2].delivery.display_duration, "1 ☀️");
    }

    #[test]
    fn test_project_is_idempotent_and_leaves_page_untouched() {
        let page = vec![letter("a", "alice", "bob", 1), letter("b", "bob", "alice", 3)];
        let snapshot = page.clone();
        let projector = LetterListProjector::default();
        let viewer = UserId::new("bob");
        let now = Timestamp::from_millis(2 * DAY);

        let first = projector.project(&page, &viewer, now);
        let second = projector.project(&page, &viewer, now);

        assert_eq!(first, second);
        assert_eq!(page, snapshot);
    }

    #[test]
    fn test_project_empty_page() {
        let rows = LetterListProjector::default().project(
            &[],
            &UserId::new("alice"),
            Timestamp::from_millis(0),
        );
        assert!(rows.is_empty());
    }
}
