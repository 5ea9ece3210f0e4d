use letterbox_types::{Letter, LetterId, Timestamp, UserId};
use serde::Serialize;

use crate::delivery::{DeliveryState, DeliveryStateResolver};
use crate::error::{Error, Result};

/// Which description applies, chosen solely by the viewer's role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryTemplate {
    /// "You composed this for {other party}, ..."
    ComposedByViewer,
    /// "{other party} composed this for you, ..."
    ComposedForViewer,
}

impl DeliveryTemplate {
    pub fn for_role(is_sender: bool) -> Self {
        if is_sender {
            DeliveryTemplate::ComposedByViewer
        } else {
            DeliveryTemplate::ComposedForViewer
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LetterDetailView {
    pub letter_id: LetterId,
    pub title: String,
    /// `None` while the letter is still on its way to the viewer.
    pub content: Option<String>,
    pub sealed: bool,
    pub sender_id: UserId,
    pub recipient_id: UserId,
    pub other_party: UserId,
    pub is_sender: bool,
    pub template: DeliveryTemplate,
    pub description: String,
    pub created_at: Timestamp,
    pub deliver_at: Timestamp,
    pub delivery: DeliveryState,
}

#[derive(Debug, Clone, Default)]
pub struct LetterDetailProjector {
    resolver: DeliveryStateResolver,
}

impl LetterDetailProjector {
    pub fn new(resolver: DeliveryStateResolver) -> Self {
        Self { resolver }
    }

    /// Absence is terminal: `None` maps to [`Error::NotFound`] without retrying.
    pub fn project(
        &self,
        record: Option<&Letter>,
        viewer: &UserId,
        now: Timestamp,
    ) -> Result<LetterDetailView> {
        record
            .map(|letter| self.view(letter, viewer, now))
            .ok_or(Error::NotFound)
    }

    pub fn view(&self, letter: &Letter, viewer: &UserId, now: Timestamp) -> LetterDetailView {
        let delivery = self.resolver.resolve(letter, now);
        let is_sender = letter.is_sent_by(viewer);
        let template = DeliveryTemplate::for_role(is_sender);
        let other_party = letter.other_party(viewer).clone();

        let description = self.resolver.localizer().describe(
            template,
            other_party.as_str(),
            delivery.is_delivered,
            &delivery.display_duration,
        );

        let sealed = !is_sender && delivery.is_pending();
        let content = if sealed {
            None
        } else {
            Some(letter.content.clone())
        };

        LetterDetailView {
            letter_id: letter.letter_id.clone(),
            title: letter.title.clone(),
            content,
            sealed,
            sender_id: letter.sender_id.clone(),
            recipient_id: letter.recipient_id.clone(),
            other_party,
            is_sender,
            template,
            description,
            created_at: letter.created_at,
            deliver_at: letter.deliver_at,
            delivery,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use letterbox_types::MILLIS_PER_DAY;

    const DAY: i64 = MILLIS_PER_DAY as i64;

    fn letter() -> Letter {
        Letter {
            letter_id: LetterId::new("l-42"),
            sender_id: UserId::new("alice"),
            recipient_id: UserId::new("bob"),
            title: "For later".to_string(),
            content: "Open me on your birthday".to_string(),
            created_at: Timestamp::from_millis(0),
            deliver_at: Timestamp::from_millis(3 * DAY),
        }
    }

    #[test]
    fn test_missing_record_is_not_found() {
        let result = LetterDetailProjector::default().project(
            None,
            &UserId::new("bob"),
            Timestamp::from_millis(0),
        );
        assert_eq!(result, Err(Error::NotFound));
    }

    #[test]
    fn test_sender_template_and_unsealed_body() {
        let l = letter();
        let view = LetterDetailProjector::default().view(
            &l,
            &UserId::new("alice"),
            Timestamp::from_millis(DAY),
        );
        assert!(view.is_sender);
        assert_eq!(view.template, DeliveryTemplate::ComposedByViewer);
        assert_eq!(view.description, "You composed this for bob, arriving in 2 ☀️ 🌙");
        assert!(!view.sealed);
        assert_eq!(view.content.as_deref(), Some("Open me on your birthday"));
    }

    #[test]
    fn test_recipient_sees_sealed_letter_until_delivery() {
        let l = letter();
        let projector = LetterDetailProjector::default();
        let bob = UserId::new("bob");

        let pending = projector.view(&l, &bob, Timestamp::from_millis(DAY));
        assert_eq!(pending.template, DeliveryTemplate::ComposedForViewer);
        assert_eq!(pending.description, "alice composed this for you, arriving in 2 ☀️ 🌙");
        assert!(pending.sealed);
        assert_eq!(pending.content, None);

        let delivered = projector.view(&l, &bob, Timestamp::from_millis(3 * DAY));
        assert_eq!(delivered.description, "alice composed this for you, delivered just now");
        assert!(!delivered.sealed);
        assert!(delivered.content.is_some());
    }

    #[test]
    fn test_templates_are_mutually_exclusive() {
        let l = letter();
        let projector = LetterDetailProjector::default();
        let now = Timestamp::from_millis(DAY);
        for viewer in ["alice", "bob", "mallory"] {
            let view = projector.view(&l, &UserId::new(viewer), now);
            assert_eq!(view.is_sender, viewer == "alice");
            assert_eq!(view.template, DeliveryTemplate::for_role(view.is_sender));
        }
    }
}
