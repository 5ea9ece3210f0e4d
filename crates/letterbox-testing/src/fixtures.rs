//! Letter fixtures.
//!
//! All sample timestamps are relative to [`NOW`], which `TestWorld` passes
//! to the CLI as `--now`, so delivery states never depend on the wall clock.

use letterbox_types::{Letter, LetterId, Timestamp, UserId};

/// The instant every CLI test is evaluated at.
pub const NOW: &str = "2026-01-15T12:00:00Z";

/// Parse an RFC3339 instant, panicking on malformed fixtures.
pub fn at(rfc3339: &str) -> Timestamp {
    Timestamp::parse_rfc3339(rfc3339).expect("fixture timestamp must be RFC3339")
}

/// Fluent builder for a single letter.
///
/// # Example
/// ```
/// use letterbox_testing::LetterBuilder;
///
/// let letter = LetterBuilder::new("alice", "bob")
///     .id("capsule")
///     .title("Open me next year")
///     .written("2025-01-15T12:00:00Z")
///     .delivers("2026-01-15T11:00:00Z")
///     .build();
/// assert_eq!(letter.letter_id.as_str(), "capsule");
/// ```
#[derive(Debug, Clone)]
pub struct LetterBuilder {
    letter: Letter,
}

impl LetterBuilder {
    /// A letter written and delivered at [`NOW`] with a random id.
    pub fn new(sender: &str, recipient: &str) -> Self {
        let now = at(NOW);
        Self {
            letter: Letter {
                letter_id: LetterId::new(uuid::Uuid::new_v4().to_string()),
                sender_id: UserId::new(sender),
                recipient_id: UserId::new(recipient),
                title: "Untitled".to_string(),
                content: String::new(),
                created_at: now,
                deliver_at: now,
            },
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.letter.letter_id = LetterId::new(id);
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.letter.title = title.to_string();
        self
    }

    pub fn content(mut self, content: &str) -> Self {
        self.letter.content = content.to_string();
        self
    }

    pub fn written(mut self, rfc3339: &str) -> Self {
        self.letter.created_at = at(rfc3339);
        self
    }

    pub fn delivers(mut self, rfc3339: &str) -> Self {
        self.letter.deliver_at = at(rfc3339);
        self
    }

    pub fn build(self) -> Letter {
        self.letter
    }
}

/// A small mailbox seen from `bob` at [`NOW`].
///
/// | id         | from  | to    | state at NOW              |
/// |------------|-------|-------|---------------------------|
/// | `tomorrow` | alice | bob   | pending, 18h left ("1 ☀️") |
/// | `birthday` | carol | bob   | pending, exactly 3 days   |
/// | `capsule`  | alice | bob   | delivered 1 hour ago      |
/// | `reply`    | bob   | alice | delivered 2 days ago      |
/// | `elsewhere`| carol | dave  | not visible to bob        |
pub fn sample_mailbox() -> Vec<Letter> {
    vec![
        LetterBuilder::new("alice", "bob")
            .id("capsule")
            .title("Open me next year")
            .content("Hello from last January.")
            .written("2025-01-15T12:00:00Z")
            .delivers("2026-01-15T11:00:00Z")
            .build(),
        LetterBuilder::new("carol", "bob")
            .id("birthday")
            .title("Happy birthday")
            .content("Many happy returns.")
            .written("2026-01-10T09:00:00Z")
            .delivers("2026-01-18T12:00:00Z")
            .build(),
        LetterBuilder::new("alice", "bob")
            .id("tomorrow")
            .title("See you soon")
            .content("Breakfast at eight.")
            .written("2026-01-14T12:00:00Z")
            .delivers("2026-01-16T06:00:00Z")
            .build(),
        LetterBuilder::new("bob", "alice")
            .id("reply")
            .title("Thanks for the capsule")
            .content("It made my day.")
            .written("2026-01-12T08:00:00Z")
            .delivers("2026-01-13T08:00:00Z")
            .build(),
        LetterBuilder::new("carol", "dave")
            .id("elsewhere")
            .title("Not for bob")
            .content("Private.")
            .written("2026-01-01T00:00:00Z")
            .delivers("2026-01-02T00:00:00Z")
            .build(),
    ]
}
