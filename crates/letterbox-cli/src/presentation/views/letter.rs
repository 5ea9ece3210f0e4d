use owo_colors::{OwoColorize, Stream};
use std::fmt;

use letterbox_types::Direction;

use crate::presentation::formatters::{format_date, format_delivery, truncate};
use crate::presentation::view_models::{
    DeleteResultViewModel, LetterDetailViewModel, LetterListViewModel, LetterNotFoundViewModel,
    ViewMode,
};

const TITLE_WIDTH: usize = 32;

// --------------------------------------------------------
// Letter List View
// --------------------------------------------------------

pub struct LetterListView<'a> {
    data: &'a LetterListViewModel,
    mode: ViewMode,
}

impl<'a> LetterListView<'a> {
    pub fn new(data: &'a LetterListViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.data.letters {
            writeln!(f, "{}", row.letter_id)?;
        }
        Ok(())
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.letters.is_empty() {
            let segment = match self.data.direction {
                Direction::Received => "No letters have been sent to you yet.",
                Direction::Sent => "You have not written any letters yet.",
            };
            return writeln!(f, "{}", segment);
        }

        let party_header = match self.data.direction {
            Direction::Received => "FROM",
            Direction::Sent => "TO",
        };

        writeln!(
            f,
            "{:<36} {:<width$} {:<16} DELIVERY",
            "ID",
            "TITLE",
            party_header,
            width = TITLE_WIDTH
        )?;
        writeln!(f, "{}", "-".repeat(100))?;

        for row in &self.data.letters {
            let delivery = format_delivery(&row.delivery);
            let delivery = if row.delivery.is_delivered {
                delivery
                    .if_supports_color(Stream::Stdout, |text| text.green())
                    .to_string()
            } else {
                delivery
                    .if_supports_color(Stream::Stdout, |text| text.yellow())
                    .to_string()
            };

            writeln!(
                f,
                "{:<36} {:<width$} {:<16} {}",
                row.letter_id.as_str(),
                truncate(&row.title, TITLE_WIDTH),
                row.other_party.as_str(),
                delivery,
                width = TITLE_WIDTH
            )?;
        }

        Ok(())
    }
}

impl<'a> fmt::Display for LetterListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Standard => self.render_standard(f),
        }
    }
}

// --------------------------------------------------------
// Letter Detail View
// --------------------------------------------------------

pub struct LetterDetailTextView<'a> {
    data: &'a LetterDetailViewModel,
}

impl<'a> LetterDetailTextView<'a> {
    pub fn new(data: &'a LetterDetailViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for LetterDetailTextView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let letter = &self.data.letter;

        writeln!(
            f,
            "{}",
            letter
                .title
                .if_supports_color(Stream::Stdout, |text| text.bold())
        )?;
        writeln!(f, "{}", letter.description)?;
        writeln!(f)?;
        writeln!(f, "  {:<10} {}", "ID:", letter.letter_id)?;
        writeln!(f, "  {:<10} {}", "From:", letter.sender_id)?;
        writeln!(f, "  {:<10} {}", "To:", letter.recipient_id)?;
        writeln!(f, "  {:<10} {}", "Written:", format_date(letter.created_at))?;
        writeln!(f, "  {:<10} {}", "Delivery:", format_date(letter.deliver_at))?;
        writeln!(f)?;

        match &letter.content {
            Some(content) => writeln!(f, "{}", content),
            None => writeln!(
                f,
                "{}",
                "🔒 Sealed until it arrives."
                    .if_supports_color(Stream::Stdout, |text| text.dimmed())
            ),
        }
    }
}

// --------------------------------------------------------
// Letter Not Found View
// --------------------------------------------------------

pub struct LetterNotFoundView<'a> {
    data: &'a LetterNotFoundViewModel,
}

impl<'a> LetterNotFoundView<'a> {
    pub fn new(data: &'a LetterNotFoundViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for LetterNotFoundView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "No letter with id {} in the mailbox of {}.",
            self.data.letter_id, self.data.viewer
        )
    }
}

// --------------------------------------------------------
// Delete Result View
// --------------------------------------------------------

pub struct DeleteResultView<'a> {
    data: &'a DeleteResultViewModel,
}

impl<'a> DeleteResultView<'a> {
    pub fn new(data: &'a DeleteResultViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for DeleteResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{} ({})", self.data.notice.message, self.data.letter_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use letterbox_engine::{LetterDetailProjector, LetterListProjector};
    use letterbox_types::{Letter, LetterId, MILLIS_PER_DAY, Timestamp, UserId};

    const DAY: i64 = MILLIS_PER_DAY as i64;

    fn letter(id: &str, from: &str, to: &str, deliver_at: i64) -> Letter {
        Letter {
            letter_id: LetterId::new(id),
            sender_id: UserId::new(from),
            recipient_id: UserId::new(to),
            title: format!("Letter {}", id),
            content: "See you next spring.".to_string(),
            created_at: Timestamp::from_millis(0),
            deliver_at: Timestamp::from_millis(deliver_at),
        }
    }

    fn list(direction: Direction, letters: &[Letter], viewer: &str) -> LetterListViewModel {
        let viewer = UserId::new(viewer);
        let now = Timestamp::from_millis(DAY);
        let rows = LetterListProjector::default().project(letters, &viewer, now);
        LetterListViewModel {
            viewer,
            direction,
            now,
            pending_count: rows.iter().filter(|r| r.delivery.is_pending()).count(),
            letters: rows,
            next_cursor: None,
        }
    }

    #[test]
    fn test_minimal_list_prints_ids_only() {
        let data = list(
            Direction::Received,
            &[letter("a", "alice", "bob", 0), letter("b", "carol", "bob", 3 * DAY)],
            "bob",
        );
        let out = LetterListView::new(&data, ViewMode::Minimal).to_string();
        assert_eq!(out, "a\nb\n");
    }

    #[test]
    fn test_standard_list_rows() {
        let data = list(
            Direction::Received,
            &[letter("a", "alice", "bob", 0), letter("b", "carol", "bob", 3 * DAY)],
            "bob",
        );
        let out = LetterListView::new(&data, ViewMode::Standard).to_string();
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[0].starts_with("ID"));
        assert!(lines[0].contains("FROM"));
        assert!(lines[2].contains("alice"));
        assert!(lines[2].contains("delivered yesterday"));
        assert!(lines[3].contains("carol"));
        assert!(lines[3].contains("arriving in 2 ☀️ 🌙"));
    }

    #[test]
    fn test_empty_sent_list() {
        let data = list(Direction::Sent, &[], "bob");
        let out = LetterListView::new(&data, ViewMode::Standard).to_string();
        assert_eq!(out, "You have not written any letters yet.\n");
    }

    #[test]
    fn test_detail_sealed_for_pending_recipient() {
        let viewer = UserId::new("bob");
        let now = Timestamp::from_millis(DAY);
        let view = LetterDetailProjector::default().view(
            &letter("a", "alice", "bob", 3 * DAY),
            &viewer,
            now,
        );
        let data = LetterDetailViewModel { now, letter: view };
        let out = LetterDetailTextView::new(&data).to_string();

        assert!(out.contains("alice composed this for you, arriving in 2 ☀️ 🌙"));
        assert!(out.contains("Sealed until it arrives."));
        assert!(!out.contains("See you next spring."));
    }
}
