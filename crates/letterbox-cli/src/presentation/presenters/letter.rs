use letterbox_engine::{LetterDetailView, LetterRow};
use letterbox_runtime::{Cursor, DeleteOutcome};
use letterbox_types::{Direction, LetterId, Timestamp, UserId};

use crate::presentation::view_models::{
    CommandResultViewModel, DeleteResultViewModel, Guidance, LetterDetailViewModel,
    LetterListViewModel, LetterNotFoundViewModel, StatusBadge,
};

fn other_direction(direction: Direction) -> Direction {
    match direction {
        Direction::Received => Direction::Sent,
        Direction::Sent => Direction::Received,
    }
}

pub fn present_letter_list(
    viewer: UserId,
    direction: Direction,
    now: Timestamp,
    letters: Vec<LetterRow>,
    next_cursor: Option<Cursor>,
    limit: Option<usize>,
) -> CommandResultViewModel<LetterListViewModel> {
    let total_count = letters.len();
    let pending_count = letters.iter().filter(|row| row.delivery.is_pending()).count();

    let content = LetterListViewModel {
        viewer,
        direction,
        now,
        letters,
        pending_count,
        next_cursor: next_cursor.clone(),
    };

    let mut result = CommandResultViewModel::new(content);

    if total_count == 0 {
        let other = other_direction(direction);
        return result
            .with_badge(StatusBadge::info(format!("No {} letters", direction)))
            .with_suggestion(
                Guidance::new(format!("Check your {} letters", other))
                    .with_command(format!("letterbox letter list --direction {}", other)),
            );
    }

    let noun = if total_count == 1 { "letter" } else { "letters" };
    let label = if pending_count == 0 {
        format!("{} {} {}", total_count, direction, noun)
    } else {
        format!(
            "{} {} {} ({} on the way)",
            total_count, direction, noun, pending_count
        )
    };
    result = result.with_badge(StatusBadge::success(label));

    if let Some(cursor) = next_cursor {
        let mut command = format!(
            "letterbox letter list --direction {} --cursor {}",
            direction, cursor
        );
        if let Some(limit) = limit {
            command.push_str(&format!(" --limit {}", limit));
        }
        result = result
            .with_suggestion(Guidance::new("More letters are available").with_command(command))
            .with_suggestion(
                Guidance::new("Or load the whole segment at once")
                    .with_command(format!("letterbox letter list --direction {} --all", direction)),
            );
    }

    result.with_suggestion(Guidance::new("Read a letter").with_command("letterbox letter show <ID>"))
}

pub fn present_letter_detail(
    now: Timestamp,
    letter: LetterDetailView,
) -> CommandResultViewModel<LetterDetailViewModel> {
    let badge = if letter.delivery.is_delivered {
        StatusBadge::success("Delivered")
    } else if letter.sealed {
        StatusBadge::info("On its way")
    } else {
        StatusBadge::info("Scheduled")
    };

    let mut result = CommandResultViewModel::new(LetterDetailViewModel { now, letter }).with_badge(badge);

    if result.content.letter.sealed {
        let opens = format!("The letter opens on {}", result.content.letter.deliver_at);
        result = result.with_suggestion(Guidance::new(opens));
    }

    let delete = format!("letterbox letter delete {}", result.content.letter.letter_id);
    result.with_suggestion(Guidance::new("Remove it from your mailbox").with_command(delete))
}

pub fn present_letter_not_found(
    letter_id: LetterId,
    viewer: UserId,
) -> CommandResultViewModel<LetterNotFoundViewModel> {
    CommandResultViewModel::new(LetterNotFoundViewModel { letter_id, viewer })
        .with_badge(StatusBadge::error("Letter not found"))
        .with_suggestion(
            Guidance::new("List the letters you can open").with_command("letterbox letter list"),
        )
}

pub fn present_delete_result(outcome: DeleteOutcome) -> CommandResultViewModel<DeleteResultViewModel> {
    let badge = if outcome.deleted {
        StatusBadge::success("Letter deleted")
    } else {
        StatusBadge::error("Delete failed")
    };

    let mut result = CommandResultViewModel::new(DeleteResultViewModel {
        letter_id: outcome.letter_id,
        deleted: outcome.deleted,
        notice: outcome.notice,
    })
    .with_badge(badge);

    if !outcome.deleted {
        result = result.with_suggestion(
            Guidance::new("Check the letter id").with_command("letterbox letter list"),
        );
    }

    result
}
