// Engine module - delivery state resolution and letter projections.
// Everything here is a pure function of (letter, viewer, now): no I/O, no clock reads.

pub mod delivery;
pub mod detail;
pub mod error;
pub mod list;
pub mod locale;

pub use delivery::{
    DeliverySpan, DeliveryState, DeliveryStateResolver, ElapsedAnchor, ElapsedBucket,
    remaining_days,
};
pub use detail::{DeliveryTemplate, LetterDetailProjector, LetterDetailView};
pub use error::{Error, Result};
pub use list::{LetterListProjector, LetterRow};
pub use locale::{EnglishLocalizer, Localizer, TimeUnit};

use letterbox_types::{Letter, Timestamp, UserId};

// Façade API - English catalogue, delivered-anchored elapsed time

/// Resolve the delivery state of a single letter at `now`
pub fn resolve(letter: &Letter, now: Timestamp) -> DeliveryState {
    DeliveryStateResolver::default().resolve(letter, now)
}

/// Project a page of letters into list rows for `viewer`
pub fn project_page(page: &[Letter], viewer: &UserId, now: Timestamp) -> Vec<LetterRow> {
    LetterListProjector::default().project(page, viewer, now)
}

/// Project a single fetched letter for `viewer`; `None` yields [`Error::NotFound`]
pub fn project_detail(
    record: Option<&Letter>,
    viewer: &UserId,
    now: Timestamp,
) -> Result<LetterDetailView> {
    LetterDetailProjector::default().project(record, viewer, now)
}
