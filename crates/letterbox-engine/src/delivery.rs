use letterbox_types::{
    Letter, MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, Timestamp,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::locale::{EnglishLocalizer, Localizer, TimeUnit};

/// Coarsest elapsed-time unit that keeps the count at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "unit", content = "count", rename_all = "snake_case")]
pub enum ElapsedBucket {
    JustNow,
    Minutes(u64),
    Hours(u64),
    Yesterday,
    Days(u64),
    Weeks(u64),
    Months(u64),
    Years(u64),
}

impl ElapsedBucket {
    /// Bucket an elapsed duration.
    ///
    /// Up to and including one minute is "just now". Every other unit uses
    /// floor division; a day-count of exactly 1 is "yesterday".
    pub fn from_millis(elapsed_ms: u64) -> Self {
        if elapsed_ms <= MILLIS_PER_MINUTE {
            return ElapsedBucket::JustNow;
        }

        let minutes = elapsed_ms / MILLIS_PER_MINUTE;
        if minutes < 60 {
            return ElapsedBucket::Minutes(minutes);
        }

        let hours = elapsed_ms / MILLIS_PER_HOUR;
        if hours < 24 {
            return ElapsedBucket::Hours(hours);
        }

        let days = elapsed_ms / MILLIS_PER_DAY;
        if days == 1 {
            ElapsedBucket::Yesterday
        } else if days < 7 {
            ElapsedBucket::Days(days)
        } else if days < 30 {
            ElapsedBucket::Weeks(days / 7)
        } else if days < 365 {
            ElapsedBucket::Months(days / 30)
        } else {
            ElapsedBucket::Years(days / 365)
        }
    }

    pub fn render(&self, localizer: &dyn Localizer) -> String {
        match *self {
            ElapsedBucket::JustNow => localizer.just_now(),
            ElapsedBucket::Yesterday => localizer.yesterday(),
            ElapsedBucket::Minutes(n) => localizer.elapsed(n, TimeUnit::Minute),
            ElapsedBucket::Hours(n) => localizer.elapsed(n, TimeUnit::Hour),
            ElapsedBucket::Days(n) => localizer.elapsed(n, TimeUnit::Day),
            ElapsedBucket::Weeks(n) => localizer.elapsed(n, TimeUnit::Week),
            ElapsedBucket::Months(n) => localizer.elapsed(n, TimeUnit::Month),
            ElapsedBucket::Years(n) => localizer.elapsed(n, TimeUnit::Year),
        }
    }
}

/// Whole days until delivery, rounded up, never below 1.
pub fn remaining_days(remaining_ms: u64) -> u64 {
    remaining_ms.div_ceil(MILLIS_PER_DAY).max(1)
}

/// Raw span behind `DeliveryState::display_duration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeliverySpan {
    Elapsed { elapsed: ElapsedBucket, millis: u64 },
    Remaining { days: u64, millis: u64 },
}

/// Delivery state derived from a letter and the current time. Never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryState {
    pub is_delivered: bool,
    pub span: DeliverySpan,
    pub display_duration: String,
}

impl DeliveryState {
    pub fn is_pending(&self) -> bool {
        !self.is_delivered
    }
}

/// Instant from which the age of a delivered letter is measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElapsedAnchor {
    /// Age since the letter was written.
    Created,
    /// Age since the letter became visible to its recipient.
    #[default]
    Delivered,
}

impl ElapsedAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElapsedAnchor::Created => "created",
            ElapsedAnchor::Delivered => "delivered",
        }
    }
}

impl std::fmt::Display for ElapsedAnchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derives [`DeliveryState`] for letters at a caller-supplied instant.
///
/// Holds no mutable state; cloning shares the localizer.
#[derive(Clone)]
pub struct DeliveryStateResolver {
    localizer: Arc<dyn Localizer>,
    anchor: ElapsedAnchor,
}

impl Default for DeliveryStateResolver {
    fn default() -> Self {
        Self::new(Arc::new(EnglishLocalizer))
    }
}

impl std::fmt::Debug for DeliveryStateResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeliveryStateResolver")
            .field("anchor", &self.anchor)
            .finish_non_exhaustive()
    }
}

impl DeliveryStateResolver {
    pub fn new(localizer: Arc<dyn Localizer>) -> Self {
        Self {
            localizer,
            anchor: ElapsedAnchor::default(),
        }
    }

    pub fn with_anchor(mut self, anchor: ElapsedAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn anchor(&self) -> ElapsedAnchor {
        self.anchor
    }

    pub fn localizer(&self) -> &dyn Localizer {
        self.localizer.as_ref()
    }

    pub fn resolve(&self, letter: &Letter, now: Timestamp) -> DeliveryState {
        if !letter.has_consistent_schedule() {
            tracing::warn!(
                letter_id = %letter.letter_id,
                created_at = letter.created_at.as_millis(),
                deliver_at = letter.deliver_at.as_millis(),
                "deliver_at precedes created_at, clamping"
            );
        }
        self.resolve_schedule(letter.created_at, letter.deliver_at, now)
    }

    /// Total over all inputs: negative spans clamp to zero.
    pub fn resolve_schedule(
        &self,
        created_at: Timestamp,
        deliver_at: Timestamp,
        now: Timestamp,
    ) -> DeliveryState {
        let is_delivered = now >= deliver_at;

        let span = if is_delivered {
            let anchor = match self.anchor {
                ElapsedAnchor::Created => created_at,
                ElapsedAnchor::Delivered => deliver_at.max(created_at),
            };
            let millis = now.millis_since(anchor);
            DeliverySpan::Elapsed {
                elapsed: ElapsedBucket::from_millis(millis),
                millis,
            }
        } else {
            let millis = deliver_at.millis_since(now);
            DeliverySpan::Remaining {
                days: remaining_days(millis),
                millis,
            }
        };

        let display_duration = match span {
            DeliverySpan::Elapsed { elapsed, .. } => elapsed.render(self.localizer()),
            DeliverySpan::Remaining { days, .. } => self.localizer.remaining_days(days),
        };

        DeliveryState {
            is_delivered,
            span,
            display_duration,
        }
    }
}
