use serde::{Deserialize, Serialize};

use crate::detail::DeliveryTemplate;

/// Calendar unit of an elapsed-time bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

/// Human-readable strings for already-computed delivery buckets.
///
/// Implementations only format; bucketing happens in
/// [`crate::DeliveryStateResolver`] so every locale agrees on the boundaries.
pub trait Localizer: Send + Sync {
    fn just_now(&self) -> String;

    fn yesterday(&self) -> String;

    /// `count` is at least 1.
    fn elapsed(&self, count: u64, unit: TimeUnit) -> String;

    /// `days` is at least 1.
    fn remaining_days(&self, days: u64) -> String;

    fn describe(
        &self,
        template: DeliveryTemplate,
        other_party: &str,
        is_delivered: bool,
        duration: &str,
    ) -> String;
}

const SUN: &str = "☀️";
const MOON: &str = "🌙";

/// Built-in English catalogue.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLocalizer;

impl EnglishLocalizer {
    fn unit_name(count: u64, unit: TimeUnit) -> &'static str {
        let singular = count == 1;
        match (unit, singular) {
            (TimeUnit::Minute, true) => "minute",
            (TimeUnit::Minute, false) => "minutes",
            (TimeUnit::Hour, true) => "hour",
            (TimeUnit::Hour, false) => "hours",
            (TimeUnit::Day, true) => "day",
            (TimeUnit::Day, false) => "days",
            (TimeUnit::Week, true) => "week",
            (TimeUnit::Week, false) => "weeks",
            (TimeUnit::Month, true) => "month",
            (TimeUnit::Month, false) => "months",
            (TimeUnit::Year, true) => "year",
            (TimeUnit::Year, false) => "years",
        }
    }
}

impl Localizer for EnglishLocalizer {
    fn just_now(&self) -> String {
        "just now".to_string()
    }

    fn yesterday(&self) -> String {
        "yesterday".to_string()
    }

    fn elapsed(&self, count: u64, unit: TimeUnit) -> String {
        format!("{} {} ago", count, Self::unit_name(count, unit))
    }

    fn remaining_days(&self, days: u64) -> String {
        if days <= 1 {
            format!("1 {}", SUN)
        } else {
            format!("{} {} {}", days, SUN, MOON)
        }
    }

    fn describe(
        &self,
        template: DeliveryTemplate,
        other_party: &str,
        is_delivered: bool,
        duration: &str,
    ) -> String {
        let when = if is_delivered {
            format!("delivered {}", duration)
        } else {
            format!("arriving in {}", duration)
        };

        match template {
            DeliveryTemplate::ComposedByViewer => {
                format!("You composed this for {}, {}", other_party, when)
            }
            DeliveryTemplate::ComposedForViewer => {
                format!("{} composed this for you, {}", other_party, when)
            }
        }
    }
}
