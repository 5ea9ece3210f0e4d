use letterbox_engine::DeliveryState;
use letterbox_types::Timestamp;

/// Absolute UTC date for a letter timestamp, e.g. "2026-10-16 09:30 UTC".
pub fn format_date(ts: Timestamp) -> String {
    match ts.to_datetime() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M UTC").to_string(),
        None => format!("{}ms", ts.as_millis()),
    }
}

/// "delivered 2 days ago" / "arriving in 3 ☀️ 🌙"
pub fn format_delivery(state: &DeliveryState) -> String {
    if state.is_delivered {
        format!("delivered {}", state.display_duration)
    } else {
        format!("arriving in {}", state.display_duration)
    }
}
