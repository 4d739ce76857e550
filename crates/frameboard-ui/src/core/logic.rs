//! Small pure helpers shared across feature slices.

use chrono::{DateTime, NaiveDateTime};

/// Reconnect delay for the push channel: exponential, clamped to 1..=30 s.
#[must_use]
pub fn backoff_delay_ms(attempt: u32) -> u32 {
    let capped = attempt.min(5);
    let delay = 1_000u32.saturating_mul(2u32.saturating_pow(capped));
    delay.clamp(1_000, 30_000)
}

/// Liveness glyph shown in front of a device label.
#[must_use]
pub const fn status_glyph(active: bool) -> &'static str {
    if active { "🟢" } else { "💤" }
}

/// Fallback timestamp rendering used when the browser cannot format a value.
///
/// Accepts RFC 3339 and the offset-less ISO form the backend writes. Missing
/// values render as `-`; unparsable ones are shown verbatim.
#[must_use]
pub fn format_timestamp(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return "-".to_string();
    };
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    raw.to_string()
}
