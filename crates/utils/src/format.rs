//! Formatting utilities for table cells.

/// Placeholder for absent values.
pub const DASH: &str = "—";

/// Value or the dash placeholder.
pub fn or_dash(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => DASH,
    }
}

/// `HH:MM` from an ISO-8601 timestamp such as `2026-10-19T14:30:00+00:00`.
/// Anything that does not look like one is returned unchanged.
pub fn clock_time(ts: &str) -> &str {
    ts.split_once('T')
        .and_then(|(_, time)| time.get(..5))
        .unwrap_or(ts)
}

/// Truncate to `width` characters, marking the cut with `…`.
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let keep: String = s.chars().take(width.saturating_sub(1)).collect();
    format!("{keep}…")
}
