//! Clock-time and duration helpers used when adapting provider payloads.

use chrono::{DateTime, NaiveDateTime, NaiveTime, Timelike};

/// Placeholder rendered for times that cannot be parsed.
pub const UNKNOWN_CLOCK: &str = "--:--";

/// Parse the wall-clock time of a departure/arrival string.
///
/// Accepts `HH:MM`, `HH:MM:SS`, and ISO datetimes with or without a `Z` or
/// numeric offset. The offset is not applied: the hour is the local hour at
/// the airport, as printed.
fn parse_clock(raw: &str) -> Option<NaiveTime> {
    let s = raw.trim();
    if s.is_empty() || s == UNKNOWN_CLOCK {
        return None;
    }
    if s.contains('T') {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.time());
        }
        return ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .map(|dt| dt.time());
    }
    ["%H:%M:%S", "%H:%M"]
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(s, fmt).ok())
}

/// Hour of day in `[0, 23]`, or `None` when `raw` is not a recognizable time.
#[must_use]
pub fn parse_hour(raw: &str) -> Option<u8> {
    parse_clock(raw).and_then(|t| u8::try_from(t.hour()).ok())
}

/// Render a time as `HH:MM`, or `--:--` when absent or unparsable.
#[must_use]
pub fn clock_time(raw: Option<&str>) -> String {
    raw.and_then(parse_clock).map_or_else(
        || UNKNOWN_CLOCK.to_string(),
        |t| t.format("%H:%M").to_string(),
    )
}

/// Render a flight duration for display.
///
/// `PT2H30M` and `02:30` both become `2h 30m`; a whole number of hours
/// drops the minutes and vice versa. Empty input yields an empty string and
/// anything unrecognized is returned unchanged.
#[must_use]
pub fn format_duration(raw: &str) -> String {
    let s = raw.trim();
    if s.is_empty() {
        return String::new();
    }
    let parts = s
        .strip_prefix("PT")
        .and_then(iso_parts)
        .or_else(|| clock_parts(s));
    match parts {
        Some((h, m)) if h > 0 && m > 0 => format!("{h}h {m}m"),
        Some((h, _)) if h > 0 => format!("{h}h"),
        Some((_, m)) if m > 0 => format!("{m}m"),
        _ => raw.to_string(),
    }
}

fn iso_parts(rest: &str) -> Option<(u32, u32)> {
    let (hours, rest) = match rest.split_once('H') {
        Some((h, tail)) => (h.parse().ok()?, tail),
        None => (0, rest),
    };
    let minutes = match rest.split_once('M') {
        Some((m, "")) => m.parse().ok()?,
        Some(_) => return None,
        None if rest.is_empty() => 0,
        None => return None,
    };
    Some((hours, minutes))
}

fn clock_parts(s: &str) -> Option<(u32, u32)> {
    let (h, m) = s.split_once(':')?;
    let minutes: u32 = m.parse().ok()?;
    (minutes < 60).then_some((h.parse().ok()?, minutes))
}
