//! Time utilities: best-effort timestamp parsing and hh:mm:ss formatting.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::OnceLock;

/// Rendered wherever an event has no usable duration or end timestamp.
pub const NO_RECORD: &str = "Sin registro";

/// Day-first dates ("31/01/2024 ...") as produced by the attendance terminals.
fn day_first_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{1,2}/\d{1,2}/\d{4}").unwrap())
}

/// Parse a raw timestamp cell. Returns None on empty or malformed input;
/// a bad value must never abort the whole file.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if day_first_re().is_match(s) {
        let formats = ["%d/%m/%Y %H:%M:%S", "%d/%m/%Y %H:%M"];
        for fmt in formats {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
                return Some(dt);
            }
        }
        if let Ok(d) = NaiveDate::parse_from_str(s, "%d/%m/%Y") {
            return d.and_hms_opt(0, 0, 0);
        }
        return None;
    }

    let formats = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];
    for fmt in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0);
    }

    None
}

/// Format seconds as zero-padded hh:mm:ss. Hours are unbounded: a weekly
/// subtotal may well exceed 24h.
pub fn secs_to_hhmmss(total_seconds: i64) -> String {
    let h = total_seconds / 3600;
    let m = (total_seconds % 3600) / 60;
    let s = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", h, m, s)
}

/// Format an optional duration; absent durations render as "Sin registro"
/// and never contribute to any sum.
pub fn format_duration(d: Option<Duration>) -> String {
    match d {
        Some(td) => secs_to_hhmmss(td.num_seconds()),
        None => NO_RECORD.to_string(),
    }
}
