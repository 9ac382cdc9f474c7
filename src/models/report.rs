use super::event::NormalizedEvent;
use crate::utils::time::secs_to_hhmmss;
use chrono::Duration;

/// Synthetic row closing each (user, week) block of the day-level table.
/// Only the week column, the "Subtotal {user}" label and the summed
/// duration carry values; every other column stays blank.
#[derive(Debug, Clone, PartialEq)]
pub struct SubtotalRow {
    pub user_id: String,
    pub week_key: Option<String>,
    pub total: Duration,
}

impl SubtotalRow {
    pub fn label(&self) -> String {
        format!("Subtotal {}", self.user_id)
    }

    pub fn total_str(&self) -> String {
        secs_to_hhmmss(self.total.num_seconds())
    }
}

/// Day-level table entry: either a data row or the subtotal that closes
/// its (user, week) block.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportRow {
    Day(NormalizedEvent),
    Subtotal(SubtotalRow),
}

/// One row per (user, week), durations with no value excluded from the sum.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyTotalRow {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub week_key: String,
    pub total: Duration,
}

impl WeeklyTotalRow {
    pub fn total_str(&self) -> String {
        secs_to_hhmmss(self.total.num_seconds())
    }
}

/// One row per (user, year, month).
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTotalRow {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub year: i32,
    pub month_key: String,
    pub total: Duration,
}

impl MonthlyTotalRow {
    pub fn total_str(&self) -> String {
        secs_to_hhmmss(self.total.num_seconds())
    }
}

/// Everything the renderers and exporters consume. Derived, immutable,
/// recomputed in full on every run.
#[derive(Debug, Clone, Default)]
pub struct Report {
    /// Sorted day-level rows, no synthetic rows.
    pub daily: Vec<NormalizedEvent>,
    /// Day-level rows interleaved with one subtotal per (user, week) block.
    pub subtotaled: Vec<ReportRow>,
    pub weekly: Vec<WeeklyTotalRow>,
    pub monthly: Vec<MonthlyTotalRow>,
    /// True when at least one event carries geolocation fields; drives the
    /// presence of the map/distance columns in every output.
    pub has_geo: bool,
}

/// Per-worker export bundle: the scoped day-level table plus its per-week
/// subtotal table, ready to be serialized into one archive entry.
#[derive(Debug, Clone)]
pub struct UserBundle {
    pub user_id: String,
    pub rows: Vec<NormalizedEvent>,
    pub subtotals: Vec<SubtotalRow>,
}
