use super::geo::MapLink;
use crate::utils::time::{NO_RECORD, format_duration};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// One cleaned clock-in/clock-out record.
///
/// Invariant: `end_ts == None` ⇒ `duration == None` and `distance_m == None`;
/// such an event renders "Sin registro" and never contributes to any sum.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedEvent {
    pub user_id: String,
    pub first_name: String, // upper-cased
    pub last_name: String,  // upper-cased
    pub start_ts: Option<NaiveDateTime>,
    pub end_ts: Option<NaiveDateTime>,
    pub duration: Option<Duration>,

    // calendar keys, always derived from start_ts
    pub date_key: Option<NaiveDate>,
    pub week_key: Option<String>, // ISO "YYYY-Www"
    pub year: Option<i32>,
    pub month_key: Option<String>, // "YYYY-MM"

    // geolocation enrichment, present only when the input carried it
    pub map_start: Option<MapLink>,
    pub map_end: Option<MapLink>,
    pub distance_m: Option<f64>,
}

impl NormalizedEvent {
    /// Display identity the dashboard filters on: "NOMBRE APELLIDOS".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    pub fn start_time(&self) -> Option<NaiveTime> {
        self.start_ts.map(|ts| ts.time())
    }

    pub fn start_time_str(&self) -> String {
        match self.start_ts {
            Some(ts) => ts.format("%H:%M:%S").to_string(),
            None => String::new(),
        }
    }

    /// Open events print the literal "Sin registro" in the end-time column.
    pub fn end_time_str(&self) -> String {
        match self.end_ts {
            Some(ts) => ts.format("%H:%M:%S").to_string(),
            None => NO_RECORD.to_string(),
        }
    }

    pub fn duration_str(&self) -> String {
        format_duration(self.duration)
    }

    pub fn date_str(&self) -> String {
        match self.date_key {
            Some(d) => crate::utils::date::format_date(d),
            None => String::new(),
        }
    }
}
