//! Event normalization: raw export rows → cleaned, enriched events.
//! Pure transformation, no side effects; a malformed cell degrades to an
//! absent value instead of aborting the run.

use crate::config::Config;
use crate::core::geo;
use crate::ingest::schema::{ColumnMap, GeoColumns};
use crate::models::event::NormalizedEvent;
use crate::models::geo::{GeoPoint, MapLink};
use crate::models::raw::RawEvent;
use crate::utils::date::{iso_week_key, month_key};
use crate::utils::time::parse_timestamp;
use chrono::{Datelike, NaiveDateTime};

pub fn normalize(columns: &ColumnMap, rows: &[RawEvent], cfg: &Config) -> Vec<NormalizedEvent> {
    rows.iter().map(|row| normalize_one(columns, row, cfg)).collect()
}

fn normalize_one(columns: &ColumnMap, row: &RawEvent, cfg: &Config) -> NormalizedEvent {
    let user_id = row.get(columns.user_id).trim().to_string();
    let first_name = row.get(columns.first_name).trim().to_uppercase();
    let last_name = row.get(columns.last_name).trim().to_uppercase();

    let start_ts = parse_timestamp(row.get(columns.start));
    let end_ts = scrub_sentinel(parse_timestamp(row.get(columns.end)), cfg.sentinel_year);

    // end before start is bad terminal data: no duration, never a
    // negative hh:mm:ss leaking into subtotals
    let duration = match (start_ts, end_ts) {
        (Some(s), Some(e)) if e >= s => Some(e - s),
        _ => None,
    };

    // calendar keys come from the clock-in only
    let date_key = start_ts.map(|ts| ts.date());
    let week_key = date_key.map(iso_week_key);
    let year = date_key.map(|d| d.year());
    let month_key = date_key.map(month_key);

    let (map_start, map_end, distance_m) = match &columns.geo {
        Some(geo_cols) => enrich_geo(geo_cols, row, end_ts, cfg),
        None => (None, None, None),
    };

    NormalizedEvent {
        user_id,
        first_name,
        last_name,
        start_ts,
        end_ts,
        duration,
        date_key,
        week_key,
        year,
        month_key,
        map_start,
        map_end,
        distance_m,
    }
}

/// The terminals write year 1 ("01/01/0001") when a shift was never
/// closed. That is a data-quality rule, not a parse failure: the value
/// parses fine and is then forced to absent.
fn scrub_sentinel(ts: Option<NaiveDateTime>, sentinel_year: i32) -> Option<NaiveDateTime> {
    ts.filter(|t| t.year() != sentinel_year)
}

fn enrich_geo(
    geo_cols: &GeoColumns,
    row: &RawEvent,
    end_ts: Option<NaiveDateTime>,
    cfg: &Config,
) -> (Option<MapLink>, Option<MapLink>, Option<f64>) {
    let start_point = endpoint(geo_cols.lat_start, geo_cols.lon_start, row);
    let end_point = endpoint(geo_cols.lat_end, geo_cols.lon_end, row);

    let map_start = start_point.map(|p| geo::map_link(&cfg.map_base_url, p, "Mapa inicio"));
    let map_end = end_point.map(|p| geo::map_link(&cfg.map_base_url, p, "Mapa fin"));

    // an open interval never gets a distance, even when both coordinate
    // pairs happen to be present
    let distance_m = match (start_point, end_point, end_ts) {
        (Some(a), Some(b), Some(_)) => Some(geo::haversine_m(a, b)),
        _ => None,
    };

    (map_start, map_end, distance_m)
}

/// A usable endpoint needs both coordinates parsed, and (0,0) counts as
/// "no GPS fix", not as a real position.
fn endpoint(lat_idx: Option<usize>, lon_idx: Option<usize>, row: &RawEvent) -> Option<GeoPoint> {
    let lat: f64 = row.get(lat_idx?).trim().parse().ok()?;
    let lon: f64 = row.get(lon_idx?).trim().parse().ok()?;

    if lat == 0.0 && lon == 0.0 {
        return None;
    }

    Some(GeoPoint { lat, lon })
}
