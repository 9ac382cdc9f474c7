//! Aggregation: sorted day-level table with weekly subtotal blocks,
//! weekly and monthly totals, per-worker bundles. Re-runnable over any
//! filtered subset of normalized events.

use crate::models::event::NormalizedEvent;
use crate::models::report::{
    MonthlyTotalRow, Report, ReportRow, SubtotalRow, UserBundle, WeeklyTotalRow,
};
use chrono::Duration;
use std::collections::BTreeMap;

pub fn build_report(events: &[NormalizedEvent]) -> Report {
    let daily = sort_daily(events);
    let subtotaled = interleave_subtotals(&daily);
    let weekly = weekly_totals(events);
    let monthly = monthly_totals(events);

    let has_geo = events
        .iter()
        .any(|e| e.map_start.is_some() || e.map_end.is_some() || e.distance_m.is_some());

    Report {
        daily,
        subtotaled,
        weekly,
        monthly,
        has_geo,
    }
}

/// Day-level sort: user, ISO week, date, start time of day — all
/// ascending, stable. Events without a start timestamp have no keys and
/// sort to the front of their user's block.
pub fn sort_daily(events: &[NormalizedEvent]) -> Vec<NormalizedEvent> {
    let mut sorted = events.to_vec();
    sorted.sort_by(|a, b| {
        (&a.user_id, &a.week_key, &a.date_key, a.start_time()).cmp(&(
            &b.user_id,
            &b.week_key,
            &b.date_key,
            b.start_time(),
        ))
    });
    sorted
}

/// Walk the sorted stream and close every consecutive (user, week) run
/// with one subtotal row. Runs appear in first-seen order; rows keep
/// their sorted order inside each block.
pub fn interleave_subtotals(daily: &[NormalizedEvent]) -> Vec<ReportRow> {
    let mut out = Vec::with_capacity(daily.len() + daily.len() / 4);
    let mut i = 0;

    while i < daily.len() {
        let user_id = daily[i].user_id.clone();
        let week_key = daily[i].week_key.clone();
        let mut total_seconds = 0i64;

        while i < daily.len() && daily[i].user_id == user_id && daily[i].week_key == week_key {
            if let Some(d) = daily[i].duration {
                total_seconds += d.num_seconds();
            }
            out.push(ReportRow::Day(daily[i].clone()));
            i += 1;
        }

        out.push(ReportRow::Subtotal(SubtotalRow {
            user_id,
            week_key,
            total: Duration::seconds(total_seconds),
        }));
    }

    out
}

/// Weekly totals over (user, name, surname, week). Events with no
/// duration are excluded from the sum, never coerced to zero. Input
/// order is irrelevant; output is sorted by key.
pub fn weekly_totals(events: &[NormalizedEvent]) -> Vec<WeeklyTotalRow> {
    let mut groups: BTreeMap<(String, String, String, String), i64> = BTreeMap::new();

    for e in events {
        if let (Some(d), Some(week)) = (e.duration, &e.week_key) {
            let key = (
                e.user_id.clone(),
                e.first_name.clone(),
                e.last_name.clone(),
                week.clone(),
            );
            *groups.entry(key).or_insert(0) += d.num_seconds();
        }
    }

    groups
        .into_iter()
        .map(|((user_id, first_name, last_name, week_key), secs)| WeeklyTotalRow {
            user_id,
            first_name,
            last_name,
            week_key,
            total: Duration::seconds(secs),
        })
        .collect()
}

/// Monthly totals over (user, name, surname, year, month).
pub fn monthly_totals(events: &[NormalizedEvent]) -> Vec<MonthlyTotalRow> {
    let mut groups: BTreeMap<(String, String, String, i32, String), i64> = BTreeMap::new();

    for e in events {
        if let (Some(d), Some(year), Some(month)) = (e.duration, e.year, &e.month_key) {
            let key = (
                e.user_id.clone(),
                e.first_name.clone(),
                e.last_name.clone(),
                year,
                month.clone(),
            );
            *groups.entry(key).or_insert(0) += d.num_seconds();
        }
    }

    groups
        .into_iter()
        .map(
            |((user_id, first_name, last_name, year, month_key), secs)| MonthlyTotalRow {
                user_id,
                first_name,
                last_name,
                year,
                month_key,
                total: Duration::seconds(secs),
            },
        )
        .collect()
}

/// One bundle per distinct user of the (filtered) event set: the scoped
/// sorted day-level rows plus the per-week subtotal table. Same sorting
/// and grouping rules as the global report.
pub fn user_bundles(events: &[NormalizedEvent]) -> Vec<UserBundle> {
    let daily = sort_daily(events);
    let mut bundles: Vec<UserBundle> = Vec::new();

    for e in &daily {
        let start_new = match bundles.last() {
            Some(b) => b.user_id != e.user_id,
            None => true,
        };
        if start_new {
            bundles.push(UserBundle {
                user_id: e.user_id.clone(),
                rows: Vec::new(),
                subtotals: Vec::new(),
            });
        }
        if let Some(b) = bundles.last_mut() {
            b.rows.push(e.clone());
        }
    }

    for bundle in &mut bundles {
        bundle.subtotals = interleave_subtotals(&bundle.rows)
            .into_iter()
            .filter_map(|row| match row {
                ReportRow::Subtotal(s) => Some(s),
                ReportRow::Day(_) => None,
            })
            .collect();
    }

    bundles
}
