//! Aggregation: sorting, subtotal interleaving, totals and filtering.

use controlhoras::config::Config;
use controlhoras::core::aggregator::{build_report, user_bundles};
use controlhoras::core::filter::{Selection, filter};
use controlhoras::core::normalizer::normalize;
use controlhoras::ingest::ColumnMap;
use controlhoras::models::event::NormalizedEvent;
use controlhoras::models::raw::{Header, RawEvent};
use controlhoras::models::report::ReportRow;

/// (user, first, last, start, end) — the fields every test here cares about.
fn events(rows: &[(&str, &str, &str, &str, &str)]) -> Vec<NormalizedEvent> {
    let header = Header {
        columns: ["Usuario", "Nombre", "Apellidos", "Inicio", "Fin"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    };
    let raw: Vec<RawEvent> = rows
        .iter()
        .map(|(u, n, a, s, e)| RawEvent {
            values: vec![
                u.to_string(),
                n.to_string(),
                a.to_string(),
                s.to_string(),
                e.to_string(),
            ],
        })
        .collect();

    let map = ColumnMap::resolve(&header).expect("resolve columns");
    normalize(&map, &raw, &Config::default())
}

/// Mixed dataset: two users, two weeks, one open event, one zero duration.
fn sample() -> Vec<NormalizedEvent> {
    events(&[
        // deliberately unsorted
        ("u2@acme.com", "Benito", "Pérez", "2024-02-01 08:00:00", "2024-02-01 16:00:00"),
        ("u1@acme.com", "Ana", "García", "2024-01-16 08:00:00", "2024-01-16 15:45:00"),
        ("u1@acme.com", "Ana", "García", "2024-01-22 09:00:00", "0001-01-01 00:00:00"),
        ("u1@acme.com", "Ana", "García", "2024-01-15 08:00:00", "2024-01-15 16:00:00"),
        ("u2@acme.com", "Benito", "Pérez", "2024-01-15 10:00:00", "2024-01-15 10:00:00"),
    ])
}

#[test]
fn test_daily_sort_order() {
    let report = build_report(&sample());

    let keys: Vec<(String, Option<String>, String)> = report
        .daily
        .iter()
        .map(|e| (e.user_id.clone(), e.week_key.clone(), e.start_time_str()))
        .collect();

    assert_eq!(keys[0].0, "u1@acme.com");
    assert_eq!(keys[1].0, "u1@acme.com");
    assert_eq!(keys[2].0, "u1@acme.com");
    assert_eq!(keys[3].0, "u2@acme.com");
    assert_eq!(keys[4].0, "u2@acme.com");

    // u1: W03 before W04; inside W03 the 15th before the 16th
    assert_eq!(keys[0].1.as_deref(), Some("2024-W03"));
    assert_eq!(keys[1].1.as_deref(), Some("2024-W03"));
    assert_eq!(keys[2].1.as_deref(), Some("2024-W04"));
    assert!(report.daily[0].date_key <= report.daily[1].date_key);
}

#[test]
fn test_subtotal_closes_every_user_week_block() {
    let report = build_report(&sample());

    // 5 data rows + 4 (user, week) groups
    assert_eq!(report.subtotaled.len(), 9);

    // a subtotal row must follow its block immediately
    let mut current_block: Option<(String, Option<String>)> = None;
    for row in &report.subtotaled {
        match row {
            ReportRow::Day(e) => {
                current_block = Some((e.user_id.clone(), e.week_key.clone()));
            }
            ReportRow::Subtotal(s) => {
                let (user, week) = current_block.clone().expect("subtotal without block");
                assert_eq!(s.user_id, user);
                assert_eq!(s.week_key, week);
            }
        }
    }

    // last row of the table is the final block's subtotal
    assert!(matches!(report.subtotaled.last(), Some(ReportRow::Subtotal(_))));
}

#[test]
fn test_subtotal_sums_week_durations() {
    let report = build_report(&sample());

    let subtotals: Vec<_> = report
        .subtotaled
        .iter()
        .filter_map(|r| match r {
            ReportRow::Subtotal(s) => Some(s),
            _ => None,
        })
        .collect();

    // u1 W03: 08:00:00 + 07:45:00
    assert_eq!(subtotals[0].label(), "Subtotal u1@acme.com");
    assert_eq!(subtotals[0].week_key.as_deref(), Some("2024-W03"));
    assert_eq!(subtotals[0].total_str(), "15:45:00");

    // u1 W04 only holds the open event: sums to zero, still gets its row
    assert_eq!(subtotals[1].week_key.as_deref(), Some("2024-W04"));
    assert_eq!(subtotals[1].total_str(), "00:00:00");
}

#[test]
fn test_weekly_totals_exclude_open_events() {
    let report = build_report(&sample());

    // u1 W04 has only the open event → no weekly row at all
    assert!(
        !report
            .weekly
            .iter()
            .any(|r| r.user_id == "u1@acme.com" && r.week_key == "2024-W04")
    );

    let u1_w03 = report
        .weekly
        .iter()
        .find(|r| r.user_id == "u1@acme.com" && r.week_key == "2024-W03")
        .expect("u1 W03 row");
    assert_eq!(u1_w03.total_str(), "15:45:00");
    assert_eq!(u1_w03.first_name, "ANA");

    // zero-duration events are real data and do appear
    let u2_w03 = report
        .weekly
        .iter()
        .find(|r| r.user_id == "u2@acme.com" && r.week_key == "2024-W03")
        .expect("u2 W03 row");
    assert_eq!(u2_w03.total_str(), "00:00:00");
}

#[test]
fn test_monthly_totals_group_by_year_and_month() {
    let report = build_report(&sample());

    let u2_jan = report
        .monthly
        .iter()
        .find(|r| r.user_id == "u2@acme.com" && r.month_key == "2024-01")
        .expect("u2 january");
    assert_eq!(u2_jan.total_str(), "00:00:00");

    let u2_feb = report
        .monthly
        .iter()
        .find(|r| r.user_id == "u2@acme.com" && r.month_key == "2024-02")
        .expect("u2 february");
    assert_eq!(u2_feb.year, 2024);
    assert_eq!(u2_feb.total_str(), "08:00:00");
}

#[test]
fn test_weekly_total_hours_are_unbounded() {
    let evts = events(&[
        ("u1", "Ana", "García", "2024-01-15 08:00:00", "2024-01-15 18:00:00"),
        ("u1", "Ana", "García", "2024-01-16 08:00:00", "2024-01-16 18:00:00"),
        ("u1", "Ana", "García", "2024-01-17 08:00:00", "2024-01-17 18:00:00"),
    ]);
    let report = build_report(&evts);

    // 3 × 10h in one week: hours keep counting past 24
    assert_eq!(report.weekly[0].total_str(), "30:00:00");
}

#[test]
fn test_filter_all_is_identity() {
    let evts = sample();
    let filtered = filter(&evts, &Selection::all());
    assert_eq!(filtered, evts);
}

#[test]
fn test_filter_by_identity_and_week() {
    let evts = sample();

    let by_name = Selection::from_args(&["Ana García".to_string()], &[]).unwrap();
    let only_u1 = filter(&evts, &by_name);
    assert_eq!(only_u1.len(), 3);
    assert!(only_u1.iter().all(|e| e.user_id == "u1@acme.com"));

    let by_week = Selection::from_args(&[], &["2024-W03".to_string()]).unwrap();
    let only_w03 = filter(&evts, &by_week);
    assert_eq!(only_w03.len(), 3);
    assert!(only_w03.iter().all(|e| e.week_key.as_deref() == Some("2024-W03")));

    let both = Selection::from_args(
        &["Ana García".to_string()],
        &["2024-W03".to_string()],
    )
    .unwrap();
    assert_eq!(filter(&evts, &both).len(), 2);
}

#[test]
fn test_invalid_week_key_is_rejected_up_front() {
    let err = Selection::from_args(&[], &["2024W03".to_string()]).unwrap_err();
    assert!(format!("{err}").contains("Invalid week key"));
}

#[test]
fn test_rebuilding_from_daily_reproduces_subtotals() {
    let report = build_report(&sample());

    // the daily table is itself a valid aggregator input
    let again = build_report(&report.daily);
    assert_eq!(again.subtotaled, report.subtotaled);
    assert_eq!(again.weekly, report.weekly);
    assert_eq!(again.monthly, report.monthly);
}

#[test]
fn test_user_bundles_scope_rows_and_subtotals() {
    let bundles = user_bundles(&sample());

    assert_eq!(bundles.len(), 2);
    assert_eq!(bundles[0].user_id, "u1@acme.com");
    assert_eq!(bundles[0].rows.len(), 3);
    assert_eq!(bundles[0].subtotals.len(), 2); // W03 + W04
    assert_eq!(bundles[0].subtotals[0].total_str(), "15:45:00");

    assert_eq!(bundles[1].user_id, "u2@acme.com");
    assert_eq!(bundles[1].rows.len(), 2);
    assert_eq!(bundles[1].subtotals.len(), 2); // W03 + W05
}
