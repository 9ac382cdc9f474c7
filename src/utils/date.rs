use chrono::{Datelike, NaiveDate};

/// ISO-8601 week key, e.g. "2024-W03". The ISO year may differ from the
/// calendar year around January 1st.
pub fn iso_week_key(d: NaiveDate) -> String {
    let iso = d.iso_week();
    format!("{}-W{:02}", iso.year(), iso.week())
}

/// Month key, e.g. "2024-01".
pub fn month_key(d: NaiveDate) -> String {
    format!("{}-{:02}", d.year(), d.month())
}

/// Display format used in report tables (the original export is day-first).
pub fn format_date(d: NaiveDate) -> String {
    d.format("%d/%m/%Y").to_string()
}
