// src/export/model.rs

use crate::models::event::NormalizedEvent;
use crate::models::geo::MapLink;
use crate::models::report::{MonthlyTotalRow, Report, ReportRow, SubtotalRow, UserBundle, WeeklyTotalRow};

/// One output cell. Map links stay a distinct value kind so each export
/// backend can pick its own physical encoding (hyperlink cell, plain URL).
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Link(MapLink),
    Number(f64),
}

impl Cell {
    pub fn text<S: Into<String>>(s: S) -> Self {
        Cell::Text(s.into())
    }

    pub fn blank() -> Self {
        Cell::Text(String::new())
    }

    /// Flat-text encoding, used by CSV and the terminal tables.
    pub fn as_text(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Link(l) => l.url.clone(),
            Cell::Number(n) => format!("{:.1}", n),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SheetRow {
    pub cells: Vec<Cell>,
    /// Subtotal rows are rendered bold by the spreadsheet backend.
    pub is_subtotal: bool,
}

/// A uniformly-shaped table ready for display or serialization.
#[derive(Debug, Clone)]
pub struct Sheet {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<SheetRow>,
}

const SUMMARY_HEADERS: &[&str] = &[
    "Semana",
    "Año",
    "Mes",
    "Fecha",
    "Usuario",
    "Nombre",
    "Apellidos",
    "Hora inicio",
    "Hora fin",
    "Total horas",
];

const GEO_HEADERS: &[&str] = &["Mapa inicio", "Mapa fin", "Distancia (m)"];

fn opt_text(v: &Option<String>) -> Cell {
    Cell::text(v.clone().unwrap_or_default())
}

fn opt_link(v: &Option<MapLink>) -> Cell {
    match v {
        Some(l) => Cell::Link(l.clone()),
        None => Cell::blank(),
    }
}

fn day_cells(e: &NormalizedEvent, with_geo: bool) -> Vec<Cell> {
    let mut cells = vec![
        opt_text(&e.week_key),
        Cell::text(e.year.map(|y| y.to_string()).unwrap_or_default()),
        opt_text(&e.month_key),
        Cell::text(e.date_str()),
        Cell::text(&e.user_id),
        Cell::text(&e.first_name),
        Cell::text(&e.last_name),
        Cell::text(e.start_time_str()),
        Cell::text(e.end_time_str()),
        Cell::text(e.duration_str()),
    ];

    if with_geo {
        cells.push(opt_link(&e.map_start));
        cells.push(opt_link(&e.map_end));
        cells.push(match e.distance_m {
            Some(d) => Cell::Number(d),
            None => Cell::blank(),
        });
    }

    cells
}

fn subtotal_cells(s: &SubtotalRow, with_geo: bool) -> Vec<Cell> {
    let mut cells = vec![
        opt_text(&s.week_key),
        Cell::blank(),
        Cell::blank(),
        Cell::blank(),
        Cell::text(s.label()),
        Cell::blank(),
        Cell::blank(),
        Cell::blank(),
        Cell::blank(),
        Cell::text(s.total_str()),
    ];

    if with_geo {
        cells.extend([Cell::blank(), Cell::blank(), Cell::blank()]);
    }

    cells
}

fn summary_headers(with_geo: bool) -> Vec<String> {
    let mut headers: Vec<String> = SUMMARY_HEADERS.iter().map(|h| h.to_string()).collect();
    if with_geo {
        headers.extend(GEO_HEADERS.iter().map(|h| h.to_string()));
    }
    headers
}

/// Day-level table with the weekly subtotal blocks ("Resumen").
pub fn summary_sheet(rows: &[ReportRow], with_geo: bool) -> Sheet {
    let sheet_rows = rows
        .iter()
        .map(|row| match row {
            ReportRow::Day(e) => SheetRow {
                cells: day_cells(e, with_geo),
                is_subtotal: false,
            },
            ReportRow::Subtotal(s) => SheetRow {
                cells: subtotal_cells(s, with_geo),
                is_subtotal: true,
            },
        })
        .collect();

    Sheet {
        name: "Resumen".to_string(),
        headers: summary_headers(with_geo),
        rows: sheet_rows,
    }
}

pub fn weekly_sheet(rows: &[WeeklyTotalRow]) -> Sheet {
    Sheet {
        name: "Totales semana".to_string(),
        headers: ["Usuario", "Nombre", "Apellidos", "Semana", "Total horas semana"]
            .iter()
            .map(|h| h.to_string())
            .collect(),
        rows: rows
            .iter()
            .map(|r| SheetRow {
                cells: vec![
                    Cell::text(&r.user_id),
                    Cell::text(&r.first_name),
                    Cell::text(&r.last_name),
                    Cell::text(&r.week_key),
                    Cell::text(r.total_str()),
                ],
                is_subtotal: false,
            })
            .collect(),
    }
}

pub fn monthly_sheet(rows: &[MonthlyTotalRow]) -> Sheet {
    Sheet {
        name: "Totales mes".to_string(),
        headers: ["Usuario", "Nombre", "Apellidos", "Año", "Mes", "Total horas mes"]
            .iter()
            .map(|h| h.to_string())
            .collect(),
        rows: rows
            .iter()
            .map(|r| SheetRow {
                cells: vec![
                    Cell::text(&r.user_id),
                    Cell::text(&r.first_name),
                    Cell::text(&r.last_name),
                    Cell::text(r.year.to_string()),
                    Cell::text(&r.month_key),
                    Cell::text(r.total_str()),
                ],
                is_subtotal: false,
            })
            .collect(),
    }
}

/// The three sheets of the global workbook.
pub fn report_sheets(report: &Report) -> Vec<Sheet> {
    vec![
        summary_sheet(&report.subtotaled, report.has_geo),
        weekly_sheet(&report.weekly),
        monthly_sheet(&report.monthly),
    ]
}

/// The two sheets of one per-worker workbook: the scoped day-level rows
/// plus the week subtotal table.
pub fn bundle_sheets(bundle: &UserBundle, with_geo: bool) -> Vec<Sheet> {
    let resumen = Sheet {
        name: "Resumen".to_string(),
        headers: summary_headers(with_geo),
        rows: bundle
            .rows
            .iter()
            .map(|e| SheetRow {
                cells: day_cells(e, with_geo),
                is_subtotal: false,
            })
            .collect(),
    };

    let subtotales = Sheet {
        name: "Subtotales semana".to_string(),
        headers: ["Usuario", "Semana", "Subtotal"]
            .iter()
            .map(|h| h.to_string())
            .collect(),
        rows: bundle
            .subtotals
            .iter()
            .map(|s| SheetRow {
                cells: vec![
                    Cell::text(&bundle.user_id),
                    opt_text(&s.week_key),
                    Cell::text(s.total_str()),
                ],
                is_subtotal: false,
            })
            .collect(),
    };

    vec![resumen, subtotales]
}
