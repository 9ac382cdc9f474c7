use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core;
use crate::core::aggregator::build_report;
use crate::core::filter::{Selection, filter};
use crate::errors::AppResult;
use crate::models::report::{Report, ReportRow};
use crate::ui::messages::{notice, section};
use crate::utils::colors::{bold, colorize_optional};
use crate::utils::table::Table;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        file,
        user,
        week,
        weekly,
        monthly,
    } = cmd
    {
        let events = core::load_events(Path::new(file), cfg)?;
        let selection = Selection::from_args(user, week)?;
        let filtered = filter(&events, &selection);

        if filtered.is_empty() {
            notice("Sin filas para los filtros seleccionados.");
            return Ok(());
        }

        let report = build_report(&filtered);
        let show_all = !*weekly && !*monthly;

        if show_all {
            print_summary(&report);
        }
        if show_all || *weekly {
            print_weekly(&report);
        }
        if show_all || *monthly {
            print_monthly(&report);
        }
    }
    Ok(())
}

/// Day-level table with the weekly subtotal blocks. Year and month are
/// left out of the terminal view, the export formats carry them.
fn print_summary(report: &Report) {
    section("📋 Resumen por día (con subtotales semanales)");

    let mut headers = vec![
        "Semana",
        "Fecha",
        "Usuario",
        "Nombre",
        "Apellidos",
        "Hora inicio",
        "Hora fin",
        "Total horas",
    ];
    if report.has_geo {
        headers.push("Distancia (m)");
    }

    let mut table = Table::new(headers);

    for row in &report.subtotaled {
        match row {
            ReportRow::Day(e) => {
                let mut cells = vec![
                    e.week_key.clone().unwrap_or_default(),
                    e.date_str(),
                    e.user_id.clone(),
                    e.first_name.clone(),
                    e.last_name.clone(),
                    e.start_time_str(),
                    colorize_optional(&e.end_time_str()),
                    colorize_optional(&e.duration_str()),
                ];
                if report.has_geo {
                    cells.push(
                        e.distance_m
                            .map(|d| format!("{:.1}", d))
                            .unwrap_or_default(),
                    );
                }
                table.add_row(cells);
            }
            ReportRow::Subtotal(s) => {
                let mut cells = vec![
                    bold(&s.week_key.clone().unwrap_or_default()),
                    String::new(),
                    bold(&s.label()),
                    String::new(),
                    String::new(),
                    String::new(),
                    String::new(),
                    bold(&s.total_str()),
                ];
                if report.has_geo {
                    cells.push(String::new());
                }
                table.add_row(cells);
            }
        }
    }

    print!("{}", table.render());
}

fn print_weekly(report: &Report) {
    section("🗓️ Totales por semana");

    let mut table = Table::new(vec![
        "Usuario",
        "Nombre",
        "Apellidos",
        "Semana",
        "Total horas semana",
    ]);

    for r in &report.weekly {
        table.add_row(vec![
            r.user_id.clone(),
            r.first_name.clone(),
            r.last_name.clone(),
            r.week_key.clone(),
            r.total_str(),
        ]);
    }

    print!("{}", table.render());
}

fn print_monthly(report: &Report) {
    section("🗓️ Totales por mes");

    let mut table = Table::new(vec![
        "Usuario",
        "Nombre",
        "Apellidos",
        "Año",
        "Mes",
        "Total horas mes",
    ]);

    for r in &report.monthly {
        table.add_row(vec![
            r.user_id.clone(),
            r.first_name.clone(),
            r.last_name.clone(),
            r.year.to_string(),
            r.month_key.clone(),
            r.total_str(),
        ]);
    }

    print!("{}", table.render());
}
