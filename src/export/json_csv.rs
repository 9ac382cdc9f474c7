// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::model::{self, Cell, Sheet};
use crate::export::notify_export_success;
use crate::models::report::Report;
use crate::ui::messages::info;
use serde_json::{Value, json};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// CSV holds a single table: the day-level summary with its subtotal rows.
pub(crate) fn export_csv(report: &Report, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let sheet = model::summary_sheet(&report.subtotaled, report.has_geo);

    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(&sheet.headers)?;
    for row in &sheet.rows {
        wtr.write_record(row.cells.iter().map(|c| c.as_text()))?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}

/// JSON carries the whole report: summary plus both totals tables.
pub(crate) fn export_json(report: &Report, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let value = json!({
        "resumen": sheet_to_json(&model::summary_sheet(&report.subtotaled, report.has_geo)),
        "totales_semana": sheet_to_json(&model::weekly_sheet(&report.weekly)),
        "totales_mes": sheet_to_json(&model::monthly_sheet(&report.monthly)),
    });

    let json_data = serde_json::to_string_pretty(&value)
        .map_err(|e| crate::errors::AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Rows become objects keyed by header; a map link stays structured
/// ({url, label}) so consumers can render it their own way.
fn sheet_to_json(sheet: &Sheet) -> Value {
    let rows: Vec<Value> = sheet
        .rows
        .iter()
        .map(|row| {
            let mut obj = serde_json::Map::new();
            for (header, cell) in sheet.headers.iter().zip(&row.cells) {
                let v = match cell {
                    Cell::Text(s) if s.is_empty() => Value::Null,
                    Cell::Text(s) => json!(s),
                    Cell::Link(l) => json!({ "url": l.url, "label": l.label }),
                    Cell::Number(n) => json!(n),
                };
                obj.insert(header.clone(), v);
            }
            Value::Object(obj)
        })
        .collect();

    Value::Array(rows)
}
