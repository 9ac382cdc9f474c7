// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{self, Cell, Sheet};
use crate::export::notify_export_success;
use crate::models::report::Report;
use crate::ui::messages::info;
use rust_xlsxwriter::{
    Color, Format, FormatAlign, FormatBorder, FormatPattern, FormatUnderline, Url, Workbook,
    Worksheet,
};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const HEADER_BG: Color = Color::RGB(0x2F75B5);
const BAND1: Color = Color::RGB(0xEAF3FB);
const BAND2: Color = Color::RGB(0xFFFFFF);

/// Global workbook: Resumen + Totales semana + Totales mes.
pub(crate) fn export_xlsx(report: &Report, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let sheets = model::report_sheets(report);
    let mut workbook = build_workbook(&sheets)?;
    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// In-memory workbook, used for the per-worker ZIP entries.
pub(crate) fn workbook_bytes(sheets: &[Sheet]) -> AppResult<Vec<u8>> {
    let mut workbook = build_workbook(sheets)?;
    workbook.save_to_buffer().map_err(to_export_error)
}

fn build_workbook(sheets: &[Sheet]) -> AppResult<Workbook> {
    let mut workbook = Workbook::new();
    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        write_sheet(worksheet, sheet)?;
    }
    Ok(workbook)
}

fn write_sheet(worksheet: &mut Worksheet, sheet: &Sheet) -> AppResult<()> {
    // Excel caps sheet names at 31 chars
    let name: String = sheet.name.chars().take(31).collect();
    worksheet.set_name(&name).map_err(to_export_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(HEADER_BG)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in sheet.headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, header.as_str(), &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    // ---------------------------
    // Rows + column width tracking
    // ---------------------------
    let mut col_widths: Vec<usize> = sheet
        .headers
        .iter()
        .map(|h| UnicodeWidthStr::width(h.as_str()))
        .collect();

    for (row_index, row) in sheet.rows.iter().enumerate() {
        let r = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { BAND1 } else { BAND2 };

        for (col, cell) in row.cells.iter().enumerate() {
            let c = col as u16;
            let shown = write_cell(worksheet, r, c, cell, band, row.is_subtotal)?;

            if col < col_widths.len() {
                col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(shown.as_str()));
            }
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    Ok(())
}

/// Write one cell; returns the text whose display width drives the column.
fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    band: Color,
    bold: bool,
) -> AppResult<String> {
    let base = |fmt: Format| -> Format {
        let fmt = fmt
            .set_background_color(band)
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);
        if bold { fmt.set_bold() } else { fmt }
    };

    match cell {
        Cell::Text(s) => {
            worksheet
                .write_with_format(row, col, s.as_str(), &base(Format::new()))
                .map_err(to_export_error)?;
            Ok(s.clone())
        }
        // the label is shown, the URL stays the hyperlink target
        Cell::Link(link) => {
            let fmt = base(
                Format::new()
                    .set_font_color(Color::Blue)
                    .set_underline(FormatUnderline::Single),
            );
            worksheet
                .write_url_with_format(row, col, Url::new(&link.url).set_text(&link.label), &fmt)
                .map_err(to_export_error)?;
            Ok(link.label.clone())
        }
        Cell::Number(n) => {
            let fmt = base(Format::new().set_align(FormatAlign::Right).set_num_format("0.0"));
            worksheet
                .write_with_format(row, col, *n, &fmt)
                .map_err(to_export_error)?;
            Ok(format!("{:.1}", n))
        }
    }
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
