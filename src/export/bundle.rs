// src/export/bundle.rs

use crate::core::aggregator::user_bundles;
use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::export::{model, xlsx};
use crate::models::event::NormalizedEvent;
use crate::ui::messages::{info, warning};
use std::fs;
use std::io::Write;
use std::path::Path;
use zip::ZipWriter;
use zip::write::FileOptions;

/// ZIP with one workbook per worker found in the (filtered) event set.
/// Each entry carries the scoped Resumen plus its week subtotal table.
pub(crate) fn export_bundle(events: &[NormalizedEvent], path: &Path) -> AppResult<()> {
    let bundles = user_bundles(events);

    if bundles.is_empty() {
        warning("No workers in the filtered data; bundle not created.");
        return Ok(());
    }

    info(format!(
        "Exporting bundle for {} worker(s): {}",
        bundles.len(),
        path.display()
    ));

    let with_geo = events
        .iter()
        .any(|e| e.map_start.is_some() || e.map_end.is_some() || e.distance_m.is_some());

    let file = fs::File::create(path)?;
    let mut zip = ZipWriter::new(file);

    for bundle in &bundles {
        let options: FileOptions<'_, ()> =
            FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        let bytes = xlsx::workbook_bytes(&model::bundle_sheets(bundle, with_geo))?;

        zip.start_file(format!("{}.xlsx", sanitize_filename(&bundle.user_id)), options)
            .map_err(std::io::Error::other)?;
        zip.write_all(&bytes)?;
    }

    zip.finish().map_err(std::io::Error::other)?;

    notify_export_success("ZIP", path);
    Ok(())
}

/// User ids are usually e-mail addresses; keep the archive entry names
/// filesystem-safe on every platform.
pub(crate) fn sanitize_filename(user_id: &str) -> String {
    let mut out = String::with_capacity(user_id.len());

    for ch in user_id.trim().chars() {
        match ch {
            '@' => out.push_str("_at_"),
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => out.push('_'),
            c if c.is_whitespace() => out.push('_'),
            c => out.push(c),
        }
    }

    if out.is_empty() {
        out.push_str("sin_usuario");
    }

    out
}
