pub mod aggregator;
pub mod filter;
pub mod geo;
pub mod normalizer;

use crate::config::Config;
use crate::errors::AppResult;
use crate::ingest;
use crate::models::event::NormalizedEvent;
use std::path::Path;

/// Read + resolve + normalize in one go. Every command starts here.
pub fn load_events(path: &Path, cfg: &Config) -> AppResult<Vec<NormalizedEvent>> {
    let (header, rows) = ingest::read_raw(path, cfg)?;
    let columns = ingest::ColumnMap::resolve(&header)?;
    Ok(normalizer::normalize(&columns, &rows, cfg))
}
