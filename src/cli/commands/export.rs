use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core;
use crate::core::aggregator::build_report;
use crate::core::filter::{Selection, filter};
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::notice;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        file,
        format,
        out,
        user,
        week,
        force,
    } = cmd
    {
        let events = core::load_events(Path::new(file), cfg)?;
        let selection = Selection::from_args(user, week)?;
        let filtered = filter(&events, &selection);

        if filtered.is_empty() {
            notice("Sin filas para los filtros seleccionados; se exportan tablas vacías.");
        }

        let report = build_report(&filtered);
        ExportLogic::export(&report, format, out, *force)?;
    }
    Ok(())
}
