use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core;
use crate::core::filter::{Selection, filter};
use crate::errors::AppResult;
use crate::export::ExportLogic;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Bundle {
        file,
        out,
        user,
        week,
        force,
    } = cmd
    {
        let events = core::load_events(Path::new(file), cfg)?;
        let selection = Selection::from_args(user, week)?;
        let filtered = filter(&events, &selection);

        ExportLogic::bundle(&filtered, out, *force)?;
    }
    Ok(())
}
