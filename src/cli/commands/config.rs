use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let yaml = serde_yaml::to_string(cfg).map_err(|_| AppError::ConfigLoad)?;
            info(format!("Configuration file: {}", Config::config_file().display()));
            println!("{yaml}");
        }

        if *check {
            let mut ok = true;

            if cfg.header_row == 0 {
                warning("header_row must be >= 1 (rows are 1-based)");
                ok = false;
            }
            if cfg.delimiter.is_empty() {
                warning("delimiter is empty; ',' will be used");
            }
            if !cfg.map_base_url.starts_with("https://") {
                warning("map_base_url is not https; map links may be rejected");
            }

            if ok {
                success("Configuration OK.");
            } else {
                return Err(AppError::Config("invalid configuration".to_string()));
            }
        }
    }
    Ok(())
}
