use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 1-based row carrying the column names; everything above is
    /// preamble (the original terminal workbook uses row 7).
    #[serde(default = "default_header_row")]
    pub header_row: usize,

    /// Field delimiter of the export (first byte is used).
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// End timestamps in this calendar year mean "shift never closed".
    #[serde(default = "default_sentinel_year")]
    pub sentinel_year: i32,

    /// Base URL the map links are built on.
    #[serde(default = "default_map_base_url")]
    pub map_base_url: String,
}

fn default_header_row() -> usize {
    1
}
fn default_delimiter() -> String {
    ",".to_string()
}
fn default_sentinel_year() -> i32 {
    1
}
fn default_map_base_url() -> String {
    "https://www.google.com/maps?q=".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            header_row: default_header_row(),
            delimiter: default_delimiter(),
            sentinel_year: default_sentinel_year(),
            map_base_url: default_map_base_url(),
        }
    }
}

impl Config {
    /// Standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        match dirs::home_dir() {
            Some(home) => home.join(".controlhoras"),
            None => PathBuf::from(".controlhoras"),
        }
    }

    /// Full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("controlhoras.conf")
    }

    /// Load configuration from the default location, or defaults if absent
    pub fn load() -> Self {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from an explicit path (tests use this via
    /// the global --config flag), falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
                Err(_) => Config::default(),
            }
        } else {
            Config::default()
        }
    }

    /// Create the config directory and write the default config file.
    pub fn init_all() -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let path = Self::config_file();
        let yaml = serde_yaml::to_string(&Config::default()).map_err(|_| AppError::ConfigSave)?;

        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;

        Ok(path)
    }

    /// First byte of the configured delimiter, comma when misconfigured.
    pub fn delimiter_byte(&self) -> u8 {
        self.delimiter.bytes().next().unwrap_or(b',')
    }
}
