#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn cth() -> Command {
    cargo_bin_cmd!("controlhoras")
}

/// Unique temp file path; any stale file from a previous run is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_controlhoras.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Path to a config file that does not exist, so the defaults apply and
/// nothing from the developer's home directory leaks into a test.
pub fn no_config(name: &str) -> String {
    temp_path(&format!("{}_cfg", name), "conf")
}

/// Small dataset covering the interesting cases:
/// - u1 has two closed events in 2024-W03 (08:00:00 + 07:45:00)
/// - u1 has one never-closed event in 2024-W04 (sentinel year 1)
/// - u2 has a zero-duration event in January and a closed one in February
pub const SAMPLE_CSV: &str = "\
Usuario,Nombre,Apellidos,Inicio,Fin
u1@acme.com,Ana,García López,2024-01-15 08:00:00,2024-01-15 16:00:00
u1@acme.com,Ana,García López,2024-01-16 08:00:00,2024-01-16 15:45:00
u1@acme.com,Ana,García López,2024-01-22 09:00:00,0001-01-01 00:00:00
u2@acme.com,Benito,Pérez Ruiz,2024-01-15 10:00:00,2024-01-15 10:00:00
u2@acme.com,Benito,Pérez Ruiz,2024-02-01 08:00:00,2024-02-01 16:00:00
";

/// Same dataset plus coordinate columns. Row 1 has a real fix on both
/// endpoints, row 4 carries the (0,0) "no GPS" sentinel.
pub const SAMPLE_GEO_CSV: &str = "\
Usuario,Nombre,Apellidos,Inicio,Fin,Lat inicio,Lon inicio,Lat fin,Lon fin
u1@acme.com,Ana,García López,2024-01-15 08:00:00,2024-01-15 16:00:00,40.4168,-3.7038,40.4178,-3.7038
u1@acme.com,Ana,García López,2024-01-16 08:00:00,2024-01-16 15:45:00,,,,
u1@acme.com,Ana,García López,2024-01-22 09:00:00,0001-01-01 00:00:00,40.4168,-3.7038,40.4178,-3.7038
u2@acme.com,Benito,Pérez Ruiz,2024-01-15 10:00:00,2024-01-15 10:00:00,0,0,0,0
u2@acme.com,Benito,Pérez Ruiz,2024-02-01 08:00:00,2024-02-01 16:00:00,,,,
";

pub fn write_sample_csv(name: &str) -> String {
    let path = temp_path(name, "csv");
    fs::write(&path, SAMPLE_CSV).expect("write sample csv");
    path
}

pub fn write_geo_csv(name: &str) -> String {
    let path = temp_path(name, "csv");
    fs::write(&path, SAMPLE_GEO_CSV).expect("write geo csv");
    path
}
