mod common;
use common::{cth, no_config, temp_path, write_geo_csv, write_sample_csv};
use predicates::prelude::*;
use std::fs;
use std::io::Read;

#[test]
fn test_export_csv_summary() {
    let input = write_sample_csv("export_csv");
    let cfg = no_config("export_csv");
    let out = temp_path("export_csv_out", "csv");

    cth()
        .args([
            "--config", &cfg, "export", &input, "--format", "csv", "--out", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("Semana,Año,Mes,Fecha,Usuario"));
    assert!(content.contains("Subtotal u1@acme.com"));
    assert!(content.contains("15:45:00"));
    assert!(content.contains("Sin registro"));
}

#[test]
fn test_export_csv_with_geo_columns() {
    let input = write_geo_csv("export_csv_geo");
    let cfg = no_config("export_csv_geo");
    let out = temp_path("export_csv_geo_out", "csv");

    cth()
        .args([
            "--config", &cfg, "export", &input, "--format", "csv", "--out", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("Mapa inicio"));
    assert!(content.contains("Distancia (m)"));
    // CSV encodes a map link as its raw URL
    assert!(content.contains("https://www.google.com/maps?q=40.4168,-3.7038"));
}

#[test]
fn test_export_json_carries_all_three_tables() {
    let input = write_sample_csv("export_json");
    let cfg = no_config("export_json");
    let out = temp_path("export_json_out", "json");

    cth()
        .args([
            "--config", &cfg, "export", &input, "--format", "json", "--out", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let v: serde_json::Value = serde_json::from_str(&content).expect("valid json");

    // 5 data rows + 4 (user, week) subtotal rows
    assert_eq!(v["resumen"].as_array().expect("resumen").len(), 9);

    // open-only groups have no weekly row: u1 W03, u2 W03, u2 W05
    let weekly = v["totales_semana"].as_array().expect("totales_semana");
    assert_eq!(weekly.len(), 3);
    assert_eq!(weekly[0]["Usuario"], "u1@acme.com");
    assert_eq!(weekly[0]["Total horas semana"], "15:45:00");

    let monthly = v["totales_mes"].as_array().expect("totales_mes");
    assert_eq!(monthly.len(), 3);
}

#[test]
fn test_export_xlsx_writes_a_workbook() {
    let input = write_sample_csv("export_xlsx");
    let cfg = no_config("export_xlsx");
    let out = temp_path("export_xlsx_out", "xlsx");

    cth()
        .args([
            "--config", &cfg, "export", &input, "--format", "xlsx", "--out", &out, "--force",
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read xlsx");
    // xlsx is a zip container
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_export_xlsx_survives_empty_filtered_dataset() {
    let input = write_sample_csv("export_xlsx_empty");
    let cfg = no_config("export_xlsx_empty");
    let out = temp_path("export_xlsx_empty_out", "xlsx");

    cth()
        .args([
            "--config", &cfg, "export", &input, "--format", "xlsx", "--out", &out, "--force",
            "--user", "Nadie Conocido",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sin filas"));

    let bytes = fs::read(&out).expect("read xlsx");
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_export_refuses_existing_file_without_force() {
    let input = write_sample_csv("export_noforce");
    let cfg = no_config("export_noforce");
    let out = temp_path("export_noforce_out", "csv");
    fs::write(&out, "previous content").expect("pre-create out file");

    cth()
        .args(["--config", &cfg, "export", &input, "--format", "csv", "--out", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cancelled"));

    // untouched
    let content = fs::read_to_string(&out).expect("read out file");
    assert_eq!(content, "previous content");
}

#[test]
fn test_export_requires_absolute_path() {
    let input = write_sample_csv("export_relative");
    let cfg = no_config("export_relative");

    cth()
        .args([
            "--config", &cfg, "export", &input, "--format", "csv", "--out", "relative.csv",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be absolute"));
}

#[test]
fn test_bundle_one_workbook_per_worker() {
    let input = write_sample_csv("bundle");
    let cfg = no_config("bundle");
    let out = temp_path("bundle_out", "zip");

    cth()
        .args(["--config", &cfg, "bundle", &input, "--out", &out, "--force"])
        .assert()
        .success();

    let file = fs::File::open(&out).expect("open zip");
    let mut archive = zip::ZipArchive::new(file).expect("read zip");

    let mut names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).expect("entry").name().to_string())
        .collect();
    names.sort();
    assert_eq!(names, vec!["u1_at_acme.com.xlsx", "u2_at_acme.com.xlsx"]);

    // each entry is itself a workbook (zip container)
    let mut entry = archive.by_name("u1_at_acme.com.xlsx").expect("u1 entry");
    let mut head = [0u8; 2];
    entry.read_exact(&mut head).expect("read entry head");
    assert_eq!(&head, b"PK");
}

#[test]
fn test_bundle_respects_filters() {
    let input = write_sample_csv("bundle_filtered");
    let cfg = no_config("bundle_filtered");
    let out = temp_path("bundle_filtered_out", "zip");

    cth()
        .args([
            "--config", &cfg, "bundle", &input, "--out", &out, "--user", "Ana García López",
            "--force",
        ])
        .assert()
        .success();

    let file = fs::File::open(&out).expect("open zip");
    let archive = zip::ZipArchive::new(file).expect("read zip");
    assert_eq!(archive.len(), 1);
}
