//! Integration tests for the trimap binary.

use std::path::PathBuf;
use std::process::{Command, Output};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("trimap_cli_{}_{name}", std::process::id()))
}

fn trimap(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_trimap"))
        .args(args)
        .output()
        .unwrap()
}

const VALID_JOB: &str = r#"
output = "out.svg"

[grid]
path = "grid.json"

[field]
path = "t2m.json"
vmin = 0.0
vmax = 10.0
"#;

// ─── Validate Command Tests ───────────────────────────────────

#[test]
fn validate_accepts_good_job() {
    let path = temp_path("good.toml");
    std::fs::write(&path, VALID_JOB).unwrap();
    let out = trimap(&["validate", path.to_str().unwrap()]);
    assert!(out.status.success());
    std::fs::remove_file(&path).ok();
}

#[test]
fn validate_fails_on_inverted_range() {
    let path = temp_path("inverted.toml");
    std::fs::write(&path, VALID_JOB.replace("vmin = 0.0", "vmin = 50.0")).unwrap();
    let out = trimap(&["validate", path.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("vmin"));
    std::fs::remove_file(&path).ok();
}

#[test]
fn validate_fails_on_ragged_grid() {
    let path = temp_path("ragged.json");
    let grid = r#"{ "name": "bad",
        "cell_longitude_vertices": [[0.0, 0.1, 0.2], [0.0, 0.1]],
        "cell_latitude_vertices": [[0.0, 0.1, 0.2], [0.0, 0.1, 0.2]] }"#;
    std::fs::write(&path, grid).unwrap();
    let out = trimap(&["validate", path.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    std::fs::remove_file(&path).ok();
}

#[test]
fn validate_fails_on_unknown_extension() {
    let out = trimap(&["validate", "grid.nc"]);
    assert_eq!(out.status.code(), Some(1));
}

// ─── Demo Command Tests ───────────────────────────────────────

#[test]
fn demo_output_validates() {
    let grid = temp_path("demo_grid.json");
    let field = temp_path("demo_field.json");
    let out = trimap(&[
        "demo",
        "--subdivisions",
        "2",
        "--out",
        grid.to_str().unwrap(),
        "--field-out",
        field.to_str().unwrap(),
    ]);
    assert!(out.status.success());
    assert!(trimap(&["validate", grid.to_str().unwrap()]).status.success());
    std::fs::remove_file(&grid).ok();
    std::fs::remove_file(&field).ok();
}

#[test]
fn demo_rejects_zero_subdivisions() {
    let grid = temp_path("zero_grid.json");
    let out = trimap(&["demo", "--subdivisions", "0", "--out", grid.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    assert!(!grid.exists());
}
