mod common;

use common::synthetic_paths::{tilted_boundaries, to_csv, write_input};
use std::process::Command;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_fiber-midline"))
}

#[test]
fn success_prints_written_files() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(
        dir.path(),
        "Ply_1_Left.csv",
        &to_csv(&tilted_boundaries(6, 2, 0.25, 1.0)),
    );

    let output = bin()
        .current_dir(dir.path())
        .arg("-c")
        .arg(&input)
        .arg("-a")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Wrote file: Ply_1_Left_MidMtrx.csv"), "{stdout}");
    assert!(stdout.contains("Wrote file: data_mid_angle.csv"), "{stdout}");
    assert!(stdout.contains("Wrote file: Ply_1_Left_MidMtrx.png"), "{stdout}");
    assert!(dir.path().join("Ply_1_Left_MidMtrx.csv").is_file());
    assert!(dir.path().join("data_mid_angle.csv").is_file());
}

#[test]
fn missing_file_exits_with_io_code() {
    let dir = tempfile::tempdir().unwrap();

    let output = bin()
        .current_dir(dir.path())
        .args(["-c", "missing.csv"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("WARNING: Problems reading file"), "{stderr}");
    assert!(!dir.path().join("missing_MidMtrx.csv").exists());
}

#[test]
fn bad_number_exits_with_invalid_data_code() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "bad.csv", "0,1\n1,x\n");

    let output = bin()
        .current_dir(dir.path())
        .arg("-c")
        .arg(&input)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(!dir.path().join("bad_MidMtrx.csv").exists());
}

#[test]
fn config_file_is_overridden_by_flags() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "ply.csv", "0,0\n1,1\n2,2\n");
    let config = write_input(
        dir.path(),
        "run.json",
        r#"{ "input": "does-not-exist.csv", "plot": { "enabled": false } }"#,
    );

    let output = bin()
        .current_dir(dir.path())
        .arg("--config")
        .arg(&config)
        .arg("-c")
        .arg(&input)
        .args(["-o", "out"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(dir.path().join("out/ply_MidMtrx.csv").is_file());
    assert!(!dir.path().join("out/ply_MidMtrx.png").exists());
}

#[test]
fn underscore_flag_spelling_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "legacy.csv", "0,0\n1,1\n");

    let output = bin()
        .current_dir(dir.path())
        .arg("--csv_data_file")
        .arg(&input)
        .arg("--no-plot")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(dir.path().join("legacy_MidMtrx.csv").is_file());
}

#[test]
fn atan2_mode_from_command_line() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "back.csv", "0,0\n-1,-1\n");

    let output = bin()
        .current_dir(dir.path())
        .arg("-c")
        .arg(&input)
        .args(["-a", "--angle-mode", "atan2", "--no-plot"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let angles = fiber_midline::io::load_grid_csv(&dir.path().join("data_mid_angle.csv")).unwrap();
    let expected = -3.0 * std::f64::consts::FRAC_PI_4;
    assert!((angles[(0, 0)] - expected).abs() < 1e-12, "got {}", angles[(0, 0)]);
}
