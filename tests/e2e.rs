mod common;

use approx::assert_relative_eq;
use common::synthetic_paths::{curved_boundaries, tilted_boundaries, to_csv, write_input};
use fiber_midline::diagnostics::ArtifactKind;
use fiber_midline::io::load_grid_csv;
use fiber_midline::{compute_midpoints, run, ErrorKind, Grid, RunConfig};
use std::path::Path;

fn config_for(input: &Path, out_dir: &Path, angles: bool) -> RunConfig {
    let mut cfg = RunConfig::with_input(input);
    cfg.compute_angles = angles;
    cfg.output.dir = Some(out_dir.to_path_buf());
    cfg
}

#[test]
fn tilted_run_writes_every_artifact() {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempfile::tempdir().unwrap();
    let rows = tilted_boundaries(11, 3, 0.5, 2.0);
    let input = write_input(dir.path(), "Ply_1_Left.csv", &to_csv(&rows));
    let out = dir.path().join("out");

    let summary = run(&config_for(&input, &out, true)).expect("run succeeds");

    assert_eq!(summary.input_shape, (11, 4));
    assert_eq!(summary.midpoint_shape, (10, 4));
    assert_eq!(summary.angle_shape, Some((10, 3)));
    assert_eq!(summary.degenerate_segments, 0);

    let mid_path = summary.artifact(ArtifactKind::MidpointCsv).unwrap();
    assert_eq!(mid_path, &out.join("Ply_1_Left_MidMtrx.csv"));
    let plot_path = summary.artifact(ArtifactKind::Plot).unwrap();
    assert_eq!(plot_path, &out.join("Ply_1_Left_MidMtrx.png"));
    assert!(plot_path.is_file());

    let expected = compute_midpoints(&Grid::from_rows(&rows).unwrap()).unwrap();
    let written = load_grid_csv(mid_path).unwrap();
    assert_eq!(written, expected);

    let angles = load_grid_csv(summary.artifact(ArtifactKind::AngleCsv).unwrap()).unwrap();
    assert_eq!(angles.shape(), (10, 3));
    for v in angles.as_matrix().iter() {
        assert_relative_eq!(*v, 2.0f64.atan(), epsilon = 1e-12);
    }
}

#[test]
fn angles_are_opt_in() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(
        dir.path(),
        "curve.csv",
        &to_csv(&curved_boundaries(40, 4, 2.5)),
    );
    let out = dir.path().join("out");

    let summary = run(&config_for(&input, &out, false)).unwrap();

    assert_eq!(summary.angle_shape, None);
    assert!(summary.artifact(ArtifactKind::AngleCsv).is_none());
    assert!(!out.join("data_mid_angle.csv").exists());
    assert!(out.join("curve_MidMtrx.csv").is_file());
}

#[test]
fn vertical_segment_is_propagated_and_counted() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "vertical.csv", "0,5\n1,5\n");
    let out = dir.path().join("out");

    let summary = run(&config_for(&input, &out, true)).unwrap();
    assert_eq!(summary.degenerate_segments, 1);

    let angles = load_grid_csv(&out.join("data_mid_angle.csv")).unwrap();
    assert_eq!(angles.shape(), (1, 1));
    assert_eq!(angles[(0, 0)], std::f64::consts::FRAC_PI_2);
}

#[test]
fn missing_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");

    let err = run(&config_for(&dir.path().join("nope.csv"), &out, true)).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(!out.exists());
}

#[test]
fn ragged_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "ragged.csv", "0,1,2\n1,2\n2,3,4\n");
    let out = dir.path().join("out");

    let err = run(&config_for(&input, &out, false)).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidData);
    assert!(!out.exists());
}

#[test]
fn single_row_is_invalid_data() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "one.csv", "0,1,2\n");
    let out = dir.path().join("out");

    let err = run(&config_for(&input, &out, false)).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidData);
    assert!(!out.exists());
}

#[test]
fn angles_without_fiber_column_write_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "ref_only.csv", "0\n1\n2\n");
    let out = dir.path().join("out");

    let err = run(&config_for(&input, &out, true)).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidData);
    assert!(!out.exists());
}

#[test]
fn summary_json_and_no_plot() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(
        dir.path(),
        "ply.csv",
        &to_csv(&tilted_boundaries(5, 2, -1.0, 3.0)),
    );
    let out = dir.path().join("out");
    let mut cfg = config_for(&input, &out, true);
    cfg.plot.enabled = false;
    cfg.output.summary_json = Some(out.join("summary.json"));

    let summary = run(&cfg).unwrap();

    assert!(summary.artifact(ArtifactKind::Plot).is_none());
    assert!(!out.join("ply_MidMtrx.png").exists());

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(out.join("summary.json")).unwrap())
            .unwrap();
    assert_eq!(json["midpointShape"], serde_json::json!([4, 3]));
    assert_eq!(json["angleShape"], serde_json::json!([4, 2]));
    assert_eq!(json["degenerateSegments"], 0);
    assert!(json["timing"]["steps"].as_array().unwrap().len() >= 3);
}
