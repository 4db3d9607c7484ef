use std::fs;
use std::path::{Path, PathBuf};

/// Grid of `fibers` straight boundaries tilted by `slope` (dx per unit y),
/// spaced `pitch` apart, sampled at `points` rows from y = -`half_len`.
pub fn tilted_boundaries(points: usize, fibers: usize, slope: f64, pitch: f64) -> Vec<Vec<f64>> {
    assert!(points >= 2, "need at least two sample points");
    let half_len = 5.0;
    let dy = 2.0 * half_len / (points - 1) as f64;
    (0..points)
        .map(|j| {
            let y = -half_len + j as f64 * dy;
            let mut row = Vec::with_capacity(fibers + 1);
            row.push(y);
            for f in 0..fibers {
                row.push(f as f64 * pitch + slope * y);
            }
            row
        })
        .collect()
}

/// Boundaries following a shallow sine, as a curved placement run.
pub fn curved_boundaries(points: usize, fibers: usize, pitch: f64) -> Vec<Vec<f64>> {
    (0..points)
        .map(|j| {
            let y = -8.0 + 16.0 * j as f64 / (points - 1) as f64;
            let mut row = vec![y];
            row.extend((0..fibers).map(|f| -4.0 + f as f64 * pitch + (0.4 * y).sin()));
            row
        })
        .collect()
}

pub fn to_csv(rows: &[Vec<f64>]) -> String {
    rows.iter()
        .map(|r| {
            r.iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn write_input(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write input csv");
    path
}
