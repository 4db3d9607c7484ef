//! End-to-end run: load, analyze, then write every artifact.
//!
//! Loading and analysis finish before the first file is written, so an input
//! error never leaves partial outputs behind.
use crate::config::{OutputPaths, RunConfig};
use crate::diagnostics::{Artifact, ArtifactKind, RunSummary, TimingBreakdown};
use crate::error::MidlineError;
use crate::io::{load_grid_csv, render_midline_plot, save_plot, write_grid_csv, write_json_file};
use crate::midline::analyze;
use log::{debug, warn};
use std::path::Path;
use std::time::Instant;

pub fn run(config: &RunConfig) -> Result<RunSummary, MidlineError> {
    let mut timing = TimingBreakdown::default();
    let t = Instant::now();

    let grid = load_grid_csv(&config.input_path)?;
    let t = timing.record("load", t);

    let analysis = analyze(&grid, config.angles())?;
    if analysis.degenerate_segments > 0 {
        warn!(
            "{} segment(s) in {} have a zero fiber delta; their {:?} angles are {}",
            analysis.degenerate_segments,
            config.input_path.display(),
            config.angle_mode,
            config.angle_mode.degenerate_outcome()
        );
    }
    let plot = config
        .plot
        .enabled
        .then(|| render_midline_plot(&analysis.midpoints, &config.plot));
    let t = timing.record("analyze", t);

    let paths = OutputPaths::resolve(config);
    let mut artifacts = Vec::new();

    write_grid_csv(&paths.midpoint_csv, &analysis.midpoints)?;
    artifacts.push(written(ArtifactKind::MidpointCsv, &paths.midpoint_csv));

    if let Some(angles) = &analysis.angles {
        write_grid_csv(&paths.angle_csv, angles)?;
        artifacts.push(written(ArtifactKind::AngleCsv, &paths.angle_csv));
    }

    if let Some(img) = &plot {
        save_plot(&paths.plot, img)?;
        artifacts.push(written(ArtifactKind::Plot, &paths.plot));
    }
    timing.record("write", t);

    let mut summary = RunSummary {
        input: config.input_path.clone(),
        input_shape: grid.shape(),
        midpoint_shape: analysis.midpoints.shape(),
        angle_shape: analysis.angles.as_ref().map(|a| a.shape()),
        degenerate_segments: analysis.degenerate_segments,
        artifacts,
        timing,
    };

    if let Some(path) = &config.output.summary_json {
        summary.artifacts.push(Artifact {
            kind: ArtifactKind::Summary,
            path: path.clone(),
        });
        write_json_file(path, &summary)?;
        debug!("wrote {}", path.display());
    }

    Ok(summary)
}

fn written(kind: ArtifactKind, path: &Path) -> Artifact {
    debug!("wrote {}", path.display());
    Artifact {
        kind,
        path: path.to_path_buf(),
    }
}
