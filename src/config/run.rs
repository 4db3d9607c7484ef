use crate::error::MidlineError;
use crate::midline::AngleMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT_PATH: &str = "data/Ply_1_Left.csv";

/// Everything a run needs; passed explicitly to [`crate::pipeline::run`].
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Comma-separated coordinate grid without header.
    #[serde(rename = "input")]
    pub input_path: PathBuf,
    /// Also compute and write the angle grid.
    pub compute_angles: bool,
    pub angle_mode: AngleMode,
    pub output: OutputConfig,
    pub plot: PlotConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            compute_angles: false,
            angle_mode: AngleMode::default(),
            output: OutputConfig::default(),
            plot: PlotConfig::default(),
        }
    }
}

impl RunConfig {
    pub fn with_input(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            ..Self::default()
        }
    }

    /// Angle mode to use, or `None` when angles are disabled.
    pub fn angles(&self) -> Option<AngleMode> {
        self.compute_angles.then_some(self.angle_mode)
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving every output file. `None` writes next to the
    /// working directory.
    pub dir: Option<PathBuf>,
    /// Appended to the input file stem for the midpoint CSV and the plot.
    pub midpoint_suffix: String,
    /// Fixed file name of the angle CSV.
    pub angle_file_name: String,
    /// Optional JSON run summary.
    pub summary_json: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: None,
            midpoint_suffix: "_MidMtrx".to_string(),
            angle_file_name: "data_mid_angle.csv".to_string(),
            summary_json: None,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub enabled: bool,
    /// Canvas size in pixels.
    pub width: u32,
    pub height: u32,
    /// Visible X range (fiber-boundary coordinate).
    pub x_range: [f64; 2],
    /// Visible Y range (reference coordinate).
    pub y_range: [f64; 2],
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            width: 640,
            height: 480,
            x_range: [-10.0, 10.0],
            y_range: [-10.0, 10.0],
            title: "Sample path of matrix around fiber paths".to_string(),
            x_label: "X co-ordinate values".to_string(),
            y_label: "Y co-ordinate values".to_string(),
        }
    }
}

impl PlotConfig {
    /// Axis ranges must be finite with `min < max`.
    pub fn validate(&self) -> Result<(), String> {
        for (name, [lo, hi]) in [("x_range", self.x_range), ("y_range", self.y_range)] {
            if !(lo.is_finite() && hi.is_finite()) {
                return Err(format!("plot.{name} bounds must be finite, got [{lo}, {hi}]"));
            }
            if lo >= hi {
                return Err(format!("plot.{name} must satisfy min < max, got [{lo}, {hi}]"));
            }
        }
        Ok(())
    }
}

pub fn load_config(path: &Path) -> Result<RunConfig, MidlineError> {
    let data = fs::read_to_string(path).map_err(|source| MidlineError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: RunConfig = serde_json::from_str(&data).map_err(|e| MidlineError::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    config.plot.validate().map_err(|reason| MidlineError::Config {
        path: path.to_path_buf(),
        reason,
    })?;
    Ok(config)
}
