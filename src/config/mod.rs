//! Run configuration: JSON file, defaults, and derived output paths.
pub mod output;
pub mod run;

pub use output::OutputPaths;
pub use run::{load_config, OutputConfig, PlotConfig, RunConfig, DEFAULT_INPUT_PATH};
