use clap::{CommandFactory, Parser, ValueEnum};
use fiber_midline::config::load_config;
use fiber_midline::{run, AngleMode, ExitStatus, MidlineError, RunConfig};
use std::path::PathBuf;

/// Reads a csv (no header) of y,x coordinates and averages consecutive rows
/// to get the middle matrix region. Every row must have the same number of
/// values.
#[derive(Parser, Debug)]
#[command(name = "fiber-midline", version, about)]
struct Args {
    /// Location (directory and file name) of the csv file with data to analyze.
    /// Defaults to data/Ply_1_Left.csv.
    #[arg(short = 'c', long = "csv-data-file", alias = "csv_data_file")]
    csv_data_file: Option<PathBuf>,

    /// Calculate the fiber angle at the midpoints of each fiber path boundary.
    #[arg(short = 'a', long = "angle", default_value_t = false)]
    angle: bool,

    /// Arctangent form used for angles.
    #[arg(long, value_enum)]
    angle_mode: Option<AngleArg>,

    /// Directory for every output file (default: current directory).
    #[arg(short = 'o', long)]
    output_dir: Option<PathBuf>,

    /// JSON run configuration; command-line flags take precedence.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip the PNG plot.
    #[arg(long, default_value_t = false)]
    no_plot: bool,

    /// Write a JSON run summary to this path.
    #[arg(long)]
    summary_json: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AngleArg {
    /// Single-argument arctangent, range [-π/2, π/2].
    Atan,
    /// Quadrant-aware arctangent, range (-π, π].
    Atan2,
}

impl From<AngleArg> for AngleMode {
    fn from(arg: AngleArg) -> Self {
        match arg {
            AngleArg::Atan => AngleMode::Atan,
            AngleArg::Atan2 => AngleMode::Atan2,
        }
    }
}

impl Args {
    fn into_config(self) -> Result<RunConfig, MidlineError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => RunConfig::default(),
        };
        if let Some(path) = self.csv_data_file {
            config.input_path = path;
        }
        if self.angle {
            config.compute_angles = true;
        }
        if let Some(mode) = self.angle_mode {
            config.angle_mode = mode.into();
        }
        if let Some(dir) = self.output_dir {
            config.output.dir = Some(dir);
        }
        if self.no_plot {
            config.plot.enabled = false;
        }
        if let Some(path) = self.summary_json {
            config.output.summary_json = Some(path);
        }
        Ok(config)
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let status = match real_main() {
        Ok(()) => ExitStatus::Success,
        Err(err) => {
            eprintln!("WARNING: {err}");
            let _ = Args::command().print_help();
            ExitStatus::from(&err)
        }
    };
    std::process::exit(status.code());
}

fn real_main() -> Result<(), MidlineError> {
    let config = Args::parse().into_config()?;
    let summary = run(&config)?;
    for artifact in &summary.artifacts {
        println!("Wrote file: {}", artifact.path.display());
    }
    Ok(())
}
