use super::RunConfig;
use std::path::{Path, PathBuf};

/// Files a run writes, derived from the input file name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPaths {
    /// `<dir>/<stem><suffix>.csv`
    pub midpoint_csv: PathBuf,
    /// `<dir>/<angle_file_name>`
    pub angle_csv: PathBuf,
    /// `<dir>/<stem><suffix>.png`
    pub plot: PathBuf,
}

impl OutputPaths {
    pub fn resolve(config: &RunConfig) -> Self {
        let dir = config
            .output
            .dir
            .clone()
            .unwrap_or_default();
        let base = format!(
            "{}{}",
            input_stem(&config.input_path),
            config.output.midpoint_suffix
        );
        Self {
            midpoint_csv: dir.join(format!("{base}.csv")),
            angle_csv: dir.join(&config.output.angle_file_name),
            plot: dir.join(format!("{base}.png")),
        }
    }
}

/// File name of `path` without directory or last extension.
fn input_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
