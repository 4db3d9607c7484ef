use super::timing::TimingBreakdown;
use serde::Serialize;
use std::path::PathBuf;

/// What a file written by the runner contains.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ArtifactKind {
    MidpointCsv,
    AngleCsv,
    Plot,
    Summary,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
}

/// Report of a completed run, serialisable to JSON.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub input: PathBuf,
    pub input_shape: (usize, usize),
    pub midpoint_shape: (usize, usize),
    pub angle_shape: Option<(usize, usize)>,
    pub degenerate_segments: usize,
    pub artifacts: Vec<Artifact>,
    pub timing: TimingBreakdown,
}

impl RunSummary {
    pub fn artifact(&self, kind: ArtifactKind) -> Option<&PathBuf> {
        self.artifacts
            .iter()
            .find(|a| a.kind == kind)
            .map(|a| &a.path)
    }
}
