//! Run reports produced by the pipeline runner.
//!
//! `RunSummary` records the shapes that flowed through the midline computer,
//! the files that were written and how long each step took.

pub mod summary;
pub mod timing;

pub use summary::{Artifact, ArtifactKind, RunSummary};
pub use timing::{StepTiming, TimingBreakdown};
