#![doc = include_str!("../README.md")]

pub mod angle;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod io;
pub mod midline;
pub mod pipeline;
pub mod types;

// --- High-level re-exports -------------------------------------------------

pub use crate::config::{RunConfig, DEFAULT_INPUT_PATH};
pub use crate::diagnostics::RunSummary;
pub use crate::error::{ErrorKind, ExitStatus, MidlineError};
pub use crate::midline::{analyze, compute_angles, compute_midpoints, AngleMode, MidlineAnalysis};
pub use crate::pipeline::run;
pub use crate::types::{AngleGrid, Grid, GridError, MidpointGrid};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use fiber_midline::prelude::*;
///
/// let grid = Grid::from_rows(&[[0.0, 1.0], [1.0, 1.0], [2.0, 1.0]]).unwrap();
/// let mid = compute_midpoints(&grid).unwrap();
/// assert_eq!(mid.row(0), vec![0.5, 1.0]);
/// ```
pub mod prelude {
    pub use crate::midline::{analyze, compute_angles, compute_midpoints, AngleMode};
    pub use crate::types::{Grid, GridError};
}
