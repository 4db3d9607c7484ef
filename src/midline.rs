//! Midpoint and tangent-angle computation over a coordinate grid.
//!
//! Both passes read the input grid only; the angle pass does not consume the
//! midpoint grid.
//!
//! - [`compute_midpoints`] averages consecutive rows, `(N, M) -> (N-1, M)`.
//! - [`compute_angles`] takes the tangent of each fiber-boundary segment
//!   against the reference column, `(N, M) -> (N-1, M-1)`.
//! - [`analyze`] runs both and tallies degenerate segments.
use crate::angle::{is_degenerate, tangent_angle, tangent_angle_quadrant};
use crate::types::{AngleGrid, Grid, GridError, MidpointGrid};
use log::debug;
use serde::{Deserialize, Serialize};

/// Arctangent flavour used for the angle pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleMode {
    /// `atan(d_ref / d_fiber)`, range [-π/2, π/2].
    #[default]
    Atan,
    /// `atan2(d_ref, d_fiber)`, range (-π, π].
    Atan2,
}

impl AngleMode {
    #[inline]
    fn eval(self, d_ref: f64, d_fiber: f64) -> f64 {
        match self {
            AngleMode::Atan => tangent_angle(d_ref, d_fiber),
            AngleMode::Atan2 => tangent_angle_quadrant(d_ref, d_fiber),
        }
    }

    /// What a segment with a zero fiber delta evaluates to in this mode.
    pub fn degenerate_outcome(self) -> &'static str {
        match self {
            AngleMode::Atan => "±π/2, or NaN where the point repeats",
            AngleMode::Atan2 => "±π/2 along the reference axis, or 0/π where the point repeats",
        }
    }
}

/// Result of [`analyze`].
#[derive(Clone, Debug)]
pub struct MidlineAnalysis {
    pub midpoints: MidpointGrid,
    pub angles: Option<AngleGrid>,
    /// Segments whose fiber-column delta was zero or non-finite.
    pub degenerate_segments: usize,
}

/// Row-wise average of consecutive rows, every column including column 0.
pub fn compute_midpoints(grid: &Grid) -> Result<MidpointGrid, GridError> {
    let (n, m) = grid.shape();
    if n < 2 {
        return Err(GridError::TooFewRows { rows: n });
    }
    Ok(Grid::from_fn(n - 1, m, |j, c| {
        (grid[(j + 1, c)] + grid[(j, c)]) / 2.0
    }))
}

/// Tangent angle of every fiber-boundary segment relative to column 0.
///
/// Entry `(j, i)` is the angle of column `i + 1` between rows `j` and `j + 1`.
/// A zero fiber delta is not an error: the IEEE-754 result is kept as-is.
pub fn compute_angles(grid: &Grid, mode: AngleMode) -> Result<AngleGrid, GridError> {
    let (n, m) = grid.shape();
    if n < 2 {
        return Err(GridError::TooFewRows { rows: n });
    }
    if m < 2 {
        return Err(GridError::TooFewColumns {
            cols: m,
            required: 2,
        });
    }
    Ok(Grid::from_fn(n - 1, m - 1, |j, i| {
        let d_ref = grid[(j + 1, 0)] - grid[(j, 0)];
        let d_fiber = grid[(j + 1, i + 1)] - grid[(j, i + 1)];
        mode.eval(d_ref, d_fiber)
    }))
}

/// Number of fiber-boundary segments with a zero or non-finite column delta.
pub fn count_degenerate_segments(grid: &Grid) -> usize {
    let (n, m) = grid.shape();
    let mut count = 0;
    for i in 1..m {
        for j in 1..n {
            if is_degenerate(grid[(j, i)] - grid[(j - 1, i)]) {
                count += 1;
            }
        }
    }
    count
}

/// Midpoints, plus angles when `angles` is `Some`.
///
/// Everything is computed before returning, so a shape error leaves the
/// caller with nothing to write.
pub fn analyze(grid: &Grid, angles: Option<AngleMode>) -> Result<MidlineAnalysis, GridError> {
    let midpoints = compute_midpoints(grid)?;
    let (angles, degenerate_segments) = match angles {
        Some(mode) => {
            let out = compute_angles(grid, mode)?;
            (Some(out), count_degenerate_segments(grid))
        }
        None => (None, 0),
    };
    debug!(
        "analyze: input={:?} midpoints={:?} angles={:?} degenerate={}",
        grid.shape(),
        midpoints.shape(),
        angles.as_ref().map(Grid::shape),
        degenerate_segments
    );
    Ok(MidlineAnalysis {
        midpoints,
        angles,
        degenerate_segments,
    })
}
