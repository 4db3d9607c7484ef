//! Rectangular coordinate grids.
//!
//! Row index = sample point along a fiber-placement run. Column 0 is the shared
//! reference axis (Y); columns `1..` are the X coordinates of each fiber
//! boundary at that row.
use nalgebra::DMatrix;
use std::ops::Index;
use thiserror::Error;

/// Shape violations detected while building or consuming a [`Grid`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid has no values")]
    Empty,
    #[error("row {row} has {found} values, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("grid has {rows} row(s), at least 2 are required")]
    TooFewRows { rows: usize },
    #[error("grid has {cols} column(s), at least {required} are required")]
    TooFewColumns { cols: usize, required: usize },
}

/// Owned `f64` matrix whose rows all have the same width.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    data: DMatrix<f64>,
}

/// Averaged coordinates between consecutive rows of a [`Grid`].
pub type MidpointGrid = Grid;
/// Per-segment tangent angles in radians.
pub type AngleGrid = Grid;

impl Grid {
    /// Build a grid from row vectors, rejecting empty or ragged input.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, GridError> {
        let nrows = rows.len();
        let ncols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if nrows == 0 || ncols == 0 {
            return Err(GridError::Empty);
        }
        let mut flat = Vec::with_capacity(nrows * ncols);
        for (idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != ncols {
                return Err(GridError::Ragged {
                    row: idx,
                    expected: ncols,
                    found: row.len(),
                });
            }
            flat.extend_from_slice(row);
        }
        Ok(Self {
            data: DMatrix::from_row_slice(nrows, ncols, &flat),
        })
    }

    /// Wrap an existing matrix. Zero-sized matrices are rejected.
    pub fn from_matrix(data: DMatrix<f64>) -> Result<Self, GridError> {
        if data.nrows() == 0 || data.ncols() == 0 {
            return Err(GridError::Empty);
        }
        Ok(Self { data })
    }

    /// Build an `nrows × ncols` grid from a generator closure `f(row, col)`.
    pub(crate) fn from_fn<F>(nrows: usize, ncols: usize, f: F) -> Self
    where
        F: FnMut(usize, usize) -> f64,
    {
        Self {
            data: DMatrix::from_fn(nrows, ncols, f),
        }
    }

    #[inline]
    pub fn nrows(&self) -> usize {
        self.data.nrows()
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.data.ncols()
    }

    /// `(rows, columns)`
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    /// Copy of row `r`.
    pub fn row(&self, r: usize) -> Vec<f64> {
        (0..self.ncols()).map(|c| self.data[(r, c)]).collect()
    }

    /// Copy of column `c`.
    pub fn column(&self, c: usize) -> Vec<f64> {
        self.data.column(c).iter().copied().collect()
    }

    /// Iterate rows in order.
    pub fn rows(&self) -> impl Iterator<Item = Vec<f64>> + '_ {
        (0..self.nrows()).map(move |r| self.row(r))
    }

    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.data
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = f64;

    #[inline]
    fn index(&self, (r, c): (usize, usize)) -> &f64 {
        &self.data[(r, c)]
    }
}
