//! Comma-separated grid files without a header row.
//!
//! Reading trims whitespace around cells and skips blank lines and `#`
//! comments. Writing emits one line per row in `%.18e` notation with a signed
//! two-digit exponent; non-finite values are written as `inf`, `-inf`, `nan`.
use super::ensure_parent_dir;
use crate::error::MidlineError;
use crate::types::Grid;
use log::debug;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const DELIMITER: char = ',';

/// Read and parse a coordinate grid from `path`.
pub fn load_grid_csv(path: &Path) -> Result<Grid, MidlineError> {
    let text = fs::read_to_string(path).map_err(|source| MidlineError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let grid = parse_grid_csv(&text)?;
    debug!("loaded {} with shape {:?}", path.display(), grid.shape());
    Ok(grid)
}

/// Parse CSV text into a rectangular grid.
pub fn parse_grid_csv(text: &str) -> Result<Grid, MidlineError> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let row = line
            .split(DELIMITER)
            .map(|cell| parse_cell(cell, idx + 1))
            .collect::<Result<Vec<f64>, _>>()?;
        rows.push(row);
    }
    Ok(Grid::from_rows(&rows)?)
}

fn parse_cell(cell: &str, line: usize) -> Result<f64, MidlineError> {
    let cell = cell.trim();
    cell.parse::<f64>().map_err(|_| MidlineError::InvalidData {
        line,
        reason: format!("could not convert {cell:?} to a number"),
    })
}

/// Render a grid as CSV text.
pub fn format_grid_csv(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.nrows() * grid.ncols() * 26);
    for row in grid.rows() {
        for (c, v) in row.iter().enumerate() {
            if c > 0 {
                out.push(DELIMITER);
            }
            push_value(&mut out, *v);
        }
        out.push('\n');
    }
    out
}

/// Write a grid to `path`, creating parent directories.
pub fn write_grid_csv(path: &Path, grid: &Grid) -> Result<(), MidlineError> {
    ensure_parent_dir(path)?;
    fs::write(path, format_grid_csv(grid)).map_err(|e| MidlineError::Write {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn push_value(out: &mut String, v: f64) {
    if v.is_nan() {
        out.push_str("nan");
        return;
    }
    if v.is_infinite() {
        out.push_str(if v > 0.0 { "inf" } else { "-inf" });
        return;
    }
    let s = format!("{v:.18e}");
    match s.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            let _ = write!(out, "{mantissa}e{sign}{:02}", exp.abs());
        }
        None => out.push_str(&s),
    }
}
