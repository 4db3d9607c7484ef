//! File collaborators around the midline computer.
//!
//! - [`csv`]: load a coordinate grid, write midpoint/angle grids.
//! - [`plot`]: render midline paths to a PNG.
//! - [`json`]: pretty-print serialisable reports.
pub mod csv;
pub mod json;
pub mod plot;

pub use self::csv::{format_grid_csv, load_grid_csv, parse_grid_csv, write_grid_csv};
pub use self::json::write_json_file;
pub use self::plot::{render_midline_plot, save_plot};

use crate::error::MidlineError;
use std::fs;
use std::path::Path;

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<(), MidlineError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| MidlineError::Write {
                path: parent.to_path_buf(),
                reason: e.to_string(),
            })?;
        }
    }
    Ok(())
}
