//! Error taxonomy and process exit status.
use crate::types::GridError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification used to pick an exit status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing, unreadable or unwritable file.
    Io,
    /// Content that is not a uniform numeric grid.
    InvalidData,
}

#[derive(Debug, Error)]
pub enum MidlineError {
    #[error("Problems reading file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write {}: {reason}", .path.display())]
    Write { path: PathBuf, reason: String },
    #[error("Read invalid data at line {line}: {reason}")]
    InvalidData { line: usize, reason: String },
    #[error("Read invalid data: {0}")]
    Grid(#[from] GridError),
    #[error("Failed to parse config {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },
}

impl MidlineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MidlineError::Io { .. } | MidlineError::Write { .. } => ErrorKind::Io,
            MidlineError::InvalidData { .. }
            | MidlineError::Grid(_)
            | MidlineError::Config { .. } => ErrorKind::InvalidData,
        }
    }
}

/// Process exit codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitStatus {
    Success = 0,
    InvalidData = 1,
    IoError = 2,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl From<ErrorKind> for ExitStatus {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Io => ExitStatus::IoError,
            ErrorKind::InvalidData => ExitStatus::InvalidData,
        }
    }
}

impl From<&MidlineError> for ExitStatus {
    fn from(err: &MidlineError) -> Self {
        err.kind().into()
    }
}
