//! Typed errors for the codetable library

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodetableError {
    /// Threshold must admit at least one encoding length.
    #[error("max encoding length must be a positive integer, got {0}")]
    InvalidThreshold(usize),

    /// Output location exists but is not a directory.
    #[error("output path is not a directory: {0:?}")]
    NotADirectory(PathBuf),

    /// Input file could not be found.
    #[error("input file does not exist: {0:?}")]
    MissingInput(PathBuf),
}
