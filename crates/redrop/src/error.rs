//! Error types for snippet preprocessing.

use std::path::PathBuf;

/// Errors that can occur while preparing a snippet for re-execution.
///
/// Every variant is fatal for the current run: no statements are emitted
/// once any of these is raised.
#[derive(Debug, thiserror::Error)]
pub enum RedropError {
    /// The input SQL file does not exist.
    #[error("source file not found: {0}")]
    MissingFile(PathBuf),

    /// The upward walk reached the filesystem root without finding the
    /// project marker file.
    #[error("project root not found above {0}")]
    ProjectRootNotFound(PathBuf),

    /// The source file's path contains no conventional schema segment and
    /// no explicit or in-file search path was available.
    #[error("cannot derive a schema from path: {0}")]
    SchemaNotDerivable(PathBuf),

    /// The requested line range is inverted.
    #[error("invalid line range: start {start} is past stop {stop}")]
    InvalidRange {
        /// First line of the range, 1-indexed.
        start: u32,
        /// Last line of the range, 1-indexed.
        stop: u32,
    },

    /// IO error while reading the source file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for snippet preprocessing.
pub type Result<T> = std::result::Result<T, RedropError>;
