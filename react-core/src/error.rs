//! Error types for react-core.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for react-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for preflight and volume operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Target file exists and overwriting was not requested.
    #[error("{} already exists, pass --force to overwrite it", .path.display())]
    AlreadyExists { path: PathBuf },

    /// Target file or parent directory is not writable.
    #[error("no permission to write {}", .path.display())]
    PermissionDenied { path: PathBuf },

    /// Parent directory of the target file does not exist.
    #[error("directory does not exist: {}", .path.display())]
    NotFound { path: PathBuf },

    /// Volume rank does not match what the operation requires.
    #[error("expected a {expected}-dimensional volume, got {actual} dimensions")]
    InvalidShape { expected: usize, actual: usize },

    /// Normalization input has no positive voxels.
    #[error("volume has no positive voxels to normalize")]
    EmptyIntensityRange,

    /// Normalization range collapsed: every positive voxel has this value.
    #[error("positive voxels are constant ({0}), normalization range is empty")]
    ConstantIntensity(f64),

    /// Filesystem metadata probe failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
