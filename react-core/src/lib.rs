//! react-core: shared utilities for the REACT fMRI analysis pipeline.
//!
//! This crate provides the pre-flight checks and array shape
//! transformations used to prepare volumetric imaging data for
//! receptor-enriched regression: output-path write feasibility,
//! positive-intensity normalization of 3-D volumes, and flattening of
//! 4-D time series into voxel-by-timepoint matrices.

pub mod error;
pub mod preflight;
pub mod volume;

pub use error::{Error, Result};
pub use preflight::check_can_write_file;
pub use volume::{
    normalize_3d_volume, normalize_3d_volume_dyn, volume4d_to_matrix, volume4d_to_matrix_dyn,
};

/// Version string reported to packaging and the Python bindings.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
