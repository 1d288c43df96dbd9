//! react-python: PyO3 Python bindings for the REACT utility crates.
//!
//! This crate provides the `react` extension module consumed by the
//! Python analysis pipeline, using PyO3 and numpy for array exchange.

use numpy::{AllowTypeChange, IntoPyArray, PyArray2, PyArray3, PyArrayLikeDyn, PyReadonlyArrayDyn};
use pyo3::exceptions::{
    PyFileExistsError, PyFileNotFoundError, PyIOError, PyPermissionError, PyValueError,
};
use pyo3::prelude::*;
use std::path::Path;

/// Converts a react-core error to the matching Python exception.
fn to_py_err(err: react_core::Error) -> PyErr {
    use react_core::Error;
    match &err {
        Error::AlreadyExists { .. } => PyFileExistsError::new_err(err.to_string()),
        Error::PermissionDenied { .. } => PyPermissionError::new_err(err.to_string()),
        Error::NotFound { .. } => PyFileNotFoundError::new_err(err.to_string()),
        Error::InvalidShape { .. }
        | Error::EmptyIntensityRange
        | Error::ConstantIntensity(_) => PyValueError::new_err(err.to_string()),
        Error::Io(_) => PyIOError::new_err(err.to_string()),
    }
}

/// Check that a file can be written, raising on any obstacle.
///
/// Raises FileExistsError when the file exists and `force` is not set,
/// PermissionError when the file or its parent directory is not writable,
/// and FileNotFoundError when the parent directory does not exist.
#[pyfunction]
#[pyo3(signature = (fpath, force=false))]
fn check_can_write_file(fpath: &str, force: bool) -> PyResult<()> {
    react_core::check_can_write_file(Path::new(fpath), force).map_err(to_py_err)
}

/// Normalize the positive voxels of a 3-D volume into [0, 1].
///
/// Requires a float64 ndarray; raises ValueError when the array is not
/// 3-dimensional or its positive intensity range is degenerate.
#[pyfunction]
fn normalize_3d_volume<'py>(
    py: Python<'py>,
    v: PyReadonlyArrayDyn<'py, f64>,
) -> PyResult<Bound<'py, PyArray3<f64>>> {
    let normalized = react_core::normalize_3d_volume_dyn(v.as_array()).map_err(to_py_err)?;
    Ok(normalized.into_pyarray(py))
}

/// Flatten a 4-D (X, Y, Z, T) time series into a (X*Y*Z, T) matrix.
///
/// Accepts any array-like (nested sequences included); raises ValueError
/// when the converted array is not 4-dimensional.
#[pyfunction]
fn volume4d_to_matrix<'py>(
    py: Python<'py>,
    v: PyArrayLikeDyn<'py, f64, AllowTypeChange>,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let matrix = react_core::volume4d_to_matrix_dyn(v.as_array()).map_err(to_py_err)?;
    Ok(matrix.into_pyarray(py))
}

/// Python module for the REACT utilities.
#[pymodule]
fn react(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", react_core::VERSION)?;
    m.add_function(wrap_pyfunction!(check_can_write_file, m)?)?;
    m.add_function(wrap_pyfunction!(normalize_3d_volume, m)?)?;
    m.add_function(wrap_pyfunction!(volume4d_to_matrix, m)?)?;
    Ok(())
}
