//! Shape transformations for volumetric imaging data.
//!
//! Both operations come in two entry points: a strict one whose rank is
//! enforced by the type system, and a `_dyn` one that accepts a
//! dynamic-rank view and validates the rank at runtime.

use crate::error::{Error, Result};
use log::{debug, info};
use ndarray::{Array2, Array3, ArrayView3, ArrayView4, ArrayViewD, Ix3, Ix4};

/// Rescales the positive intensities of a 3-D volume into [0, 1].
///
/// Voxels with non-positive intensity are treated as background and pinned
/// to exactly 0 in the output. The remaining voxels are shifted by the
/// minimum and scaled by the span of the positive intensity range, so the
/// output spans [0, 1]. The input is never mutated.
///
/// # Errors
///
/// - [`Error::EmptyIntensityRange`] if no voxel is positive.
/// - [`Error::ConstantIntensity`] if every positive voxel has the same
///   value, leaving nothing to scale by.
pub fn normalize_3d_volume(volume: ArrayView3<'_, f64>) -> Result<Array3<f64>> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in volume.iter() {
        if v > 0.0 {
            min = min.min(v);
            max = max.max(v);
        }
    }
    if !min.is_finite() {
        return Err(Error::EmptyIntensityRange);
    }
    if min == max {
        return Err(Error::ConstantIntensity(max));
    }
    info!("minimum: {min}");
    info!("maximum: {max}");

    let span = max - min;
    let mut data = volume.to_owned();
    data.mapv_inplace(|v| if v > 0.0 { (v - min) / span } else { 0.0 });
    Ok(data)
}

/// Rank-checked variant of [`normalize_3d_volume`].
///
/// # Errors
///
/// [`Error::InvalidShape`] if the view is not 3-dimensional, otherwise as
/// [`normalize_3d_volume`].
pub fn normalize_3d_volume_dyn(volume: ArrayViewD<'_, f64>) -> Result<Array3<f64>> {
    let actual = volume.ndim();
    let view = volume
        .into_dimensionality::<Ix3>()
        .map_err(|_| Error::InvalidShape { expected: 3, actual })?;
    normalize_3d_volume(view)
}

/// Flattens a 4-D (X, Y, Z, T) time series into a (X·Y·Z, T) matrix.
///
/// Row `x·Y·Z + y·Z + z` holds the time course of voxel `(x, y, z)`;
/// columns keep the original time index. The flatten is lossless:
/// reshaping the matrix back to (X, Y, Z, T) reproduces the volume.
pub fn volume4d_to_matrix(volume: ArrayView4<'_, f64>) -> Array2<f64> {
    let (x, y, z, t) = volume.dim();
    let rows = x * y * z;
    debug!("flattening ({x}, {y}, {z}, {t}) volume into ({rows}, {t}) matrix");

    // An owned copy is in standard layout, so the row-major reshape is a
    // dimension change only and cannot fail.
    volume
        .to_owned()
        .into_shape_with_order((rows, t))
        .expect("standard-layout volume reshapes to (voxels, timepoints)")
}

/// Rank-checked variant of [`volume4d_to_matrix`].
///
/// # Errors
///
/// [`Error::InvalidShape`] if the view is not 4-dimensional.
pub fn volume4d_to_matrix_dyn(volume: ArrayViewD<'_, f64>) -> Result<Array2<f64>> {
    let actual = volume.ndim();
    let view = volume
        .into_dimensionality::<Ix4>()
        .map_err(|_| Error::InvalidShape { expected: 4, actual })?;
    Ok(volume4d_to_matrix(view))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{Array2, Array3, Array4};

    #[test]
    fn test_normalize_spans_unit_interval() {
        let volume = Array3::from_shape_fn((3, 3, 3), |(i, j, k)| (i + j + k) as f64 + 1.0);

        let out = normalize_3d_volume(volume.view()).unwrap();

        let min = out.iter().copied().fold(f64::INFINITY, f64::min);
        let max = out.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert_abs_diff_eq!(min, 0.0);
        assert_abs_diff_eq!(max, 1.0);
    }

    #[test]
    fn test_normalize_pins_background_to_zero() {
        let mut volume = Array3::from_elem((2, 2, 2), 5.0);
        volume[[0, 0, 0]] = -1000.0;
        volume[[0, 0, 1]] = 0.0;
        volume[[1, 1, 1]] = 10.0;

        let out = normalize_3d_volume(volume.view()).unwrap();

        assert_eq!(out[[0, 0, 0]], 0.0);
        assert_eq!(out[[0, 0, 1]], 0.0);
        assert_abs_diff_eq!(out[[1, 1, 1]], 1.0);
        assert_abs_diff_eq!(out[[1, 0, 0]], 0.0);
    }

    #[test]
    fn test_normalize_rejects_constant_intensities() {
        let volume = Array3::from_elem((2, 2, 2), 7.5);

        let err = normalize_3d_volume(volume.view()).unwrap_err();
        assert!(matches!(err, Error::ConstantIntensity(v) if v == 7.5));
    }

    #[test]
    fn test_normalize_rejects_all_background() {
        let volume = Array3::from_elem((2, 2, 2), -1.0);

        let err = normalize_3d_volume(volume.view()).unwrap_err();
        assert!(matches!(err, Error::EmptyIntensityRange));
    }

    #[test]
    fn test_normalize_dyn_rejects_wrong_rank() {
        let matrix = Array2::<f64>::zeros((4, 4));
        let err = normalize_3d_volume_dyn(matrix.view().into_dyn()).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidShape {
                expected: 3,
                actual: 2
            }
        ));

        let series = Array4::<f64>::zeros((2, 2, 2, 2));
        let err = normalize_3d_volume_dyn(series.view().into_dyn()).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidShape {
                expected: 3,
                actual: 4
            }
        ));
    }

    #[test]
    fn test_flatten_dyn_rejects_wrong_rank() {
        let volume = Array3::<f64>::zeros((2, 2, 2));
        let err = volume4d_to_matrix_dyn(volume.view().into_dyn()).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidShape {
                expected: 4,
                actual: 3
            }
        ));
    }

    #[test]
    fn test_flatten_dyn_accepts_rank_4() {
        let series = Array4::<f64>::zeros((2, 3, 4, 5));
        let matrix = volume4d_to_matrix_dyn(series.view().into_dyn()).unwrap();
        assert_eq!(matrix.dim(), (24, 5));
    }
}
