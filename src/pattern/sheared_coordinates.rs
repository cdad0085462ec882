use nalgebra::Matrix2;
use ndarray::Array2;

use crate::error::{MoireFieldError, Result};

/// Oblique-basis normalization matrix for a lattice sheared by the given
/// angle (in degrees).
///
/// Maps cartesian coordinates (x, y) to sheared, lattice-normalized
/// coordinates (X, Y):
///
/// X = (x + y / tan θ) / a,   Y = (y / sin θ) / a
pub fn shear_matrix(shear_angle_degrees: f64, a_nm: f64) -> Matrix2<f64> {
    let theta = shear_angle_degrees.to_radians();
    Matrix2::new(1.0, 1.0 / theta.tan(), 0.0, 1.0 / theta.sin()) / a_nm
}

/// Apply the shear transform elementwise to a meshgrid pair.
///
/// Validates the lattice constant and grid shapes before transforming;
/// these are the same checks `MoirePatternGenerator::generate` performs.
pub fn shear_coordinates(
    xx: &Array2<f64>,
    yy: &Array2<f64>,
    shear_angle_degrees: f64,
    a_nm: f64,
) -> Result<(Array2<f64>, Array2<f64>)> {
    validate_inputs(xx, yy, a_nm)?;

    let m = shear_matrix(shear_angle_degrees, a_nm);
    let sheared_xx = xx * m[(0, 0)] + yy * m[(0, 1)];
    let sheared_yy = xx * m[(1, 0)] + yy * m[(1, 1)];

    Ok((sheared_xx, sheared_yy))
}

/// Shared input validation for coordinate shearing and pattern generation.
pub(crate) fn validate_inputs(xx: &Array2<f64>, yy: &Array2<f64>, a_nm: f64) -> Result<()> {
    if !(a_nm.is_finite() && a_nm > 0.0) {
        return Err(MoireFieldError::NonPositiveLatticeConstant { value: a_nm });
    }
    if xx.is_empty() || yy.is_empty() {
        return Err(MoireFieldError::EmptyGrid);
    }
    if xx.dim() != yy.dim() {
        return Err(MoireFieldError::GridShapeMismatch {
            xx: xx.dim(),
            yy: yy.dim(),
        });
    }
    Ok(())
}
