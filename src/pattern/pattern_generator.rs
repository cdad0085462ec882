use log::debug;
use ndarray::{Array2, Zip};
use std::f64::consts::PI;
use std::path::Path;

use crate::config::DEFAULT_SHEAR_ANGLE_DEGREES;
use crate::error::Result;
use crate::harmonics::HarmonicTable;
use crate::pattern::sheared_coordinates::shear_coordinates;

/// Generates 2D moiré interference patterns from a harmonic coefficient table.
///
/// The pattern is a DC baseline plus a superposition of cosine harmonics
/// evaluated over sheared, lattice-normalized coordinates. The shear angle
/// is fixed at 120°, the hexagonal lattice basis angle.
///
/// The coefficient table is supplied at construction; `generate` itself
/// performs no I/O and holds no mutable state, so a generator can be shared
/// across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct MoirePatternGenerator {
    table: HarmonicTable,
    shear_angle_degrees: f64,
}

impl MoirePatternGenerator {
    /// Construct a generator from an in-memory harmonic table.
    pub fn new(table: HarmonicTable) -> Self {
        Self {
            table,
            shear_angle_degrees: DEFAULT_SHEAR_ANGLE_DEGREES,
        }
    }

    /// Construct a generator by loading a coefficient file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(HarmonicTable::from_path(path)?))
    }

    /// The underlying harmonic table.
    pub fn table(&self) -> &HarmonicTable {
        &self.table
    }

    /// The fixed lattice shear angle, in degrees.
    pub fn shear_angle_degrees(&self) -> f64 {
        self.shear_angle_degrees
    }

    /// Evaluate the pattern over a meshgrid pair.
    ///
    /// `xx` and `yy` must share their shape and be non-empty; `a_nm` is the
    /// lattice constant and must be positive and finite. The output field
    /// has the same shape as the grids.
    pub fn generate(
        &self,
        xx: &Array2<f64>,
        yy: &Array2<f64>,
        a_nm: f64,
    ) -> Result<Array2<f64>> {
        let (sheared_xx, sheared_yy) =
            shear_coordinates(xx, yy, self.shear_angle_degrees, a_nm)?;

        // Start from the DC baseline, then accumulate harmonics in table order
        let mut field = Array2::from_elem(xx.dim(), self.table.dc_value());

        for term in self.table.terms() {
            let two_pi_j = 2.0 * PI * term.j;
            let two_pi_i = 2.0 * PI * term.i;
            let amplitude = 2.0 * term.magnitude;
            let angle = term.angle;

            Zip::from(&mut field)
                .and(&sheared_xx)
                .and(&sheared_yy)
                .for_each(|value, &sx, &sy| {
                    *value += amplitude * (two_pi_j * sx + two_pi_i * sy + angle).cos();
                });
        }

        debug!(
            "generated {}x{} pattern from {} harmonics (a = {} nm)",
            field.nrows(),
            field.ncols(),
            self.table.num_harmonics(),
            a_nm
        );
        Ok(field)
    }
}
