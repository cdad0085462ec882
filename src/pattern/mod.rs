// Pattern module: Contains the moiré pattern generator and its coordinate helpers
// This module turns a harmonic table into a scalar field over a spatial grid

// ======================== MODULE DECLARATIONS ========================
pub mod grid;
pub mod pattern_generator;
pub mod sheared_coordinates;


// ======================== PATTERN GENERATION ========================
pub use pattern_generator::MoirePatternGenerator; // struct - superposes harmonics over sheared coordinates

// MoirePatternGenerator impl methods:
//   new(table: HarmonicTable) -> Self                             - construct from an in-memory table
//   from_path(path: impl AsRef<Path>) -> Result<Self>             - construct from a coefficient file
//   table(&self) -> &HarmonicTable                                - the underlying harmonic table
//   shear_angle_degrees(&self) -> f64                             - fixed lattice shear angle (120°)
//   generate(&self, xx: &Array2<f64>, yy: &Array2<f64>, a_nm: f64) -> Result<Array2<f64>>

// ======================== COORDINATE HELPERS ========================
pub use grid::{
    linspace_grid, // fn(x_min, x_max, nx, y_min, y_max, ny) -> (Array2<f64>, Array2<f64>) - evenly spaced meshgrid
    meshgrid,      // fn(x: &[f64], y: &[f64]) -> (Array2<f64>, Array2<f64>) - meshgrid of shape (y.len(), x.len())
};

pub use sheared_coordinates::{
    shear_coordinates, // fn(xx, yy, shear_angle_degrees, a_nm) -> Result<(Array2<f64>, Array2<f64>)>
    shear_matrix,      // fn(shear_angle_degrees: f64, a_nm: f64) -> Matrix2<f64> - oblique-basis normalization
};
