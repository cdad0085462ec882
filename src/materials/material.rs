// Material module: Bundles per-material moiré data
// A material carries its lattice constant and the harmonic coefficient set
// measured or fitted for it, so patterns can be generated without juggling
// loose parameters

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::harmonics::{HarmonicTable, HarmonicTerm};
use crate::pattern::MoirePatternGenerator;
use ndarray::Array2;

/// A 2D material parameterized for moiré pattern generation.
///
/// # Fields
/// * `name` - material identifier for debugging/visualization
/// * `lattice_constant_nm` - in-plane lattice constant in nanometers
/// * `table` - harmonic coefficient set for this material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoireMaterial {
    /// Material name for identification
    pub name: String,
    /// In-plane lattice constant in nanometers
    pub lattice_constant_nm: f64,
    /// Harmonic coefficients of the interlayer pattern
    pub table: HarmonicTable,
}

impl MoireMaterial {
    /// Create a new material preset.
    pub fn new(name: impl Into<String>, lattice_constant_nm: f64, table: HarmonicTable) -> Self {
        Self {
            name: name.into(),
            lattice_constant_nm,
            table,
        }
    }

    /// Build a pattern generator for this material's coefficient set.
    pub fn generator(&self) -> MoirePatternGenerator {
        MoirePatternGenerator::new(self.table.clone())
    }

    /// Generate the pattern over a grid using this material's lattice constant.
    pub fn generate(&self, xx: &Array2<f64>, yy: &Array2<f64>) -> Result<Array2<f64>> {
        self.generator().generate(xx, yy, self.lattice_constant_nm)
    }
}

/// Common material presets
pub struct CommonMaterials;

impl CommonMaterials {
    /// Chromium triiodide (CrI3), hexagonal, a ≈ 0.687 nm.
    ///
    /// The coefficient set is a C3-symmetric first harmonic shell; replace
    /// it with a fitted table (e.g. loaded via `HarmonicTable::from_path`)
    /// for quantitative work.
    pub fn cri3() -> MoireMaterial {
        let terms = vec![
            HarmonicTerm::new(1.0, 0.0, 0.5, 0.0),
            HarmonicTerm::new(0.0, 1.0, 0.5, 0.0),
            HarmonicTerm::new(-1.0, -1.0, 0.5, 0.0),
        ];
        MoireMaterial::new("CrI3", 0.687, HarmonicTable::from_parts(terms, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::linspace_grid;
    use approx::assert_relative_eq;

    #[test]
    fn test_material_creation() {
        let table = HarmonicTable::from_parts(vec![HarmonicTerm::new(1.0, 0.0, 0.2, 0.0)], 0.5);
        let mat = MoireMaterial::new("Test", 0.25, table);

        assert_eq!(mat.name, "Test");
        assert_relative_eq!(mat.lattice_constant_nm, 0.25);
        assert_eq!(mat.table.num_harmonics(), 1);
    }

    #[test]
    fn test_cri3_preset() {
        let cri3 = CommonMaterials::cri3();
        assert_eq!(cri3.name, "CrI3");
        assert_relative_eq!(cri3.lattice_constant_nm, 0.687);
        assert_eq!(cri3.table.num_harmonics(), 3);
    }

    #[test]
    fn test_cri3_field_is_finite() {
        let cri3 = CommonMaterials::cri3();
        let (xx, yy) = linspace_grid(-2.0, 2.0, 16, -2.0, 2.0, 16);

        let field = cri3.generate(&xx, &yy).unwrap();
        assert_eq!(field.dim(), (16, 16));
        assert!(
            field.iter().all(|v| v.is_finite()),
            "Preset field must be finite everywhere"
        );
    }

    #[test]
    fn test_cri3_field_at_origin() {
        // At the origin every cosine argument is zero, so the field is
        // dc + sum of 2 * magnitude over the three shell terms
        let cri3 = CommonMaterials::cri3();
        let xx = Array2::<f64>::zeros((1, 1));
        let yy = Array2::<f64>::zeros((1, 1));

        let field = cri3.generate(&xx, &yy).unwrap();
        assert_relative_eq!(field[[0, 0]], 1.0 + 3.0 * 2.0 * 0.5);
    }
}
