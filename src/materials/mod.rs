// Materials module: Contains material presets for moiré pattern generation
// This module bundles lattice constants with harmonic coefficient sets per material

// ======================== MODULE DECLARATIONS ========================
pub mod material;

// ======================== MATERIAL TYPES & PRESETS ========================
pub use material::{
    CommonMaterials, // struct - collection of predefined materials (CrI3, etc.)
    MoireMaterial,   // struct - material with lattice constant and harmonic table
};
