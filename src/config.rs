// Constants

// Shear angle of the hexagonal lattice basis, in degrees
pub const DEFAULT_SHEAR_ANGLE_DEGREES: f64 = 120.0;

// Tolerances
pub const FIELD_TOLERANCE: f64 = 1e-10; // For float comparisons on field values
