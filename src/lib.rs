
//! Moiré pattern generation library
//!
//! This library computes 2D moiré interference patterns for crystal lattices
//! by superposing sinusoidal (Fourier) harmonics over sheared,
//! lattice-normalized coordinates.

pub mod config;
pub mod error;
pub mod harmonics;
pub mod materials;
pub mod pattern;

pub use error::{MoireFieldError, Result};
pub use harmonics::{HarmonicTable, HarmonicTerm};
pub use pattern::MoirePatternGenerator;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
