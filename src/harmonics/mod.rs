// Harmonics module: Contains the harmonic coefficient table and its text format
// This module provides the Fourier coefficient data backing a moiré pattern

// ======================== MODULE DECLARATIONS ========================
pub mod harmonic_table;


// ======================== HARMONIC COEFFICIENT DATA ========================
pub use harmonic_table::{
    HarmonicTable, // struct - ordered harmonic terms plus a DC baseline
    HarmonicTerm,  // struct - one sinusoidal contribution (i, j, magnitude, angle)
};

// HarmonicTable impl methods:
//   from_parts(terms: Vec<HarmonicTerm>, dc_value: f64) -> Self  - construct from parts
//   parse(text: &str) -> Result<Self>                            - parse the ", "-delimited table format
//   from_path(path: impl AsRef<Path>) -> Result<Self>            - read and parse a coefficient file
//   terms(&self) -> &[HarmonicTerm]                              - harmonic terms in table order
//   dc_value(&self) -> f64                                       - zero-frequency baseline
//   num_harmonics(&self) -> usize                                - number of harmonic terms
//   is_dc_only(&self) -> bool                                    - true if the table has no harmonics
