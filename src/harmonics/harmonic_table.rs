use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{MoireFieldError, Result};

/// Field separator of the on-disk coefficient format.
const FIELD_SEPARATOR: &str = ", ";

/// Number of numeric fields per table row.
const FIELDS_PER_ROW: usize = 4;

/// A single sinusoidal contribution to a moiré pattern.
///
/// The indices select a reciprocal-lattice harmonic; `magnitude` scales its
/// amplitude and `angle` shifts its phase. Indices are kept as `f64` because
/// the table format is uniformly numeric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HarmonicTerm {
    /// Harmonic index along the first sheared coordinate direction.
    pub i: f64,
    /// Harmonic index along the second sheared coordinate direction.
    pub j: f64,
    /// Amplitude contribution of this term.
    pub magnitude: f64,
    /// Phase offset in radians.
    pub angle: f64,
}

impl HarmonicTerm {
    /// Create a new harmonic term.
    pub fn new(i: f64, j: f64, magnitude: f64, angle: f64) -> Self {
        Self {
            i,
            j,
            magnitude,
            angle,
        }
    }
}

/// An ordered sequence of harmonic terms plus a DC baseline.
///
/// On disk this is a plain-text table, one row per line, four numeric
/// fields separated by `", "`. The final row's third column holds the DC
/// value; its other columns are ignored. A table containing only the DC
/// row (no harmonics) is valid and describes a constant field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarmonicTable {
    terms: Vec<HarmonicTerm>,
    dc_value: f64,
}

impl HarmonicTable {
    /// Construct a table directly from harmonic terms and a DC baseline.
    pub fn from_parts(terms: Vec<HarmonicTerm>, dc_value: f64) -> Self {
        Self { terms, dc_value }
    }

    /// Parse the `", "`-delimited coefficient table format.
    ///
    /// Blank lines are skipped. Every data row must carry exactly four
    /// numeric fields; the last data row is reinterpreted as the DC row.
    pub fn parse(text: &str) -> Result<Self> {
        let mut rows: Vec<[f64; FIELDS_PER_ROW]> = Vec::new();

        for (idx, raw_line) in text.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
            if fields.len() != FIELDS_PER_ROW {
                return Err(MoireFieldError::MalformedTable {
                    line: idx + 1,
                    message: format!(
                        "expected {} fields, found {}",
                        FIELDS_PER_ROW,
                        fields.len()
                    ),
                });
            }

            let mut row = [0.0; FIELDS_PER_ROW];
            for (col, field) in fields.iter().enumerate() {
                row[col] = field.trim().parse::<f64>().map_err(|_| {
                    MoireFieldError::MalformedTable {
                        line: idx + 1,
                        message: format!("non-numeric field {:?}", field),
                    }
                })?;
            }
            rows.push(row);
        }

        let dc_row = rows.pop().ok_or(MoireFieldError::MalformedTable {
            line: 0,
            message: "table has no rows".to_string(),
        })?;
        let dc_value = dc_row[2];

        let terms = rows
            .into_iter()
            .map(|[i, j, magnitude, angle]| HarmonicTerm::new(i, j, magnitude, angle))
            .collect();

        Ok(Self { terms, dc_value })
    }

    /// Read and parse a coefficient file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text =
            std::fs::read_to_string(path).map_err(|source| MoireFieldError::SourceUnavailable {
                path: path.to_path_buf(),
                source,
            })?;

        let table = Self::parse(&text)?;
        debug!(
            "loaded {} harmonic terms (dc = {}) from {}",
            table.num_harmonics(),
            table.dc_value,
            path.display()
        );
        Ok(table)
    }

    /// Harmonic terms in table order.
    pub fn terms(&self) -> &[HarmonicTerm] {
        &self.terms
    }

    /// Zero-frequency baseline of the pattern.
    pub fn dc_value(&self) -> f64 {
        self.dc_value
    }

    /// Number of harmonic terms (the DC row is not counted).
    pub fn num_harmonics(&self) -> usize {
        self.terms.len()
    }

    /// Whether the table describes a constant field.
    pub fn is_dc_only(&self) -> bool {
        self.terms.is_empty()
    }
}
