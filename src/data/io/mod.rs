//! Loading datasets from delimited text tables.
//!
//! The table is feature-major: each line holds one input dimension across all
//! samples, and the final line holds the labels.
//!
//! ```text
//! 0.1, 0.4, 0.9, 1.3
//! 2.0, 1.0, 0.5, 0.2
//! -1,  -1,  1,   1
//! ```

mod error;

use std::fs;
use std::path::Path;

use ndarray::{Array1, Array2};

use super::Dataset;

pub use error::DatasetLoadError;

/// Read a delimited table from `path`.
pub fn load_delimited(path: impl AsRef<Path>, delimiter: char) -> Result<Dataset, DatasetLoadError> {
    let text = fs::read_to_string(path)?;
    parse_delimited(&text, delimiter)
}

/// Parse a delimited table held in memory.
///
/// Blank lines are skipped and whitespace around fields is ignored. Line
/// numbers in errors are 1-based and count blank lines.
pub fn parse_delimited(text: &str, delimiter: char) -> Result<Dataset, DatasetLoadError> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut width: Option<usize> = None;

    for (line_idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let row = line
            .split(delimiter)
            .enumerate()
            .map(|(field_idx, raw)| {
                let raw = raw.trim();
                raw.parse::<f64>().map_err(|_| DatasetLoadError::Parse {
                    line: line_idx + 1,
                    field: field_idx + 1,
                    value: raw.to_string(),
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;

        match width {
            None => width = Some(row.len()),
            Some(expected) if expected != row.len() => {
                return Err(DatasetLoadError::RaggedRow {
                    line: line_idx + 1,
                    expected,
                    got: row.len(),
                });
            }
            Some(_) => {}
        }
        rows.push(row);
    }

    if rows.len() < 2 {
        return Err(DatasetLoadError::MissingLabelRow { rows: rows.len() });
    }

    let n_samples = width.unwrap_or(0);
    let labels = rows.pop().map(Array1::from_vec).unwrap_or_default();
    let features = Array2::from_shape_fn((rows.len(), n_samples), |(f, s)| rows[f][s]);

    Ok(Dataset::new(features, labels)?)
}
