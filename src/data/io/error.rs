//! Shared error types for dataset I/O.

use std::io;

use crate::data::DatasetError;

/// Errors that can occur when loading a dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetLoadError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}, field {field}: cannot parse {value:?} as a number")]
    Parse {
        line: usize,
        field: usize,
        value: String,
    },

    #[error("line {line} has {got} fields, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        got: usize,
    },

    #[error("table needs at least one feature row and a label row, found {rows} row(s)")]
    MissingLabelRow { rows: usize },

    #[error("invalid dataset: {0}")]
    Dataset(#[from] DatasetError),
}
