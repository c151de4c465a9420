//! Catalog error types.
//!
//! A malformed catalog is fatal at startup, so these errors carry enough
//! detail (column, row) for the user to fix the file by hand.

use thiserror::Error;

/// Errors that can occur when loading a plant catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be opened or read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The header row lacks a required column.
    #[error("catalog is missing required column '{0}'")]
    MissingColumn(&'static str),

    /// A row has an empty value in a required column.
    #[error("row {row}: column '{column}' is empty")]
    EmptyField { row: usize, column: &'static str },

    /// The file is not well-formed CSV.
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

impl CatalogError {
    /// Returns `true` if the error comes from the catalog's structure rather
    /// than from reading the file.
    pub fn is_data_format(&self) -> bool {
        !matches!(self, CatalogError::Io { .. })
    }
}
