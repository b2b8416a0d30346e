//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while loading and validating the artifacts
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Artifact file could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading an artifact
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Artifact couldn't be deserialized
    ///
    /// This variant stores context about where the error occurred
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// A similarity row doesn't span the whole catalog
    #[error("Expected {expected} scores but found {found} in similarity row {row}")]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A similarity score is NaN or infinite and cannot be ranked
    #[error("Non-finite similarity score at row {row}, index {index}")]
    InvalidScore { row: usize, index: usize },

    /// Catalog and similarity matrix disagree on the number of movies
    #[error("Similarity matrix has {rows} rows but the catalog has {movies} movies")]
    DimensionMismatch { movies: usize, rows: usize },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
