//! Parsers for the serialized artifacts.
//!
//! The artifacts are two JSON files produced by an offline pipeline:
//! - catalog.json: `[{"movie_id": 19995, "title": "Avatar"}, ...]`
//! - similarity.json: `[[1.0, 0.12, ...], [0.12, 1.0, ...], ...]`
//!
//! Row and column order in similarity.json must match the entry order in
//! catalog.json; that is checked later by `MovieIndex::new`, not here.

use crate::error::{CatalogError, Result};
use crate::types::Movie;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

fn open_artifact(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(e),
    })?;
    Ok(BufReader::new(file))
}

fn parse_error(path: &Path, err: serde_json::Error) -> CatalogError {
    CatalogError::ParseError {
        file: path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string()),
        line: err.line(),
        reason: err.to_string(),
    }
}

/// Parse the catalog artifact into movies in their on-disk order
pub fn parse_catalog(path: &Path) -> Result<Vec<Movie>> {
    let reader = open_artifact(path)?;
    serde_json::from_reader(reader).map_err(|e| parse_error(path, e))
}

/// Parse the similarity artifact into raw score rows
pub fn parse_similarity(path: &Path) -> Result<Vec<Vec<f32>>> {
    let reader = open_artifact(path)?;
    serde_json::from_reader(reader).map_err(|e| parse_error(path, e))
}
