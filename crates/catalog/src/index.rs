//! MovieIndex construction and validation.
//!
//! This module turns the two raw artifacts into a validated `MovieIndex`:
//! - parse catalog.json and similarity.json in parallel
//! - check that the matrix is square and matches the catalog size
//! - check that every score is finite (NaN cannot be ranked)

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use rayon::prelude::*;
use std::path::Path;
use tracing::info;

impl MovieIndex {
    /// Load both artifacts from a directory and build a validated index.
    ///
    /// Expects `catalog.json` and `similarity.json` inside `data_dir`.
    /// This is the main entry point for loading data.
    pub fn load_from_files(data_dir: &Path) -> Result<Self> {
        let catalog_path = data_dir.join("catalog.json");
        let similarity_path = data_dir.join("similarity.json");

        // Parse both artifacts in parallel; the similarity matrix dwarfs the
        // catalog, so the join is dominated by one side but costs nothing.
        let (movies, rows) = rayon::join(
            || parser::parse_catalog(&catalog_path),
            || parser::parse_similarity(&similarity_path),
        );
        let movies = movies?;
        let rows = rows?;

        info!(
            "Loaded {} movies and {} similarity rows from {}",
            movies.len(),
            rows.len(),
            data_dir.display()
        );

        let index = MovieIndex::new(MovieCatalog::new(movies), SimilarityMatrix::new(rows))?;
        info!("MovieIndex validated: {} movies", index.len());
        Ok(index)
    }

    /// Bundle a catalog and matrix, validating that their shapes agree.
    pub fn new(catalog: MovieCatalog, matrix: SimilarityMatrix) -> Result<Self> {
        let index = Self { catalog, matrix };
        index.validate()?;
        Ok(index)
    }

    /// Validate matrix shape and score sanity.
    ///
    /// Check that:
    /// - The matrix has one row per catalog entry
    /// - Every row has one score per catalog entry
    /// - Every score is finite
    fn validate(&self) -> Result<()> {
        let movies = self.catalog.len();
        let rows = self.matrix.len();
        if rows != movies {
            return Err(CatalogError::DimensionMismatch { movies, rows });
        }

        for (row, scores) in self.matrix.rows.iter().enumerate() {
            if scores.len() != movies {
                return Err(CatalogError::RowLengthMismatch {
                    row,
                    expected: movies,
                    found: scores.len(),
                });
            }
        }

        // Finiteness scan is O(n^2); run it in parallel over rows
        let bad_score = self
            .matrix
            .rows
            .par_iter()
            .enumerate()
            .find_map_any(|(row, scores)| {
                scores
                    .iter()
                    .position(|s| !s.is_finite())
                    .map(|index| (row, index))
            });

        if let Some((row, index)) = bad_score {
            return Err(CatalogError::InvalidScore { row, index });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: MovieId, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
        }
    }

    #[test]
    fn test_new_accepts_matching_dimensions() {
        let catalog = MovieCatalog::new(vec![movie(1, "A"), movie(2, "B")]);
        let matrix = SimilarityMatrix::new(vec![vec![1.0, 0.4], vec![0.4, 1.0]]);

        let index = MovieIndex::new(catalog, matrix).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.similarity_row(0), Some(&[1.0, 0.4][..]));
    }

    #[test]
    fn test_new_rejects_dimension_mismatch() {
        let catalog = MovieCatalog::new(vec![movie(1, "A"), movie(2, "B")]);
        let matrix = SimilarityMatrix::new(vec![vec![1.0, 0.4]]);

        let err = MovieIndex::new(catalog, matrix).unwrap_err();
        match err {
            CatalogError::DimensionMismatch { movies, rows } => {
                assert_eq!(movies, 2);
                assert_eq!(rows, 1);
            }
            other => panic!("expected DimensionMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_new_rejects_ragged_row() {
        let catalog = MovieCatalog::new(vec![movie(1, "A"), movie(2, "B")]);
        let matrix = SimilarityMatrix::new(vec![vec![1.0, 0.4], vec![0.4]]);

        let err = MovieIndex::new(catalog, matrix).unwrap_err();
        match err {
            CatalogError::RowLengthMismatch {
                row,
                expected,
                found,
            } => {
                assert_eq!(row, 1);
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("expected RowLengthMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_new_rejects_non_finite_scores() {
        let catalog = MovieCatalog::new(vec![movie(1, "A"), movie(2, "B")]);
        let matrix = SimilarityMatrix::new(vec![vec![1.0, f32::NAN], vec![0.4, 1.0]]);

        let err = MovieIndex::new(catalog, matrix).unwrap_err();
        match err {
            CatalogError::InvalidScore { row, index } => {
                assert_eq!(row, 0);
                assert_eq!(index, 1);
            }
            other => panic!("expected InvalidScore, got {:?}", other),
        }
    }

    #[test]
    fn test_new_accepts_empty_artifacts() {
        let catalog = MovieCatalog::new(Vec::new());
        let matrix = SimilarityMatrix::new(Vec::new());

        let index = MovieIndex::new(catalog, matrix).unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn test_load_from_files_round_trip() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let mut catalog = std::fs::File::create(dir.path().join("catalog.json")).unwrap();
        catalog
            .write_all(
                br#"[
                    {"movie_id": 1, "title": "A"},
                    {"movie_id": 2, "title": "B"},
                    {"movie_id": 3, "title": "C"}
                ]"#,
            )
            .unwrap();
        let mut similarity = std::fs::File::create(dir.path().join("similarity.json")).unwrap();
        similarity
            .write_all(b"[[1.0, 0.9, 0.2], [0.9, 1.0, 0.3], [0.2, 0.3, 1.0]]")
            .unwrap();

        let index = MovieIndex::load_from_files(dir.path()).unwrap();
        assert_eq!(index.len(), 3);
        assert_eq!(index.position_of_title("B"), Some(1));
        assert_eq!(index.movie(2).unwrap().id, 3);
        assert_eq!(index.similarity_row(1), Some(&[0.9, 1.0, 0.3][..]));
    }

    #[test]
    fn test_load_from_files_reports_shape_errors() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let mut catalog = std::fs::File::create(dir.path().join("catalog.json")).unwrap();
        catalog
            .write_all(br#"[{"movie_id": 1, "title": "A"}, {"movie_id": 2, "title": "B"}]"#)
            .unwrap();
        let mut similarity = std::fs::File::create(dir.path().join("similarity.json")).unwrap();
        similarity.write_all(b"[[1.0, 0.9]]").unwrap();

        let err = MovieIndex::load_from_files(dir.path()).unwrap_err();
        assert!(matches!(err, CatalogError::DimensionMismatch { .. }));
    }
}
