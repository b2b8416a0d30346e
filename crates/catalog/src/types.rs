//! Core domain types for the movie catalog and similarity matrix.
//!
//! The catalog and the matrix are pre-built artifacts: this module only
//! models them in memory, it never computes similarity scores.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// TMDB identifier for a movie, used for poster lookups
pub type MovieId = u32;

// =============================================================================
// Movie
// =============================================================================

/// One catalog record.
///
/// The movie's *position* in the catalog (zero-based load order) is its
/// coordinate in the similarity matrix; the position is not stored here
/// because the `Vec` in [`MovieCatalog`] already encodes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    /// External identifier, serialized as `movie_id` in the artifact
    #[serde(rename = "movie_id")]
    pub id: MovieId,
    pub title: String,
}

// =============================================================================
// MovieCatalog
// =============================================================================

/// Ordered, immutable collection of movies with a title lookup index.
///
/// Titles are matched exactly (case-sensitive). If two catalog entries share
/// a title, the first occurrence wins.
#[derive(Debug)]
pub struct MovieCatalog {
    pub(crate) movies: Vec<Movie>,
    pub(crate) title_index: HashMap<String, usize>,
}

impl MovieCatalog {
    pub fn new(movies: Vec<Movie>) -> Self {
        let mut title_index = HashMap::with_capacity(movies.len());
        for (position, movie) in movies.iter().enumerate() {
            // entry().or_insert() keeps the first occurrence on duplicates
            title_index.entry(movie.title.clone()).or_insert(position);
        }
        Self {
            movies,
            title_index,
        }
    }

    /// Catalog position of the first movie with this exact title
    pub fn position_of(&self, title: &str) -> Option<usize> {
        self.title_index.get(title).copied()
    }

    /// Get a movie by catalog position
    pub fn get(&self, position: usize) -> Option<&Movie> {
        self.movies.get(position)
    }

    /// All titles in catalog order, for populating a selection widget
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.movies.iter().map(|m| m.title.as_str())
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

// =============================================================================
// SimilarityMatrix
// =============================================================================

/// Square matrix of pairwise similarity scores, indexed by catalog position.
///
/// Scores are opaque: they are only compared against other scores in the
/// same row, never across rows. Shape and finiteness are checked by
/// [`MovieIndex`](crate::MovieIndex) construction, not here.
#[derive(Debug)]
pub struct SimilarityMatrix {
    pub(crate) rows: Vec<Vec<f32>>,
}

impl SimilarityMatrix {
    pub fn new(rows: Vec<Vec<f32>>) -> Self {
        Self { rows }
    }

    /// The similarity row for one catalog position
    pub fn row(&self, position: usize) -> Option<&[f32]> {
        self.rows.get(position).map(|r| r.as_slice())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// =============================================================================
// MovieIndex - The Read-Only Data Bundle
// =============================================================================

/// Catalog plus similarity matrix, validated to agree on dimensions.
///
/// This is the one data structure the rest of the system sees. It is built
/// once at startup, wrapped in an `Arc`, and shared read-only; no component
/// ever mutates it. Construction goes through [`MovieIndex::new`] (or
/// [`MovieIndex::load_from_files`]) so an instance always satisfies:
///
/// - `matrix.len() == catalog.len()`
/// - every row has exactly `catalog.len()` scores
/// - every score is finite
#[derive(Debug)]
pub struct MovieIndex {
    pub(crate) catalog: MovieCatalog,
    pub(crate) matrix: SimilarityMatrix,
}

impl MovieIndex {
    // Getters - Note: These return references (&T) not owned values (T)

    pub fn catalog(&self) -> &MovieCatalog {
        &self.catalog
    }

    /// Catalog position of the first movie with this exact title
    pub fn position_of_title(&self, title: &str) -> Option<usize> {
        self.catalog.position_of(title)
    }

    /// Get a movie by catalog position
    pub fn movie(&self, position: usize) -> Option<&Movie> {
        self.catalog.get(position)
    }

    /// Similarity scores between the movie at `position` and every movie
    pub fn similarity_row(&self, position: usize) -> Option<&[f32]> {
        self.matrix.row(position)
    }

    /// All titles in catalog order
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.catalog.titles()
    }

    /// Number of movies in the catalog
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }
}
