//! Core types for ranked recommendations

use catalog::MovieId;

/// A movie ranked against a query title
#[derive(Debug, Clone, PartialEq)]
pub struct RankedMovie {
    /// Catalog identifier, used downstream for poster lookups
    pub movie_id: MovieId,

    /// Display title
    pub title: String,

    /// Similarity score from the precomputed matrix
    pub score: f32,
}

impl RankedMovie {
    /// Create a new ranked movie
    pub fn new(movie_id: MovieId, title: impl Into<String>, score: f32) -> Self {
        Self {
            movie_id,
            title: title.into(),
            score,
        }
    }
}
