//! Similarity Recommender - Precomputed Item-Item Ranking
//!
//! Ranks catalog movies against a query title using the precomputed
//! similarity matrix: "Movies most similar to the one you picked"
//!
//! ## Algorithm
//! 1. Resolve the query title to its catalog position
//! 2. Pair every catalog position with its score from the query's matrix row
//! 3. Drop the query's own position (a movie never recommends itself)
//! 4. Sort by score descending; ties keep catalog order
//! 5. Truncate to the requested count and resolve positions to movies

use crate::error::RecommendError;
use crate::types::RankedMovie;
use catalog::MovieIndex;
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Ranks catalog movies by similarity to a query title
#[derive(Clone)]
pub struct SimilarityRecommender {
    /// Shared reference to the movie index (read-only, so no Mutex needed)
    index: Arc<MovieIndex>,
}

impl SimilarityRecommender {
    /// Create a new similarity recommender
    ///
    /// ## Parameters
    /// - `index`: Shared reference to the loaded catalog and matrix
    pub fn new(index: Arc<MovieIndex>) -> Self {
        Self { index }
    }

    /// Recommend up to `limit` movies most similar to `title`
    ///
    /// Results are sorted by score descending and never include the query
    /// movie itself. Fewer than `limit` results are returned when the
    /// catalog has fewer than `limit + 1` movies.
    #[instrument(skip(self))]
    pub fn recommend(&self, title: &str, limit: usize) -> Result<Vec<RankedMovie>, RecommendError> {
        let position = self.index.position_of_title(title).ok_or_else(|| {
            RecommendError::TitleNotFound {
                title: title.to_string(),
            }
        })?;

        // Row length is validated against the catalog at load time
        let Some(row) = self.index.similarity_row(position) else {
            return Ok(Vec::new());
        };

        // Step 1: pair positions with scores, excluding the query itself.
        // Exclusion is by position, not by rank: the query stays out even
        // when another movie scores higher than the query's self-score.
        let mut scored: Vec<(usize, f32)> = row
            .iter()
            .copied()
            .enumerate()
            .filter(|&(pos, _)| pos != position)
            .collect();

        // Step 2: sort by score DESC. Stable sort keeps catalog order on ties.
        // Scores are validated finite at load, so the comparator is total here.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        scored.truncate(limit);

        // Step 3: resolve positions back to catalog movies
        let picks: Vec<RankedMovie> = scored
            .into_iter()
            .filter_map(|(pos, score)| {
                self.index
                    .movie(pos)
                    .map(|movie| RankedMovie::new(movie.id, movie.title.clone(), score))
            })
            .collect();

        debug!("Ranked {} picks for {:?}", picks.len(), title);
        Ok(picks)
    }
}
