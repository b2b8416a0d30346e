//! # Recommendation Orchestrator
//!
//! This module coordinates the full recommendation flow:
//! 1. Rank catalog movies against the query title
//! 2. Fetch poster art for every pick in parallel
//! 3. Attach poster URLs and diagnostics in rank order
//! 4. Return the decorated picks
//!
//! Poster fetches run concurrently, one task per pick. A failed fetch never
//! fails the query: the pick keeps the placeholder image and carries the
//! failure as a diagnostic for the caller to report.

use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info, warn};

use catalog::{MovieId, MovieIndex};
use recommender::{RankedMovie, RecommendError, SimilarityRecommender};
use tmdb::{FetchDiagnostic, PosterResolution, Severity, TmdbClient};

/// Final recommendation returned to the user
#[derive(Debug, Clone)]
pub struct RecommendedMovie {
    pub movie_id: MovieId,
    pub title: String,
    pub score: f32,
    pub poster_url: String,
    pub poster_diagnostic: Option<FetchDiagnostic>,
}

/// Main orchestrator that coordinates ranking and poster resolution
#[derive(Clone)]
pub struct RecommendationOrchestrator {
    recommender: SimilarityRecommender,
    tmdb_client: TmdbClient,
}

impl RecommendationOrchestrator {
    /// Create a new orchestrator from loaded artifacts and a TMDB client
    ///
    /// # Arguments
    /// * `index` - Shared reference to the catalog and similarity matrix
    /// * `tmdb_client` - Client used to resolve poster art
    pub fn new(index: Arc<MovieIndex>, tmdb_client: TmdbClient) -> Self {
        let recommender = SimilarityRecommender::new(index);
        Self {
            recommender,
            tmdb_client,
        }
    }

    /// Main entry point: get recommendations with poster art for a query title
    ///
    /// # Arguments
    /// * `title` - Exact catalog title to rank against
    /// * `limit` - Number of recommendations to return (e.g., 5)
    ///
    /// # Returns
    /// Vector of RecommendedMovie sorted by score (highest first). Poster
    /// failures degrade individual picks to the placeholder image; only an
    /// unknown title fails the whole query.
    pub async fn recommend(
        &self,
        title: &str,
        limit: usize,
    ) -> Result<Vec<RecommendedMovie>, RecommendError> {
        // Start timing
        let start_time = Instant::now();

        // Rank picks against the query title
        let picks = self.recommender.recommend(title, limit)?;
        info!("Ranked {} picks for {:?}", picks.len(), title);

        // Decorate every pick with poster art
        let recommendations = self.resolve_posters(picks).await;

        // Log total time
        let elapsed = start_time.elapsed();
        info!(
            "Total time to recommend for {:?}: {:.2?}",
            title, elapsed
        );
        Ok(recommendations)
    }

    /// Fetch poster art for every pick concurrently, preserving rank order
    async fn resolve_posters(&self, picks: Vec<RankedMovie>) -> Vec<RecommendedMovie> {
        // One task per pick; the client clone shares its connection pool
        let handles: Vec<_> = picks
            .iter()
            .map(|pick| {
                let client = self.tmdb_client.clone();
                let movie_id = pick.movie_id;
                tokio::spawn(async move { client.resolve_poster(movie_id).await })
            })
            .collect();

        let mut recommendations = Vec::with_capacity(picks.len());
        for (pick, handle) in picks.into_iter().zip(handles) {
            let resolution = match handle.await {
                Ok(resolution) => resolution,
                // A panicked fetch task degrades to the placeholder too
                Err(e) => PosterResolution::failed(FetchDiagnostic::Unexpected(format!(
                    "poster task failed: {}",
                    e
                ))),
            };

            if let Some(diagnostic) = &resolution.diagnostic {
                match diagnostic.severity() {
                    Severity::Warning => {
                        warn!("Poster lookup for {:?} degraded: {}", pick.title, diagnostic)
                    }
                    Severity::Error => {
                        error!("Poster lookup for {:?} failed: {}", pick.title, diagnostic)
                    }
                }
            }

            recommendations.push(RecommendedMovie {
                movie_id: pick.movie_id,
                title: pick.title,
                score: pick.score,
                poster_url: resolution.url,
                poster_diagnostic: resolution.diagnostic,
            });
        }

        recommendations
    }
}
