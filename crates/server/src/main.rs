//! Simple test harness for the recommendation orchestrator.
//!
//! This binary lets you test the end-to-end flow by requesting
//! recommendations for a specific title.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use catalog::MovieIndex;
use server::RecommendationOrchestrator;
use tmdb::TmdbClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("info,server=debug,recommender=debug,catalog=debug")
        .init();

    info!("Starting FlickMatch server test harness");

    info!("Loading movie index...");
    let path = Path::new("data");
    let index = Arc::new(MovieIndex::load_from_files(path)?);
    info!("Movie index loaded successfully");

    let api_key = std::env::var("TMDB_API_KEY")
        .context("TMDB_API_KEY must be set to resolve poster art")?;
    let tmdb_client = TmdbClient::new(api_key);
    let orchestrator = RecommendationOrchestrator::new(index.clone(), tmdb_client);

    // Query the first catalog title
    let title = index
        .titles()
        .next()
        .context("Catalog is empty, nothing to query")?
        .to_string();
    let limit = 5;

    info!("Getting recommendations for {:?} (limit: {})", title, limit);
    let recommendations = orchestrator.recommend(&title, limit).await?;

    info!("Received {} recommendations:", recommendations.len());
    for (i, rec) in recommendations.iter().enumerate() {
        info!(
            "{}. {} (id: {}) - Score: {:.3}",
            i + 1,
            rec.title,
            rec.movie_id,
            rec.score
        );
        info!("   Poster: {}", rec.poster_url);
        if let Some(diagnostic) = &rec.poster_diagnostic {
            info!("   Poster degraded: {}", diagnostic);
        }
    }

    Ok(())
}
