//! Example: Rank movies against a query title
//!
//! Run with: cargo run --package recommender --example rank_titles
//!
//! This example shows how to:
//! 1. Load the catalog and similarity artifacts
//! 2. Rank movies against a query title
//! 3. Display the top picks

use catalog::MovieIndex;
use recommender::SimilarityRecommender;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    println!("=== FlickMatch Ranking Example ===\n");

    // Load artifacts
    println!("Loading catalog artifacts...");
    let start = Instant::now();
    let data_dir = Path::new("data");
    let index = Arc::new(MovieIndex::load_from_files(data_dir)?);
    println!("Loaded {} movies in {:?}\n", index.len(), start.elapsed());

    // Query the first catalog title
    let query = match index.titles().next() {
        Some(title) => title.to_string(),
        None => {
            println!("Catalog is empty, nothing to rank");
            return Ok(());
        }
    };
    println!("Query: {}", query);

    let recommender = SimilarityRecommender::new(index.clone());
    let start = Instant::now();
    let picks = recommender.recommend(&query, 5)?;
    let elapsed = start.elapsed();

    println!("\nTop {} picks ({:?}):", picks.len(), elapsed);
    for (i, pick) in picks.iter().enumerate() {
        println!(
            "  {}. {} (id: {}, score: {:.3})",
            i + 1,
            pick.title,
            pick.movie_id,
            pick.score
        );
    }

    Ok(())
}
