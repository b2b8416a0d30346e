use anyhow::{Context, Result};
use catalog::{MovieId, MovieIndex};
use clap::{Parser, Subcommand};
use colored::Colorize;
use server::{RecommendationOrchestrator, RecommendedMovie};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tmdb::{FetchDiagnostic, Severity};

mod config;

use config::TmdbConfig;

/// FlickMatch - Movie Similarity Recommender
#[derive(Parser)]
#[command(name = "flick-match")]
#[command(about = "Movie recommendations from a precomputed similarity matrix", long_about = None)]
struct Cli {
    /// Path to the directory holding the catalog and similarity artifacts
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog titles available for querying
    Titles {
        /// Only show titles containing this substring (case-insensitive)
        #[arg(long)]
        contains: Option<String>,
    },

    /// Get recommendations for a movie title
    Recommend {
        /// Exact catalog title to rank against
        #[arg(long)]
        title: String,

        /// Number of recommendations to return
        #[arg(long, default_value = "5")]
        count: usize,
    },

    /// Resolve the poster URL for a single movie id
    Poster {
        /// Movie id to look up
        #[arg(long)]
        movie_id: MovieId,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Poster lookups go straight to TMDB and do not need the catalog
    if let Commands::Poster { movie_id } = &cli.command {
        return handle_poster(*movie_id).await;
    }

    // Load movie index (this may take a moment)
    println!("Loading catalog from {}...", cli.data_dir.display());
    let start = Instant::now();
    let index = Arc::new(
        MovieIndex::load_from_files(&cli.data_dir)
            .context("Failed to load catalog artifacts")?,
    );
    println!(
        "{} Loaded {} movies in {:?}",
        "✓".green(),
        index.len(),
        start.elapsed()
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Titles { contains } => handle_titles(index, contains)?,
        Commands::Recommend { title, count } => handle_recommend(index, title, count).await?,
        Commands::Poster { .. } => unreachable!(),
    }

    Ok(())
}

/// Handle the 'titles' command
fn handle_titles(index: Arc<MovieIndex>, contains: Option<String>) -> Result<()> {
    let filter = contains.map(|needle| needle.to_lowercase());

    let titles: Vec<&str> = index
        .titles()
        .filter(|title| match &filter {
            Some(needle) => title.to_lowercase().contains(needle),
            None => true,
        })
        .collect();

    println!(
        "{}",
        format!("{} matching titles:", titles.len()).bold().blue()
    );
    for title in titles {
        println!("  - {}", title);
    }
    Ok(())
}

/// Handle the 'recommend' command
async fn handle_recommend(index: Arc<MovieIndex>, title: String, count: usize) -> Result<()> {
    let config = TmdbConfig::from_env()?;
    let orchestrator = RecommendationOrchestrator::new(index, config.build_client());

    let recommendations = orchestrator.recommend(&title, count).await?;

    print_recommendations(&title, &recommendations);
    Ok(())
}

/// Handle the 'poster' command
async fn handle_poster(movie_id: MovieId) -> Result<()> {
    let config = TmdbConfig::from_env()?;
    let client = config.build_client();

    let resolution = client.resolve_poster(movie_id).await;

    println!("Poster URL: {}", resolution.url);
    if resolution.is_placeholder() {
        println!("(placeholder image)");
    }
    if let Some(diagnostic) = &resolution.diagnostic {
        print_diagnostic(diagnostic);
    }
    Ok(())
}

/// Helper function to format and print recommendations
fn print_recommendations(query: &str, recommendations: &[RecommendedMovie]) {
    println!(
        "{}",
        format!("Recommendations for '{}':", query).bold().blue()
    );
    for (i, rec) in recommendations.iter().enumerate() {
        println!(
            "{}. {} (id: {}) - Score: {:.3}",
            (i + 1).to_string().green(),
            rec.title,
            rec.movie_id,
            rec.score
        );
        println!("   Poster: {}", rec.poster_url);
        if let Some(diagnostic) = &rec.poster_diagnostic {
            print_diagnostic(diagnostic);
        }
    }
}

/// Render a poster diagnostic at its severity
fn print_diagnostic(diagnostic: &FetchDiagnostic) {
    match diagnostic.severity() {
        Severity::Warning => println!("   {} {}", "warning:".yellow().bold(), diagnostic),
        Severity::Error => println!("   {} {}", "error:".red().bold(), diagnostic),
    }
}
