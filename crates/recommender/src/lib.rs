//! # Recommender Crate
//!
//! This crate ranks catalog movies against a query title using the
//! precomputed similarity matrix loaded by the `catalog` crate.
//!
//! ## Components
//!
//! ### Similarity Recommender
//! Content-based ranking over a precomputed item-item matrix:
//! - "Movies most similar to the one you picked"
//! - Top-k picks sorted by score, query excluded
//! - Pure and deterministic: same index + same query = same picks
//!
//! ## Example Usage
//!
//! ```ignore
//! use recommender::SimilarityRecommender;
//! use catalog::MovieIndex;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! // Load data
//! let index = Arc::new(MovieIndex::load_from_files(Path::new("data"))?);
//!
//! // Rank against a query title
//! let recommender = SimilarityRecommender::new(index.clone());
//! let picks = recommender.recommend("Avatar", 5)?;
//!
//! for pick in picks {
//!     println!("{} (score: {:.3})", pick.title, pick.score);
//! }
//! ```

// Public modules
pub mod error;
pub mod similarity;
pub mod types;

// Re-export commonly used types
pub use error::RecommendError;
pub use similarity::SimilarityRecommender;
pub use types::RankedMovie;
