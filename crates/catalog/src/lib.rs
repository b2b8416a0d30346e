//! # Catalog Crate
//!
//! This crate loads the two pre-built artifacts the recommender runs on:
//! a movie catalog and a pairwise similarity matrix. Both are produced by
//! an offline pipeline and are inputs to this system, never outputs.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, MovieCatalog, SimilarityMatrix, MovieIndex)
//! - **parser**: Parse the JSON artifacts into Rust structs
//! - **index**: Build and validate the MovieIndex bundle
//! - **error**: Error types for artifact loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::MovieIndex;
//! use std::path::Path;
//!
//! // Load and validate both artifacts
//! let index = MovieIndex::load_from_files(Path::new("data"))?;
//!
//! // Query data
//! let position = index.position_of_title("Avatar").unwrap();
//! let row = index.similarity_row(position).unwrap();
//!
//! println!("{} movies, row 0 has {} scores", index.len(), row.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{
    // Type aliases
    MovieId,
    // Core types
    Movie,
    MovieCatalog,
    SimilarityMatrix,
    MovieIndex,
};
