//! Error types for recommendation queries

use thiserror::Error;

/// Errors that can occur while answering a recommendation query
#[derive(Debug, Error)]
pub enum RecommendError {
    /// The query title has no entry in the catalog
    #[error("no catalog entry for title: {title}")]
    TitleNotFound { title: String },
}
