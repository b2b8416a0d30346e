//! TMDB poster client.
//!
//! This crate provides a client for resolving movie poster art from TMDB
//! (The Movie Database) over HTTP. It handles:
//! - Fetching movie details for a catalog movie id
//! - Building CDN poster URLs from poster paths
//! - Falling back to a placeholder image when anything goes wrong
//! - Classifying failures by severity for the caller to report
//!
//! Poster art is cosmetic, so a lookup must never take down a
//! recommendation response. [`TmdbClient::resolve_poster`] always returns
//! a usable URL and carries any failure as a diagnostic value instead of
//! an error.

use reqwest::Client as HttpClient;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, error, warn};

/// Placeholder image used whenever a real poster cannot be resolved
pub const PLACEHOLDER_POSTER_URL: &str = "https://via.placeholder.com/500x750?text=No+Image";

/// CDN size segment used when building poster URLs
pub const POSTER_SIZE: &str = "w500";

const DEFAULT_API_URL: &str = "https://api.themoviedb.org/3";
const DEFAULT_IMAGE_URL: &str = "https://image.tmdb.org/t/p";
const DEFAULT_LANGUAGE: &str = "en-US";

/// How prominently a poster failure should be reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Transient or environmental, worth a notice
    Warning,
    /// The service answered and something is genuinely wrong
    Error,
}

/// A poster lookup failure, carried as a value alongside the fallback URL
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchDiagnostic {
    #[error("Failed to connect to TMDB: {0}")]
    Connection(String),

    #[error("TMDB returned status {status}: {detail}")]
    Http { status: u16, detail: String },

    #[error("Unexpected TMDB failure: {0}")]
    Unexpected(String),
}

impl FetchDiagnostic {
    /// Classify this failure for reporting purposes
    pub fn severity(&self) -> Severity {
        match self {
            FetchDiagnostic::Connection(_) => Severity::Warning,
            FetchDiagnostic::Http { .. } | FetchDiagnostic::Unexpected(_) => Severity::Error,
        }
    }
}

/// Outcome of a poster lookup.
///
/// The URL is always displayable: either a real CDN poster or the
/// placeholder. A diagnostic is attached only when the placeholder stands
/// in for a failed lookup, never when the movie simply has no poster art.
#[derive(Debug, Clone, PartialEq)]
pub struct PosterResolution {
    /// URL to display for this movie
    pub url: String,

    /// Present when the lookup failed and `url` is the placeholder
    pub diagnostic: Option<FetchDiagnostic>,
}

impl PosterResolution {
    /// A real poster resolved from the CDN
    pub fn resolved(url: String) -> Self {
        Self {
            url,
            diagnostic: None,
        }
    }

    /// The movie has no poster art; not a failure
    pub fn missing() -> Self {
        Self {
            url: PLACEHOLDER_POSTER_URL.to_string(),
            diagnostic: None,
        }
    }

    /// The lookup failed; fall back to the placeholder and carry the cause
    pub fn failed(diagnostic: FetchDiagnostic) -> Self {
        Self {
            url: PLACEHOLDER_POSTER_URL.to_string(),
            diagnostic: Some(diagnostic),
        }
    }

    /// Whether this resolution fell back to the placeholder image
    pub fn is_placeholder(&self) -> bool {
        self.url == PLACEHOLDER_POSTER_URL
    }
}

/// Subset of the TMDB movie details payload used for poster resolution
#[derive(Debug, Deserialize)]
struct MovieDetails {
    poster_path: Option<String>,
}

/// Client for the TMDB HTTP API.
///
/// Cheap to clone: the underlying HTTP client shares its connection pool
/// across clones, so one instance can fan out across tasks.
#[derive(Clone)]
pub struct TmdbClient {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    image_url: String,
    language: String,
}

impl TmdbClient {
    /// Create a client talking to the production TMDB endpoints
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key: api_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
            image_url: DEFAULT_IMAGE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Override the API base URL (default: https://api.themoviedb.org/3)
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Override the image CDN base URL (default: https://image.tmdb.org/t/p)
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Override the metadata language (default: en-US)
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Get the API base URL this client points at
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Resolve the poster URL for a movie.
    ///
    /// This never fails: any lookup problem falls back to the placeholder
    /// image with the cause attached as a diagnostic, so one bad poster
    /// cannot poison a whole recommendation response.
    pub async fn resolve_poster(&self, movie_id: u32) -> PosterResolution {
        let url = format!("{}/movie/{}", self.api_url, movie_id);

        let response = match self
            .http_client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", self.language.as_str()),
            ])
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) if e.is_connect() => {
                warn!("Failed to connect to TMDB for movie {}: {}", movie_id, e);
                return PosterResolution::failed(FetchDiagnostic::Connection(e.to_string()));
            }
            Err(e) => {
                error!("TMDB request failed for movie {}: {}", movie_id, e);
                return PosterResolution::failed(FetchDiagnostic::Unexpected(e.to_string()));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            error!("TMDB returned status {} for movie {}", status, movie_id);
            return PosterResolution::failed(FetchDiagnostic::Http {
                status: status.as_u16(),
                detail,
            });
        }

        let details: MovieDetails = match response.json().await {
            Ok(details) => details,
            Err(e) => {
                error!("Invalid TMDB response for movie {}: {}", movie_id, e);
                return PosterResolution::failed(FetchDiagnostic::Unexpected(e.to_string()));
            }
        };

        match details.poster_path {
            Some(path) if !path.is_empty() => {
                let poster_url = format!("{}/{}{}", self.image_url, POSTER_SIZE, path);
                debug!("Resolved poster for movie {}: {}", movie_id, poster_url);
                PosterResolution::resolved(poster_url)
            }
            _ => {
                debug!("Movie {} has no poster art", movie_id);
                PosterResolution::missing()
            }
        }
    }
}
