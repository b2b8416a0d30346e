use serde::Deserialize;
use tmdb::TmdbClient;

/// TMDB configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct TmdbConfig {
    /// TMDB API key used for poster lookups
    pub tmdb_api_key: String,

    /// TMDB API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// TMDB image CDN base URL
    #[serde(default = "default_tmdb_image_url")]
    pub tmdb_image_url: String,

    /// Metadata language for TMDB lookups
    #[serde(default = "default_tmdb_language")]
    pub tmdb_language: String,
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_tmdb_image_url() -> String {
    "https://image.tmdb.org/t/p".to_string()
}

fn default_tmdb_language() -> String {
    "en-US".to_string()
}

impl TmdbConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<TmdbConfig>()
            .map_err(|e| anyhow::anyhow!("Failed to load TMDB config: {}", e))
    }

    /// Build a TMDB client from this configuration
    pub fn build_client(&self) -> TmdbClient {
        TmdbClient::new(self.tmdb_api_key.clone())
            .with_api_url(self.tmdb_api_url.clone())
            .with_image_url(self.tmdb_image_url.clone())
            .with_language(self.tmdb_language.clone())
    }
}
