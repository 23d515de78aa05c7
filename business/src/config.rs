use log::info;
use serde::Deserialize;

/// Backend address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Path of the similarity listing, relative to the base URL.
pub const SIMILARITY_PATH: &str = "/similarity";

/// Where the similarity matches are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimilarityConfig {
    pub base_url: String,
}

/// Environment variables recognised by [`SimilarityConfig::from_env`].
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    similarity_base_url: Option<String>,
}

impl SimilarityConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Reads `SIMILARITY_BASE_URL`, keeping the default when it is unset or blank.
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars())
    }

    fn from_vars<I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let raw: RawConfig = match serde_env::from_iter(vars) {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("Ignoring unreadable similarity configuration: {err}");
                RawConfig::default()
            }
        };

        match raw.similarity_base_url {
            Some(url) if !url.trim().is_empty() => {
                info!("Using provided SIMILARITY_BASE_URL: {url}");
                Self::new(url.trim())
            }
            _ => Self::default(),
        }
    }

    /// Full URL of the similarity endpoint.
    pub fn similarity_url(&self) -> String {
        format!("{}{SIMILARITY_PATH}", self.base_url.trim_end_matches('/'))
    }
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
