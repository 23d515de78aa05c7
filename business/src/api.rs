//! Similarity API client.
//!
//! One read-only call: `GET {base_url}/similarity`. The decoding step is
//! kept separate from the transport so both the callback-based loader and
//! the async variant share it.

use log::info;
use thiserror::Error;

use crate::config::SimilarityConfig;
use crate::matches::{MatchRow, SimilarityResponse};

/// Why a similarity fetch produced no rows.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced an HTTP answer.
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered outside the 2xx range.
    #[error("API returned status: {status} {status_text}")]
    Status { status: u16, status_text: String },

    /// The body was not `{ "matches": [...] }`.
    #[error("malformed similarity response: {0}")]
    Shape(#[from] serde_json::Error),
}

pub type FetchResult<T> = Result<T, FetchError>;

/// Builds the request for the configured endpoint. No parameters, no auth headers.
pub fn similarity_request(config: &SimilarityConfig) -> ehttp::Request {
    ehttp::Request::get(config.similarity_url())
}

/// Turns a settled HTTP response into numbered rows.
pub fn decode_response(response: &ehttp::Response) -> FetchResult<Vec<MatchRow>> {
    if !(200..300).contains(&response.status) {
        return Err(FetchError::Status {
            status: response.status,
            status_text: response.status_text.clone(),
        });
    }

    let body: SimilarityResponse = serde_json::from_slice(&response.bytes)?;
    Ok(body.into_rows())
}

/// Fetches and decodes the similarity matches.
pub async fn fetch_matches(config: &SimilarityConfig) -> FetchResult<Vec<MatchRow>> {
    let url = config.similarity_url();
    info!("Fetching similarity matches from {url}");

    let response = ehttp::fetch_async(similarity_request(config))
        .await
        .map_err(FetchError::Transport)?;

    let rows = decode_response(&response)?;
    info!("Loaded {} similarity matches", rows.len());
    Ok(rows)
}
