//! Wire contract of `GET /similarity` and the typed row the view works with.
//!
//! The backend keys every match by its display label (`"Orion Code"`, ...).
//! Those keys stay confined to [`RawMatch`]; the rest of the workspace only
//! sees [`MatchRow`].

use serde::{Deserialize, Serialize};

/// Response body of `GET /similarity`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimilarityResponse {
    pub matches: Vec<RawMatch>,
}

/// One match exactly as the backend sends it.
///
/// Every field is optional on the wire: a missing key renders as a blank
/// cell rather than failing the whole response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMatch {
    #[serde(rename = "Orion Code", default)]
    pub orion_code: Option<String>,
    #[serde(rename = "Orion Description", default)]
    pub orion_description: Option<String>,
    #[serde(rename = "SDP Code", default)]
    pub sdp_code: Option<String>,
    #[serde(rename = "SDP Description", default)]
    pub sdp_description: Option<String>,
    #[serde(rename = "Similarity Score", default)]
    pub similarity_score: Option<f64>,
}

/// One similarity match between an Orion catalog entry and an SDP catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRow {
    /// 1-based position in the last fetched response. Not an identity.
    pub serial_number: usize,
    pub source_code: String,
    pub source_description: String,
    pub target_code: String,
    pub target_description: String,
    pub similarity_score: Option<f64>,
}

impl MatchRow {
    /// Maps a wire object to a row at `index` (0-based) of the response.
    pub fn from_raw(index: usize, raw: RawMatch) -> Self {
        Self {
            serial_number: index + 1,
            source_code: raw.orion_code.unwrap_or_default(),
            source_description: raw.orion_description.unwrap_or_default(),
            target_code: raw.sdp_code.unwrap_or_default(),
            target_description: raw.sdp_description.unwrap_or_default(),
            similarity_score: raw.similarity_score,
        }
    }
}

impl SimilarityResponse {
    /// Numbers the matches in response order.
    pub fn into_rows(self) -> Vec<MatchRow> {
        self.matches
            .into_iter()
            .enumerate()
            .map(|(index, raw)| MatchRow::from_raw(index, raw))
            .collect()
    }
}
