//! State of the similarity view.

use crate::loader::FetchEvent;
use crate::matches::MatchRow;

/// Rows on display plus whether the first fetch is still running.
///
/// Starts as (empty, loading). Rows are only ever replaced wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityViewState {
    rows: Vec<MatchRow>,
    is_loading: bool,
}

impl Default for SimilarityViewState {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            is_loading: true,
        }
    }
}

impl SimilarityViewState {
    pub fn rows(&self) -> &[MatchRow] {
        &self.rows
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn apply(&mut self, event: FetchEvent) {
        match event {
            FetchEvent::Loaded(rows) => self.rows = rows,
            FetchEvent::Settled => self.is_loading = false,
        }
    }
}
