use similarity_business::{GridModel, MatchesLoader, SimilarityConfig, SimilarityViewState};

use crate::widgets::FilterInputs;

/// The main application state.
#[derive(Debug, Default)]
pub struct State {
    /// Where `/similarity` is fetched from.
    pub config: SimilarityConfig,
    /// The one-shot fetch and the rows it produced.
    pub loader: MatchesLoader,
    /// Sort, filters and page applied on top of the rows.
    pub grid: GridModel,
    /// Raw text of the filter row.
    pub filter_inputs: FilterInputs,
}

impl State {
    pub fn new(config: SimilarityConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn test(base_url: String) -> Self {
        Self::new(SimilarityConfig::new(base_url))
    }

    pub fn view(&self) -> &SimilarityViewState {
        self.loader.view()
    }
}
