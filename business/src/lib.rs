//! Business layer of the product similarity viewer.
//!
//! Holds everything that is not drawing: the `/similarity` wire contract,
//! endpoint configuration, the one-shot loader feeding the view state, and
//! the grid model (columns, sort, filters, pages) applied on top of it.

mod api;
mod config;
pub mod grid;
mod loader;
mod matches;
mod view_state;

pub use api::{FetchError, FetchResult, decode_response, fetch_matches, similarity_request};
pub use config::{DEFAULT_BASE_URL, SIMILARITY_PATH, SimilarityConfig};
pub use grid::GridModel;
pub use grid::columns::{
    CellAlign, CellTone, CellValue, ColumnDef, ColumnKey, DEFAULT_MIN_WIDTH, FilterKind, Pinned,
    column_def, column_defs, default_column_def,
};
pub use grid::filter::{
    ColumnFilter, FilterModel, NumberFilter, NumberFilterOp, TextFilter, TextFilterOp,
};
pub use grid::pagination::{PAGE_SIZE, PageSummary, Pagination};
pub use grid::sort::{SortDirection, SortModel};
pub use loader::{
    FetchEvent, FetchEventReceiver, FetchEventSender, MatchesLoader, SettleGuard,
    create_fetch_channel, load_matches,
};
pub use matches::{MatchRow, RawMatch, SimilarityResponse};
pub use view_state::SimilarityViewState;
