//! Product similarity grid widgets.

pub mod filters;
pub mod pagination;
pub mod panel;
pub mod table;

pub use filters::{FilterInputs, NumberFilterInput, TextFilterInput};
pub use pagination::{PageAction, pagination_bar};
pub use panel::{HEADING, LOADING_TEXT, similarity_panel};
pub use table::{NO_ROWS_TEXT, render_similarity_table};
