pub mod similarity;

pub use similarity::{
    FilterInputs, HEADING, LOADING_TEXT, NO_ROWS_TEXT, similarity_panel,
};
