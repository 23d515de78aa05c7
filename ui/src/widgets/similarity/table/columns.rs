//! Column sizing for the similarity table.

use egui_extras::Column;
use similarity_business::{ColumnDef, column_defs};

pub const ROW_HEIGHT: f32 = 28.0;
pub const HEADER_HEIGHT: f32 = 24.0;
pub const FILTER_HEIGHT: f32 = 26.0;

/// Title line plus filter line.
pub const HEADER_BLOCK_HEIGHT: f32 = HEADER_HEIGHT + FILTER_HEIGHT + 4.0;

/// Columns split into the pinned leading block and the scrolling rest,
/// each in display order.
pub fn split_columns() -> (Vec<ColumnDef>, Vec<ColumnDef>) {
    column_defs().into_iter().partition(ColumnDef::is_pinned)
}

/// egui column for a declaration. Widths never shrink to fit the window;
/// the scrolling block scrolls horizontally instead.
#[inline]
pub fn table_column(def: &ColumnDef) -> Column {
    Column::initial(def.initial_width())
        .at_least(def.min_width)
        .resizable(def.resizable)
        .clip(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use similarity_business::ColumnKey;

    #[test]
    fn serial_column_is_the_only_pinned_one() {
        let (pinned, scrolling) = split_columns();
        let pinned: Vec<_> = pinned.iter().map(|c| c.key).collect();
        assert_eq!(pinned, vec![ColumnKey::SerialNumber]);
        assert_eq!(scrolling.len(), 5);
        assert_eq!(scrolling[0].key, ColumnKey::SourceCode);
        assert_eq!(scrolling[4].key, ColumnKey::SimilarityScore);
    }
}
