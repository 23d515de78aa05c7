//! Table components for the similarity grid.
//!
//! The grid is drawn as two tables side by side sharing the vertical
//! scroll: the pinned serial column, and every other column inside a
//! horizontal scroll area.
//! - `columns`: column sizing and the pinned / scrolling split
//! - `header`: title line with sort toggles plus the filter line
//! - `row`: one row of cells
//! - `cells`: tone, alignment and text of a single cell

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use egui::{Align, Layout, ScrollArea, Ui};
use egui_extras::TableBuilder;
use similarity_business::{ColumnDef, MatchRow, SortModel};

use self::columns::{HEADER_BLOCK_HEIGHT, ROW_HEIGHT, split_columns, table_column};
use self::header::{HeaderOutput, render_table_header};
use self::row::render_match_row;
use super::filters::FilterInputs;

/// Shown in place of the body when no row passes the filters.
pub const NO_ROWS_TEXT: &str = "No Rows To Show";

/// Renders the grid for the rows at `page` (positions into `rows`).
pub fn render_similarity_table(
    ui: &mut Ui,
    rows: &[MatchRow],
    page: &[usize],
    sort: &SortModel,
    inputs: &mut FilterInputs,
) -> HeaderOutput {
    let (pinned, scrolling) = split_columns();
    let mut output = HeaderOutput::default();

    ScrollArea::vertical()
        .id_salt("similarity_table_vscroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.horizontal_top(|ui| {
                let pinned_output = ui
                    .push_id("similarity_table_pinned", |ui| {
                        render_block(ui, &pinned, rows, page, sort, inputs)
                    })
                    .inner;
                output.merge(pinned_output);

                let scrolling_output = ScrollArea::horizontal()
                    .id_salt("similarity_table_hscroll")
                    .show(ui, |ui| render_block(ui, &scrolling, rows, page, sort, inputs))
                    .inner;
                output.merge(scrolling_output);
            });

            if page.is_empty() {
                ui.add_space(16.0);
                ui.vertical_centered(|ui| {
                    ui.label(NO_ROWS_TEXT);
                });
            }
        });

    output
}

fn render_block(
    ui: &mut Ui,
    defs: &[ColumnDef],
    rows: &[MatchRow],
    page: &[usize],
    sort: &SortModel,
    inputs: &mut FilterInputs,
) -> HeaderOutput {
    let mut output = HeaderOutput::default();

    let mut builder = TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .cell_layout(Layout::left_to_right(Align::Center));
    for def in defs {
        builder = builder.column(table_column(def));
    }

    builder
        .header(HEADER_BLOCK_HEIGHT, |mut header| {
            output = render_table_header(&mut header, defs, sort, inputs);
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, page.len(), |mut row| {
                let data = page.get(row.index()).and_then(|&index| rows.get(index));
                if let Some(data) = data {
                    render_match_row(&mut row, defs, data);
                }
            });
        });

    output
}
