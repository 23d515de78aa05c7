//! The similarity analysis panel: heading, loading indicator or grid, paging.

use egui::{Response, Ui};

use super::pagination::{PageAction, pagination_bar};
use super::table::render_similarity_table;
use crate::state::State;

pub const HEADING: &str = "🔍 Product Similarity Analysis";
pub const LOADING_TEXT: &str = "Loading similarity matches...";

/// Displays the similarity panel.
///
/// The first call starts the one-time fetch. Every call drains finished
/// fetch events, then draws. Sort, filter and page changes made this frame
/// are applied after drawing and show on the next frame.
pub fn similarity_panel(ui: &mut Ui, state: &mut State) -> Response {
    if !state.loader.is_mounted() {
        let ctx = ui.ctx().clone();
        state.loader.mount(&state.config, move || ctx.request_repaint());
    }
    state.loader.poll();

    ui.vertical(|ui| {
        ui.heading(HEADING);
        ui.add_space(8.0);

        if state.loader.view().is_loading() {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(LOADING_TEXT);
            });
            return;
        }

        let rows = state.loader.view().rows();
        let displayed = state.grid.displayed_indices(rows);
        let total = displayed.len();
        state.grid.clamp_page(total);

        let summary = state.grid.page_summary(total);
        let page = state.grid.pagination().page();
        let page_count = state.grid.page_count(total);

        let mut page_action = None;
        egui::TopBottomPanel::bottom("similarity_pagination")
            .show_separator_line(false)
            .show_inside(ui, |ui| {
                page_action = pagination_bar(ui, summary, page, page_count);
            });

        let header_output = egui::CentralPanel::default()
            .show_inside(ui, |ui| {
                render_similarity_table(
                    ui,
                    rows,
                    state.grid.page_slice(&displayed),
                    state.grid.sort(),
                    &mut state.filter_inputs,
                )
            })
            .inner;

        let mut changed = false;
        if let Some(key) = header_output.sort_clicked {
            changed |= state.grid.toggle_sort(key);
            log::debug!("Sort is now {:?}", state.grid.sort().active());
        }
        if header_output.filter_edited {
            changed |= state.filter_inputs.apply_to(&mut state.grid);
        }
        if let Some(action) = page_action {
            log::debug!("Paging: {action:?}");
            apply_page_action(state, action, total);
            changed = true;
        }
        if changed {
            ui.ctx().request_repaint();
        }
    })
    .response
}

fn apply_page_action(state: &mut State, action: PageAction, total: usize) {
    match action {
        PageAction::First => state.grid.first_page(),
        PageAction::Previous => state.grid.previous_page(),
        PageAction::Next => state.grid.next_page(total),
        PageAction::Last => state.grid.last_page(total),
    }
}
