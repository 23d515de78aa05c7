//! Header rendering: a title line with the sort toggle, then a filter line.

use egui::{Button, RichText, TextEdit, Ui};
use egui_extras::TableRow;
use similarity_business::{ColumnDef, ColumnKey, FilterKind, SortDirection, SortModel, TextFilterOp};

use super::cells::aligned;
use super::columns::{FILTER_HEIGHT, HEADER_HEIGHT};
use crate::widgets::similarity::filters::FilterInputs;

/// What the user did in the header this frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HeaderOutput {
    pub sort_clicked: Option<ColumnKey>,
    pub filter_edited: bool,
}

impl HeaderOutput {
    pub fn merge(&mut self, other: Self) {
        self.sort_clicked = self.sort_clicked.or(other.sort_clicked);
        self.filter_edited |= other.filter_edited;
    }
}

/// Renders the header cells of `defs`, in order.
#[inline]
pub fn render_table_header(
    header: &mut TableRow<'_, '_>,
    defs: &[ColumnDef],
    sort: &SortModel,
    inputs: &mut FilterInputs,
) -> HeaderOutput {
    let mut output = HeaderOutput::default();
    for def in defs {
        header.col(|ui| {
            ui.vertical(|ui| {
                ui.allocate_ui(egui::vec2(ui.available_width(), HEADER_HEIGHT), |ui| {
                    if render_title(ui, def, sort.direction_of(def.key)) {
                        output.sort_clicked = Some(def.key);
                    }
                });
                ui.allocate_ui(egui::vec2(ui.available_width(), FILTER_HEIGHT), |ui| {
                    output.filter_edited |= render_filter(ui, def, inputs);
                });
            });
        });
    }
    output
}

fn sort_arrow(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Ascending) => " ⬆",
        Some(SortDirection::Descending) => " ⬇",
        None => "",
    }
}

/// Placeholder of a text filter; names the active op.
fn filter_hint(op: TextFilterOp) -> String {
    format!("{}...", op.label())
}

/// Returns `true` when a sortable title was clicked.
fn render_title(ui: &mut Ui, def: &ColumnDef, direction: Option<SortDirection>) -> bool {
    let mut clicked = false;
    aligned(ui, def.align, |ui| {
        if def.sortable {
            let title = RichText::new(format!("{}{}", def.header, sort_arrow(direction))).strong();
            clicked = ui
                .add(Button::new(title).frame(false))
                .on_hover_text("Click to sort")
                .clicked();
        } else {
            ui.strong(def.header);
        }
    });
    clicked
}

/// Returns `true` when the filter text changed.
fn render_filter(ui: &mut Ui, def: &ColumnDef, inputs: &mut FilterInputs) -> bool {
    match def.filter {
        FilterKind::None => false,
        FilterKind::Text => {
            let input = inputs.text_mut(def.key);
            let mut changed = false;
            ui.horizontal(|ui| {
                egui::ComboBox::from_id_salt(("text_filter_op", def.key))
                    .width(24.0)
                    .selected_text("⏷")
                    .show_ui(ui, |ui| {
                        for op in TextFilterOp::ALL {
                            changed |= ui
                                .selectable_value(&mut input.op, op, op.label())
                                .changed();
                        }
                    })
                    .response
                    .on_hover_text(input.op.label());
                changed |= ui
                    .add(
                        TextEdit::singleline(&mut input.text)
                            .hint_text(filter_hint(input.op))
                            .desired_width(f32::INFINITY),
                    )
                    .changed();
            });
            changed
        }
        FilterKind::Number => {
            let input = inputs.number_mut(def.key);
            let mut changed = false;
            ui.horizontal(|ui| {
                let half = (ui.available_width() - ui.spacing().item_spacing.x) / 2.0;
                changed |= ui
                    .add(TextEdit::singleline(&mut input.min).hint_text("Min").desired_width(half))
                    .changed();
                changed |= ui
                    .add(TextEdit::singleline(&mut input.max).hint_text("Max").desired_width(half))
                    .changed();
            });
            changed
        }
    }
}
