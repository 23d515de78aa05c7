//! Row rendering for the similarity table.

use egui::{Stroke, Ui};
use egui_extras::TableRow;
use similarity_business::{ColumnDef, MatchRow};

use super::cells::render_cell;

/// Renders the cells of `defs` for one match.
#[inline]
pub fn render_match_row(row: &mut TableRow<'_, '_>, defs: &[ColumnDef], data: &MatchRow) {
    for def in defs {
        row.col(|ui| {
            render_cell(ui, def, def.key.value(data));
            draw_cell_bottom_border(ui);
        });
    }
}

#[inline]
fn draw_cell_bottom_border(ui: &mut Ui) {
    let rect = ui.max_rect();
    let border_color = ui.visuals().widgets.noninteractive.bg_stroke.color;
    ui.painter().hline(
        rect.left()..=rect.right(),
        rect.bottom(),
        Stroke::new(1.0, border_color),
    );
}
