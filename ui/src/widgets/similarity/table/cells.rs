//! Cell rendering for the similarity table.

use egui::{Align, Label, Layout, RichText, Ui};
use similarity_business::{CellAlign, CellTone, CellValue, ColumnDef};

use crate::utils::colors::{COLOR_TONED_TEXT, tone_background};

/// Renders one body cell: tone background, then the value in the column's
/// alignment.
#[inline]
pub fn render_cell(ui: &mut Ui, def: &ColumnDef, value: CellValue<'_>) {
    let toned = tone_background(def.tone);
    if let Some(fill) = toned {
        ui.painter().rect_filled(ui.max_rect(), 0.0, fill);
    }

    let mut text = RichText::new(value.to_string());
    if toned.is_some() {
        text = text.color(COLOR_TONED_TEXT);
    }
    if def.tone == CellTone::Index {
        text = text.strong();
    }

    aligned(ui, def.align, |ui| {
        ui.add(Label::new(text).truncate());
    });
}

/// Lays out `add_contents` inside the cell according to `align`.
#[inline]
pub fn aligned(ui: &mut Ui, align: CellAlign, add_contents: impl FnOnce(&mut Ui)) {
    let layout = match align {
        CellAlign::Left => Layout::left_to_right(Align::Center),
        CellAlign::Center => Layout::centered_and_justified(egui::Direction::LeftToRight),
        CellAlign::Right => Layout::right_to_left(Align::Center),
    };
    ui.with_layout(layout, add_contents);
}
