//! Paging bar under the table.

use egui::Ui;
use similarity_business::PageSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    First,
    Previous,
    Next,
    Last,
}

/// "first to last of total" line.
pub fn summary_text(summary: PageSummary) -> String {
    format!(
        "{} to {} of {}",
        summary.first_row, summary.last_row, summary.total
    )
}

/// "Page n of m" line; `page` is zero-based.
pub fn page_text(page: usize, page_count: usize) -> String {
    format!("Page {} of {page_count}", page + 1)
}

/// Renders the bar and returns the button pressed, if any.
pub fn pagination_bar(
    ui: &mut Ui,
    summary: PageSummary,
    page: usize,
    page_count: usize,
) -> Option<PageAction> {
    let is_first = page == 0;
    let is_last = page + 1 >= page_count;
    let mut action = None;

    ui.horizontal(|ui| {
        ui.label(summary_text(summary));
        ui.separator();

        if ui.add_enabled(!is_first, egui::Button::new("First")).clicked() {
            action = Some(PageAction::First);
        }
        if ui
            .add_enabled(!is_first, egui::Button::new("Previous"))
            .clicked()
        {
            action = Some(PageAction::Previous);
        }

        ui.label(page_text(page, page_count));

        if ui.add_enabled(!is_last, egui::Button::new("Next")).clicked() {
            action = Some(PageAction::Next);
        }
        if ui.add_enabled(!is_last, egui::Button::new("Last")).clicked() {
            action = Some(PageAction::Last);
        }
    });

    action
}
