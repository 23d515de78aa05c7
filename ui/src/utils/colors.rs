//! Shared color constants for the UI.

use egui::Color32;
use similarity_business::CellTone;

/// Light grey behind the serial number column.
pub const COLOR_INDEX_BG: Color32 = Color32::from_rgb(245, 245, 245);

/// Pale green behind Orion codes.
pub const COLOR_SOURCE_BG: Color32 = Color32::from_rgb(212, 237, 218);

/// Pale amber behind SDP codes.
pub const COLOR_TARGET_BG: Color32 = Color32::from_rgb(255, 243, 205);

/// Text drawn on top of the pale backgrounds, readable in both themes.
pub const COLOR_TONED_TEXT: Color32 = Color32::from_rgb(33, 37, 41);

/// Background fill of a toned cell; `None` keeps the table's own striping.
pub fn tone_background(tone: CellTone) -> Option<Color32> {
    match tone {
        CellTone::Plain => None,
        CellTone::Index => Some(COLOR_INDEX_BG),
        CellTone::Source => Some(COLOR_SOURCE_BG),
        CellTone::Target => Some(COLOR_TARGET_BG),
    }
}
