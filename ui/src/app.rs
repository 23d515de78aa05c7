use crate::{state::State, widgets};

pub struct SimilarityApp {
    state: State,
}

impl SimilarityApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }
}

impl eframe::App for SimilarityApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::similarity_panel(ui, &mut self.state);
        });
    }
}
