use eframe::egui;

use crate::state::ScatterState;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct FlagScatterApp {
    pub state: ScatterState,
}

impl FlagScatterApp {
    pub fn new(state: ScatterState) -> Self {
        Self { state }
    }
}

impl eframe::App for FlagScatterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::scatter_plot(ui, &self.state);
        });
    }
}
