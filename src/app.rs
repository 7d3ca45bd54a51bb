use eframe::egui;

use crate::state::ViewerState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CertCompareApp {
    pub state: ViewerState,
}

impl CertCompareApp {
    pub fn new(state: ViewerState) -> Self {
        Self { state }
    }
}

impl eframe::App for CertCompareApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: toggles and summary ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Title ----
        egui::TopBottomPanel::top("title_bar").show(ctx, |ui| {
            panels::title_bar(ui, &self.state);
        });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::comparison_plot(ui, &self.state);
        });
    }
}
