use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::model::SeriesKind;
use crate::state::ViewerState;

// ---------------------------------------------------------------------------
// Title bar
// ---------------------------------------------------------------------------

/// Chart title, centred above the plot.
pub fn title_bar(ui: &mut Ui, state: &ViewerState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(&state.chart.title);
    });
}

// ---------------------------------------------------------------------------
// Top bar – series toggles and summary
// ---------------------------------------------------------------------------

pub fn top_bar(ui: &mut Ui, state: &mut ViewerState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        for kind in SeriesKind::ALL {
            let [r, g, b] = kind.rgb();
            let text = RichText::new(kind.label()).color(Color32::from_rgb(r, g, b));
            if ui
                .selectable_label(state.visible[kind.index()], text)
                .clicked()
            {
                state.toggle_series(kind);
            }
        }

        ui.separator();

        if ui.selectable_label(state.show_grid, "Grid").clicked() {
            state.show_grid = !state.show_grid;
        }

        if let Some(report) = &state.report {
            ui.separator();
            ui.label(format!(
                "avg {:?} / {:?}  ·  improvement factor {:.4}",
                report.shortest_certificate, report.frechet_light, report.improvement_factor
            ));
        }
    });
}
