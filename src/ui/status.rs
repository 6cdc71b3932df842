//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(state.curve.value().to_css());

            if let Some(category) = state.presets.active_category() {
                ui.separator();
                ui.label(format!("Preset: {}", category.as_str()));
            }

            if state.preview.is_running() {
                ui.separator();
                ui.label("Vorschau läuft");
            }

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(msg);
            }
        });
    });
}
