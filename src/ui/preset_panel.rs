//! Preset-Leiste: Familien, Blättern, Vorschau und Kopieren.

use crate::app::{AppIntent, AppState};
use crate::core::PresetCategory;

/// Rendert die Preset-Leiste und gibt erzeugte Events zurück.
pub fn render_preset_panel(ui: &mut egui::Ui, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let active = state.presets.active_category();

    ui.horizontal(|ui| {
        for category in PresetCategory::ALL {
            if ui
                .add(egui::Button::new(category.as_str()).selected(active == Some(category)))
                .clicked()
            {
                events.push(AppIntent::PresetRequested { category });
            }
        }
    });

    ui.horizontal(|ui| {
        let has_category = active.is_some();
        if ui
            .add_enabled(has_category, egui::Button::new("◀"))
            .clicked()
        {
            events.push(AppIntent::PresetStepRequested { delta: -1 });
        }

        let position = active.map(|category| {
            let len = state.presets.catalog().list(category).len();
            format!("{}/{}", state.presets.cursor(category) + 1, len)
        });
        ui.label(position.unwrap_or_else(|| "–".to_owned()));

        if ui
            .add_enabled(has_category, egui::Button::new("▶"))
            .clicked()
        {
            events.push(AppIntent::PresetStepRequested { delta: 1 });
        }

        ui.separator();

        if ui.button("Zurücksetzen").clicked() {
            events.push(AppIntent::PresetResetRequested);
        }
        if ui.button("Vorschau").clicked() {
            events.push(AppIntent::PreviewRequested);
        }
        if ui
            .button("Kopieren")
            .on_hover_text(state.curve.value().to_css())
            .clicked()
        {
            events.push(AppIntent::CopyValueRequested);
        }
    });

    events
}
