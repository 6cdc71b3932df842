//! Optionen-Panel für Verhalten, Vorschau-Timing und Farben.

use crate::app::{AppIntent, AppState};
use crate::shared::PointerDeltaMode;

/// Zeigt das Optionen-Panel und gibt erzeugte Events zurück.
pub fn render_options_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::SidePanel::right("options_panel")
        .resizable(false)
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.heading("Optionen");

            // ── Verhalten ───────────────────────────────────
            ui.collapsing("Verhalten", |ui| {
                changed |= ui
                    .checkbox(&mut opts.preview_on_drag_end, "Vorschau nach Drag")
                    .changed();
                changed |= ui
                    .checkbox(&mut opts.preset_auto_match, "Presets automatisch erkennen")
                    .changed();
                ui.horizontal(|ui| {
                    ui.label("Zeiger-Delta:");
                    egui::ComboBox::from_id_salt("pointer_delta_mode")
                        .selected_text(delta_mode_label(opts.pointer_delta_mode))
                        .show_ui(ui, |ui| {
                            for mode in [PointerDeltaMode::Corrected, PointerDeltaMode::Legacy] {
                                changed |= ui
                                    .selectable_value(
                                        &mut opts.pointer_delta_mode,
                                        mode,
                                        delta_mode_label(mode),
                                    )
                                    .changed();
                            }
                        });
                });
            });

            // ── Vorschau ────────────────────────────────────
            ui.collapsing("Vorschau", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Bewegung (ms):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.preview.move_duration_ms)
                                .range(100.0..=10_000.0)
                                .speed(10.0),
                        )
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Ausblenden (ms):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.preview.fade_out_duration_ms)
                                .range(10.0..=2_000.0)
                                .speed(5.0),
                        )
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Trace-Punkte:");
                    changed |= ui
                        .add(egui::DragValue::new(&mut opts.preview.trace_count).range(1..=100))
                        .changed();
                });
            });

            // ── Darstellung ─────────────────────────────────
            ui.collapsing("Darstellung", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Handle-Radius:");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.handle_radius_px)
                                .range(2.0..=16.0)
                                .speed(0.1),
                        )
                        .changed();
                });
                changed |= color_edit(ui, "Begin-Handle:", &mut opts.handle_color_begin);
                changed |= color_edit(ui, "End-Handle:", &mut opts.handle_color_end);
                changed |= color_edit(ui, "Kurve:", &mut opts.curve_color);
            });

            ui.separator();

            if ui.button("Standardwerte").clicked() {
                events.push(AppIntent::OptionsResetRequested);
            }
        });

    // Änderungen sofort anwenden
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

fn delta_mode_label(mode: PointerDeltaMode) -> &'static str {
    match mode {
        PointerDeltaMode::Corrected => "Korrigiert",
        PointerDeltaMode::Legacy => "Kompatibel (−1)",
    }
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = super::canvas::to_color32(*color);
        if ui.color_edit_button_srgba(&mut c).changed() {
            *color = c.to_normalized_gamma_f32();
            changed = true;
        }
    });
    changed
}
