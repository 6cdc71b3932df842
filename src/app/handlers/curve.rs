//! Handler für Drag der Kurven-Handles und Ausgabe des Werts.

use crate::app::drag::DragUpdate;
use crate::app::AppState;
use crate::shared::options::PRESET_MATCH_EPSILON;
use glam::Vec2;

/// Startet einen Drag und übernimmt die eingerasteten Handle-Positionen.
pub fn begin_drag(state: &mut AppState, frame_pos: Vec2, page_pos: Vec2) {
    let (_, handles) = state.drag.begin(frame_pos, page_pos, state.curve.handles());
    state.curve.set_handles(handles);
    auto_match_preset(state);
}

/// Verschiebt das aktive Handle; ohne Drag ein No-op.
pub fn update_drag(state: &mut AppState, page_pos: Vec2) {
    if let DragUpdate::Moved(handles) = state.drag.update(page_pos) {
        state.curve.set_handles(handles);
        auto_match_preset(state);
    }
}

/// Beendet den Drag.
pub fn end_drag(state: &mut AppState) {
    state.drag.end();
}

/// Legt den CSS-Wert der Live-Kurve für die Zwischenablage bereit.
pub fn copy_value(state: &mut AppState) {
    let css = state.curve.value().to_css();
    log::info!("Wert kopiert: {}", css);
    state.ui.pending_clipboard = Some(css);
}

/// Gleicht den gezogenen Wert mit dem Katalog ab (nur wenn aktiviert).
fn auto_match_preset(state: &mut AppState) {
    if !state.options.preset_auto_match {
        return;
    }
    let value = state.curve.value();
    if !state.presets.match_value(&value, PRESET_MATCH_EPSILON) {
        state.presets.reset();
    }
}
