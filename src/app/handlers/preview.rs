//! Handler für die Vorschau-Animation.

use crate::app::AppState;

/// Startet die Vorschau mit dem aktuellen Live-Wert.
pub fn trigger(state: &mut AppState) {
    let value = state.curve.value();
    state.preview.trigger(value, &mut state.frames);
}

/// Liefert alle fälligen Frames mit dem Host-Zeitstempel aus.
pub fn advance(state: &mut AppState, timestamp_ms: f64) {
    for handle in state.frames.take_due() {
        state.preview.on_frame(handle, timestamp_ms, &mut state.frames);
    }
}

/// Meldet das Vorschau-Element an.
pub fn attach_target(state: &mut AppState) {
    state.preview.attach_target();
}

/// Meldet das Vorschau-Element ab.
pub fn detach_target(state: &mut AppState) {
    state.preview.detach_target(&mut state.frames);
}
