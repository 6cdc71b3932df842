//! Handler für die Preset-Auswahl.

use crate::app::AppState;
use crate::core::PresetCategory;

/// Wendet das Preset am Cursor der Familie an und übernimmt den Wert.
pub fn apply(state: &mut AppState, category: PresetCategory) {
    if let Some(value) = state.presets.apply(category) {
        state.curve.init(value);
    }
}

/// Blättert in der aktiven Familie und übernimmt den Wert.
pub fn change(state: &mut AppState, delta: i32) {
    if let Some(value) = state.presets.change(delta) {
        state.curve.init(value);
    }
}

/// Hebt die Preset-Auswahl auf.
pub fn reset(state: &mut AppState) {
    state.presets.reset();
}
