//! Handler für Laufzeit-Optionen.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Übernimmt neue Optionen und persistiert sie, falls ein Pfad bekannt ist.
pub fn apply_options(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    let options = options.sanitized();
    state.drag.set_mode(options.pointer_delta_mode);
    state.preview.set_timing(options.preview);
    state.options = options;

    match &state.options_path {
        Some(path) => state.options.save_to_file(path),
        None => Ok(()),
    }
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    apply_options(state, EditorOptions::default())
}
