//! UI-Komponenten: Editor-Zeichenfläche, Preset-Leiste, Optionen, Input-Handling.

/// Painter für Editor-Frame und Vorschau-Bahn
pub mod canvas;
pub mod input;
pub mod options_panel;
pub mod preset_panel;
pub mod status;

pub use canvas::{paint_editor, paint_preview_track, preview_track_size, EDITOR_SIZE};
pub use input::InputState;
pub use options_panel::render_options_panel;
pub use preset_panel::render_preset_panel;
pub use status::render_status_bar;
