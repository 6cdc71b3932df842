//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `ui` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::{EditorOptions, PointerDeltaMode, PreviewTiming};
pub use render_scene::{PreviewVisual, RenderScene};
