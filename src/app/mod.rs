//! Application-Layer: Controller, State, Events und Feature-Logik.

pub mod command_log;
pub mod controller;
/// Drag-Zustandsautomat für die beiden Handles
pub mod drag;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod presets;
pub mod preview;
pub mod render_scene;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Kurve, Drag, Presets, Vorschau).
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use drag::{DragController, DragSession, DragUpdate};
pub use events::{AppCommand, AppIntent};
pub use presets::PresetSelector;
pub use preview::{FrameHandle, FrameQueue, FrameScheduler, PreviewAnimator};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, CurveState, UiState};
