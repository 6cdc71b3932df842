//! Cubic-Bezier Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CurveState, DragController, FrameQueue,
    FrameScheduler, PresetSelector, PreviewAnimator, UiState,
};
pub use core::{
    pixel_to_value, value_to_pixel, BezierValue, CubicBezierEasing, Handle, HandlePositions,
    Preset, PresetCatalog, PresetCategory,
};
pub use shared::{EditorOptions, PointerDeltaMode, PreviewTiming, RenderScene};
