use crate::app::drag::DragController;
use crate::app::presets::PresetSelector;
use crate::app::preview::{FrameQueue, PreviewAnimator};
use crate::app::CommandLog;
use crate::shared::EditorOptions;
use std::path::PathBuf;

use super::{CurveState, UiState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Live-Kurve (Wert + Handle-Positionen)
    pub curve: CurveState,
    /// Drag-Zustandsautomat
    pub drag: DragController,
    /// Preset-Auswahl und Labels
    pub presets: PresetSelector,
    /// Vorschau-Animation
    pub preview: PreviewAnimator,
    /// Angeforderte Animations-Frames
    pub frames: FrameQueue,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Zieldatei für Options-Änderungen (None = nicht persistieren)
    pub options_path: Option<PathBuf>,
}

impl AppState {
    /// Erstellt einen App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State aus geladenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            curve: CurveState::new(options.initial_value),
            drag: DragController::new(options.pointer_delta_mode),
            presets: PresetSelector::default(),
            preview: PreviewAnimator::new(options.preview),
            frames: FrameQueue::new(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options,
            options_path: None,
        }
    }

    /// Anzeigetext der Kurve (Preset-Label oder `cubic-bezier(...)`).
    pub fn display_value(&self) -> String {
        self.presets.display_value(&self.curve.value())
    }

    /// True solange Animations-Frames angefordert sind.
    pub fn needs_animation_frame(&self) -> bool {
        self.frames.has_pending()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
