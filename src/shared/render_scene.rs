//! Render-Szene als expliziter Übergabevertrag zwischen App und UI-Painter.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.

use super::options::EditorOptions;
use crate::core::PresetCategory;

/// Sichtbarer Zustand des Vorschau-Elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewVisual {
    /// Horizontale Verschiebung in Pixeln
    pub translate_x: f32,
    /// Deckkraft 0.0 – 1.0
    pub opacity: f32,
}

impl PreviewVisual {
    /// Ausgangszustand: am Ursprung, unsichtbar.
    pub const HIDDEN: Self = Self {
        translate_x: 0.0,
        opacity: 0.0,
    };
}

impl Default for PreviewVisual {
    fn default() -> Self {
        Self::HIDDEN
    }
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// SVG-Pfad der Kurve (absolute Koordinaten)
    pub path_data: String,
    /// Lineare Referenzlinie [x0, y0, x1, y1]
    pub linear_line: [f32; 4],
    /// Begin-Hebel [Ecke x, Ecke y, Handle x, Handle y]
    pub begin_points: [f32; 4],
    /// End-Hebel [Ecke x, Ecke y, Handle x, Handle y]
    pub end_points: [f32; 4],
    /// Anzeige-Label (Preset-Name oder `cubic-bezier(...)`)
    pub display_value: String,
    /// Statische Trace-Punkte der letzten Vorschau (leer vor der ersten)
    pub traces: Vec<f32>,
    /// Zustand des Vorschau-Elements
    pub preview: PreviewVisual,
    /// Ob gerade eine Vorschau läuft
    pub preview_running: bool,
    /// Aktive Preset-Familie
    pub active_category: Option<PresetCategory>,
    /// Cursor je Familie (Reihenfolge wie `PresetCategory::ALL`)
    pub preset_cursors: [usize; 3],
    /// Laufzeit-Optionen für Farben, Größen, Breiten
    pub options: EditorOptions,
}

impl RenderScene {
    /// Trace-Punkte als Pixel-Offsets auf der Vorschau-Bahn.
    pub fn trace_offsets(&self) -> impl Iterator<Item = f32> + '_ {
        let width = self.options.preview.track_width;
        self.traces.iter().map(move |t| t * width)
    }
}
