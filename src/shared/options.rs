//! Zentrale Konfiguration für den Cubic-Bezier-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::BezierValue;
use serde::{Deserialize, Serialize};

// ── Vorschau ────────────────────────────────────────────────────────

/// Dauer der Bewegungsphase in Millisekunden.
pub const PREVIEW_MOVE_DURATION_MS: f64 = 1400.0;
/// Dauer der Ausblendphase in Millisekunden.
pub const PREVIEW_FADE_OUT_DURATION_MS: f64 = 100.0;
/// Anzahl Intervalle der statischen Trace-Punkte (ergibt COUNT + 1 Punkte).
pub const PREVIEW_TRACE_COUNT: usize = 20;
/// Breite der Vorschau-Bahn in Pixeln.
pub const PREVIEW_TRACK_WIDTH: f32 = 218.0;

// ── Presets ─────────────────────────────────────────────────────────

/// Toleranz für den automatischen Preset-Abgleich.
pub const PRESET_MATCH_EPSILON: f32 = 1e-4;

// ── Handle-Rendering ───────────────────────────────────────────────

/// Radius der Steuerpunkt-Marker in Pixeln.
pub const HANDLE_RADIUS_PX: f32 = 6.0;
/// Farbe des Begin-Handles (RGBA: Pink).
pub const HANDLE_COLOR_BEGIN: [f32; 4] = [1.0, 0.2, 0.6, 1.0];
/// Farbe des End-Handles (RGBA: Türkis).
pub const HANDLE_COLOR_END: [f32; 4] = [0.0, 0.7, 0.8, 1.0];
/// Farbe der Kurve (RGBA: Weiß).
pub const CURVE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Berechnung des Zeiger-Deltas während eines Drags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PointerDeltaMode {
    /// `aktuell − Ursprung`
    #[default]
    Corrected,
    /// Bit-Komplement des ganzzahligen `Ursprung − aktuell` (= `aktuell − Ursprung − 1`),
    /// verhaltensgleich zum ursprünglichen Web-Widget.
    Legacy,
}

/// Zeitliche Parameter der Vorschau-Animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewTiming {
    /// Bewegungsphase (ms)
    pub move_duration_ms: f64,
    /// Ausblendphase (ms)
    pub fade_out_duration_ms: f64,
    /// Anzahl Trace-Intervalle
    pub trace_count: usize,
    /// Breite der Vorschau-Bahn (px)
    pub track_width: f32,
}

impl PreviewTiming {
    /// Gesamtdauer = Bewegung + Ausblenden.
    pub fn total_duration_ms(&self) -> f64 {
        self.move_duration_ms + self.fade_out_duration_ms
    }

    /// Ersetzt ungültige Dauern (nicht endlich oder `<= 0`) durch die Standardwerte.
    ///
    /// Beide Dauern stehen im Nenner der Fortschrittsberechnung.
    pub fn sanitized(self) -> Self {
        Self {
            move_duration_ms: valid_duration(
                self.move_duration_ms,
                PREVIEW_MOVE_DURATION_MS,
                "move_duration_ms",
            ),
            fade_out_duration_ms: valid_duration(
                self.fade_out_duration_ms,
                PREVIEW_FADE_OUT_DURATION_MS,
                "fade_out_duration_ms",
            ),
            ..self
        }
    }
}

fn valid_duration(value: f64, fallback: f64, name: &str) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        log::warn!(
            "Ungültige Vorschau-Dauer {} = {}, verwende {}",
            name,
            value,
            fallback
        );
        fallback
    }
}

impl Default for PreviewTiming {
    fn default() -> Self {
        Self {
            move_duration_ms: PREVIEW_MOVE_DURATION_MS,
            fade_out_duration_ms: PREVIEW_FADE_OUT_DURATION_MS,
            trace_count: PREVIEW_TRACE_COUNT,
            track_width: PREVIEW_TRACK_WIDTH,
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `cubic_bezier_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Startwert der Kurve
    #[serde(default = "default_initial_value")]
    pub initial_value: BezierValue,
    /// Zeiger-Delta-Berechnung beim Drag
    #[serde(default)]
    pub pointer_delta_mode: PointerDeltaMode,
    /// Gezogene Kurve automatisch mit dem Preset-Katalog abgleichen
    #[serde(default)]
    pub preset_auto_match: bool,
    /// Vorschau nach Drag-Ende automatisch starten
    #[serde(default = "default_true")]
    pub preview_on_drag_end: bool,

    // ── Darstellung ─────────────────────────────────────────────
    /// Radius der Steuerpunkt-Marker (px)
    #[serde(default = "default_handle_radius")]
    pub handle_radius_px: f32,
    /// Farbe des Begin-Handles
    #[serde(default = "default_handle_color_begin")]
    pub handle_color_begin: [f32; 4],
    /// Farbe des End-Handles
    #[serde(default = "default_handle_color_end")]
    pub handle_color_end: [f32; 4],
    /// Farbe der Kurve
    #[serde(default = "default_curve_color")]
    pub curve_color: [f32; 4],

    // ── Vorschau (TOML-Tabelle, daher zuletzt) ──────────────────
    /// Zeitparameter der Vorschau
    #[serde(default)]
    pub preview: PreviewTiming,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            initial_value: BezierValue::EASE,
            pointer_delta_mode: PointerDeltaMode::Corrected,
            preset_auto_match: false,
            preview_on_drag_end: true,

            handle_radius_px: HANDLE_RADIUS_PX,
            handle_color_begin: HANDLE_COLOR_BEGIN,
            handle_color_end: HANDLE_COLOR_END,
            curve_color: CURVE_COLOR,

            preview: PreviewTiming::default(),
        }
    }
}

fn default_initial_value() -> BezierValue {
    BezierValue::EASE
}

fn default_true() -> bool {
    true
}

fn default_handle_radius() -> f32 {
    HANDLE_RADIUS_PX
}

fn default_handle_color_begin() -> [f32; 4] {
    HANDLE_COLOR_BEGIN
}

fn default_handle_color_end() -> [f32; 4] {
    HANDLE_COLOR_END
}

fn default_curve_color() -> [f32; 4] {
    CURVE_COLOR
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content).unwrap_or_else(|e| {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                Self::default()
            }),
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus einem TOML-String.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content)?;
        log::info!("Optionen geladen");
        Ok(opts.sanitized())
    }

    /// Kopie mit bereinigten Vorschau-Dauern.
    pub fn sanitized(self) -> Self {
        Self {
            preview: self.preview.sanitized(),
            ..self
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("cubic_bezier_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("cubic_bezier_editor.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let opts = EditorOptions::from_toml_str("").expect("leeres TOML ist gültig");
        assert_eq!(opts.initial_value, BezierValue::EASE);
        assert_eq!(opts.pointer_delta_mode, PointerDeltaMode::Corrected);
        assert!(opts.preview_on_drag_end);
        assert!(!opts.preset_auto_match);
        assert_eq!(opts.preview, PreviewTiming::default());
    }

    #[test]
    fn test_partial_toml_overrides_fields() {
        let content = r#"
initial_value = [0.42, 0.0, 0.58, 1.0]
pointer_delta_mode = "legacy"
preset_auto_match = true

[preview]
move_duration_ms = 700.0
fade_out_duration_ms = 50.0
trace_count = 10
track_width = 100.0
"#;
        let opts = EditorOptions::from_toml_str(content).expect("TOML sollte parsen");
        assert_eq!(opts.initial_value, BezierValue::new(0.42, 0.0, 0.58, 1.0));
        assert_eq!(opts.pointer_delta_mode, PointerDeltaMode::Legacy);
        assert!(opts.preset_auto_match);
        assert_eq!(opts.preview.total_duration_ms(), 750.0);
        assert_eq!(opts.handle_radius_px, HANDLE_RADIUS_PX);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(EditorOptions::from_toml_str("pointer_delta_mode = 3").is_err());
    }

    #[test]
    fn test_zero_durations_fall_back_to_defaults() {
        let content = "[preview]\nmove_duration_ms = 0.0\nfade_out_duration_ms = 0.0\n";
        let opts = EditorOptions::from_toml_str(content).expect("TOML sollte parsen");
        assert_eq!(opts.preview.move_duration_ms, PREVIEW_MOVE_DURATION_MS);
        assert_eq!(opts.preview.fade_out_duration_ms, PREVIEW_FADE_OUT_DURATION_MS);
    }

    #[test]
    fn test_sanitized_keeps_valid_and_replaces_invalid_durations() {
        let timing = PreviewTiming {
            move_duration_ms: 700.0,
            fade_out_duration_ms: f64::NAN,
            trace_count: 5,
            track_width: 100.0,
        }
        .sanitized();
        assert_eq!(timing.move_duration_ms, 700.0);
        assert_eq!(timing.fade_out_duration_ms, PREVIEW_FADE_OUT_DURATION_MS);
        assert_eq!(timing.trace_count, 5);

        let negative = PreviewTiming {
            move_duration_ms: -1.0,
            fade_out_duration_ms: f64::INFINITY,
            ..PreviewTiming::default()
        }
        .sanitized();
        assert_eq!(negative, PreviewTiming::default());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "cubic_bezier_editor_options_{}.toml",
            std::process::id()
        ));
        let mut opts = EditorOptions::default();
        opts.preview_on_drag_end = false;
        opts.preview.trace_count = 8;
        opts.save_to_file(&path).expect("Speichern sollte funktionieren");

        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert!(!loaded.preview_on_drag_end);
        assert_eq!(loaded.preview.trace_count, 8);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let opts = EditorOptions::load_from_file(std::path::Path::new(
            "/nonexistent/cubic_bezier_editor.toml",
        ));
        assert_eq!(opts.initial_value, BezierValue::EASE);
    }
}
