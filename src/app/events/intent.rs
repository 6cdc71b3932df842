use crate::core::PresetCategory;
use crate::shared::EditorOptions;
use glam::Vec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Maustaste im Editor-Element gedrückt
    PointerPressed {
        /// Position relativ zum Editor-Element (inkl. Zeichenflächen-Offset)
        offset: Vec2,
        /// Seitenabsolute Position
        page: Vec2,
    },
    /// Zeiger bewegt (seitenabsolute Position)
    PointerMoved { page: Vec2 },
    /// Maustaste losgelassen
    PointerReleased,
    /// Preset-Familie gewählt
    PresetRequested { category: PresetCategory },
    /// Innerhalb der aktiven Familie blättern
    PresetStepRequested { delta: i32 },
    /// Preset-Auswahl aufheben
    PresetResetRequested,
    /// Vorschau manuell starten
    PreviewRequested,
    /// Animations-Frame vom Host (monotoner Zeitstempel in ms)
    AnimationFrame { timestamp_ms: f64 },
    /// Vorschau-Element ist sichtbar
    PreviewTargetAttached,
    /// Vorschau-Element wurde entfernt
    PreviewTargetDetached,
    /// CSS-Wert in die Zwischenablage kopieren
    CopyValueRequested,
    /// Optionen übernehmen (und persistieren)
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    OptionsResetRequested,
}
