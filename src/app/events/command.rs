use crate::core::PresetCategory;
use crate::shared::EditorOptions;
use glam::Vec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Drag starten: nächstes Handle wählen und auf den Zeiger setzen
    BeginCurveDrag { frame_pos: Vec2, page_pos: Vec2 },
    /// Aktives Handle um das Zeiger-Delta verschieben
    UpdateCurveDrag { page_pos: Vec2 },
    /// Drag beenden
    EndCurveDrag,
    /// Preset am Cursor der Familie anwenden
    ApplyPreset { category: PresetCategory },
    /// Cursor der aktiven Familie verschieben
    ChangePreset { delta: i32 },
    /// Preset-Auswahl und Labels zurücksetzen
    ResetPreset,
    /// Vorschau mit dem aktuellen Wert starten
    TriggerPreview,
    /// Fällige Animations-Frames abarbeiten
    AdvancePreview { timestamp_ms: f64 },
    /// Vorschau-Element anmelden
    AttachPreviewTarget,
    /// Vorschau-Element abmelden (bricht laufende Vorschau ab)
    DetachPreviewTarget,
    /// CSS-Wert für die Zwischenablage bereitstellen
    CopyValueToClipboard,
    /// Optionen anwenden und speichern
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
}
