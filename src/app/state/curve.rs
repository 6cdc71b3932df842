use crate::core::{
    begin_points, end_points, path_data, pixel_to_value, value_to_pixel, BezierValue,
    HandlePositions,
};

/// Live-Kurve: normalisierter Wert und Handle-Positionen im Frame-Raum.
///
/// Einzige Quelle für den aktuellen Wert. Beim Ziehen werden die Pixel-
/// Positionen exakt übernommen und der Wert daraus gerundet abgeleitet; bei
/// Presets und Initialisierung ist es umgekehrt.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveState {
    value: BezierValue,
    handles: HandlePositions,
}

impl CurveState {
    /// Erstellt die Kurve aus einem Startwert.
    pub fn new(value: BezierValue) -> Self {
        Self {
            value,
            handles: value_to_pixel(&value),
        }
    }

    /// Setzt Wert und Handles neu (Initialisierung oder Preset).
    pub fn init(&mut self, value: BezierValue) {
        self.value = value;
        self.handles = value_to_pixel(&value);
    }

    /// Übernimmt neue Handle-Positionen und gibt den abgeleiteten Wert zurück.
    pub fn set_handles(&mut self, handles: HandlePositions) -> BezierValue {
        self.handles = handles;
        self.value = pixel_to_value(&handles);
        self.value
    }

    /// Aktueller normalisierter Wert.
    pub fn value(&self) -> BezierValue {
        self.value
    }

    /// Aktuelle Handle-Positionen (Frame-Raum).
    pub fn handles(&self) -> &HandlePositions {
        &self.handles
    }

    /// SVG-Pfad der Kurve.
    pub fn path_data(&self) -> String {
        path_data(&self.handles)
    }

    /// Begin-Hebel (absolut).
    pub fn begin_points(&self) -> [f32; 4] {
        begin_points(&self.handles)
    }

    /// End-Hebel (absolut).
    pub fn end_points(&self) -> [f32; 4] {
        end_points(&self.handles)
    }
}

impl Default for CurveState {
    fn default() -> Self {
        Self::new(BezierValue::EASE)
    }
}
