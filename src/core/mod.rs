//! Core-Domänentypen: Bézier-Wert, Frame-Koordinaten, Easing, Preset-Katalog.

pub mod bezier;
pub mod easing;
/// Koordinaten-Abbildung zwischen normalisiertem Wert und Frame-Pixeln
///
/// Reine Funktionen ohne Zustand:
/// - value_to_pixel / pixel_to_value: Handle-Positionen ⇄ BezierValue
/// - to_absolute_points / path_data: Zeichenflächen-Koordinaten und SVG-Pfad
pub mod frame;
pub mod presets;

pub use bezier::BezierValue;
pub use easing::CubicBezierEasing;
pub use frame::{
    begin_points, end_points, linear_line_points, path_data, pixel_to_value, to_frame_space,
    value_to_pixel, Handle, HandlePositions, FRAME_HEIGHT, FRAME_WIDTH, OFFSET_LEFT, OFFSET_TOP,
};
pub use presets::{Preset, PresetCatalog, PresetCategory};
