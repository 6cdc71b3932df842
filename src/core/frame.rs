//! Koordinaten-Abbildung zwischen normalisiertem Bézier-Raum und Frame-Pixeln.
//!
//! Drei Räume müssen konsistent bleiben:
//! - normalisierter Wert `[x1, y1, x2, y2]` (Y wächst nach oben)
//! - Frame-Pixel (136×136, Y wächst nach unten)
//! - absolute Pfad-Koordinaten (Frame-Pixel + fester Offset in der Zeichenfläche)

use super::BezierValue;
use glam::Vec2;

/// Breite des Editier-Frames in Pixeln.
pub const FRAME_WIDTH: f32 = 136.0;
/// Höhe des Editier-Frames in Pixeln.
pub const FRAME_HEIGHT: f32 = 136.0;
/// Horizontaler Offset des Frames innerhalb der Zeichenfläche.
pub const OFFSET_LEFT: f32 = 7.0;
/// Vertikaler Offset des Frames innerhalb der Zeichenfläche.
pub const OFFSET_TOP: f32 = 57.0;

/// Pixel-Positionen der beiden Handles im Frame-Raum.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HandlePositions {
    /// Begin-Handle (x1, y1)
    pub begin: Vec2,
    /// End-Handle (x2, y2)
    pub end: Vec2,
}

impl HandlePositions {
    /// Position eines Handles.
    pub fn get(&self, handle: Handle) -> Vec2 {
        match handle {
            Handle::Begin => self.begin,
            Handle::End => self.end,
        }
    }

    /// Kopie mit ersetzter Position eines Handles.
    pub fn with(mut self, handle: Handle, pos: Vec2) -> Self {
        match handle {
            Handle::Begin => self.begin = pos,
            Handle::End => self.end = pos,
        }
        self
    }
}

/// Einer der beiden ziehbaren Steuerpunkte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    Begin,
    End,
}

/// Normalisierter Wert → Frame-Pixel.
///
/// `x = FRAME_WIDTH · x`, `y = FRAME_HEIGHT − FRAME_HEIGHT · y`
pub fn value_to_pixel(value: &BezierValue) -> HandlePositions {
    let [x1, y1, x2, y2] = value.components();
    HandlePositions {
        begin: Vec2::new(FRAME_WIDTH * x1, FRAME_HEIGHT - FRAME_HEIGHT * y1),
        end: Vec2::new(FRAME_WIDTH * x2, FRAME_HEIGHT - FRAME_HEIGHT * y2),
    }
}

/// Frame-Pixel → normalisierter Wert, jede Komponente auf 2 Nachkommastellen gerundet.
pub fn pixel_to_value(positions: &HandlePositions) -> BezierValue {
    let HandlePositions { begin, end } = *positions;
    BezierValue([
        round2(begin.x / FRAME_WIDTH),
        round2((FRAME_HEIGHT - begin.y) / FRAME_HEIGHT),
        round2(end.x / FRAME_WIDTH),
        round2((FRAME_HEIGHT - end.y) / FRAME_HEIGHT),
    ])
}

/// Rundet auf 2 Nachkommastellen; `-0` wird zu `0` normalisiert.
fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0 + 0.0
}

/// Addiert den Zeichenflächen-Offset: gerade Indizes (x) + OFFSET_LEFT, ungerade (y) + OFFSET_TOP.
pub fn to_absolute_points<const N: usize>(points: [f32; N]) -> [f32; N] {
    let mut out = points;
    for (index, point) in out.iter_mut().enumerate() {
        *point += if index % 2 == 0 { OFFSET_LEFT } else { OFFSET_TOP };
    }
    out
}

/// Rechnet eine element-relative Zeigerposition in den Frame-Raum um.
pub fn to_frame_space(offset: Vec2) -> Vec2 {
    offset - Vec2::new(OFFSET_LEFT, OFFSET_TOP)
}

/// Lineare Referenzlinie von unten links nach oben rechts (absolut).
pub fn linear_line_points() -> [f32; 4] {
    to_absolute_points([0.0, FRAME_HEIGHT, FRAME_WIDTH, 0.0])
}

/// Begin-Hebel: Frame-Ecke unten links → Begin-Handle (absolut).
pub fn begin_points(positions: &HandlePositions) -> [f32; 4] {
    to_absolute_points([0.0, FRAME_HEIGHT, positions.begin.x, positions.begin.y])
}

/// End-Hebel: Frame-Ecke oben rechts → End-Handle (absolut).
pub fn end_points(positions: &HandlePositions) -> [f32; 4] {
    to_absolute_points([FRAME_WIDTH, 0.0, positions.end.x, positions.end.y])
}

/// SVG-Pfad der Kurve: `M{start} C {begin-handle}, {end-handle}, {ende}`.
pub fn path_data(positions: &HandlePositions) -> String {
    let [x1, y1, x2, y2] = begin_points(positions);
    let [x3, y3, x4, y4] = end_points(positions);
    format!("M{x1} {y1} C {x2} {y2}, {x4} {y4}, {x3} {y3}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_value_to_pixel_inverts_y() {
        let positions = value_to_pixel(&BezierValue::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(positions.begin, Vec2::new(0.0, FRAME_HEIGHT));
        assert_eq!(positions.end, Vec2::new(FRAME_WIDTH, 0.0));
    }

    #[test]
    fn test_round_trip_within_tolerance() {
        let mut samples = Vec::new();
        for i in 0..=20 {
            for j in 0..=20 {
                let a = i as f32 * 0.1;
                let b = j as f32 * 0.1;
                samples.push(BezierValue::new(a, b, 2.0 - a, 2.0 - b));
            }
        }
        for value in samples {
            let back = pixel_to_value(&value_to_pixel(&value));
            for (orig, rt) in value.components().iter().zip(back.components().iter()) {
                assert_abs_diff_eq!(*orig, *rt, epsilon = 0.01);
            }
        }
    }

    #[test]
    fn test_pixel_to_value_rounds_to_two_decimals() {
        let positions = HandlePositions {
            begin: Vec2::new(50.0, 100.0),
            end: Vec2::new(99.0, 3.0),
        };
        let value = pixel_to_value(&positions);
        // 50/136 = 0.3676…, (136-100)/136 = 0.2647…
        assert_eq!(value.x1(), 0.37);
        assert_eq!(value.y1(), 0.26);
        assert_eq!(value.x2(), 0.73);
        assert_eq!(value.y2(), 0.98);
    }

    #[test]
    fn test_pixel_to_value_overshoot_below_frame() {
        let positions = HandlePositions {
            begin: Vec2::new(0.0, FRAME_HEIGHT + 68.0),
            end: Vec2::new(FRAME_WIDTH, -68.0),
        };
        let value = pixel_to_value(&positions);
        assert_eq!(value.components(), [0.0, -0.5, 1.0, 1.5]);
    }

    #[test]
    fn test_no_negative_zero() {
        let positions = HandlePositions {
            begin: Vec2::new(-0.1, FRAME_HEIGHT + 0.1),
            end: Vec2::new(FRAME_WIDTH, 0.0),
        };
        let value = pixel_to_value(&positions);
        assert_eq!(value.to_string(), "cubic-bezier(0, 0, 1, 1)");
    }

    #[test]
    fn test_absolute_points_offsets() {
        assert_eq!(
            to_absolute_points([1.0, 2.0, 3.0, 4.0]),
            [8.0, 59.0, 10.0, 61.0]
        );
        assert_eq!(linear_line_points(), [7.0, 193.0, 143.0, 57.0]);
    }

    #[test]
    fn test_to_frame_space_subtracts_offsets() {
        assert_eq!(to_frame_space(Vec2::new(7.0, 57.0)), Vec2::ZERO);
        assert_eq!(to_frame_space(Vec2::new(10.0, 50.0)), Vec2::new(3.0, -7.0));
    }

    #[test]
    fn test_path_data_linear() {
        let positions = value_to_pixel(&BezierValue::LINEAR);
        assert_eq!(path_data(&positions), "M7 193 C 7 193, 143 57, 143 57");
    }

    #[test]
    fn test_path_data_uses_begin_then_end_handle() {
        let positions = HandlePositions {
            begin: Vec2::new(68.0, 136.0),
            end: Vec2::new(68.0, 0.0),
        };
        assert_eq!(path_data(&positions), "M7 193 C 75 193, 75 57, 143 57");
    }

    #[test]
    fn test_handle_with_replaces_only_one() {
        let positions = HandlePositions::default().with(Handle::End, Vec2::new(5.0, 6.0));
        assert_eq!(positions.get(Handle::Begin), Vec2::ZERO);
        assert_eq!(positions.get(Handle::End), Vec2::new(5.0, 6.0));
    }
}
