//! Normalisierter cubic-bezier Wert `[x1, y1, x2, y2]`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalisierte Steuerpunkte einer cubic-bezier() Timing-Funktion.
///
/// Reihenfolge: (beginX, beginY, endX, endY). X-Werte liegen üblicherweise
/// in [0, 1], Y-Werte dürfen für Overshoot („Back“-Easing) darüber hinausgehen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BezierValue(pub [f32; 4]);

impl BezierValue {
    /// Lineare Kurve (0, 0, 1, 1)
    pub const LINEAR: Self = Self([0.0, 0.0, 1.0, 1.0]);
    /// CSS `ease` (0.25, 0.1, 0.25, 1)
    pub const EASE: Self = Self([0.25, 0.1, 0.25, 1.0]);

    /// Erstellt einen Wert aus den vier Komponenten.
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self([x1, y1, x2, y2])
    }

    /// X des Begin-Handles
    pub fn x1(&self) -> f32 {
        self.0[0]
    }

    /// Y des Begin-Handles
    pub fn y1(&self) -> f32 {
        self.0[1]
    }

    /// X des End-Handles
    pub fn x2(&self) -> f32 {
        self.0[2]
    }

    /// Y des End-Handles
    pub fn y2(&self) -> f32 {
        self.0[3]
    }

    /// Komponenten als Array.
    pub fn components(&self) -> [f32; 4] {
        self.0
    }

    /// Komponentenweiser Vergleich mit Toleranz.
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    /// CSS-Schreibweise, z.B. `cubic-bezier(0.42, 0, 0.58, 1)`.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl Default for BezierValue {
    fn default() -> Self {
        Self::LINEAR
    }
}

impl From<[f32; 4]> for BezierValue {
    fn from(value: [f32; 4]) -> Self {
        Self(value)
    }
}

impl fmt::Display for BezierValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x1, y1, x2, y2] = self.0;
        write!(f, "cubic-bezier({x1}, {y1}, {x2}, {y2})")
    }
}
