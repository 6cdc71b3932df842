//! Statischer Preset-Katalog: drei Easing-Familien mit je sechs benannten Kurven.
//!
//! Index 0 jeder Familie ist die CSS-definierte Kurve gleichen Namens.

use super::BezierValue;

/// Easing-Familie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetCategory {
    EaseInOut,
    EaseIn,
    EaseOut,
}

impl PresetCategory {
    /// Alle Familien in Anzeige-Reihenfolge.
    pub const ALL: [PresetCategory; 3] = [Self::EaseInOut, Self::EaseIn, Self::EaseOut];

    /// CSS-Name der Familie.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EaseInOut => "ease-in-out",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
        }
    }

    /// Position in `ALL`.
    pub fn index(&self) -> usize {
        match self {
            Self::EaseInOut => 0,
            Self::EaseIn => 1,
            Self::EaseOut => 2,
        }
    }
}

/// Benannte Kurve im Katalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub value: BezierValue,
}

const fn preset(name: &'static str, x1: f32, y1: f32, x2: f32, y2: f32) -> Preset {
    Preset {
        name,
        value: BezierValue::new(x1, y1, x2, y2),
    }
}

static EASE_IN_OUT: [Preset; 6] = [
    preset("ease-in-out", 0.42, 0.0, 0.58, 1.0),
    preset("In Out · Sine", 0.45, 0.05, 0.55, 0.95),
    preset("In Out · Quadratic", 0.46, 0.03, 0.52, 0.96),
    preset("In Out · Cubic", 0.65, 0.05, 0.36, 1.0),
    preset("Fast Out, Slow In", 0.4, 0.0, 0.2, 1.0),
    preset("In Out · Back", 0.68, -0.55, 0.27, 1.55),
];

static EASE_IN: [Preset; 6] = [
    preset("ease-in", 0.42, 0.0, 1.0, 1.0),
    preset("In · Sine", 0.47, 0.0, 0.75, 0.72),
    preset("In · Quadratic", 0.55, 0.09, 0.68, 0.53),
    preset("In · Cubic", 0.55, 0.06, 0.68, 0.19),
    preset("In · Back", 0.6, -0.28, 0.74, 0.05),
    preset("Fast Out, Linear In", 0.4, 0.0, 1.0, 1.0),
];

static EASE_OUT: [Preset; 6] = [
    preset("ease-out", 0.0, 0.0, 0.58, 1.0),
    preset("Out · Sine", 0.39, 0.58, 0.57, 1.0),
    preset("Out · Quadratic", 0.25, 0.46, 0.45, 0.94),
    preset("Out · Cubic", 0.22, 0.61, 0.36, 1.0),
    preset("Linear Out, Slow In", 0.0, 0.0, 0.2, 1.0),
    preset("Out · Back", 0.18, 0.89, 0.32, 1.28),
];

/// Read-only Katalog: Familie → geordnete Preset-Liste.
#[derive(Debug, Clone, Copy)]
pub struct PresetCatalog {
    lists: [&'static [Preset]; 3],
}

impl PresetCatalog {
    /// Der eingebaute Katalog.
    pub fn builtin() -> Self {
        Self {
            lists: [&EASE_IN_OUT, &EASE_IN, &EASE_OUT],
        }
    }

    /// Katalog aus eigenen Listen (Reihenfolge wie `PresetCategory::ALL`).
    ///
    /// Jede Liste muss mindestens einen Eintrag enthalten.
    pub fn from_lists(lists: [&'static [Preset]; 3]) -> Self {
        Self { lists }
    }

    /// Presets einer Familie.
    pub fn list(&self, category: PresetCategory) -> &'static [Preset] {
        self.lists[category.index()]
    }

    /// Preset an Position `index`, falls vorhanden.
    pub fn get(&self, category: PresetCategory, index: usize) -> Option<&'static Preset> {
        self.list(category).get(index)
    }

    /// Sucht ein Preset, dessen Wert innerhalb `epsilon` mit `value` übereinstimmt.
    pub fn find(&self, value: &BezierValue, epsilon: f32) -> Option<(PresetCategory, usize)> {
        PresetCategory::ALL.iter().find_map(|&category| {
            self.list(category)
                .iter()
                .position(|p| p.value.approx_eq(value, epsilon))
                .map(|index| (category, index))
        })
    }
}

impl Default for PresetCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
