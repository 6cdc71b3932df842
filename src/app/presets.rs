//! Preset-Auswahl: aktive Familie, Cursor je Familie und Anzeige-Labels.

use crate::core::{BezierValue, PresetCatalog, PresetCategory};

/// Auswahlzustand über dem Preset-Katalog.
#[derive(Debug, Clone)]
pub struct PresetSelector {
    catalog: PresetCatalog,
    active: Option<PresetCategory>,
    cursors: [usize; 3],
    /// CSS-definierter Name (nur bei Index 0 einer Familie)
    css_label: Option<&'static str>,
    /// Name wie in Browser-Devtools
    devtool_label: Option<&'static str>,
}

impl PresetSelector {
    /// Erstellt einen Selector ohne aktive Familie.
    pub fn new(catalog: PresetCatalog) -> Self {
        Self {
            catalog,
            active: None,
            cursors: [0; 3],
            css_label: None,
            devtool_label: None,
        }
    }

    /// Zugrunde liegender Katalog.
    pub fn catalog(&self) -> &PresetCatalog {
        &self.catalog
    }

    /// Aktive Familie.
    pub fn active_category(&self) -> Option<PresetCategory> {
        self.active
    }

    /// Cursor einer Familie.
    pub fn cursor(&self, category: PresetCategory) -> usize {
        self.cursors[category.index()]
    }

    /// CSS-Label (z.B. `ease-in`).
    pub fn css_label(&self) -> Option<&'static str> {
        self.css_label
    }

    /// Devtools-Label (z.B. `In · Cubic`).
    pub fn devtool_label(&self) -> Option<&'static str> {
        self.devtool_label
    }

    /// Wählt das Preset am aktuellen Cursor der Familie.
    ///
    /// Gibt den Wert zurück, der in die Live-Kurve übernommen werden soll.
    pub fn apply(&mut self, category: PresetCategory) -> Option<BezierValue> {
        let index = self.cursor(category);
        let preset = self.catalog.get(category, index)?;

        self.active = Some(category);
        self.devtool_label = Some(preset.name);
        self.css_label = (index == 0).then_some(category.as_str());

        log::debug!("Preset angewendet: {} [{}]", category.as_str(), preset.name);
        Some(preset.value)
    }

    /// Blättert innerhalb der aktiven Familie um `delta` weiter (zyklisch).
    ///
    /// Ohne aktive Familie: `None`, nichts ändert sich.
    pub fn change(&mut self, delta: i32) -> Option<BezierValue> {
        let category = self.active?;
        let list = self.catalog.list(category);
        if list.is_empty() {
            return None;
        }

        let len = list.len() as i64;
        let next = (self.cursor(category) as i64 + i64::from(delta)).rem_euclid(len) as usize;
        let preset = &list[next];

        self.cursors[category.index()] = next;
        self.devtool_label = Some(preset.name);
        self.css_label = (next == 0).then_some(preset.name);

        log::debug!("Preset gewechselt: {} [{}]", category.as_str(), preset.name);
        Some(preset.value)
    }

    /// Hebt die Auswahl auf (Cursor bleiben erhalten).
    pub fn reset(&mut self) {
        self.active = None;
        self.css_label = None;
        self.devtool_label = None;
    }

    /// Übernimmt ein Katalog-Preset als Auswahl, falls `value` einem entspricht.
    ///
    /// Setzt die Labels wie `apply`, liefert aber keinen Wert zurück (die Kurve
    /// hat ihn bereits). Gibt `true` bei einem Treffer zurück.
    pub fn match_value(&mut self, value: &BezierValue, epsilon: f32) -> bool {
        let Some((category, index)) = self.catalog.find(value, epsilon) else {
            return false;
        };
        self.cursors[category.index()] = index;
        self.apply(category).is_some()
    }

    /// Anzeigetext: Devtools-Label, sonst CSS-Label, sonst `cubic-bezier(...)`.
    pub fn display_value(&self, live: &BezierValue) -> String {
        self.devtool_label
            .or(self.css_label)
            .map(str::to_owned)
            .unwrap_or_else(|| live.to_css())
    }
}

impl Default for PresetSelector {
    fn default() -> Self {
        Self::new(PresetCatalog::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_first_entry_sets_both_labels() {
        let mut selector = PresetSelector::default();
        let value = selector.apply(PresetCategory::EaseIn);

        assert_eq!(value, Some(BezierValue::new(0.42, 0.0, 1.0, 1.0)));
        assert_eq!(selector.active_category(), Some(PresetCategory::EaseIn));
        assert_eq!(selector.css_label(), Some("ease-in"));
        assert_eq!(selector.devtool_label(), Some("ease-in"));
    }

    #[test]
    fn test_apply_later_entry_clears_css_label() {
        let mut selector = PresetSelector::default();
        selector.apply(PresetCategory::EaseOut);
        selector.change(3);

        let value = selector.apply(PresetCategory::EaseOut);
        assert_eq!(value, Some(BezierValue::new(0.22, 0.61, 0.36, 1.0)));
        assert_eq!(selector.css_label(), None);
        assert_eq!(selector.devtool_label(), Some("Out · Cubic"));
    }

    #[test]
    fn test_change_without_category_is_noop() {
        let mut selector = PresetSelector::default();
        assert_eq!(selector.change(1), None);
        assert_eq!(selector.cursor(PresetCategory::EaseInOut), 0);
        assert_eq!(selector.devtool_label(), None);
    }

    #[test]
    fn test_change_wraps_forward_from_last() {
        let mut selector = PresetSelector::default();
        selector.apply(PresetCategory::EaseInOut);
        selector.change(5);
        assert_eq!(selector.cursor(PresetCategory::EaseInOut), 5);

        let value = selector.change(1);
        assert_eq!(selector.cursor(PresetCategory::EaseInOut), 0);
        assert_eq!(value, Some(BezierValue::new(0.42, 0.0, 0.58, 1.0)));
        assert_eq!(selector.css_label(), Some("ease-in-out"));
    }

    #[test]
    fn test_change_wraps_backward_from_first() {
        let mut selector = PresetSelector::default();
        selector.apply(PresetCategory::EaseInOut);

        let value = selector.change(-1);
        assert_eq!(selector.cursor(PresetCategory::EaseInOut), 5);
        assert_eq!(value, Some(BezierValue::new(0.68, -0.55, 0.27, 1.55)));
        assert_eq!(selector.css_label(), None);
        assert_eq!(selector.devtool_label(), Some("In Out · Back"));
    }

    #[test]
    fn test_cursors_are_independent_per_category() {
        let mut selector = PresetSelector::default();
        selector.apply(PresetCategory::EaseIn);
        selector.change(2);
        selector.apply(PresetCategory::EaseOut);

        assert_eq!(selector.cursor(PresetCategory::EaseIn), 2);
        assert_eq!(selector.cursor(PresetCategory::EaseOut), 0);
    }

    #[test]
    fn test_reset_clears_selection_but_keeps_cursors() {
        let mut selector = PresetSelector::default();
        selector.apply(PresetCategory::EaseIn);
        selector.change(2);
        selector.reset();

        assert_eq!(selector.active_category(), None);
        assert_eq!(selector.css_label(), None);
        assert_eq!(selector.devtool_label(), None);
        assert_eq!(selector.cursor(PresetCategory::EaseIn), 2);
    }

    #[test]
    fn test_display_value_fallback_chain() {
        let mut selector = PresetSelector::default();
        let live = BezierValue::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(selector.display_value(&live), "cubic-bezier(0.1, 0.2, 0.3, 0.4)");

        selector.apply(PresetCategory::EaseInOut);
        assert_eq!(selector.display_value(&live), "ease-in-out");

        selector.change(1);
        assert_eq!(selector.display_value(&live), "In Out · Sine");
    }

    #[test]
    fn test_match_value_selects_catalog_entry() {
        let mut selector = PresetSelector::default();
        assert!(selector.match_value(&BezierValue::new(0.4, 0.0, 1.0, 1.0), 1e-4));
        assert_eq!(selector.active_category(), Some(PresetCategory::EaseIn));
        assert_eq!(selector.cursor(PresetCategory::EaseIn), 5);
        assert_eq!(selector.devtool_label(), Some("Fast Out, Linear In"));
        assert_eq!(selector.css_label(), None);

        assert!(!selector.match_value(&BezierValue::new(0.3, 0.3, 0.3, 0.3), 1e-4));
    }
}
