//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::{linear_line_points, PresetCategory};
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let cursors = PresetCategory::ALL.map(|category| state.presets.cursor(category));

    RenderScene {
        path_data: state.curve.path_data(),
        linear_line: linear_line_points(),
        begin_points: state.curve.begin_points(),
        end_points: state.curve.end_points(),
        display_value: state.display_value(),
        traces: state.preview.traces().to_vec(),
        preview: state.preview.visual(),
        preview_running: state.preview.is_running(),
        active_category: state.presets.active_category(),
        preset_cursors: cursors,
        options: state.options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use crate::core::{BezierValue, PresetCategory};
    use approx::assert_relative_eq;

    #[test]
    fn build_reflects_live_curve() {
        let mut state = AppState::new();
        state.curve.init(BezierValue::LINEAR);

        let scene = build(&state);
        assert_eq!(scene.path_data, "M7 193 C 7 193, 143 57, 143 57");
        assert_eq!(scene.linear_line, [7.0, 193.0, 143.0, 57.0]);
        assert_eq!(scene.begin_points, [7.0, 193.0, 7.0, 193.0]);
        assert_eq!(scene.end_points, [143.0, 57.0, 143.0, 57.0]);
        assert_eq!(scene.display_value, "cubic-bezier(0, 0, 1, 1)");
        assert!(scene.traces.is_empty());
        assert!(!scene.preview_running);
    }

    #[test]
    fn build_uses_preset_label_and_cursors() {
        let mut state = AppState::new();
        let value = state.presets.apply(PresetCategory::EaseIn);
        if let Some(value) = value {
            state.curve.init(value);
        }
        state.presets.change(2);

        let scene = build(&state);
        assert_eq!(scene.active_category, Some(PresetCategory::EaseIn));
        assert_eq!(scene.preset_cursors, [0, 2, 0]);
        assert_eq!(scene.display_value, "In · Quadratic");
    }

    #[test]
    fn build_exposes_trace_offsets_after_trigger() {
        let mut state = AppState::new();
        state.curve.init(BezierValue::LINEAR);
        state.preview.trigger(state.curve.value(), &mut state.frames);

        let scene = build(&state);
        let offsets: Vec<f32> = scene.trace_offsets().collect();
        assert_eq!(offsets.len(), 21);
        assert_relative_eq!(offsets[10], 109.0, epsilon = 1e-3);
        assert_relative_eq!(offsets[20], 218.0);
    }
}
