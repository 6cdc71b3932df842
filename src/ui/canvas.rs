//! Zeichnet Editor-Frame, Kurve, Hebel und Vorschau-Bahn aus der RenderScene.

use crate::core::{FRAME_HEIGHT, FRAME_WIDTH, OFFSET_LEFT, OFFSET_TOP};
use crate::shared::RenderScene;

/// Größe des Editor-Elements (Frame plus Zeichenflächen-Rand für Overshoot).
pub const EDITOR_SIZE: egui::Vec2 = egui::Vec2::new(
    FRAME_WIDTH + 2.0 * OFFSET_LEFT,
    FRAME_HEIGHT + 2.0 * OFFSET_TOP,
);

/// Radius des animierten Vorschau-Elements (px)
const SPRITE_RADIUS: f32 = 8.0;
/// Radius der Trace-Punkte (px)
const TRACE_RADIUS: f32 = 1.5;

const GRID_COLOR: egui::Color32 = egui::Color32::from_gray(70);
const LINEAR_COLOR: egui::Color32 = egui::Color32::from_gray(110);

/// Höhe der Vorschau-Bahn für eine Bahnbreite.
pub fn preview_track_size(track_width: f32) -> egui::Vec2 {
    egui::vec2(track_width + 2.0 * SPRITE_RADIUS, 4.0 * SPRITE_RADIUS)
}

/// Wandelt `[r, g, b, a]` (0.0 – 1.0) in eine egui-Farbe.
pub fn to_color32(color: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (color[0] * 255.0) as u8,
        (color[1] * 255.0) as u8,
        (color[2] * 255.0) as u8,
        (color[3] * 255.0) as u8,
    )
}

/// Zeichnet den Kurven-Editor in `rect` (Ursprung = Element-Ursprung).
pub fn paint_editor(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    let at = |x: f32, y: f32| rect.min + egui::vec2(x, y);
    let options = &scene.options;

    // Einheitsquadrat
    let frame_rect = egui::Rect::from_min_size(
        at(OFFSET_LEFT, OFFSET_TOP),
        egui::vec2(FRAME_WIDTH, FRAME_HEIGHT),
    );
    painter.rect_stroke(
        frame_rect,
        0.0,
        egui::Stroke::new(1.0, GRID_COLOR),
        egui::StrokeKind::Inside,
    );

    let [lx0, ly0, lx1, ly1] = scene.linear_line;
    painter.line_segment(
        [at(lx0, ly0), at(lx1, ly1)],
        egui::Stroke::new(1.0, LINEAR_COLOR),
    );

    let begin_color = to_color32(options.handle_color_begin);
    let end_color = to_color32(options.handle_color_end);
    let [bx0, by0, bx1, by1] = scene.begin_points;
    let [ex0, ey0, ex1, ey1] = scene.end_points;

    // Hebel
    painter.line_segment([at(bx0, by0), at(bx1, by1)], egui::Stroke::new(1.0, begin_color));
    painter.line_segment([at(ex0, ey0), at(ex1, ey1)], egui::Stroke::new(1.0, end_color));

    // Kurve: Ecke unten links → Begin-Handle → End-Handle → Ecke oben rechts
    let curve = egui::epaint::CubicBezierShape::from_points_stroke(
        [at(bx0, by0), at(bx1, by1), at(ex1, ey1), at(ex0, ey0)],
        false,
        egui::Color32::TRANSPARENT,
        egui::Stroke::new(2.0, to_color32(options.curve_color)),
    );
    painter.add(curve);

    painter.circle_filled(at(bx1, by1), options.handle_radius_px, begin_color);
    painter.circle_filled(at(ex1, ey1), options.handle_radius_px, end_color);

    painter.text(
        at(OFFSET_LEFT, OFFSET_TOP / 2.0),
        egui::Align2::LEFT_CENTER,
        &scene.display_value,
        egui::FontId::proportional(13.0),
        egui::Color32::WHITE,
    );
}

/// Zeichnet die Vorschau-Bahn mit Trace-Punkten und animiertem Element.
pub fn paint_preview_track(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    let origin = egui::pos2(rect.min.x + SPRITE_RADIUS, rect.center().y);
    let track_width = scene.options.preview.track_width;

    painter.line_segment(
        [origin, origin + egui::vec2(track_width, 0.0)],
        egui::Stroke::new(1.0, GRID_COLOR),
    );

    for offset in scene.trace_offsets() {
        painter.circle_filled(
            origin + egui::vec2(offset, 0.0),
            TRACE_RADIUS,
            LINEAR_COLOR,
        );
    }

    if scene.preview.opacity > 0.0 {
        let color = to_color32(scene.options.curve_color).gamma_multiply(scene.preview.opacity);
        painter.circle_filled(
            origin + egui::vec2(scene.preview.translate_x, 0.0),
            SPRITE_RADIUS,
            color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_color32_scales_channels() {
        let color = to_color32([1.0, 0.0, 0.5, 1.0]);
        assert_eq!(color, egui::Color32::from_rgba_unmultiplied(255, 0, 127, 255));
    }

    #[test]
    fn test_editor_size_includes_margins() {
        assert_eq!(EDITOR_SIZE, egui::vec2(150.0, 250.0));
    }
}
