//! Editor-Input-Handling: Maustaste und Zeigerbewegung → AppIntent.
//!
//! Das Drücken zählt nur innerhalb des Editor-Elements; Bewegung und
//! Loslassen werden danach fensterweit verfolgt.

use crate::app::AppIntent;
use glam::Vec2;

/// Verwaltet den Input-Zustand des Kurven-Editors.
#[derive(Debug, Default)]
pub struct InputState {
    pressed: bool,
    last_pos: Option<egui::Pos2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            pressed: false,
            last_pos: None,
        }
    }

    /// Sammelt Zeiger-Events für das Editor-Element `rect` und gibt AppIntents zurück.
    pub fn collect_editor_events(&mut self, ui: &egui::Ui, rect: egui::Rect) -> Vec<AppIntent> {
        let (pressed, released, press_pos, latest_pos) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.press_origin(),
                i.pointer.latest_pos(),
            )
        });

        let mut events = Vec::new();

        if pressed {
            if let Some(pos) = press_pos.filter(|pos| rect.contains(*pos)) {
                self.pressed = true;
                self.last_pos = Some(pos);
                events.push(pointer_pressed(rect, pos));
            }
        } else if self.pressed {
            if let Some(pos) = latest_pos.filter(|pos| Some(*pos) != self.last_pos) {
                self.last_pos = Some(pos);
                events.push(AppIntent::PointerMoved { page: to_vec2(pos) });
            }
        }

        if released && self.pressed {
            self.pressed = false;
            self.last_pos = None;
            events.push(AppIntent::PointerReleased);
        }

        events
    }
}

/// Baut den Press-Intent: Offset relativ zum Element, Fensterposition als Seitenposition.
fn pointer_pressed(rect: egui::Rect, pos: egui::Pos2) -> AppIntent {
    AppIntent::PointerPressed {
        offset: to_vec2(pos) - to_vec2(rect.min),
        page: to_vec2(pos),
    }
}

fn to_vec2(pos: egui::Pos2) -> Vec2 {
    Vec2::new(pos.x, pos.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_pressed_splits_offset_and_page() {
        let rect = egui::Rect::from_min_size(egui::pos2(100.0, 40.0), egui::vec2(150.0, 250.0));
        match pointer_pressed(rect, egui::pos2(117.0, 107.0)) {
            AppIntent::PointerPressed { offset, page } => {
                assert_eq!(offset, Vec2::new(17.0, 67.0));
                assert_eq!(page, Vec2::new(117.0, 107.0));
            }
            other => panic!("Unerwarteter Intent: {other:?}"),
        }
    }
}
