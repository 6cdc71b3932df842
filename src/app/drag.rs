//! Drag-Logik für die beiden Kurven-Handles.
//!
//! Zustände: `idle` (keine Session) und `dragging(handle)`.
//! - `begin`: wählt das nähere Handle, setzt es auf die Zeigerposition
//! - `update`: verschiebt das Handle relativ zur Baseline um das Zeiger-Delta
//! - `end`: beendet die Session
//!
//! X wird immer auf [0, FRAME_WIDTH] begrenzt, Y bleibt frei (Overshoot).

use crate::core::{Handle, HandlePositions, FRAME_WIDTH};
use crate::shared::PointerDeltaMode;
use glam::Vec2;

/// Zustand während gedrückter Maustaste.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Gegriffenes Handle
    pub active: Handle,
    /// Seitenabsolute Zeigerposition beim Drücken
    pub origin: Vec2,
    /// Zuletzt angewendetes Delta
    pub last_delta: Vec2,
    /// Handle-Positionen zu Drag-Beginn (inkl. Einrasten auf den Zeiger)
    pub baseline: HandlePositions,
}

/// Ergebnis einer Zeigerbewegung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragUpdate {
    /// Keine aktive Session
    Ignored,
    /// Delta identisch zum letzten Frame, nichts neu zu berechnen
    Unchanged,
    /// Neue Handle-Positionen
    Moved(HandlePositions),
}

/// Zustandsautomat für das Ziehen der Handles.
#[derive(Debug, Default)]
pub struct DragController {
    session: Option<DragSession>,
    mode: PointerDeltaMode,
}

impl DragController {
    /// Erstellt einen Controller im Idle-Zustand.
    pub fn new(mode: PointerDeltaMode) -> Self {
        Self {
            session: None,
            mode,
        }
    }

    /// Setzt die Delta-Berechnung (wirkt ab dem nächsten Update).
    pub fn set_mode(&mut self, mode: PointerDeltaMode) {
        self.mode = mode;
    }

    /// Aktuelle Delta-Berechnung.
    pub fn mode(&self) -> PointerDeltaMode {
        self.mode
    }

    /// True während einer aktiven Session.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Gegriffenes Handle, falls ein Drag läuft.
    pub fn active_handle(&self) -> Option<Handle> {
        self.session.map(|s| s.active)
    }

    /// Aktive Session (read-only).
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Startet einen Drag.
    ///
    /// `pointer_frame` ist die Zeigerposition im Frame-Raum, `pointer_page` die
    /// seitenabsolute Position (Referenz für spätere Deltas). Gibt das gewählte
    /// Handle und die neuen Positionen zurück.
    pub fn begin(
        &mut self,
        pointer_frame: Vec2,
        pointer_page: Vec2,
        handles: &HandlePositions,
    ) -> (Handle, HandlePositions) {
        let active = nearest_handle(pointer_frame, handles);
        let snapped = handles.with(active, clamp_to_frame(pointer_frame));

        self.session = Some(DragSession {
            active,
            origin: pointer_page,
            last_delta: Vec2::ZERO,
            baseline: snapped,
        });
        log::debug!("Drag gestartet: {:?} bei {:?}", active, pointer_frame);

        (active, snapped)
    }

    /// Verarbeitet eine Zeigerbewegung (seitenabsolute Position).
    pub fn update(&mut self, pointer_page: Vec2) -> DragUpdate {
        let Some(session) = self.session.as_mut() else {
            return DragUpdate::Ignored;
        };

        let delta = pointer_delta(self.mode, session.origin, pointer_page);
        if delta == session.last_delta {
            return DragUpdate::Unchanged;
        }
        session.last_delta = delta;

        let moved = session.baseline.get(session.active) + delta;
        DragUpdate::Moved(
            session
                .baseline
                .with(session.active, clamp_to_frame(moved)),
        )
    }

    /// Beendet den Drag; ohne aktiven Drag ein No-op.
    ///
    /// Ob das Drag-Ende eine Vorschau auslöst, entscheidet das Intent-Mapping
    /// vorher über `is_dragging()`.
    pub fn end(&mut self) {
        if let Some(session) = self.session.take() {
            log::debug!("Drag beendet: {:?}", session.active);
        }
    }
}

/// Wählt das Handle mit geringerem Abstand; bei Gleichstand gewinnt `End`.
pub fn nearest_handle(pointer: Vec2, handles: &HandlePositions) -> Handle {
    if pointer.distance(handles.begin) < pointer.distance(handles.end) {
        Handle::Begin
    } else {
        Handle::End
    }
}

/// Begrenzt X auf die Frame-Breite, Y bleibt unverändert.
pub fn clamp_to_frame(pos: Vec2) -> Vec2 {
    Vec2::new(pos.x.clamp(0.0, FRAME_WIDTH), pos.y)
}

/// Zeiger-Delta zwischen Drag-Ursprung und aktueller Position.
pub fn pointer_delta(mode: PointerDeltaMode, origin: Vec2, current: Vec2) -> Vec2 {
    match mode {
        PointerDeltaMode::Corrected => current - origin,
        PointerDeltaMode::Legacy => {
            let inverted = origin - current;
            Vec2::new(-inverted.x.trunc() - 1.0, -inverted.y.trunc() - 1.0)
        }
    }
}
