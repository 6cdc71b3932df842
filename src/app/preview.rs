//! Vorschau-Animation: Bewegungs- und Ausblendphase über eine Bahn.
//!
//! Ablauf pro Auslösung:
//! 1. `trigger`: laufende Animation abbrechen, Wert einfrieren, Traces berechnen,
//!    ersten Frame anfordern
//! 2. erster Frame: Startzeit setzen, Element sichtbar machen
//! 3. Folge-Frames: `translate_x = track_width · easing(elapsed / move)`,
//!    danach Ausblenden über `fade_out`
//! 4. Frame nach Ablauf der Gesamtdauer: Reset auf Ursprung, keine weiteren Frames
//!
//! Aufgeteilt in:
//! - `scheduler`: FrameScheduler-Trait und deterministische FrameQueue

pub mod scheduler;

pub use scheduler::{FrameHandle, FrameQueue, FrameScheduler};

use crate::core::{BezierValue, CubicBezierEasing};
use crate::shared::{PreviewTiming, PreviewVisual};

/// Vorschau-Animator (idle → starting → running → idle).
#[derive(Debug, Clone)]
pub struct PreviewAnimator {
    timing: PreviewTiming,
    /// Eingefrorener Wert der laufenden Vorschau
    value: BezierValue,
    easing: CubicBezierEasing,
    traces: Vec<f32>,
    /// Angeforderter, noch nicht gelieferter Frame
    frame: Option<FrameHandle>,
    is_running: bool,
    /// Zeitstempel des ersten Frames (ms)
    start_time: Option<f64>,
    visual: PreviewVisual,
    target_attached: bool,
}

impl PreviewAnimator {
    /// Erstellt einen Animator im Idle-Zustand.
    pub fn new(timing: PreviewTiming) -> Self {
        Self {
            timing: timing.sanitized(),
            value: BezierValue::LINEAR,
            easing: CubicBezierEasing::new(&BezierValue::LINEAR),
            traces: Vec::new(),
            frame: None,
            is_running: false,
            start_time: None,
            visual: PreviewVisual::HIDDEN,
            target_attached: false,
        }
    }

    /// Zeitparameter ändern (wirkt ab der nächsten Auslösung).
    pub fn set_timing(&mut self, timing: PreviewTiming) {
        self.timing = timing.sanitized();
    }

    /// Aktuelle Zeitparameter.
    pub fn timing(&self) -> &PreviewTiming {
        &self.timing
    }

    /// Meldet das Vorschau-Element als vorhanden.
    pub fn attach_target(&mut self) {
        self.target_attached = true;
    }

    /// Entfernt das Vorschau-Element; eine laufende Animation wird abgebrochen.
    pub fn detach_target(&mut self, scheduler: &mut dyn FrameScheduler) {
        self.target_attached = false;
        self.stop(scheduler);
    }

    /// True wenn ein Vorschau-Element angehängt ist.
    pub fn has_target(&self) -> bool {
        self.target_attached
    }

    /// Eingefrorener Wert der letzten Auslösung.
    pub fn value(&self) -> BezierValue {
        self.value
    }

    /// Trace-Punkte der letzten Auslösung (`trace_count + 1` Werte).
    pub fn traces(&self) -> &[f32] {
        &self.traces
    }

    /// Sichtbarer Zustand des Vorschau-Elements.
    pub fn visual(&self) -> PreviewVisual {
        self.visual
    }

    /// True solange die Animation läuft.
    pub fn is_running(&self) -> bool {
        self.is_running
    }

    /// Angeforderter Frame, falls vorhanden.
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.frame
    }

    /// Startet die Vorschau für `value`; eine laufende Vorschau wird abgebrochen.
    pub fn trigger(&mut self, value: BezierValue, scheduler: &mut dyn FrameScheduler) {
        if let Some(handle) = self.frame.take() {
            scheduler.cancel_frame(handle);
            log::debug!("Laufende Vorschau abgebrochen (Frame {})", handle.id());
        }

        self.value = value;
        self.easing = CubicBezierEasing::new(&value);
        self.traces = self.easing.trace(self.timing.trace_count);
        self.is_running = true;
        self.start_time = None;
        self.frame = Some(scheduler.request_frame());

        log::debug!("Vorschau gestartet: {}", value);
    }

    /// Bricht die Vorschau sofort ab und setzt das Element zurück.
    pub fn stop(&mut self, scheduler: &mut dyn FrameScheduler) {
        if let Some(handle) = self.frame.take() {
            scheduler.cancel_frame(handle);
        }
        self.is_running = false;
        self.teardown();
    }

    /// Verarbeitet einen gelieferten Frame (`now` in ms, monoton).
    ///
    /// Frames, die nicht dem zuletzt angeforderten entsprechen, werden ignoriert.
    pub fn on_frame(&mut self, handle: FrameHandle, now: f64, scheduler: &mut dyn FrameScheduler) {
        if self.frame != Some(handle) {
            return;
        }
        self.frame = None;

        if self.start_time.is_none() {
            if !self.target_attached {
                log::debug!("Kein Vorschau-Element angehängt, Vorschau entfällt");
                self.is_running = false;
                return;
            }
            self.start_time = Some(now);
            self.visual.opacity = 1.0;
        }

        self.draw(now, scheduler);
    }

    fn draw(&mut self, now: f64, scheduler: &mut dyn FrameScheduler) {
        let Some(start_time) = self.start_time else {
            return;
        };
        if !self.is_running {
            self.teardown();
            return;
        }

        let PreviewTiming {
            move_duration_ms,
            fade_out_duration_ms,
            track_width,
            ..
        } = self.timing;
        let total = self.timing.total_duration_ms();
        let elapsed = now - start_time;

        if elapsed >= total {
            self.is_running = false;
        }

        if elapsed <= move_duration_ms {
            let ratio = (elapsed / move_duration_ms) as f32;
            self.visual.translate_x = track_width * self.easing.ease(ratio);
        }

        if elapsed >= total - fade_out_duration_ms {
            let fade_ratio = ((elapsed - move_duration_ms) / fade_out_duration_ms) as f32;
            self.visual.opacity = (1.0 - fade_ratio).clamp(0.0, 1.0);
        }

        self.frame = Some(scheduler.request_frame());
    }

    fn teardown(&mut self) {
        self.visual = PreviewVisual::HIDDEN;
        self.frame = None;
        self.start_time = None;
        log::debug!("Vorschau beendet");
    }
}

impl Default for PreviewAnimator {
    fn default() -> Self {
        Self::new(PreviewTiming::default())
    }
}
