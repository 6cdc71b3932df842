//! Application State: zentrale Datenhaltung.

mod app_state;
mod curve;

pub use app_state::AppState;
pub use curve::CurveState;

/// UI-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct UiState {
    /// Text, den der Host in die Zwischenablage kopieren soll
    pub pending_clipboard: Option<String>,
    /// Temporäre Statusnachricht (z.B. Fehler beim Speichern der Optionen)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self {
            pending_clipboard: None,
            status_message: None,
        }
    }

    /// Entnimmt den zu kopierenden Text (einmalig).
    pub fn take_clipboard(&mut self) -> Option<String> {
        self.pending_clipboard.take()
    }

    /// Zeigt einen Fehler in der Statusleiste an.
    pub fn report_error(&mut self, error: &anyhow::Error) {
        self.status_message = Some(format!("Fehler: {error:#}"));
    }

    /// Entfernt die Statusnachricht.
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
