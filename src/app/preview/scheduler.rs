//! Frame-Scheduling für die Vorschau-Animation.
//!
//! Der Animator fordert Frames über `FrameScheduler` an und kann sie wieder
//! abbrechen. Der Host liefert fällige Frames mit einem monotonen Zeitstempel
//! zurück (`PreviewAnimator::on_frame`).

/// Kennung eines angeforderten Frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

impl FrameHandle {
    /// Roh-ID (für Logging).
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Abbrechbares „nächsten Frame anfordern“.
pub trait FrameScheduler {
    /// Fordert einen Frame an.
    fn request_frame(&mut self) -> FrameHandle;
    /// Bricht einen angeforderten Frame ab (unbekannte Handles werden ignoriert).
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Deterministische Warteschlange angeforderter Frames.
///
/// Der Host entnimmt pro Display-Frame alle fälligen Handles mit `take_due`.
#[derive(Debug, Default)]
pub struct FrameQueue {
    next_id: u64,
    pending: Vec<FrameHandle>,
}

impl FrameQueue {
    /// Erstellt eine leere Warteschlange.
    pub fn new() -> Self {
        Self::default()
    }

    /// True wenn mindestens ein Frame angefordert ist.
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Anzahl angeforderter Frames.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Entnimmt alle fälligen Frames in Anforderungsreihenfolge.
    pub fn take_due(&mut self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.pending)
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.retain(|h| *h != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_and_take_due() {
        let mut queue = FrameQueue::new();
        let a = queue.request_frame();
        let b = queue.request_frame();
        assert_ne!(a, b);
        assert_eq!(queue.pending_count(), 2);

        assert_eq!(queue.take_due(), vec![a, b]);
        assert!(!queue.has_pending());
    }

    #[test]
    fn test_cancel_removes_only_given_handle() {
        let mut queue = FrameQueue::new();
        let a = queue.request_frame();
        let b = queue.request_frame();
        queue.cancel_frame(a);
        assert_eq!(queue.take_due(), vec![b]);

        // Unbekanntes Handle: kein Fehler
        queue.cancel_frame(a);
        assert!(!queue.has_pending());
    }
}
