use super::types::{EngineNotification, MenuAction, PresentationEvent, WindowAction};
use crate::models::LibraryItemId;
use crate::ui::main_window::PlaybackPresentationController;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::mpsc;
use tracing::trace;

/// Engine-side half of the marshalling seam.
///
/// Cloneable and thread-safe; the playback engine notifies from its own
/// execution context through this handle. Sequence numbers are stamped
/// here, at the source, so ordering is fixed before anything crosses the
/// channel.
#[derive(Debug, Clone)]
pub struct NotificationHandle {
    tx: mpsc::UnboundedSender<EngineNotification>,
    seq: Arc<AtomicU64>,
}

impl NotificationHandle {
    pub fn notify(&self, event: PresentationEvent) {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        let notification = EngineNotification::new(seq, event);
        trace!(id = %notification.id, seq, "queueing notification");
        // A closed channel means the UI side is gone; nothing left to update.
        let _ = self.tx.send(notification);
    }

    pub fn video_started(&self) {
        self.notify(PresentationEvent::VideoStartedOrStopped { started: true });
    }

    pub fn video_stopped(&self) {
        self.notify(PresentationEvent::VideoStartedOrStopped { started: false });
    }

    pub fn playlist_item_changed(&self, item: LibraryItemId) {
        self.notify(PresentationEvent::PlaylistItemChanged { item });
    }

    pub fn menu_action(&self, action: MenuAction) {
        self.notify(PresentationEvent::UserMenuAction(action));
    }

    pub fn window_action(&self, action: WindowAction) {
        self.notify(PresentationEvent::UserWindowAction(action));
    }
}

/// UI-thread half of the marshalling seam.
///
/// Notifications issued in order A-then-B are applied in that order; a
/// notification whose sequence number is not greater than the last
/// applied one is discarded instead of applied late. The pump never
/// blocks the sender: while a modal dialog suspends the host loop,
/// notifications simply queue and are applied on the next drain.
#[derive(Debug)]
pub struct EventPump {
    rx: mpsc::UnboundedReceiver<EngineNotification>,
    last_seq: u64,
}

impl EventPump {
    pub fn new() -> (NotificationHandle, EventPump) {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = NotificationHandle {
            tx,
            seq: Arc::new(AtomicU64::new(0)),
        };
        (handle, EventPump { rx, last_seq: 0 })
    }

    /// Apply everything currently queued. Returns the number of
    /// notifications applied (discarded stale ones do not count).
    pub fn drain(&mut self, controller: &mut PlaybackPresentationController) -> usize {
        let mut applied = 0;
        while let Ok(notification) = self.rx.try_recv() {
            if self.apply(controller, notification) {
                applied += 1;
            }
        }
        applied
    }

    /// Wait for the next notification and apply it. Returns `false` once
    /// every `NotificationHandle` has been dropped.
    pub async fn dispatch_next(
        &mut self,
        controller: &mut PlaybackPresentationController,
    ) -> bool {
        match self.rx.recv().await {
            Some(notification) => {
                self.apply(controller, notification);
                true
            }
            None => false,
        }
    }

    fn apply(
        &mut self,
        controller: &mut PlaybackPresentationController,
        notification: EngineNotification,
    ) -> bool {
        if notification.seq <= self.last_seq {
            trace!(
                id = %notification.id,
                seq = notification.seq,
                last = self.last_seq,
                "discarding stale notification"
            );
            return false;
        }
        self.last_seq = notification.seq;
        controller.handle(notification.event);
        true
    }
}
