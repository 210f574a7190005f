use crate::models::LibraryItemId;
use serde::{Deserialize, Serialize};

/// Menu-driven user intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuAction {
    Play,
    Pause,
}

/// Window-chrome-driven user intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowAction {
    ToggleFullscreen,
    DetachVideo,
    ResizedOrMoved,
}

/// The single channel through which state-relevant occurrences reach the
/// presentation controller. In-order delivery is the only ordering
/// guarantee; the controller ignores events that make no sense in its
/// current state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PresentationEvent {
    UserMenuAction(MenuAction),
    UserWindowAction(WindowAction),
    VideoStartedOrStopped { started: bool },
    PlaylistItemChanged { item: LibraryItemId },
}

/// Envelope for engine-side notifications crossing onto the UI thread.
///
/// `seq` is stamped at the sender; the pump discards anything at or below
/// the last applied sequence so a stale notification can never be applied
/// after a newer one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineNotification {
    pub id: String,
    pub seq: u64,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub event: PresentationEvent,
}

impl EngineNotification {
    pub fn new(seq: u64, event: PresentationEvent) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            seq,
            timestamp: chrono::Utc::now(),
            event,
        }
    }
}
