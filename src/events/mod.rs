mod pump;
mod types;

pub use pump::{EventPump, NotificationHandle};
pub use types::{EngineNotification, MenuAction, PresentationEvent, WindowAction};
