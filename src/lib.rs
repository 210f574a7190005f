// Presentation-state coordination core for a media player shell.
// The demo binary in src/main.rs wires it to a simulated engine.

pub mod config;
pub mod events;
pub mod models;
pub mod player;
pub mod ui;
pub mod utils;

#[cfg(test)]
mod test_utils;

pub use config::Config;
pub use events::{EventPump, NotificationHandle, PresentationEvent};
pub use ui::PlaybackPresentationController;
pub use ui::main_window::{PlaybackState, WindowMode};
pub use utils::UiError;
