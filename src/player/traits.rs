use std::time::Duration;

/// Command and query surface of the external playback engine.
///
/// Commands are fire-and-forget; the engine reports the resulting state
/// changes back through the notification stream. The read accessors feed
/// the time and volume indicators. Implementations marshal internally;
/// the controller calls these on the UI thread and never awaits.
pub trait PlaybackEngine: Send + Sync {
    fn play(&self);
    fn pause(&self);
    fn position(&self) -> Duration;
    fn duration(&self) -> Duration;
    /// Current volume in `0.0..=1.0`.
    fn volume(&self) -> f64;
}

/// The video output whose aspect-ratio parameter the custom-aspect-ratio
/// interaction targets. Owned independently of the presentation layer;
/// the dialog reads the current value to seed its entry field, and only
/// the controller writes, only after an accepted result.
pub trait VideoOutput: Send + Sync {
    fn aspect_ratio(&self) -> u32;
    fn set_aspect_ratio(&self, value: u32);
}
