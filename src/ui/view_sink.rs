use std::time::Duration;

/// What the play/pause control should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayAffordance {
    Playing,
    Paused,
    Stopped,
}

/// Write-only surface of the toolkit-bound window chrome.
///
/// The controller pushes derived state through this trait; nothing flows
/// back into the state machine. One concrete adapter per target toolkit.
pub trait ViewSink: Send {
    fn set_play_affordance(&mut self, affordance: PlayAffordance);
    fn update_time_indicator(&mut self, position: Duration, duration: Duration);
    fn update_volume_indicator(&mut self, volume: f64);
    fn set_video_surface_enabled(&mut self, enabled: bool);
    fn set_fullscreen_chrome_visible(&mut self, visible: bool);
    fn set_window_title(&mut self, title: &str);
}
