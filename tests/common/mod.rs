use marquee::PlaybackPresentationController;
use marquee::player::{PlaybackEngine, VideoOutput};
use marquee::ui::view_sink::{PlayAffordance, ViewSink};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Everything the recording view saw, in call order per channel.
#[derive(Debug, Default)]
pub struct ViewLog {
    pub affordances: Vec<PlayAffordance>,
    pub titles: Vec<String>,
    pub surface: Vec<bool>,
    pub chrome: Vec<bool>,
}

pub struct RecordingView(pub Arc<Mutex<ViewLog>>);

impl ViewSink for RecordingView {
    fn set_play_affordance(&mut self, affordance: PlayAffordance) {
        self.0.lock().unwrap().affordances.push(affordance);
    }

    fn update_time_indicator(&mut self, _position: Duration, _duration: Duration) {}

    fn update_volume_indicator(&mut self, _volume: f64) {}

    fn set_video_surface_enabled(&mut self, enabled: bool) {
        self.0.lock().unwrap().surface.push(enabled);
    }

    fn set_fullscreen_chrome_visible(&mut self, visible: bool) {
        self.0.lock().unwrap().chrome.push(visible);
    }

    fn set_window_title(&mut self, title: &str) {
        self.0.lock().unwrap().titles.push(title.to_string());
    }
}

#[derive(Debug, Default)]
pub struct SilentEngine;

impl PlaybackEngine for SilentEngine {
    fn play(&self) {}

    fn pause(&self) {}

    fn position(&self) -> Duration {
        Duration::from_secs(5)
    }

    fn duration(&self) -> Duration {
        Duration::from_secs(90)
    }

    fn volume(&self) -> f64 {
        1.0
    }
}

/// Video output recording every write for exactly-once assertions.
#[derive(Debug, Default)]
pub struct RecordingOutput {
    pub writes: Mutex<Vec<u32>>,
}

impl VideoOutput for RecordingOutput {
    fn aspect_ratio(&self) -> u32 {
        self.writes.lock().unwrap().last().copied().unwrap_or(4)
    }

    fn set_aspect_ratio(&self, value: u32) {
        self.writes.lock().unwrap().push(value);
    }
}

pub fn controller_with_view() -> (PlaybackPresentationController, Arc<Mutex<ViewLog>>) {
    let log = Arc::new(Mutex::new(ViewLog::default()));
    let controller = PlaybackPresentationController::new(
        Arc::new(SilentEngine),
        Box::new(RecordingView(log.clone())),
        "Marquee",
    );
    (controller, log)
}
