#![cfg(test)]

use crate::player::{PlaybackEngine, VideoOutput};
use crate::ui::PlaybackPresentationController;
use crate::ui::library_item::ItemCell;
use crate::ui::view_sink::{PlayAffordance, ViewSink};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Everything a [`RecordingView`] saw, in call order per channel.
#[derive(Debug, Default)]
pub struct ViewLog {
    pub affordances: Vec<PlayAffordance>,
    pub titles: Vec<String>,
    pub surface: Vec<bool>,
    pub chrome: Vec<bool>,
    pub time_updates: Vec<(Duration, Duration)>,
    pub volume_updates: Vec<f64>,
}

/// ViewSink double that records every update for assertions.
pub struct RecordingView(pub Arc<Mutex<ViewLog>>);

impl ViewSink for RecordingView {
    fn set_play_affordance(&mut self, affordance: PlayAffordance) {
        self.0.lock().unwrap().affordances.push(affordance);
    }

    fn update_time_indicator(&mut self, position: Duration, duration: Duration) {
        self.0.lock().unwrap().time_updates.push((position, duration));
    }

    fn update_volume_indicator(&mut self, volume: f64) {
        self.0.lock().unwrap().volume_updates.push(volume);
    }

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

/// PlaybackEngine double with fixed readings and command counters.
#[derive(Debug, Default)]
pub struct StubEngine {
    play: AtomicUsize,
    pause: AtomicUsize,
}

impl StubEngine {
    pub fn play_calls(&self) -> usize {
        self.play.load(Ordering::SeqCst)
    }

    pub fn pause_calls(&self) -> usize {
        self.pause.load(Ordering::SeqCst)
    }
}

impl PlaybackEngine for StubEngine {
    fn play(&self) {
        self.play.fetch_add(1, Ordering::SeqCst);
    }

    fn pause(&self) {
        self.pause.fetch_add(1, Ordering::SeqCst);
    }

    fn position(&self) -> Duration {
        Duration::from_secs(42)
    }

    fn duration(&self) -> Duration {
        Duration::from_secs(120)
    }

    fn volume(&self) -> f64 {
        0.8
    }
}

/// VideoOutput double that records every write.
#[derive(Debug)]
pub struct CountingOutput {
    initial: u32,
    sets: Mutex<Vec<u32>>,
}

impl CountingOutput {
    pub fn new(initial: u32) -> Self {
        Self {
            initial,
            sets: Mutex::new(Vec::new()),
        }
    }

    pub fn set_values(&self) -> Vec<u32> {
        self.sets.lock().unwrap().clone()
    }
}

impl VideoOutput for CountingOutput {
    fn aspect_ratio(&self) -> u32 {
        self.sets
            .lock()
            .unwrap()
            .last()
            .copied()
            .unwrap_or(self.initial)
    }

    fn set_aspect_ratio(&self, value: u32) {
        self.sets.lock().unwrap().push(value);
    }
}

/// ItemCell double exposing its current visible fields.
#[derive(Debug, Default)]
pub struct RecordingCell {
    pub title: Option<String>,
    pub year: Option<u32>,
    pub size: Option<String>,
    pub artwork: Option<String>,
    pub clear_count: usize,
}

impl RecordingCell {
    pub fn visible_fields(&self) -> (Option<String>, Option<u32>, Option<String>, Option<String>) {
        (
            self.title.clone(),
            self.year,
            self.size.clone(),
            self.artwork.clone(),
        )
    }
}

impl ItemCell for RecordingCell {
    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    fn set_year(&mut self, year: Option<u32>) {
        self.year = year;
    }

    fn set_size(&mut self, size: &str) {
        self.size = Some(size.to_string());
    }

    fn set_artwork(&mut self, artwork: Option<&str>) {
        self.artwork = artwork.map(str::to_string);
    }

    fn clear(&mut self) {
        self.title = None;
        self.year = None;
        self.size = None;
        self.artwork = None;
        self.clear_count += 1;
    }
}

/// Controller wired to recording doubles, with the view log and engine
/// kept accessible.
pub fn test_controller() -> (
    PlaybackPresentationController,
    Arc<Mutex<ViewLog>>,
    Arc<StubEngine>,
) {
    let log = Arc::new(Mutex::new(ViewLog::default()));
    let engine = Arc::new(StubEngine::default());
    let controller = PlaybackPresentationController::new(
        engine.clone(),
        Box::new(RecordingView(log.clone())),
        "Marquee",
    );
    (controller, log, engine)
}
