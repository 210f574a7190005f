use anyhow::Result;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;
use tracing::info;

use marquee::config::Config;
use marquee::events::{EventPump, MenuAction, WindowAction};
use marquee::models::{LibraryItem, LibraryItemId, WindowId};
use marquee::player::{PlaybackEngine, VideoOutput};
use marquee::ui::PlaybackPresentationController;
use marquee::ui::view_sink::{PlayAffordance, ViewSink};

/// Stand-in for the real playback engine: fixed readings, logged
/// commands. The real one lives outside this crate.
struct DemoEngine {
    volume: f64,
}

impl PlaybackEngine for DemoEngine {
    fn play(&self) {
        info!("engine: play");
    }

    fn pause(&self) {
        info!("engine: pause");
    }

    fn position(&self) -> Duration {
        Duration::from_secs(73)
    }

    fn duration(&self) -> Duration {
        Duration::from_secs(888)
    }

    fn volume(&self) -> f64 {
        self.volume
    }
}

struct DemoOutput {
    aspect: AtomicU32,
}

impl VideoOutput for DemoOutput {
    fn aspect_ratio(&self) -> u32 {
        self.aspect.load(Ordering::SeqCst)
    }

    fn set_aspect_ratio(&self, value: u32) {
        self.aspect.store(value, Ordering::SeqCst);
    }
}

/// Console adapter for the window chrome.
struct ConsoleView;

impl ViewSink for ConsoleView {
    fn set_play_affordance(&mut self, affordance: PlayAffordance) {
        info!("view: play affordance -> {:?}", affordance);
    }

    fn update_time_indicator(&mut self, position: Duration, duration: Duration) {
        info!("view: time {}s / {}s", position.as_secs(), duration.as_secs());
    }

    fn update_volume_indicator(&mut self, volume: f64) {
        info!("view: volume {:.0}%", volume * 100.0);
    }

    fn set_video_surface_enabled(&mut self, enabled: bool) {
        info!("view: video surface enabled = {}", enabled);
    }

    fn set_fullscreen_chrome_visible(&mut self, visible: bool) {
        info!("view: fullscreen chrome visible = {}", visible);
    }

    fn set_window_title(&mut self, title: &str) {
        info!("view: window title -> {:?}", title);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("marquee=debug")
        .init();

    info!("Starting Marquee demo shell");

    let config = Config::load()?;

    let engine = Arc::new(DemoEngine {
        volume: config.playback.initial_volume,
    });
    let (notifications, mut pump) = EventPump::new();
    let mut controller = PlaybackPresentationController::new(
        engine,
        Box::new(ConsoleView),
        config.window.idle_title.clone(),
    );
    controller.enqueue([
        LibraryItem::new("sintel", "Sintel")
            .with_year(2010)
            .with_size(1_503_238_553),
        LibraryItem::new("bbb", "Big Buck Bunny")
            .with_year(2008)
            .with_size(886_412_987),
    ]);

    // Simulated playback session: the engine notifies from its own task,
    // the pump marshals everything onto this thread in order.
    let feed = notifications.clone();
    tokio::spawn(async move {
        feed.video_started();
        feed.playlist_item_changed(LibraryItemId::new("sintel"));
        tokio::time::sleep(Duration::from_millis(50)).await;
        feed.window_action(WindowAction::ToggleFullscreen);
        feed.menu_action(MenuAction::Pause);
        tokio::time::sleep(Duration::from_millis(50)).await;
        feed.menu_action(MenuAction::Play);
        feed.video_stopped();
    });
    drop(notifications);

    while pump.dispatch_next(&mut controller).await {}

    // Scripted custom-aspect-ratio interaction against the demo output.
    let window = WindowId::new("main");
    let output = Arc::new(DemoOutput {
        aspect: AtomicU32::new(4),
    });
    controller.request_custom_aspect_ratio(window.clone(), output.clone())?;
    if let Some(dialog) = controller.aspect_dialog_mut(&window) {
        dialog.set_input("16");
        dialog.accept()?;
    }
    info!(
        aspect = output.aspect_ratio(),
        presets = ?config.video.aspect_presets,
        "custom aspect ratio applied"
    );

    Ok(())
}
