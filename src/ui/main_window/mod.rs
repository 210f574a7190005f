mod state;

pub use state::{PlaybackState, WindowMode};

use crate::events::{MenuAction, PresentationEvent, WindowAction};
use crate::models::{LibraryItem, LibraryItemId, WindowId};
use crate::player::{PlaybackEngine, VideoOutput};
use crate::ui::dialogs::{AspectRatioDialog, AspectRatioResult};
use crate::ui::property::Property;
use crate::ui::view_sink::{PlayAffordance, ViewSink};
use crate::utils::UiError;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, trace};

/// Single authority for window-level derived UI state.
///
/// All state-relevant occurrences — engine notifications and user
/// intents alike — arrive through [`handle`](Self::handle) in one
/// serialized stream, which is what makes the transition table
/// deterministic: there is no precedence scheme between menu and window
/// actions, only arrival order. The controller runs on the UI thread and
/// is never reentered concurrently, so it holds no locks.
///
/// Derived state flows out through the [`ViewSink`]; commands flow to
/// the engine through [`PlaybackEngine`]. Neither feeds back into the
/// state machine except via the notification stream.
pub struct PlaybackPresentationController {
    engine: Arc<dyn PlaybackEngine>,
    view: Box<dyn ViewSink>,
    playback_state: Property<PlaybackState>,
    window_mode: Property<WindowMode>,
    idle_title: String,
    current_item: Option<LibraryItem>,
    play_queue: Vec<LibraryItem>,
    dialogs: HashMap<WindowId, AspectRatioDialog>,
}

impl PlaybackPresentationController {
    pub fn new(
        engine: Arc<dyn PlaybackEngine>,
        mut view: Box<dyn ViewSink>,
        idle_title: impl Into<String>,
    ) -> Self {
        let idle_title = idle_title.into();

        // Seed the chrome before the first event arrives.
        view.set_window_title(&idle_title);
        view.set_play_affordance(PlayAffordance::Stopped);
        view.set_video_surface_enabled(false);
        view.set_fullscreen_chrome_visible(false);

        Self {
            engine,
            view,
            playback_state: Property::new(PlaybackState::Stopped, "playback_state"),
            window_mode: Property::new(WindowMode::Normal, "window_mode"),
            idle_title,
            current_item: None,
            play_queue: Vec::new(),
            dialogs: HashMap::new(),
        }
    }

    /// Apply one event. Never fails: events that make no sense in the
    /// current state are logged and ignored.
    pub fn handle(&mut self, event: PresentationEvent) {
        trace!(?event, "handling presentation event");
        match event {
            PresentationEvent::VideoStartedOrStopped { started: true } => self.video_started(),
            PresentationEvent::VideoStartedOrStopped { started: false } => self.video_stopped(),
            PresentationEvent::UserMenuAction(MenuAction::Pause) => self.menu_pause(),
            PresentationEvent::UserMenuAction(MenuAction::Play) => self.menu_play(),
            PresentationEvent::UserWindowAction(WindowAction::ToggleFullscreen) => {
                self.toggle_fullscreen()
            }
            PresentationEvent::UserWindowAction(WindowAction::DetachVideo) => self.toggle_detached(),
            PresentationEvent::UserWindowAction(WindowAction::ResizedOrMoved) => {
                self.refresh_indicators()
            }
            PresentationEvent::PlaylistItemChanged { item } => self.playlist_item_changed(item),
        }
    }

    /// Current `(PlaybackState, WindowMode)` pair.
    pub fn current_state(&self) -> (PlaybackState, WindowMode) {
        (self.playback_state.get(), self.window_mode.get())
    }

    pub fn playback_state(&self) -> &Property<PlaybackState> {
        &self.playback_state
    }

    pub fn window_mode(&self) -> &Property<WindowMode> {
        &self.window_mode
    }

    pub fn current_item(&self) -> Option<&LibraryItem> {
        self.current_item.as_ref()
    }

    /// Append items to the play queue. The engine drives which queue
    /// entry actually plays; the controller only resolves
    /// `PlaylistItemChanged` ids against this list.
    pub fn enqueue(&mut self, items: impl IntoIterator<Item = LibraryItem>) {
        let before = self.play_queue.len();
        self.play_queue.extend(items);
        debug!(added = self.play_queue.len() - before, "items enqueued");
    }

    pub fn play_queue(&self) -> &[LibraryItem] {
        &self.play_queue
    }

    /// Open the custom-aspect-ratio dialog modally for `window`.
    ///
    /// The continuation applies an accepted value to `output` exactly
    /// once and ignores cancellation; the dialog itself never touches
    /// the output. At most one dialog may be active per window — a
    /// second request fails fast with a usage error.
    pub fn request_custom_aspect_ratio(
        &mut self,
        window: WindowId,
        output: Arc<dyn VideoOutput>,
    ) -> Result<(), UiError> {
        let dialog = self
            .dialogs
            .entry(window.clone())
            .or_insert_with(|| AspectRatioDialog::new(window));

        let initial = output.aspect_ratio();
        dialog.run_modal(initial, move |result| {
            if let AspectRatioResult::Accepted { value, applied_at } = result {
                info!(value, %applied_at, "applying custom aspect ratio");
                output.set_aspect_ratio(value);
            }
        })
    }

    /// Host access to the dialog for `window`, to relay text edits and
    /// the accept/cancel controls.
    pub fn aspect_dialog_mut(&mut self, window: &WindowId) -> Option<&mut AspectRatioDialog> {
        self.dialogs.get_mut(window)
    }

    /// The window is being torn down: resolve any pending dialog with
    /// `Cancelled` first so no interaction is left hanging.
    pub fn notify_window_closed(&mut self, window: &WindowId) {
        if let Some(mut dialog) = self.dialogs.remove(window) {
            dialog.owner_closed();
        }
    }

    fn video_started(&mut self) {
        match self.playback_state.get() {
            PlaybackState::Stopped => {
                self.playback_state.set(PlaybackState::Playing);
                self.view.set_video_surface_enabled(true);
                self.view.set_play_affordance(PlayAffordance::Playing);
            }
            _ => self.ignored("video started"),
        }
    }

    fn video_stopped(&mut self) {
        match self.playback_state.get() {
            PlaybackState::Playing | PlaybackState::Paused => {
                self.playback_state.set(PlaybackState::Stopped);
                self.view.set_video_surface_enabled(false);
                self.view.set_play_affordance(PlayAffordance::Stopped);
                self.view.set_window_title(&self.idle_title);
                if self.window_mode.get() != WindowMode::Normal {
                    self.window_mode.set(WindowMode::Normal);
                    self.view.set_fullscreen_chrome_visible(false);
                }
            }
            PlaybackState::Stopped => self.ignored("video stopped"),
        }
    }

    fn menu_pause(&mut self) {
        match self.playback_state.get() {
            PlaybackState::Playing => {
                self.engine.pause();
                self.playback_state.set(PlaybackState::Paused);
                self.view.set_play_affordance(PlayAffordance::Paused);
                self.view
                    .update_time_indicator(self.engine.position(), self.engine.duration());
            }
            _ => self.ignored("pause"),
        }
    }

    fn menu_play(&mut self) {
        match self.playback_state.get() {
            PlaybackState::Paused => {
                self.engine.play();
                self.playback_state.set(PlaybackState::Playing);
                self.view.set_play_affordance(PlayAffordance::Playing);
            }
            // Cold start is the engine's business; the machine only
            // leaves Stopped on a video-started notification.
            _ => self.ignored("play"),
        }
    }

    fn toggle_fullscreen(&mut self) {
        if self.playback_state.get() == PlaybackState::Stopped {
            self.ignored("toggle fullscreen");
            return;
        }
        match self.window_mode.get() {
            WindowMode::Normal => {
                self.window_mode.set(WindowMode::Fullscreen);
                self.view.set_fullscreen_chrome_visible(true);
            }
            WindowMode::Fullscreen => {
                self.window_mode.set(WindowMode::Normal);
                self.view.set_fullscreen_chrome_visible(false);
            }
            WindowMode::DetachedVideo => self.ignored("toggle fullscreen"),
        }
    }

    fn toggle_detached(&mut self) {
        if self.playback_state.get() == PlaybackState::Stopped {
            self.ignored("detach video");
            return;
        }
        match self.window_mode.get() {
            WindowMode::Normal => self.window_mode.set(WindowMode::DetachedVideo),
            WindowMode::DetachedVideo => self.window_mode.set(WindowMode::Normal),
            WindowMode::Fullscreen => self.ignored("detach video"),
        }
    }

    fn refresh_indicators(&mut self) {
        self.view
            .update_time_indicator(self.engine.position(), self.engine.duration());
        self.view.update_volume_indicator(self.engine.volume());
    }

    fn playlist_item_changed(&mut self, id: LibraryItemId) {
        let Some(item) = self.play_queue.iter().find(|i| i.id == id).cloned() else {
            debug!(item = %id, "playlist item not in queue, ignoring");
            return;
        };
        self.view.set_window_title(&item.title);
        self.current_item = Some(item);
        self.refresh_indicators();
    }

    fn ignored(&self, what: &str) {
        debug!(
            state = ?self.playback_state.get(),
            mode = ?self.window_mode.get(),
            what,
            "event not applicable in current state, ignoring"
        );
    }
}
