/// Playback state as the presentation layer sees it. Transitions are
/// driven by the controller's transition table only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Playing,
    Paused,
}

/// How the main window currently presents video.
///
/// `Fullscreen` and `DetachedVideo` are entered by explicit user intent
/// and left either the same way or by playback termination, which
/// auto-reverts to `Normal`. That auto-revert is what keeps the
/// fullscreen/detached modes tied to live video.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowMode {
    Normal,
    Fullscreen,
    DetachedVideo,
}
