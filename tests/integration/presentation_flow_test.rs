use crate::common::{RecordingOutput, controller_with_view};
use marquee::events::{EventPump, WindowAction};
use marquee::models::{LibraryItem, LibraryItemId, WindowId};
use marquee::{PlaybackState, UiError, WindowMode};
use std::sync::Arc;

#[test]
fn test_session_lifecycle_through_pump() {
    let (handle, mut pump) = EventPump::new();
    let (mut controller, view) = controller_with_view();
    controller.enqueue([LibraryItem::new("sintel", "Sintel").with_year(2010)]);

    handle.video_started();
    handle.playlist_item_changed(LibraryItemId::new("sintel"));
    handle.window_action(WindowAction::ToggleFullscreen);

    assert_eq!(pump.drain(&mut controller), 3);
    assert_eq!(
        controller.current_state(),
        (PlaybackState::Playing, WindowMode::Fullscreen)
    );

    handle.video_stopped();
    assert_eq!(pump.drain(&mut controller), 1);

    // Playback termination reverts the window mode on its own.
    assert_eq!(
        controller.current_state(),
        (PlaybackState::Stopped, WindowMode::Normal)
    );
    let view = view.lock().unwrap();
    assert_eq!(view.surface, vec![false, true, false]);
    assert_eq!(view.chrome, vec![false, true, false]);
    assert_eq!(
        view.titles,
        vec!["Marquee".to_string(), "Sintel".to_string(), "Marquee".to_string()]
    );
}

#[test]
fn test_events_cancel_out_in_arrival_order() {
    let (handle, mut pump) = EventPump::new();
    let (mut controller, _view) = controller_with_view();

    handle.video_started();
    // Two near-simultaneous fullscreen toggles: strictly serialized,
    // they cancel out instead of racing.
    handle.window_action(WindowAction::ToggleFullscreen);
    handle.window_action(WindowAction::ToggleFullscreen);

    pump.drain(&mut controller);
    assert_eq!(
        controller.current_state(),
        (PlaybackState::Playing, WindowMode::Normal)
    );
}

#[test]
fn test_notifications_queue_while_dialog_is_modal() {
    let (handle, mut pump) = EventPump::new();
    let (mut controller, _view) = controller_with_view();

    handle.video_started();
    pump.drain(&mut controller);

    let window = WindowId::new("main");
    let output = Arc::new(RecordingOutput::default());
    controller
        .request_custom_aspect_ratio(window.clone(), output.clone())
        .unwrap();

    // The engine keeps notifying while the dialog blocks the window;
    // nothing is applied yet and nothing is dropped.
    handle.video_stopped();
    assert_eq!(
        controller.current_state(),
        (PlaybackState::Playing, WindowMode::Normal)
    );

    let dialog = controller.aspect_dialog_mut(&window).unwrap();
    dialog.set_input("16");
    dialog.accept().unwrap();
    assert_eq!(*output.writes.lock().unwrap(), vec![16]);

    // Dialog finished: the queued notification is applied now.
    assert_eq!(pump.drain(&mut controller), 1);
    assert_eq!(
        controller.current_state(),
        (PlaybackState::Stopped, WindowMode::Normal)
    );
}

#[test]
fn test_custom_aspect_ratio_while_playing() {
    let (handle, mut pump) = EventPump::new();
    let (mut controller, _view) = controller_with_view();

    handle.video_started();
    pump.drain(&mut controller);

    let window = WindowId::new("main");
    let output = Arc::new(RecordingOutput::default());
    controller
        .request_custom_aspect_ratio(window.clone(), output.clone())
        .unwrap();

    // Opening it twice is a caller defect, not a queued second dialog.
    assert!(matches!(
        controller.request_custom_aspect_ratio(window.clone(), output.clone()),
        Err(UiError::DialogAlreadyActive(_))
    ));

    let dialog = controller.aspect_dialog_mut(&window).unwrap();
    dialog.set_input("0");
    assert!(!dialog.accept_enabled());
    assert!(dialog.accept().is_err());
    assert!(dialog.is_active());

    dialog.set_input("16");
    dialog.accept().unwrap();

    // Applied to the output exactly once.
    assert_eq!(*output.writes.lock().unwrap(), vec![16]);
}
