pub mod dialogs;
pub mod library_item;
pub mod main_window;
pub mod property;
pub mod view_sink;

pub use main_window::PlaybackPresentationController;
