mod traits;

pub use traits::{PlaybackEngine, VideoOutput};
