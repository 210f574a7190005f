mod aspect_ratio;

pub use aspect_ratio::{AspectRatioDialog, AspectRatioResult};
