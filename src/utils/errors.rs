use crate::models::WindowId;
use thiserror::Error;

/// Errors surfaced by the presentation core.
///
/// Events that are merely irrelevant in the current state are not errors;
/// the controller ignores them and logs at debug level.
#[derive(Error, Debug)]
pub enum UiError {
    #[error("invalid aspect ratio input: {0:?}")]
    InvalidAspectRatio(String),

    #[error("aspect ratio dialog already active for window {0}")]
    DialogAlreadyActive(WindowId),
}
