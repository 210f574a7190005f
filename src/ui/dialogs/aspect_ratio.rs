use crate::models::WindowId;
use crate::utils::UiError;
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

/// Outcome of one modal aspect-ratio interaction, delivered to the
/// completion handler exactly once.
#[derive(Debug, Clone, PartialEq)]
pub enum AspectRatioResult {
    Accepted {
        value: u32,
        applied_at: DateTime<Utc>,
    },
    Cancelled,
}

type CompletionHandler = Box<dyn FnOnce(AspectRatioResult) + Send>;

/// Modal entry of a custom aspect-ratio value.
///
/// The dialog validates as the host relays text edits and reports the
/// outcome through a one-shot continuation rather than a return value:
/// the interaction is user-paced and cancellable. It holds no playback
/// state; the caller's continuation decides what an accepted value means.
///
/// Every dismissal path — accept, cancel, owner window closed,
/// programmatic abort, even dropping an active dialog — resolves the
/// continuation with exactly one result.
pub struct AspectRatioDialog {
    owner: WindowId,
    input: String,
    on_complete: Option<CompletionHandler>,
    active: bool,
}

impl AspectRatioDialog {
    pub fn new(owner: WindowId) -> Self {
        Self {
            owner,
            input: String::new(),
            on_complete: None,
            active: false,
        }
    }

    /// Begin the modal session. `initial_value` seeds the entry field
    /// (the output's current aspect ratio). Starting a session while one
    /// is already active is a caller defect and fails fast.
    pub fn run_modal(
        &mut self,
        initial_value: u32,
        on_complete: impl FnOnce(AspectRatioResult) + Send + 'static,
    ) -> Result<(), UiError> {
        if self.active {
            return Err(UiError::DialogAlreadyActive(self.owner.clone()));
        }
        self.input = initial_value.to_string();
        self.on_complete = Some(Box::new(on_complete));
        self.active = true;
        debug!(owner = %self.owner, initial_value, "aspect ratio dialog opened");
        Ok(())
    }

    pub fn owner(&self) -> &WindowId {
        &self.owner
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Relay the current contents of the text entry.
    pub fn set_input(&mut self, text: impl Into<String>) {
        if !self.active {
            debug!(owner = %self.owner, "input on inactive dialog ignored");
            return;
        }
        self.input = text.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// The entered value, if it is a positive integer.
    pub fn parsed_value(&self) -> Option<u32> {
        self.input.trim().parse::<u32>().ok().filter(|v| *v > 0)
    }

    /// Whether the accept control should be enabled.
    pub fn accept_enabled(&self) -> bool {
        self.active && self.parsed_value().is_some()
    }

    /// Accept the entered value. With invalid input the dialog stays
    /// open and the error is returned for local recovery; `Accepted`
    /// can never carry a non-positive or non-numeric value.
    pub fn accept(&mut self) -> Result<(), UiError> {
        if !self.active {
            debug!(owner = %self.owner, "accept on inactive dialog ignored");
            return Ok(());
        }
        match self.parsed_value() {
            Some(value) => {
                self.finish(AspectRatioResult::Accepted {
                    value,
                    applied_at: Utc::now(),
                });
                Ok(())
            }
            None => Err(UiError::InvalidAspectRatio(self.input.clone())),
        }
    }

    pub fn cancel(&mut self) {
        self.dismiss("cancelled");
    }

    /// The owner window is being torn down; the pending interaction must
    /// resolve before it goes away.
    pub fn owner_closed(&mut self) {
        self.dismiss("owner window closed");
    }

    pub fn abort(&mut self) {
        self.dismiss("aborted");
    }

    fn dismiss(&mut self, reason: &str) {
        if !self.active {
            debug!(owner = %self.owner, reason, "dismiss on inactive dialog ignored");
            return;
        }
        debug!(owner = %self.owner, reason, "aspect ratio dialog dismissed");
        self.finish(AspectRatioResult::Cancelled);
    }

    fn finish(&mut self, result: AspectRatioResult) {
        self.active = false;
        if let Some(handler) = self.on_complete.take() {
            handler(result);
        }
    }
}

impl Drop for AspectRatioDialog {
    fn drop(&mut self) {
        if self.active {
            warn!(owner = %self.owner, "dialog dropped while active, cancelling");
            self.finish(AspectRatioResult::Cancelled);
        }
    }
}
