//! Greeting State
//!
//! Owns the single display message slot. The slot starts as the loading
//! placeholder and is mutated exactly once, when the greeting request
//! settles. The displayed value is always one of: the placeholder, the
//! server-provided message (possibly empty when the field is absent), or
//! the fixed failure string.

use crate::constants::{FETCH_FAILED_MESSAGE, LOADING_PLACEHOLDER};
use crate::error::Result;
use crate::services::GreetingResponse;
use gpui::{Context, SharedString};

/// State for the greeting display message
pub struct GreetingState {
    /// The display message
    message: SharedString,
}

impl GreetingState {
    /// Create a new state showing the loading placeholder
    pub fn new() -> Self {
        Self {
            message: LOADING_PLACEHOLDER.into(),
        }
    }

    // ==================== Getters ====================

    /// Get the current display message
    pub fn message(&self) -> &SharedString {
        &self.message
    }

    // ==================== Setters ====================

    /// Apply the settled request outcome to the display message slot
    ///
    /// An absent `message` field displays as empty, mirroring the
    /// undefined-like rendering the UI was built against.
    fn apply_outcome(&mut self, outcome: Result<GreetingResponse>) {
        self.message = match outcome {
            Ok(greeting) => greeting.message.unwrap_or_default().into(),
            Err(_) => FETCH_FAILED_MESSAGE.into(),
        };
    }

    /// Settle the greeting request and notify observers
    pub fn settle(&mut self, outcome: Result<GreetingResponse>, cx: &mut Context<Self>) {
        match &outcome {
            Ok(greeting) => {
                tracing::info!(message = ?greeting.message, "Greeting request settled")
            }
            Err(e) => tracing::warn!(error = %e, "Greeting request failed"),
        }
        self.apply_outcome(outcome);
        cx.notify();
    }
}

impl Default for GreetingState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn response(message: Option<&str>) -> GreetingResponse {
        GreetingResponse {
            message: message.map(str::to_string),
        }
    }

    #[test]
    fn initial_message_is_loading_placeholder() {
        let state = GreetingState::new();
        assert_eq!(state.message().as_ref(), LOADING_PLACEHOLDER);
    }

    #[test]
    fn success_displays_server_message() {
        let mut state = GreetingState::new();
        state.apply_outcome(Ok(response(Some("hi"))));
        assert_eq!(state.message().as_ref(), "hi");
    }

    #[test]
    fn failure_displays_fixed_string() {
        let mut state = GreetingState::new();
        state.apply_outcome(Err(Error::Invalid {
            message: "connection refused".to_string(),
        }));
        assert_eq!(state.message().as_ref(), FETCH_FAILED_MESSAGE);
    }

    #[test]
    fn missing_message_field_displays_empty() {
        let mut state = GreetingState::new();
        state.apply_outcome(Ok(response(None)));
        assert_eq!(state.message().as_ref(), "");
    }
}
