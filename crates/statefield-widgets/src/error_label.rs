#![forbid(unsafe_code)]

//! Error label companion state.
//!
//! Tracks the visibility of the error message shown next to a field. The
//! label is visible only while the field is in the error state; hosts that
//! announce errors (screen readers, toasts) can consume the one-shot
//! [`take_just_shown`](ErrorLabel::take_just_shown) flag.

use statefield_core::EditingState;

/// Visibility state for a field's error message.
#[derive(Debug, Clone, Default)]
pub struct ErrorLabel {
    message: String,
    visible: bool,
    just_shown: bool,
}

impl ErrorLabel {
    /// Create a hidden label with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            visible: false,
            just_shown: false,
        }
    }

    /// The message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Replace the message text. Visibility is unchanged.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// Make the label visible.
    pub fn show(&mut self) {
        if !self.visible {
            self.visible = true;
            self.just_shown = true;
        }
    }

    /// Hide the label.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Set visibility directly.
    pub fn set_visible(&mut self, visible: bool) {
        if visible {
            self.show();
        } else {
            self.hide();
        }
    }

    /// Derive visibility from a lifecycle state: visible only in error.
    pub fn sync(&mut self, state: EditingState) {
        self.set_visible(state.shows_error());
    }

    /// Whether the label is currently visible.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Check and clear the "just shown" flag (for announcement hooks).
    pub fn take_just_shown(&mut self) -> bool {
        std::mem::take(&mut self.just_shown)
    }
}
