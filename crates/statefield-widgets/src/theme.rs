#![forbid(unsafe_code)]

//! Per-state presentation colors.
//!
//! The lifecycle state machine drives a color lookup the host view layer
//! can apply to an underline, border, or label. Untouched and touched share
//! one color; active, valid, and error each have their own.

use statefield_core::EditingState;

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Colors associated with each editing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldTheme {
    /// Shown while untouched or programmatically reset.
    pub untouched: Rgb,
    /// Shown while focused, before validation.
    pub active: Rgb,
    /// Shown after a passing validation run.
    pub valid: Rgb,
    /// Shown after a failing validation run.
    pub error: Rgb,
}

impl Default for FieldTheme {
    fn default() -> Self {
        Self {
            untouched: Rgb::new(240, 241, 242),
            active: Rgb::new(77, 125, 238),
            valid: Rgb::new(33, 198, 169),
            error: Rgb::new(249, 75, 28),
        }
    }
}

impl FieldTheme {
    /// The color for a lifecycle state.
    #[must_use]
    pub const fn color_for(&self, state: EditingState) -> Rgb {
        match state {
            EditingState::Untouched | EditingState::Touched => self.untouched,
            EditingState::Active => self.active,
            EditingState::Valid => self.valid,
            EditingState::Error => self.error,
        }
    }
}
