#![forbid(unsafe_code)]

//! Editing lifecycle state machine.
//!
//! A field moves through a small set of states as the user interacts with
//! it:
//!
//! ```text
//! Untouched ──focus enter──▶ Active ──validation──▶ Valid / Error
//!                               ▲                      │
//!                               └──────validation──────┘
//! ```
//!
//! Once a field has been entered it never returns to [`Untouched`]
//! automatically; [`Touched`] exists for programmatic resets that should
//! still record prior interaction.
//!
//! [`Untouched`]: EditingState::Untouched
//! [`Touched`]: EditingState::Touched

/// The editing lifecycle state of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EditingState {
    /// Never focused, never validated. The initial state.
    #[default]
    Untouched,
    /// Programmatically reset after prior interaction.
    ///
    /// Not reachable from input events; [`reset_touched`](Self::reset_touched)
    /// is the only way in. Distinct from [`Untouched`](Self::Untouched) so a
    /// host can tell "never visited" from "visited, then reset".
    Touched,
    /// Currently focused, not yet validated.
    Active,
    /// The last validation run passed.
    Valid,
    /// The last validation run failed.
    Error,
}

impl EditingState {
    /// Transition for a focus-enter event.
    ///
    /// Only the first focus matters: `Untouched` becomes `Active`; every
    /// other state is unchanged.
    #[must_use]
    pub const fn on_focus_enter(self) -> Self {
        match self {
            Self::Untouched => Self::Active,
            other => other,
        }
    }

    /// Transition for a completed validation run.
    ///
    /// Reachable from any state; validation outcomes always win.
    #[must_use]
    pub const fn on_validation(self, passed: bool) -> Self {
        if passed { Self::Valid } else { Self::Error }
    }

    /// Programmatic reset that preserves prior-interaction history.
    #[must_use]
    pub const fn reset_touched(self) -> Self {
        Self::Touched
    }

    /// Whether the associated error label should be visible.
    ///
    /// Visible only in [`Error`](Self::Error).
    #[must_use]
    pub const fn shows_error(self) -> bool {
        matches!(self, Self::Error)
    }

    /// Whether the field has ever been focused or reset.
    #[must_use]
    pub const fn is_visited(self) -> bool {
        !matches!(self, Self::Untouched)
    }

    /// Lowercase state name, for logging and snapshots.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Untouched => "untouched",
            Self::Touched => "touched",
            Self::Active => "active",
            Self::Valid => "valid",
            Self::Error => "error",
        }
    }
}

impl core::fmt::Display for EditingState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
