#![forbid(unsafe_code)]

//! statefield public facade crate.
//!
//! Re-exports the member crates and the types most hosts need: build a
//! [`TextField`], feed it [`Event`]s, and observe its text and
//! [`EditingState`] through [`Bindable`] handles.
//!
//! ```
//! use statefield::prelude::*;
//!
//! let mut field = TextField::new()
//!     .with_rule(Rule::Email)
//!     .with_required(true);
//!
//! field.handle_event(&Event::Focus(true));
//! field.set_text("a@b.co");
//! assert!(field.validate());
//! assert_eq!(field.state(), EditingState::Valid);
//! ```

pub use statefield_core::{Bindable, EditingState, Event, KeyCode, KeyEvent, KeyEventKind, Modifiers};
pub use statefield_form::{Formatter, MaskFill, MaskPattern, Rule, RuleSet};
pub use statefield_widgets::{ErrorLabel, FieldTheme, Rgb, TextField};

pub mod prelude {
    pub use statefield_core as core;
    pub use statefield_form as form;
    pub use statefield_widgets as widgets;

    pub use statefield_core::{Bindable, EditingState, Event, KeyCode, KeyEvent, Modifiers};
    pub use statefield_form::{Formatter, MaskFill, MaskPattern, Rule, RuleSet};
    pub use statefield_widgets::{ErrorLabel, FieldTheme, TextField};
}
