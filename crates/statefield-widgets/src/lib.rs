#![forbid(unsafe_code)]

//! Headless field controllers for statefield.
//!
//! The widgets here own field state and behavior but draw nothing: a host
//! view layer feeds them [`Event`](statefield_core::Event)s and reads back
//! text, cursor, lifecycle state, and presentation colors.

pub mod error_label;
pub mod field;
pub mod theme;

pub use error_label::ErrorLabel;
pub use field::TextField;
pub use theme::{FieldTheme, Rgb};
