#![forbid(unsafe_code)]

//! Rule-based validation and mask formatting for statefield.
//!
//! Two independent engines:
//!
//! - [`rules`] — a closed set of named validation rules ([`Rule`]) combined
//!   into an ordered [`RuleSet`] that evaluates to a single boolean.
//! - [`format`] — masking patterns ([`MaskPattern`]) applied to raw input to
//!   produce display-formatted strings, with an inverse strip operation.
//!
//! Every operation here is a total, pure function over strings: failure is
//! a `false` result, never an error value.

pub mod format;
pub mod rules;

pub use format::{Formatter, MaskFill, MaskPattern};
pub use rules::{Rule, RuleSet};
