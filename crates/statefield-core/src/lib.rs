#![forbid(unsafe_code)]

//! Core primitives for statefield.
//!
//! This crate holds the pieces every field controller is built from:
//!
//! - [`Bindable`] — a single-subscriber observable value with one-way binding.
//! - [`event`] — canonical input events a host layer feeds into a field.
//! - [`EditingState`] — the untouched/touched/active/valid/error lifecycle.
//! - [`logging`] — tracing macro shims, active behind the `tracing` feature.
//!
//! Everything here is synchronous and single-threaded: value updates,
//! subscriber notification, and state transitions all run to completion on
//! the calling thread.

pub mod bindable;
pub mod event;
pub mod logging;
pub mod state;

pub use bindable::Bindable;
pub use event::{Event, KeyCode, KeyEvent, KeyEventKind, Modifiers};
pub use state::EditingState;
