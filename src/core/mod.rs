//! Core state types shared by modules and composite devices.
//!
//! - State definitions via the `State` trait and `OperatingState`
//! - Guard predicates that gate operations
//! - Per-module transition history
//!
//! Everything here is free of I/O; activity output lives in `activity`.

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::{OperatingState, ParseStateError, State};
