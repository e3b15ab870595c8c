//! State management module
//!
//! This module contains the clock state, the shared handle around it and the
//! keyboard commands that mutate it.

pub mod clock_state;
pub mod clock;
pub mod command;

// Re-export main types
pub use clock_state::{ClockState, Mode, Outcome, Step};
pub use clock::Clock;
pub use command::{Command, INTERRUPT};
