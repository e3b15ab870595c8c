//! cli-timer - A terminal countdown timer and stopwatch
//!
//! This library provides the interactive clock engine: a shared clock state,
//! the tick loop that advances and renders it, and the raw-mode keyboard
//! listener that controls it.

pub mod config;
pub mod duration;
pub mod error;
pub mod render;
pub mod settings;
pub mod state;
pub mod tasks;
pub mod terminal;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use state::{Clock, ClockState, Outcome};
pub use tasks::run_session;
