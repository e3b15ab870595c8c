//! Concurrent tasks module
//!
//! The clock tick loop and the keyboard listener, plus the runner that pairs
//! them for one interactive session.

pub mod ticker;
pub mod key_listener;
pub mod session;

// Re-export main functions
pub use ticker::run_clock;
pub use key_listener::{listen_keys, spawn_key_listener};
pub use session::run_session;
