//! Terminal capabilities
//!
//! The clock engine and the key listener only see the two traits below, so
//! tests can swap in a capturing sink and a scripted key source.

pub mod raw;
pub mod sink;

use std::{io, time::Duration};

use crate::render::Frame;

pub use raw::RawTerminal;
pub use sink::{TerminalSink, Viewport};

/// Source of single keystrokes
pub trait KeySource {
    /// Wait up to `timeout` for one key. `Ok(None)` means nothing arrived.
    fn next_key(&mut self, timeout: Duration) -> io::Result<Option<char>>;
}

/// Destination of rendered frames
pub trait RenderSink {
    /// Draw `frame`, replacing the previous one in place
    fn render(&mut self, frame: &Frame) -> io::Result<()>;
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn render(&mut self, frame: &Frame) -> io::Result<()> {
        (**self).render(frame)
    }
}
