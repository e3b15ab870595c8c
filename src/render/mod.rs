//! Text rendering backend
//!
//! Turns a formatted time string into the multi-line text of one frame.
//! Renderers are pure: the same text and scale always give the same output.

pub mod glyphs;

use std::{fmt, str::FromStr};

use crate::{error::Error, state::Mode};

pub use glyphs::GlyphRenderer;

/// Format seconds as `HH:MM:SS`. Hours widen past two digits instead of wrapping.
pub fn format_hms(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// One frame handed from the tick loop to the render sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub mode: Mode,
    pub value: u64,
    pub scale: u32,
}

impl Frame {
    pub fn time_text(&self) -> String {
        format_hms(self.value)
    }
}

/// Pure text-to-art backend
pub trait Renderer: Send {
    /// Render `text` at the given display scale, lines separated by `\n`
    fn render(&self, text: &str, scale: u32) -> String;
}

/// The text as-is, padded by `scale` spaces on both sides
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl Renderer for PlainRenderer {
    fn render(&self, text: &str, scale: u32) -> String {
        let padding = " ".repeat(scale as usize);
        format!("{padding}{text}{padding}")
    }
}

/// Selectable display styles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Plain,
    Block,
    Ascii,
}

impl Font {
    pub const ALL: [Font; 3] = [Font::Plain, Font::Block, Font::Ascii];
    pub const DEFAULT: Font = Font::Block;

    pub fn name(&self) -> &'static str {
        match self {
            Font::Plain => "plain",
            Font::Block => "block",
            Font::Ascii => "ascii",
        }
    }

    pub fn renderer(&self) -> Box<dyn Renderer> {
        match self {
            Font::Plain => Box::new(PlainRenderer),
            Font::Block => Box::new(GlyphRenderer::new("█")),
            Font::Ascii => Box::new(GlyphRenderer::new("#")),
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Font {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Font::ALL
            .into_iter()
            .find(|font| font.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownFont(s.to_string()))
    }
}
