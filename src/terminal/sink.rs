//! In-place frame painter

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor, queue,
    style::Print,
    terminal::{self, Clear, ClearType},
};

use super::RenderSink;
use crate::render::{Frame, PlainRenderer, Renderer};

const CONTROLS_HINT: &str = "p pause/resume | r restart | e/Ctrl+C exit | +/- size";

/// Area a frame has to fit in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    /// No limit, for writers that are not a terminal
    Unbounded,
    /// Fixed columns and rows
    Fixed(u16, u16),
    /// Whatever size the controlling terminal has right now
    Terminal,
}

impl Viewport {
    /// Columns and rows, or `None` when unlimited or unknown
    fn size(&self) -> Option<(usize, usize)> {
        match self {
            Viewport::Unbounded => None,
            Viewport::Fixed(columns, rows) => Some((*columns as usize, *rows as usize)),
            Viewport::Terminal => terminal::size()
                .ok()
                .map(|(columns, rows)| (columns as usize, rows as usize)),
        }
    }
}

/// Paints frames onto a terminal, moving the cursor back up over the
/// previous frame instead of scrolling.
///
/// Lines never exceed the viewport: a wrapped or scrolled row would throw
/// the cursor arithmetic off and leave stale rows behind.
pub struct TerminalSink<W: Write> {
    out: W,
    renderer: Box<dyn Renderer>,
    show_controls: bool,
    viewport: Viewport,
    /// Rows written by the last frame
    drawn_lines: u16,
}

impl TerminalSink<Stdout> {
    /// Sink on standard output, sized to the live terminal
    pub fn stdout(renderer: Box<dyn Renderer>, show_controls: bool) -> Self {
        Self::new(io::stdout(), renderer, show_controls).with_viewport(Viewport::Terminal)
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W, renderer: Box<dyn Renderer>, show_controls: bool) -> Self {
        Self {
            out,
            renderer,
            show_controls,
            viewport: Viewport::Unbounded,
            drawn_lines: 0,
        }
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Lines of one frame: mode label, rendered time, optional controls hint.
    ///
    /// Art wider than the viewport falls back to plain text; every line is
    /// then cut to the width, and the frame to one row less than the height
    /// so its trailing newline cannot scroll.
    fn compose(&self, frame: &Frame, size: Option<(usize, usize)>) -> Vec<String> {
        let text = frame.time_text();
        let mut art = self.renderer.render(&text, frame.scale);
        if let Some((columns, _)) = size {
            if art.lines().any(|line| line.chars().count() > columns) {
                art = PlainRenderer.render(&text, frame.scale);
            }
        }

        let mut lines = Vec::new();
        lines.push(frame.mode.label().to_string());
        lines.extend(art.lines().map(str::to_string));
        if self.show_controls {
            lines.push(String::new());
            lines.push(CONTROLS_HINT.to_string());
        }

        if let Some((columns, rows)) = size {
            lines.truncate(rows.saturating_sub(1).max(1));
            for line in &mut lines {
                if let Some((cut, _)) = line.char_indices().nth(columns) {
                    line.truncate(cut);
                }
            }
        }
        lines
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSink for TerminalSink<W> {
    fn render(&mut self, frame: &Frame) -> io::Result<()> {
        if self.drawn_lines > 0 {
            queue!(
                self.out,
                cursor::MoveUp(self.drawn_lines),
                cursor::MoveToColumn(0)
            )?;
        }

        let lines = self.compose(frame, self.viewport.size());
        // Raw mode: no implicit carriage return on newline
        for line in &lines {
            queue!(
                self.out,
                Print(line),
                Clear(ClearType::UntilNewLine),
                Print("\r\n")
            )?;
        }
        // A smaller frame leaves rows of the old one below it
        queue!(self.out, Clear(ClearType::FromCursorDown))?;
        self.out.flush()?;

        self.drawn_lines = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        Ok(())
    }
}
