//! Raw-mode terminal input with guaranteed restoration

use std::{
    io::{self, IsTerminal},
    time::Duration,
};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use tracing::{debug, warn};

use super::KeySource;
use crate::{
    error::{Error, Result},
    state::INTERRUPT,
};

/// The terminal in raw mode. Dropping it puts the terminal back the way it was.
#[derive(Debug)]
pub struct RawTerminal {
    _private: (),
}

impl RawTerminal {
    /// Switch stdin to raw mode and hide the cursor.
    ///
    /// Fails when stdin is not an interactive terminal.
    pub fn enter() -> Result<Self> {
        if !io::stdin().is_terminal() {
            return Err(Error::Terminal(io::Error::new(
                io::ErrorKind::Unsupported,
                "standard input is not an interactive terminal",
            )));
        }

        terminal::enable_raw_mode().map_err(Error::Terminal)?;
        let guard = Self { _private: () };
        io::stdout().execute(cursor::Hide).map_err(Error::Terminal)?;

        debug!("Terminal switched to raw mode");
        Ok(guard)
    }
}

impl Drop for RawTerminal {
    fn drop(&mut self) {
        let _ = io::stdout().execute(cursor::Show);
        if let Err(e) = terminal::disable_raw_mode() {
            warn!("Failed to restore terminal mode: {}", e);
        } else {
            debug!("Terminal mode restored");
        }
    }
}

impl KeySource for RawTerminal {
    fn next_key(&mut self, timeout: Duration) -> io::Result<Option<char>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) => Ok(key_char(key)),
            _ => Ok(None),
        }
    }
}

/// Reduce a key event to the character it types; Ctrl+C becomes `INTERRUPT`.
///
/// Releases, repeats and non-character keys yield `None`.
pub fn key_char(key: KeyEvent) -> Option<char> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(INTERRUPT),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn plain_characters_pass_through() {
        assert_eq!(key_char(press(KeyCode::Char('p'), KeyModifiers::NONE)), Some('p'));
        assert_eq!(key_char(press(KeyCode::Char('+'), KeyModifiers::SHIFT)), Some('+'));
    }

    #[test]
    fn ctrl_c_is_the_interrupt_character() {
        assert_eq!(
            key_char(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(INTERRUPT)
        );
        assert_eq!(key_char(press(KeyCode::Char('p'), KeyModifiers::CONTROL)), None);
    }

    #[test]
    fn non_press_events_and_special_keys_are_dropped() {
        let release = KeyEvent {
            code: KeyCode::Char('p'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(key_char(release), None);
        assert_eq!(key_char(press(KeyCode::Enter, KeyModifiers::NONE)), None);
        assert_eq!(key_char(press(KeyCode::Up, KeyModifiers::NONE)), None);
    }
}
