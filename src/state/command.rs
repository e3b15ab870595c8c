//! Keyboard commands understood while the clock runs

/// The interrupt control character (Ctrl+C) as delivered in raw mode
pub const INTERRUPT: char = '\u{3}';

/// A state transition requested from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    TogglePause,
    Restart,
    Stop,
    Grow,
    Shrink,
}

impl Command {
    /// Map a single key to its command. Case-sensitive; anything else is ignored.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            'p' => Some(Command::TogglePause),
            'r' => Some(Command::Restart),
            'e' | INTERRUPT => Some(Command::Stop),
            '+' => Some(Command::Grow),
            '-' => Some(Command::Shrink),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_control_keys() {
        assert_eq!(Command::from_key('p'), Some(Command::TogglePause));
        assert_eq!(Command::from_key('r'), Some(Command::Restart));
        assert_eq!(Command::from_key('e'), Some(Command::Stop));
        assert_eq!(Command::from_key(INTERRUPT), Some(Command::Stop));
        assert_eq!(Command::from_key('+'), Some(Command::Grow));
        assert_eq!(Command::from_key('-'), Some(Command::Shrink));
    }

    #[test]
    fn keys_are_case_sensitive() {
        assert_eq!(Command::from_key('P'), None);
        assert_eq!(Command::from_key('E'), None);
        assert_eq!(Command::from_key('q'), None);
        assert_eq!(Command::from_key(' '), None);
    }
}
