//! Keyboard listener task

use std::{io, time::Duration};

use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::{
    state::{Clock, Command},
    terminal::KeySource,
};

/// Upper bound on how long the listener takes to notice the clock stopped
pub const KEY_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Read keys and apply their commands until the clock stops
pub fn listen_keys<K: KeySource + ?Sized>(clock: &Clock, keys: &mut K) -> io::Result<()> {
    while clock.is_running() {
        let Some(key) = keys.next_key(KEY_POLL_INTERVAL)? else {
            continue;
        };
        match Command::from_key(key) {
            Some(command) => {
                debug!("Key {:?} -> {:?}", key, command);
                clock.apply(command);
            }
            None => debug!("Ignoring key {:?}", key),
        }
    }
    Ok(())
}

/// Run [`listen_keys`] on the blocking pool.
///
/// The key source is dropped on the listener thread when it finishes, which
/// is where a `RawTerminal` restores the terminal. A read failure stops the
/// clock.
pub fn spawn_key_listener<K>(clock: Clock, keys: K) -> JoinHandle<io::Result<()>>
where
    K: KeySource + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        info!("Starting key listener");
        let mut keys = keys;
        let result = listen_keys(&clock, &mut keys);
        if let Err(e) = &result {
            error!("Key listener failed: {}", e);
            clock.stop();
        }
        drop(keys);
        result
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ClockState, Outcome};
    use std::collections::VecDeque;

    /// Hands out queued keys, then reports silence
    struct Script(VecDeque<io::Result<Option<char>>>);

    impl Script {
        fn keys(keys: &str) -> Self {
            Self(keys.chars().map(|c| Ok(Some(c))).collect())
        }
    }

    impl KeySource for Script {
        fn next_key(&mut self, _timeout: Duration) -> io::Result<Option<char>> {
            self.0.pop_front().unwrap_or(Ok(None))
        }
    }

    #[test]
    fn applies_commands_until_stop() {
        let clock = Clock::new(ClockState::timer(90, 2));
        let mut script = Script::keys("p+x+-Qe");

        listen_keys(&clock, &mut script).unwrap();

        let state = clock.snapshot();
        assert!(state.is_paused());
        assert_eq!(state.display_scale(), 3);
        assert_eq!(state.value(), 90);
        assert_eq!(state.outcome(), Some(Outcome::Stopped));
    }

    #[test]
    fn keys_after_stop_are_not_read() {
        let clock = Clock::new(ClockState::stopwatch(1));
        let mut script = Script::keys("e+++");

        listen_keys(&clock, &mut script).unwrap();

        assert_eq!(script.0.len(), 3);
        assert_eq!(clock.display_scale(), 1);
    }

    #[test]
    fn restart_key_only_requests_a_restart() {
        let clock = Clock::new(ClockState::timer(10, 1));
        clock.with_state(|state| {
            state.tick();
        });
        let mut script = Script::keys("re");

        listen_keys(&clock, &mut script).unwrap();

        // Stop cancels the pending request before the loop could apply it
        assert_eq!(clock.value(), 9);
    }

    #[tokio::test]
    async fn read_error_stops_the_clock() {
        let clock = Clock::new(ClockState::stopwatch(1));
        let script = Script(VecDeque::from([Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "tty closed",
        ))]));

        let result = spawn_key_listener(clock.clone(), script).await.unwrap();

        assert!(result.is_err());
        assert!(!clock.is_running());
    }
}
