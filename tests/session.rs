//! Clock and key listener running together

use std::{
    collections::VecDeque,
    io, thread,
    time::Duration,
};

use cli_timer::{
    render::PlainRenderer,
    state::{Clock, ClockState, Outcome, INTERRUPT},
    tasks::run_session,
    terminal::{KeySource, TerminalSink},
    Error,
};

/// Types the queued keys a few milliseconds apart, then stays silent
struct Typist {
    keys: VecDeque<io::Result<char>>,
}

impl Typist {
    fn new(keys: &str) -> Self {
        Self {
            keys: keys.chars().map(Ok).collect(),
        }
    }

    fn silent() -> Self {
        Self::new("")
    }
}

impl KeySource for Typist {
    fn next_key(&mut self, timeout: Duration) -> io::Result<Option<char>> {
        match self.keys.pop_front() {
            Some(key) => {
                thread::sleep(Duration::from_millis(5));
                key.map(Some)
            }
            None => {
                thread::sleep(timeout);
                Ok(None)
            }
        }
    }
}

fn sink() -> TerminalSink<Vec<u8>> {
    TerminalSink::new(Vec::new(), Box::new(PlainRenderer), false)
}

#[tokio::test]
async fn zero_timer_completes_and_releases_the_listener() {
    let clock = Clock::new(ClockState::timer(0, 1));
    let mut sink = sink();

    let outcome = run_session(&clock, &mut sink, Typist::silent()).await.unwrap();

    assert_eq!(outcome, Outcome::Completed);
    let out = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(out.matches("00:00:00").count(), 1);
}

#[tokio::test]
async fn exit_key_stops_the_session() {
    let clock = Clock::new(ClockState::stopwatch(1));

    let outcome = run_session(&clock, sink(), Typist::new("+z+e")).await.unwrap();

    assert_eq!(outcome, Outcome::Stopped);
    assert_eq!(clock.display_scale(), 3);
    assert!(!clock.is_running());
}

#[tokio::test]
async fn interrupt_character_stops_the_session() {
    let clock = Clock::new(ClockState::timer(600, 1));

    let outcome = run_session(&clock, sink(), Typist::new(&INTERRUPT.to_string()))
        .await
        .unwrap();

    assert_eq!(outcome, Outcome::Stopped);
    assert!(clock.value() >= 599);
}

#[tokio::test]
async fn listener_failure_ends_the_session_with_an_io_error() {
    let clock = Clock::new(ClockState::stopwatch(1));
    let typist = Typist {
        keys: VecDeque::from([Err(io::Error::new(io::ErrorKind::UnexpectedEof, "tty gone"))]),
    };

    let error = run_session(&clock, sink(), typist).await.unwrap_err();

    assert!(matches!(error, Error::Io(_)));
    assert_eq!(error.exit_code(), 2);
    assert!(!clock.is_running());
}
