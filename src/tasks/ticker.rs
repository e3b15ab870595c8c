//! Clock tick loop

use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, error, info};

use crate::{
    error::Result,
    render::Frame,
    state::{Clock, Outcome, Step},
    terminal::RenderSink,
};

/// Time between ticks
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);
/// How often a paused clock re-checks its flags
pub const PAUSE_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Stops the clock however the loop is left, so the key listener ends too
struct StopOnExit<'a>(&'a Clock);

impl Drop for StopOnExit<'_> {
    fn drop(&mut self) {
        self.0.stop();
    }
}

/// Drive the clock until it is stopped or a timer runs out.
///
/// Each unpaused iteration renders the current value, advances it by one
/// and then sleeps, so commands take effect within one tick.
pub async fn run_clock<S: RenderSink>(clock: &Clock, mut sink: S) -> Result<Outcome> {
    let _stop = StopOnExit(clock);
    let mode = clock.mode();
    info!("Starting {:?} at {}", mode, clock.value());

    loop {
        match clock.begin_step() {
            Step::Halt => {
                info!("Clock loop exiting");
                return Ok(clock.outcome().unwrap_or(Outcome::Stopped));
            }
            Step::Idle => {
                sleep(PAUSE_POLL_INTERVAL).await;
            }
            Step::Frame { value, scale } => {
                debug!("Rendering frame at {}", value);
                if let Err(e) = sink.render(&Frame { mode, value, scale }) {
                    error!("Failed to render frame: {}", e);
                    return Err(e.into());
                }

                if let Some(outcome) = clock.finish_step() {
                    info!("Timer completed");
                    return Ok(outcome);
                }

                sleep(TICK_INTERVAL).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ClockState;
    use std::io;

    #[derive(Default)]
    struct Recorder {
        frames: Vec<Frame>,
    }

    impl RenderSink for Recorder {
        fn render(&mut self, frame: &Frame) -> io::Result<()> {
            self.frames.push(frame.clone());
            Ok(())
        }
    }

    struct Broken;

    impl RenderSink for Broken {
        fn render(&mut self, _frame: &Frame) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn zero_timer_renders_once_and_completes() {
        let clock = Clock::new(ClockState::timer(0, 1));
        let mut recorder = Recorder::default();

        let outcome = run_clock(&clock, &mut recorder).await.unwrap();

        assert_eq!(outcome, Outcome::Completed);
        assert_eq!(recorder.frames.len(), 1);
        assert_eq!(recorder.frames[0].time_text(), "00:00:00");
        assert_eq!(clock.value(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn short_timer_counts_down_to_zero() {
        let clock = Clock::new(ClockState::timer(3, 2));
        let mut recorder = Recorder::default();

        let outcome = run_clock(&clock, &mut recorder).await.unwrap();

        let values: Vec<_> = recorder.frames.iter().map(|f| f.value).collect();
        assert_eq!(values, vec![3, 2, 1, 0]);
        assert!(recorder.frames.iter().all(|f| f.scale == 2));
        assert_eq!(outcome, Outcome::Completed);
    }

    #[tokio::test(start_paused = true)]
    async fn render_failure_stops_the_clock() {
        let clock = Clock::new(ClockState::stopwatch(1));

        let result = run_clock(&clock, Broken).await;

        assert!(result.is_err());
        assert!(!clock.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn stopped_clock_never_renders() {
        let clock = Clock::new(ClockState::stopwatch(1));
        clock.stop();
        let mut recorder = Recorder::default();

        let outcome = run_clock(&clock, &mut recorder).await.unwrap();

        assert_eq!(outcome, Outcome::Stopped);
        assert!(recorder.frames.is_empty());
    }
}
