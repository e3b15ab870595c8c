//! Shared clock handle used by the tick loop and the key listener

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

use super::{ClockState, Command, Mode, Outcome, Step};

/// Cloneable handle to the one `ClockState` of this process.
///
/// Every read and write goes through a single mutex, so neither side ever
/// observes a half-applied transition.
#[derive(Debug, Clone)]
pub struct Clock {
    state: Arc<Mutex<ClockState>>,
}

impl Clock {
    pub fn new(state: ClockState) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    // A panic while holding the lock cannot leave the state half-written:
    // every transition is a handful of plain field stores.
    fn lock(&self) -> MutexGuard<'_, ClockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with exclusive access to the state
    pub fn with_state<R>(&self, f: impl FnOnce(&mut ClockState) -> R) -> R {
        f(&mut self.lock())
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> ClockState {
        self.lock().clone()
    }

    pub fn mode(&self) -> Mode {
        self.lock().mode()
    }

    pub fn value(&self) -> u64 {
        self.lock().value()
    }

    pub fn is_running(&self) -> bool {
        self.lock().is_running()
    }

    pub fn is_paused(&self) -> bool {
        self.lock().is_paused()
    }

    pub fn display_scale(&self) -> u32 {
        self.lock().display_scale()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.lock().outcome()
    }

    pub fn toggle_pause(&self) {
        let paused = self.with_state(|state| {
            state.toggle_pause();
            state.is_paused()
        });
        info!("Clock {}", if paused { "paused" } else { "resumed" });
    }

    pub fn request_restart(&self) {
        self.with_state(ClockState::request_restart);
        info!("Restart requested");
    }

    pub fn stop(&self) {
        let was_running = self.with_state(|state| {
            let was_running = state.is_running();
            state.stop();
            was_running
        });
        if was_running {
            info!("Clock stopped");
        }
    }

    /// Apply a keyboard command
    pub fn apply(&self, command: Command) {
        match command {
            Command::TogglePause => self.toggle_pause(),
            Command::Restart => self.request_restart(),
            Command::Stop => self.stop(),
            Command::Grow => {
                let scale = self.with_state(|state| {
                    state.grow();
                    state.display_scale()
                });
                debug!("Display scale set to {}", scale);
            }
            Command::Shrink => {
                let scale = self.with_state(|state| {
                    state.shrink();
                    state.display_scale()
                });
                debug!("Display scale set to {}", scale);
            }
        }
    }

    pub(crate) fn begin_step(&self) -> Step {
        self.with_state(ClockState::begin_step)
    }

    pub(crate) fn finish_step(&self) -> Option<Outcome> {
        self.with_state(ClockState::finish_step)
    }
}
