//! Clock state structure and its transitions

/// What the clock counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Counts down from a configured total
    Timer,
    /// Counts up from zero
    Stopwatch,
}

impl Mode {
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Timer => "TIMER",
            Mode::Stopwatch => "STOPWATCH",
        }
    }
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Explicit stop command or signal
    Stopped,
    /// Timer reached zero on its own
    Completed,
}

/// What the tick loop should do next, decided under the state lock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `running` is false; leave the loop without rendering
    Halt,
    /// Paused; nothing to draw or advance
    Idle,
    /// Draw this value, then advance
    Frame { value: u64, scale: u32 },
}

/// The single mutable entity shared by the tick loop and the key listener
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockState {
    mode: Mode,
    /// Starting duration in seconds (zero for a stopwatch)
    total: u64,
    value: u64,
    running: bool,
    paused: bool,
    restart_requested: bool,
    completed: bool,
    display_scale: u32,
}

impl ClockState {
    /// Create a countdown from `total` seconds
    pub fn timer(total: u64, display_scale: u32) -> Self {
        Self::new(Mode::Timer, total, display_scale)
    }

    /// Create a stopwatch starting at zero
    pub fn stopwatch(display_scale: u32) -> Self {
        Self::new(Mode::Stopwatch, 0, display_scale)
    }

    fn new(mode: Mode, total: u64, display_scale: u32) -> Self {
        Self {
            mode,
            total,
            value: total,
            running: true,
            paused: false,
            restart_requested: false,
            completed: false,
            display_scale: display_scale.max(1),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn restart_requested(&self) -> bool {
        self.restart_requested
    }

    pub fn display_scale(&self) -> u32 {
        self.display_scale
    }

    /// How the run ended, once it has
    pub fn outcome(&self) -> Option<Outcome> {
        match (self.running, self.completed) {
            (true, _) => None,
            (false, true) => Some(Outcome::Completed),
            (false, false) => Some(Outcome::Stopped),
        }
    }

    /// Advance the value by one unit in the mode's direction.
    ///
    /// Returns false without touching anything when the clock is stopped,
    /// paused, or a timer already sits at zero.
    pub fn tick(&mut self) -> bool {
        if !self.running || self.paused {
            return false;
        }
        match self.mode {
            Mode::Timer if self.value == 0 => false,
            Mode::Timer => {
                self.value -= 1;
                true
            }
            Mode::Stopwatch => {
                self.value = self.value.saturating_add(1);
                true
            }
        }
    }

    /// Reset the value to its starting point, leaving `running`/`paused` alone
    pub fn restart(&mut self) {
        if !self.running {
            return;
        }
        self.value = match self.mode {
            Mode::Timer => self.total,
            Mode::Stopwatch => 0,
        };
    }

    /// Ask the tick loop to restart at its next iteration
    pub fn request_restart(&mut self) {
        if self.running {
            self.restart_requested = true;
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.running {
            self.paused = !self.paused;
        }
    }

    /// Terminal transition; nothing mutates `value` afterwards
    pub fn stop(&mut self) {
        self.running = false;
        self.restart_requested = false;
    }

    pub fn grow(&mut self) {
        self.display_scale = self.display_scale.saturating_add(1);
    }

    pub fn shrink(&mut self) {
        self.display_scale = self.display_scale.saturating_sub(1).max(1);
    }

    /// Start of a loop iteration: consume a pending restart and decide what to do
    pub fn begin_step(&mut self) -> Step {
        if !self.running {
            return Step::Halt;
        }
        if self.restart_requested {
            self.restart_requested = false;
            self.restart();
        }
        if self.paused {
            Step::Idle
        } else {
            Step::Frame {
                value: self.value,
                scale: self.display_scale,
            }
        }
    }

    /// End of a rendered iteration: complete a timer at zero, otherwise tick.
    ///
    /// Returns the outcome when this step finished the run.
    pub fn finish_step(&mut self) -> Option<Outcome> {
        if !self.running {
            return None;
        }
        if self.mode == Mode::Timer && self.value == 0 {
            self.running = false;
            self.completed = true;
            return Some(Outcome::Completed);
        }
        self.tick();
        None
    }
}
