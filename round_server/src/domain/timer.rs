// Countdown for the active phase, measured in whole seconds.

// Sentinel for "not running".
pub const NOT_RUNNING: i64 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTick {
    Idle,
    Running { remaining_seconds: i64 },
    // Emitted exactly once per started round.
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTimer {
    remaining_seconds: i64,
    active: bool,
}

impl Default for RoundTimer {
    fn default() -> Self {
        Self {
            remaining_seconds: NOT_RUNNING,
            active: false,
        }
    }
}

impl RoundTimer {
    pub fn start(&mut self, seconds: i64) {
        self.remaining_seconds = seconds;
        self.active = true;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn remaining_seconds(&self) -> i64 {
        self.remaining_seconds
    }

    // `M:SS` label for the action bar, `None` while stopped.
    pub fn countdown(&self) -> Option<String> {
        self.active.then(|| format_countdown(self.remaining_seconds))
    }

    // Consumes one real-time second.
    pub fn tick_second(&mut self) -> TimerTick {
        if !self.active {
            return TimerTick::Idle;
        }
        self.remaining_seconds -= 1;
        if self.remaining_seconds < 0 {
            self.active = false;
            self.remaining_seconds = NOT_RUNNING;
            return TimerTick::Expired;
        }
        TimerTick::Running {
            remaining_seconds: self.remaining_seconds,
        }
    }
}

pub fn format_countdown(remaining_seconds: i64) -> String {
    let remaining = remaining_seconds.max(0);
    format!("{}:{:02}", remaining / 60, remaining % 60)
}
