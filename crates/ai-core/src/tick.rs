#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-frame timing handed to everything that ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TickContext {
    pub tick: u64,
    /// Time since the previous frame.
    pub dt_seconds: f32,
    /// Monotonic time since the clock started, including this frame's `dt_seconds`.
    pub elapsed_seconds: f32,
}

impl TickContext {
    pub fn new(tick: u64, dt_seconds: f32, elapsed_seconds: f32) -> Self {
        Self {
            tick,
            dt_seconds,
            elapsed_seconds,
        }
    }
}

/// Frame clock producing successive [`TickContext`]s.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Clock {
    next_tick: u64,
    elapsed_seconds: f32,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed_seconds
    }

    /// Advance by one frame of `dt_seconds` and return that frame's context.
    pub fn advance(&mut self, dt_seconds: f32) -> TickContext {
        self.elapsed_seconds += dt_seconds;
        let ctx = TickContext::new(self.next_tick, dt_seconds, self.elapsed_seconds);
        self.next_tick += 1;
        ctx
    }
}
