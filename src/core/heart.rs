//! Imbued Heart cooldown tracking
//!
//! The client exposes no cooldown flag for the heart, so it is inferred
//! from the invigorate graphic and the heart's chat messages, counted in
//! game ticks.

use super::constants::IMBUED_HEART_DURATION_TICKS;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeartCooldown {
    /// Tick the running cooldown was last (re)started at
    started_tick: Option<u32>,
    /// Length of the running cooldown in ticks
    duration_ticks: u32,
}

impl HeartCooldown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the heart can be invigorated right now
    pub fn is_ready(&self) -> bool {
        self.started_tick.is_none()
    }

    /// Tick at which the running cooldown ends
    pub fn ready_at(&self) -> Option<u32> {
        self.started_tick
            .map(|start| start.saturating_add(self.duration_ticks))
    }

    /// The heart was just invigorated
    pub fn invigorate(&mut self, tick: u32) {
        self.restart(tick, IMBUED_HEART_DURATION_TICKS);
    }

    /// The heart reported how long its cooldown still runs
    pub fn restart(&mut self, tick: u32, remaining_ticks: u32) {
        self.started_tick = Some(tick);
        self.duration_ticks = remaining_ticks;
    }

    /// The cooldown ended
    pub fn reset(&mut self) {
        self.started_tick = None;
        self.duration_ticks = 0;
    }

    /// Expire the cooldown once the tick count passes its end
    ///
    /// Returns true if the cooldown ended on this tick.
    pub fn on_tick(&mut self, tick: u32) -> bool {
        match self.ready_at() {
            Some(end) if tick > end => {
                self.reset();
                true
            }
            _ => false,
        }
    }
}
