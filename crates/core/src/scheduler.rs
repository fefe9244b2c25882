//! Fixed-timestep scheduler.
//!
//! Frames arrive at whatever rate the host delivers them; ticks run at a
//! constant `tick_ms`. Elapsed time is accumulated per frame and converted
//! into zero or more `update` calls, followed by exactly one `render`.
//!
//! Catch-up is unbounded unless a per-frame cap is configured: after a stall
//! the simulation fast-forwards through every missed tick before the next
//! render.

use tracing::{debug, trace};

use crate::clock::FrameClock;
use crate::config::GameConfig;
use crate::error::ConfigError;

/// Callbacks driven by the scheduler.
pub trait FrameHandler {
    /// Advance the simulation by one tick.
    fn update(&mut self);

    /// Present the current state. Called once per delivered frame.
    fn render(&mut self);
}

/// A `(update, render)` closure pair.
impl<U: FnMut(), R: FnMut()> FrameHandler for (U, R) {
    fn update(&mut self) {
        (self.0)()
    }

    fn render(&mut self) {
        (self.1)()
    }
}

#[derive(Debug, Clone)]
pub struct Scheduler<C: FrameClock> {
    clock: C,
    tick_ms: u64,
    max_ticks_per_frame: Option<u32>,
    running: bool,
    last_signal_ms: u64,
    accumulator_ms: u64,
}

impl<C: FrameClock> Scheduler<C> {
    pub fn new(clock: C, tick_ms: u32) -> Result<Self, ConfigError> {
        if tick_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(Self {
            clock,
            tick_ms: tick_ms as u64,
            max_ticks_per_frame: None,
            running: false,
            last_signal_ms: 0,
            accumulator_ms: 0,
        })
    }

    /// Build from a game config, honoring its tick interval and catch-up cap.
    pub fn from_config(clock: C, config: &GameConfig) -> Result<Self, ConfigError> {
        Self::new(clock, config.tick_ms)?.with_max_ticks_per_frame(config.max_ticks_per_frame)
    }

    pub fn with_max_ticks_per_frame(mut self, max: Option<u32>) -> Result<Self, ConfigError> {
        if max == Some(0) {
            return Err(ConfigError::ZeroMaxTicksPerFrame);
        }
        self.max_ticks_per_frame = max;
        Ok(self)
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn tick_ms(&self) -> u64 {
        self.tick_ms
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Unconsumed time carried into the next frame.
    pub fn accumulator_ms(&self) -> u64 {
        self.accumulator_ms
    }

    /// Begin requesting frames. Does nothing if already running.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.last_signal_ms = self.clock.now_ms();
        self.accumulator_ms = 0;
        self.clock.request_frame();
        debug!(tick_ms = self.tick_ms, "scheduler started");
    }

    /// Stop and cancel the outstanding frame request. Frames delivered
    /// afterwards are ignored.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.clock.cancel_frame();
        debug!("scheduler stopped");
    }

    /// Handle one frame signal stamped `timestamp_ms`. Returns the number of
    /// ticks run; a stopped scheduler runs none and does not render.
    pub fn on_signal<H: FrameHandler + ?Sized>(&mut self, timestamp_ms: u64, handler: &mut H) -> u32 {
        if !self.running {
            return 0;
        }

        let delta = timestamp_ms.saturating_sub(self.last_signal_ms);
        self.last_signal_ms = self.last_signal_ms.max(timestamp_ms);
        self.accumulator_ms += delta;

        let mut ticks = 0u32;
        while self.accumulator_ms >= self.tick_ms {
            if self.max_ticks_per_frame.is_some_and(|max| ticks >= max) {
                let dropped = self.accumulator_ms - self.accumulator_ms % self.tick_ms;
                self.accumulator_ms %= self.tick_ms;
                debug!(dropped_ms = dropped, ticks, "catch-up capped");
                break;
            }
            handler.update();
            self.accumulator_ms -= self.tick_ms;
            ticks += 1;
        }

        handler.render();
        trace!(ticks, accumulator_ms = self.accumulator_ms, "frame");

        self.clock.request_frame();
        ticks
    }
}
