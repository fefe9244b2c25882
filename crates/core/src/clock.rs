//! Clock sources that deliver frame signals to the [`Scheduler`](crate::Scheduler).
//!
//! The scheduler only asks a clock for the current time and to request or
//! cancel the next signal. Who actually delivers the signal (a terminal
//! event loop, a test) is up to the caller.

use std::time::{Duration, Instant};

use crate::types::FRAME_MS;

pub trait FrameClock {
    /// Milliseconds since an arbitrary fixed origin. Never decreases.
    fn now_ms(&self) -> u64;

    /// Ask for one more frame signal.
    fn request_frame(&mut self);

    /// Drop any outstanding frame request.
    fn cancel_frame(&mut self);
}

/// Clock driven entirely by the caller. Used by tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now_ms: u64,
    pending: bool,
    requests: u64,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now_ms: start_ms,
            pending: false,
            requests: 0,
        }
    }

    pub fn advance(&mut self, ms: u64) -> u64 {
        self.now_ms += ms;
        self.now_ms
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Total number of frame requests seen.
    pub fn requests(&self) -> u64 {
        self.requests
    }

    /// Consume the pending request, returning the timestamp to deliver.
    pub fn take_frame(&mut self) -> Option<u64> {
        if !self.pending {
            return None;
        }
        self.pending = false;
        Some(self.now_ms)
    }
}

impl FrameClock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms
    }

    fn request_frame(&mut self) {
        self.pending = true;
        self.requests += 1;
    }

    fn cancel_frame(&mut self) {
        self.pending = false;
    }
}

/// Wall clock pacing frames at a fixed interval.
///
/// A request arms a deadline one interval from now; the host loop waits
/// with [`time_until_frame`](Self::time_until_frame) and collects the signal
/// with [`take_due_frame`](Self::take_due_frame).
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Instant,
    frame_interval: Duration,
    deadline: Option<Instant>,
}

impl MonotonicClock {
    pub fn new(frame_interval: Duration) -> Self {
        Self {
            origin: Instant::now(),
            frame_interval,
            deadline: None,
        }
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left before the pending frame is due; `None` when nothing is pending.
    pub fn time_until_frame(&self) -> Option<Duration> {
        self.deadline
            .map(|d| d.saturating_duration_since(Instant::now()))
    }

    /// If the pending frame is due, consume it and return its timestamp.
    pub fn take_due_frame(&mut self) -> Option<u64> {
        let deadline = self.deadline?;
        if Instant::now() < deadline {
            return None;
        }
        self.deadline = None;
        Some(self.now_ms())
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new(Duration::from_millis(FRAME_MS as u64))
    }
}

impl FrameClock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn request_frame(&mut self) {
        self.deadline = Some(Instant::now() + self.frame_interval);
    }

    fn cancel_frame(&mut self) {
        self.deadline = None;
    }
}
