//! Scoring module - current run score and session best
//!
//! One point per food eaten. The best score only ever rises and lives for the
//! process lifetime; nothing is persisted.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    current: u32,
    best: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Add one point, raising the best score when it is overtaken.
    pub fn increment(&mut self) {
        self.current = self.current.saturating_add(1);
        self.best = self.best.max(self.current);
    }

    /// Start a new run. The best score is kept.
    pub fn reset(&mut self) {
        self.current = 0;
    }
}
