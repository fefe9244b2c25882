//! Game configuration.

use crate::error::ConfigError;
use crate::types::{
    DEFAULT_CELL_SIZE, DEFAULT_COLS, DEFAULT_INITIAL_LENGTH, DEFAULT_ROWS, MAX_BOARD_DIM, TICK_MS,
};

/// Everything needed to build a [`Game`](crate::Game) and its scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub cols: u32,
    pub rows: u32,
    pub cell_size: u32,
    /// Milliseconds of simulated time per tick.
    pub tick_ms: u32,
    pub initial_length: usize,
    /// Seed for food placement.
    pub seed: u64,
    /// Optional cap on catch-up ticks per clock signal. `None` never drops ticks.
    pub max_ticks_per_frame: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
            cell_size: DEFAULT_CELL_SIZE,
            tick_ms: TICK_MS,
            initial_length: DEFAULT_INITIAL_LENGTH,
            seed: 1,
            max_ticks_per_frame: None,
        }
    }
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_board(mut self, cols: u32, rows: u32) -> Self {
        self.cols = cols;
        self.rows = rows;
        self
    }

    /// Check every field; the first violation wins.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cols == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        if self.rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        if self.cols > MAX_BOARD_DIM || self.rows > MAX_BOARD_DIM {
            return Err(ConfigError::BoardTooLarge {
                cols: self.cols,
                rows: self.rows,
            });
        }
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        if self.max_ticks_per_frame == Some(0) {
            return Err(ConfigError::ZeroMaxTicksPerFrame);
        }
        if self.initial_length == 0 {
            return Err(ConfigError::ZeroInitialLength);
        }

        // Body runs from center.x down to center.x - (len - 1).
        let available = (self.cols / 2) as usize + 1;
        if self.initial_length > available {
            return Err(ConfigError::SnakeDoesNotFit {
                length: self.initial_length,
                available,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let c = GameConfig::default().with_board(0, 10);
        assert_eq!(c.validate(), Err(ConfigError::ZeroColumns));

        let c = GameConfig::default().with_board(10, 0);
        assert_eq!(c.validate(), Err(ConfigError::ZeroRows));

        let c = GameConfig {
            cell_size: 0,
            ..GameConfig::default()
        };
        assert_eq!(c.validate(), Err(ConfigError::ZeroCellSize));
    }

    #[test]
    fn oversized_board_is_rejected() {
        let c = GameConfig::default().with_board(2_000_000_000, 20);
        assert_eq!(
            c.validate(),
            Err(ConfigError::BoardTooLarge {
                cols: 2_000_000_000,
                rows: 20
            })
        );

        let c = GameConfig::default().with_board(20, MAX_BOARD_DIM + 1);
        assert!(c.validate().is_err());

        let c = GameConfig::default().with_board(MAX_BOARD_DIM, MAX_BOARD_DIM);
        assert_eq!(c.validate(), Ok(()));
    }

    #[test]
    fn zero_tick_interval_is_rejected() {
        let c = GameConfig {
            tick_ms: 0,
            ..GameConfig::default()
        };
        assert_eq!(c.validate(), Err(ConfigError::ZeroTickInterval));
    }

    #[test]
    fn zero_catch_up_cap_is_rejected() {
        let c = GameConfig {
            max_ticks_per_frame: Some(0),
            ..GameConfig::default()
        };
        assert_eq!(c.validate(), Err(ConfigError::ZeroMaxTicksPerFrame));

        let c = GameConfig {
            max_ticks_per_frame: Some(3),
            ..GameConfig::default()
        };
        assert_eq!(c.validate(), Ok(()));
    }

    #[test]
    fn snake_must_fit_left_of_center() {
        // 5 columns: center x = 2, room for cells 2, 1, 0.
        let c = GameConfig {
            initial_length: 3,
            ..GameConfig::default().with_board(5, 5)
        };
        assert_eq!(c.validate(), Ok(()));

        let c = GameConfig {
            initial_length: 4,
            ..GameConfig::default().with_board(5, 5)
        };
        assert_eq!(
            c.validate(),
            Err(ConfigError::SnakeDoesNotFit {
                length: 4,
                available: 3
            })
        );

        let c = GameConfig {
            initial_length: 0,
            ..GameConfig::default()
        };
        assert_eq!(c.validate(), Err(ConfigError::ZeroInitialLength));
    }
}
