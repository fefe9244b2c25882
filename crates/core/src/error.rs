//! Construction-time configuration errors.
//!
//! The simulation itself never fails at runtime; every invalid input is a
//! configuration problem caught before the first tick.

use std::fmt;

use crate::types::MAX_BOARD_DIM;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    ZeroColumns,
    ZeroRows,
    ZeroCellSize,
    /// Width or height above [`MAX_BOARD_DIM`].
    BoardTooLarge { cols: u32, rows: u32 },
    ZeroTickInterval,
    ZeroInitialLength,
    ZeroMaxTicksPerFrame,
    /// The initial body, laid out leftwards from the board center, would leave the board.
    SnakeDoesNotFit { length: usize, available: usize },
}

impl ConfigError {
    pub fn code(self) -> &'static str {
        match self {
            ConfigError::ZeroColumns
            | ConfigError::ZeroRows
            | ConfigError::ZeroCellSize
            | ConfigError::BoardTooLarge { .. } => "invalid_board",
            ConfigError::ZeroTickInterval | ConfigError::ZeroMaxTicksPerFrame => {
                "invalid_timing"
            }
            ConfigError::ZeroInitialLength | ConfigError::SnakeDoesNotFit { .. } => {
                "invalid_snake"
            }
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ConfigError::ZeroColumns => "board must have at least one column",
            ConfigError::ZeroRows => "board must have at least one row",
            ConfigError::ZeroCellSize => "cell size must be positive",
            ConfigError::BoardTooLarge { .. } => "board is larger than 65535 cells on a side",
            ConfigError::ZeroTickInterval => "tick interval must be positive",
            ConfigError::ZeroInitialLength => "initial snake length must be at least 1",
            ConfigError::ZeroMaxTicksPerFrame => "max ticks per frame must be at least 1 when set",
            ConfigError::SnakeDoesNotFit { .. } => {
                "initial snake does not fit between the board center and the left wall"
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::SnakeDoesNotFit { length, available } => write!(
                f,
                "{}: {} (length {}, room for {})",
                self.code(),
                self.message(),
                length,
                available
            ),
            ConfigError::BoardTooLarge { cols, rows } => write!(
                f,
                "{}: {} ({}x{}, max {})",
                self.code(),
                self.message(),
                cols,
                rows,
                MAX_BOARD_DIM
            ),
            _ => write!(f, "{}: {}", self.code(), self.message()),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_code_and_message() {
        let s = ConfigError::ZeroRows.to_string();
        assert_eq!(s, "invalid_board: board must have at least one row");
    }

    #[test]
    fn snake_fit_reports_sizes() {
        let s = ConfigError::SnakeDoesNotFit {
            length: 12,
            available: 11,
        }
        .to_string();
        assert!(s.starts_with("invalid_snake"));
        assert!(s.contains("length 12"));
        assert!(s.contains("room for 11"));
    }

    #[test]
    fn codes_group_by_concern() {
        assert_eq!(ConfigError::ZeroTickInterval.code(), "invalid_timing");
        assert_eq!(ConfigError::ZeroCellSize.code(), "invalid_board");
        assert_eq!(ConfigError::ZeroInitialLength.code(), "invalid_snake");
        assert_eq!(
            ConfigError::BoardTooLarge { cols: 70_000, rows: 5 }.code(),
            "invalid_board"
        );
    }

    #[test]
    fn oversized_board_reports_dimensions() {
        let s = ConfigError::BoardTooLarge {
            cols: 2_000_000_000,
            rows: 20,
        }
        .to_string();
        assert!(s.contains("2000000000x20"));
        assert!(s.contains("max 65535"));
    }
}
