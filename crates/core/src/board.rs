//! Board module - fixed rectangular grid geometry
//!
//! The board holds no cell contents; the snake and food own their positions.
//! It answers geometry questions only: bounds, center, pixel size.

use crate::error::ConfigError;
use crate::types::{GridVector, MAX_BOARD_DIM};

/// Rectangular grid of `cols` x `rows` cells, each `cell_size` pixels wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cols: u32,
    rows: u32,
    cell_size: u32,
}

impl Board {
    /// Create a board, rejecting any zero dimension or a side above
    /// [`MAX_BOARD_DIM`].
    pub fn new(cols: u32, rows: u32, cell_size: u32) -> Result<Self, ConfigError> {
        if cols == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        if rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        if cols > MAX_BOARD_DIM || rows > MAX_BOARD_DIM {
            return Err(ConfigError::BoardTooLarge { cols, rows });
        }
        if cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        Ok(Self {
            cols,
            rows,
            cell_size,
        })
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn pixel_width(&self) -> u64 {
        self.cols as u64 * self.cell_size as u64
    }

    pub fn pixel_height(&self) -> u64 {
        self.rows as u64 * self.cell_size as u64
    }

    pub fn cell_count(&self) -> u64 {
        self.cols as u64 * self.rows as u64
    }

    /// Check if a position lies outside the grid
    #[inline(always)]
    pub fn is_out_of_bounds(&self, pos: GridVector) -> bool {
        pos.x < 0 || pos.x >= self.cols as i32 || pos.y < 0 || pos.y >= self.rows as i32
    }

    #[inline(always)]
    pub fn contains(&self, pos: GridVector) -> bool {
        !self.is_out_of_bounds(pos)
    }

    /// Center cell, rounding down on even dimensions.
    pub fn center(&self) -> GridVector {
        GridVector::new((self.cols / 2) as i32, (self.rows / 2) as i32)
    }

    /// Pixel offset of the top-left corner of a cell.
    pub fn cell_origin_px(&self, pos: GridVector) -> (i64, i64) {
        (
            pos.x as i64 * self.cell_size as i64,
            pos.y as i64 * self.cell_size as i64,
        )
    }
}
