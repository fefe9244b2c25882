//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, terminal rendering, input mapping).
//!
//! # Grid Coordinates
//!
//! The board is a rectangular grid addressed by integer `(x, y)` cells:
//!
//! - `x` grows to the right, `y` grows downwards
//! - `(0, 0)` is the top-left cell
//! - Positions outside the board are representable (a head that just left the
//!   board is still a valid [`GridVector`]); bounds are checked by the board
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_COLS` | 20 | Board width in cells |
//! | `DEFAULT_ROWS` | 20 | Board height in cells |
//! | `DEFAULT_CELL_SIZE` | 28 | Pixel size of one cell |
//! | `TICK_MS` | 140 | Simulation tick interval |
//! | `FRAME_MS` | 16 | Clock signal pacing (~60 FPS) |
//! | `DEFAULT_INITIAL_LENGTH` | 3 | Snake length at the start of a run |
//! | `MAX_BOARD_DIM` | 65535 | Upper bound on board width and height |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, GridVector};
//!
//! let head = GridVector::new(10, 10);
//! assert_eq!(head + Direction::Up.to_vector(), GridVector::new(10, 9));
//!
//! assert_eq!(Direction::Left.opposite(), Direction::Right);
//! assert_eq!(-GridVector::UP, GridVector::DOWN);
//! ```

use std::ops::{Add, Neg, Sub};

/// Default board width in cells.
pub const DEFAULT_COLS: u32 = 20;

/// Default board height in cells.
pub const DEFAULT_ROWS: u32 = 20;

/// Largest accepted board width or height, in cells.
pub const MAX_BOARD_DIM: u32 = u16::MAX as u32;

/// Default pixel size of a single cell.
pub const DEFAULT_CELL_SIZE: u32 = 28;

/// Fixed simulation tick interval in milliseconds.
pub const TICK_MS: u32 = 140;

/// Interval between clock signals requested by the terminal runner (16ms ≈ 60 FPS).
pub const FRAME_MS: u32 = 16;

/// Snake length at the start of every run.
pub const DEFAULT_INITIAL_LENGTH: usize = 3;

/// Texture key carried by food when none is given.
pub const DEFAULT_FOOD_TEXTURE: &str = "food";

/// Immutable integer 2D vector, used both for grid cells and movement deltas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridVector {
    pub x: i32,
    pub y: i32,
}

impl GridVector {
    pub const ZERO: GridVector = GridVector::new(0, 0);
    pub const UP: GridVector = GridVector::new(0, -1);
    pub const DOWN: GridVector = GridVector::new(0, 1);
    pub const LEFT: GridVector = GridVector::new(-1, 0);
    pub const RIGHT: GridVector = GridVector::new(1, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Componentwise sum.
    pub const fn add(self, other: GridVector) -> GridVector {
        GridVector::new(self.x + other.x, self.y + other.y)
    }

    /// Orientation angle in radians, `atan2(y, x)`.
    ///
    /// With `y` pointing down this is clockwise from +x, which is what
    /// sprite rotation expects.
    pub fn angle(self) -> f64 {
        (self.y as f64).atan2(self.x as f64)
    }
}

impl Add for GridVector {
    type Output = GridVector;

    fn add(self, rhs: GridVector) -> GridVector {
        GridVector::add(self, rhs)
    }
}

impl Sub for GridVector {
    type Output = GridVector;

    fn sub(self, rhs: GridVector) -> GridVector {
        GridVector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for GridVector {
    type Output = GridVector;

    fn neg(self) -> GridVector {
        GridVector::new(-self.x, -self.y)
    }
}

impl From<Direction> for GridVector {
    fn from(dir: Direction) -> Self {
        dir.to_vector()
    }
}

/// The four movement directions.
///
/// Each direction is the reverse of exactly one other:
/// - **Up** / **Down**
/// - **Left** / **Right**
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit movement delta for this direction.
    pub const fn to_vector(self) -> GridVector {
        match self {
            Direction::Up => GridVector::UP,
            Direction::Down => GridVector::DOWN,
            Direction::Left => GridVector::LEFT,
            Direction::Right => GridVector::RIGHT,
        }
    }

    /// Map a unit vector back to its direction. Non-unit vectors yield `None`.
    pub fn from_vector(v: GridVector) -> Option<Direction> {
        Direction::ALL.into_iter().find(|d| d.to_vector() == v)
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True when `other` is the 180° reversal of `self`.
    pub fn is_opposite(self, other: Direction) -> bool {
        -self.to_vector() == other.to_vector()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Lifecycle of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Nothing has been played yet.
    #[default]
    Idle,
    Running,
    /// The last run ended on a wall or self collision.
    GameOver,
}

impl GameState {
    pub fn is_running(self) -> bool {
        self == GameState::Running
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameState::Idle => "idle",
            GameState::Running => "running",
            GameState::GameOver => "game_over",
        }
    }
}

/// Source of steering input for the simulation.
///
/// The direction is sampled exactly once per tick. Implementations may filter
/// reversals themselves; the snake rejects them again regardless.
pub trait InputSource {
    /// Direction to apply on the upcoming tick.
    fn requested_direction(&mut self) -> Direction;

    /// Edge-triggered start request. Returns `true` at most once per press.
    fn take_start_request(&mut self) -> bool {
        false
    }

    /// Called whenever a new run begins.
    fn reset(&mut self) {}
}

/// A fixed heading: always steers the same way and never requests a start.
impl InputSource for Direction {
    fn requested_direction(&mut self) -> Direction {
        *self
    }
}
