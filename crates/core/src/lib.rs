//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on UI or terminal I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical food placement
//! - **Testable**: Every rule is reachable without a terminal
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: Grid geometry, bounds and center
//! - [`snake`]: Body deque, heading, deferred growth, self collision
//! - [`food`]: Food cell and bounded rejection-sampled respawn
//! - [`collision`]: Wall / body / food predicates in evaluation order
//! - [`scoring`]: Current and best score
//! - [`fsm`]: `Idle → Running → GameOver` transitions
//! - [`game`]: Orchestrator tying the above together per tick
//! - [`scheduler`] / [`clock`]: Fixed-timestep driver and frame clocks
//! - [`snapshot`]: Read-only state handed to renderers
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{Game, GameConfig, TickOutcome};
//! use tui_snake_types::{Direction, GameState};
//!
//! let mut game = Game::new(GameConfig::default(), Direction::Right).unwrap();
//! assert_eq!(game.update(), TickOutcome::Skipped);
//!
//! game.request_start();
//! assert_eq!(game.state(), GameState::Running);
//! game.update();
//! assert_eq!(game.snake().len(), 3);
//! ```
//!
//! # Timing
//!
//! Ticks run at a fixed `tick_ms` (140ms by default) regardless of the frame
//! rate. Feed frame timestamps to [`Scheduler::on_signal`] and it calls
//! [`FrameHandler::update`] as many times as the elapsed time allows, then
//! [`FrameHandler::render`] once.

pub mod board;
pub mod clock;
pub mod collision;
pub mod config;
pub mod error;
pub mod food;
pub mod fsm;
pub mod game;
pub mod scheduler;
pub mod scoring;
pub mod snake;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use clock::{FrameClock, ManualClock, MonotonicClock};
pub use collision::Collision;
pub use config::GameConfig;
pub use error::ConfigError;
pub use food::Food;
pub use fsm::{transition, GameEvent};
pub use game::{Game, TickOutcome};
pub use scheduler::{FrameHandler, Scheduler};
pub use scoring::Score;
pub use snake::Snake;
pub use snapshot::{FoodSnapshot, GameSnapshot, SegmentKind, SegmentSnapshot};
