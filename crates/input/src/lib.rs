//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`KeyCommand`]s and provides a
//! [`DirectionInput`] that buffers the latest turn until the next simulation
//! tick samples it.

pub mod handler;
pub mod map;

pub use tui_snake_types as types;

pub use handler::DirectionInput;
pub use map::{handle_key_event, should_quit, KeyCommand};
