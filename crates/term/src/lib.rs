//! Terminal renderer for the snake game.
//!
//! Renders into a plain framebuffer rather than a widget tree, then flushes
//! only what changed to the terminal backend.
//!
//! - `core` stays deterministic and testable
//! - board cells are drawn 2 chars wide by default to look square

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
