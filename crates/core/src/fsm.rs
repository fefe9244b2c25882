//! Game lifecycle state machine.
//!
//! ```text
//!   Idle ──start──▶ Running ──collided──▶ GameOver
//!                      ▲                     │
//!                      └───────start─────────┘
//! ```

use crate::types::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    StartRequested,
    /// A wall or self collision was detected.
    Collided,
}

/// Next state for `event` in `state`. Events with no edge leave the state as is.
pub fn transition(state: GameState, event: GameEvent) -> GameState {
    match (state, event) {
        (GameState::Idle | GameState::GameOver, GameEvent::StartRequested) => GameState::Running,
        (GameState::Running, GameEvent::Collided) => GameState::GameOver,
        (state, _) => state,
    }
}
