//! Direction buffering between key presses and simulation ticks.
//!
//! Several keys may arrive between two ticks. Only the latest accepted one is
//! kept. Reversals are checked against the direction the last tick consumed,
//! not the queued one.

use crate::map::KeyCommand;
use crate::types::{Direction, InputSource};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionInput {
    /// Direction consumed by the most recent tick.
    current: Direction,
    /// Direction the next tick will consume.
    next: Direction,
    start_pending: bool,
}

impl DirectionInput {
    pub fn new() -> Self {
        Self {
            current: Direction::Right,
            next: Direction::Right,
            start_pending: false,
        }
    }

    pub fn current(&self) -> Direction {
        self.current
    }

    pub fn queued(&self) -> Direction {
        self.next
    }

    /// Queue a turn. Returns `false` if it would reverse the current heading.
    pub fn press(&mut self, dir: Direction) -> bool {
        if self.current.is_opposite(dir) {
            return false;
        }
        self.next = dir;
        true
    }

    /// Latch a start request until the game takes it.
    pub fn request_start(&mut self) {
        self.start_pending = true;
    }

    pub fn start_pending(&self) -> bool {
        self.start_pending
    }

    /// Route a mapped key command.
    pub fn handle_command(&mut self, cmd: KeyCommand) {
        match cmd {
            KeyCommand::Turn(dir) => {
                self.press(dir);
            }
            KeyCommand::Start => self.request_start(),
        }
    }
}

impl Default for DirectionInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for DirectionInput {
    fn requested_direction(&mut self) -> Direction {
        self.current = self.next;
        self.current
    }

    fn take_start_request(&mut self) -> bool {
        std::mem::take(&mut self.start_pending)
    }

    fn reset(&mut self) {
        self.current = Direction::Right;
        self.next = Direction::Right;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_heading_right() {
        let mut input = DirectionInput::new();
        assert_eq!(input.requested_direction(), Direction::Right);
    }

    #[test]
    fn test_latest_press_wins() {
        let mut input = DirectionInput::new();
        assert!(input.press(Direction::Up));
        assert!(input.press(Direction::Down));
        assert_eq!(input.requested_direction(), Direction::Down);
    }

    #[test]
    fn test_reversal_of_consumed_direction_rejected() {
        let mut input = DirectionInput::new();
        assert!(!input.press(Direction::Left));
        assert_eq!(input.queued(), Direction::Right);

        // Up then Left within one tick: Left is checked against Right.
        assert!(input.press(Direction::Up));
        assert!(!input.press(Direction::Left));
        assert_eq!(input.requested_direction(), Direction::Up);

        // After the tick consumed Up, Left is fine.
        assert!(input.press(Direction::Left));
        assert_eq!(input.requested_direction(), Direction::Left);
    }

    #[test]
    fn test_start_request_is_edge_triggered() {
        let mut input = DirectionInput::new();
        assert!(!input.take_start_request());
        input.handle_command(KeyCommand::Start);
        assert!(input.start_pending());
        assert!(input.take_start_request());
        assert!(!input.take_start_request());
    }

    #[test]
    fn test_reset_returns_to_right() {
        let mut input = DirectionInput::new();
        input.handle_command(KeyCommand::Turn(Direction::Up));
        input.requested_direction();
        input.reset();
        assert_eq!(input.current(), Direction::Right);
        assert_eq!(input.queued(), Direction::Right);
    }
}
