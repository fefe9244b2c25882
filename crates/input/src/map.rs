//! Key mapping from terminal events to game commands.

use crate::types::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Turn(Direction),
    Start,
}

/// Map keyboard input to game commands.
pub fn handle_key_event(key: KeyEvent) -> Option<KeyCommand> {
    match key.code {
        // Arrows, WASD and vi keys all steer.
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(KeyCommand::Turn(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(KeyCommand::Turn(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(KeyCommand::Turn(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(KeyCommand::Turn(Direction::Right))
        }

        KeyCode::Enter | KeyCode::Char(' ') => Some(KeyCommand::Start),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn turn(code: KeyCode) -> Option<KeyCommand> {
        handle_key_event(KeyEvent::from(code))
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(turn(KeyCode::Up), Some(KeyCommand::Turn(Direction::Up)));
        assert_eq!(turn(KeyCode::Down), Some(KeyCommand::Turn(Direction::Down)));
        assert_eq!(turn(KeyCode::Left), Some(KeyCommand::Turn(Direction::Left)));
        assert_eq!(turn(KeyCode::Right), Some(KeyCommand::Turn(Direction::Right)));
    }

    #[test]
    fn test_letter_keys() {
        assert_eq!(turn(KeyCode::Char('w')), Some(KeyCommand::Turn(Direction::Up)));
        assert_eq!(turn(KeyCode::Char('A')), Some(KeyCommand::Turn(Direction::Left)));
        assert_eq!(turn(KeyCode::Char('j')), Some(KeyCommand::Turn(Direction::Down)));
        assert_eq!(turn(KeyCode::Char('L')), Some(KeyCommand::Turn(Direction::Right)));
        assert_eq!(turn(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_start_keys() {
        assert_eq!(turn(KeyCode::Enter), Some(KeyCommand::Start));
        assert_eq!(turn(KeyCode::Char(' ')), Some(KeyCommand::Start));
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
