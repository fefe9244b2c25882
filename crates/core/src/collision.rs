//! Collision rules - stateless predicates over already-moved state.
//!
//! Check order matters: wall and self collisions are fatal and are reported
//! before food, so a fatal move never also scores.

use crate::board::Board;
use crate::food::Food;
use crate::snake::Snake;

/// What the head ran into on the current tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collision {
    Wall,
    /// The head entered one of the snake's own segments.
    Body,
    Food,
}

impl Collision {
    pub fn is_fatal(self) -> bool {
        matches!(self, Collision::Wall | Collision::Body)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Collision::Wall => "wall",
            Collision::Body => "body",
            Collision::Food => "food",
        }
    }
}

pub fn wall_collision(snake: &Snake, board: &Board) -> bool {
    board.is_out_of_bounds(snake.head())
}

pub fn self_collision(snake: &Snake) -> bool {
    snake.check_self_collision()
}

pub fn food_collision(snake: &Snake, food: &Food) -> bool {
    snake.head() == food.position()
}

/// First collision in wall, body, food order, if any.
pub fn detect(snake: &Snake, board: &Board, food: &Food) -> Option<Collision> {
    if wall_collision(snake, board) {
        Some(Collision::Wall)
    } else if self_collision(snake) {
        Some(Collision::Body)
    } else if food_collision(snake, food) {
        Some(Collision::Food)
    } else {
        None
    }
}
