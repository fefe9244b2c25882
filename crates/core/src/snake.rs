//! Snake module - body segments, heading, and deferred growth
//!
//! The body is a deque of cells with the head at the front. Each
//! [`Snake::step`] pushes a new head and, unless growth is pending, pops the
//! tail in the same call, so callers never observe a half-moved body.

use std::collections::VecDeque;

use crate::types::{Direction, GridVector, DEFAULT_INITIAL_LENGTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<GridVector>,
    direction: Direction,
    pending_growth: u32,
}

impl Snake {
    /// Create a snake whose head is at `start`, with the rest of the body laid
    /// out to the left. A length of zero is treated as one.
    pub fn new(start: GridVector, initial_length: usize) -> Self {
        let mut snake = Self {
            body: VecDeque::with_capacity(initial_length.max(1)),
            direction: Direction::Right,
            pending_growth: 0,
        };
        snake.reset(start, initial_length);
        snake
    }

    /// Reinitialize in place, keeping the body allocation.
    pub fn reset(&mut self, start: GridVector, initial_length: usize) {
        self.body.clear();
        for i in 0..initial_length.max(1) {
            self.body.push_back(GridVector::new(start.x - i as i32, start.y));
        }
        self.direction = Direction::Right;
        self.pending_growth = 0;
    }

    pub fn head(&self) -> GridVector {
        self.body[0]
    }

    pub fn tail(&self) -> GridVector {
        self.body[self.body.len() - 1]
    }

    pub fn body(&self) -> &VecDeque<GridVector> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_growth(&self) -> u32 {
        self.pending_growth
    }

    pub fn contains(&self, pos: GridVector) -> bool {
        self.body.contains(&pos)
    }

    /// Change heading. A 180° reversal is ignored; returns whether the new
    /// direction was taken.
    pub fn set_direction(&mut self, dir: Direction) -> bool {
        if self.direction.is_opposite(dir) {
            return false;
        }
        self.direction = dir;
        true
    }

    /// Advance one cell in the current direction.
    pub fn step(&mut self) {
        let new_head = self.head() + self.direction.to_vector();
        self.body.push_front(new_head);
        if self.pending_growth > 0 {
            self.pending_growth -= 1;
        } else {
            self.body.pop_back();
        }
    }

    /// Queue one extra segment, added on the next [`step`](Self::step).
    pub fn grow(&mut self) {
        self.pending_growth += 1;
    }

    /// True if the head shares a cell with any other segment.
    pub fn check_self_collision(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&seg| seg == head)
    }

    /// Orientation hint for segment `index`.
    ///
    /// The head reports the current heading; every other segment reports the
    /// vector pointing at the segment in front of it.
    pub fn segment_direction(&self, index: usize) -> Option<GridVector> {
        if index >= self.body.len() {
            return None;
        }
        if index == 0 {
            return Some(self.direction.to_vector());
        }
        Some(self.body[index - 1] - self.body[index])
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new(GridVector::ZERO, DEFAULT_INITIAL_LENGTH)
    }
}
