use crate::board::Board;
use crate::types::{GameState, GridVector};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Head,
    Body,
    Tail,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentSnapshot {
    pub kind: SegmentKind,
    pub cell: GridVector,
    /// Vector the segment points along (towards the segment in front).
    pub facing: GridVector,
    /// `facing` as an angle in radians.
    pub angle: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoodSnapshot {
    pub cell: GridVector,
    pub texture_key: &'static str,
}

/// Read-only view of everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub board: Board,
    pub segments: Vec<SegmentSnapshot>,
    pub food: FoodSnapshot,
    pub score: u32,
    pub best_score: u32,
    pub state: GameState,
    pub run_id: u32,
}

impl GameSnapshot {
    pub fn head(&self) -> Option<&SegmentSnapshot> {
        self.segments.first()
    }

    pub fn snake_len(&self) -> usize {
        self.segments.len()
    }

    pub fn playable(&self) -> bool {
        self.state.is_running()
    }
}
