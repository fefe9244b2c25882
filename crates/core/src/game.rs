//! Game orchestrator - owns the board, snake, food and score and advances
//! them one tick at a time.
//!
//! Per tick, while running:
//!
//! 1. sample the requested direction from the input source
//! 2. steer (reversals are dropped) and step the snake
//! 3. wall, then self collision: either ends the run immediately
//! 4. food collision: grow, score, and respawn the food clear of the body

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{debug, info, trace};

use crate::board::Board;
use crate::collision::{self, Collision};
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::food::Food;
use crate::fsm::{transition, GameEvent};
use crate::scoring::Score;
use crate::snake::Snake;
use crate::snapshot::{FoodSnapshot, GameSnapshot, SegmentKind, SegmentSnapshot};
use crate::types::{GameState, GridVector, InputSource};

/// Result of a single [`Game::update`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running; nothing happened.
    Skipped,
    Moved,
    /// The head landed on the food.
    Ate,
    Died(Collision),
}

#[derive(Debug, Clone)]
pub struct Game<I: InputSource> {
    config: GameConfig,
    board: Board,
    snake: Snake,
    food: Food,
    score: Score,
    state: GameState,
    rng: SmallRng,
    input: I,
    /// Incremented every time a run starts.
    run_id: u32,
    /// Ticks simulated in the current run.
    ticks: u64,
}

impl<I: InputSource> Game<I> {
    /// Build an idle game. The config is validated first.
    pub fn new(config: GameConfig, input: I) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::new(config.cols, config.rows, config.cell_size)?;
        let snake = Snake::new(board.center(), config.initial_length);
        let food = Food::new(GridVector::new(
            (config.cols as u64 * 3 / 4) as i32,
            (config.rows / 2) as i32,
        ));

        Ok(Self {
            config,
            board,
            snake,
            food,
            score: Score::new(),
            state: GameState::Idle,
            rng: SmallRng::seed_from_u64(config.seed),
            input,
            run_id: 0,
            ticks: 0,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn run_id(&self) -> u32 {
        self.run_id
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// Put the food on a specific cell, bypassing random placement.
    ///
    /// Intended for scripted scenarios and replays.
    pub fn set_food_position(&mut self, pos: GridVector) {
        self.food = Food::with_texture_key(pos, self.food.texture_key());
    }

    fn apply(&mut self, event: GameEvent) -> bool {
        let next = transition(self.state, event);
        if next == self.state {
            return false;
        }
        debug!(from = self.state.as_str(), to = next.as_str(), ?event, "state transition");
        self.state = next;
        true
    }

    /// Start a new run if idle or after game over. Returns whether a run began.
    pub fn request_start(&mut self) -> bool {
        if !self.apply(GameEvent::StartRequested) {
            return false;
        }
        self.begin_run();
        true
    }

    /// Forward a pending start request from the input source, if any.
    pub fn poll_start(&mut self) -> bool {
        if self.input.take_start_request() {
            self.request_start()
        } else {
            false
        }
    }

    fn begin_run(&mut self) {
        self.snake
            .reset(self.board.center(), self.config.initial_length);
        self.food.respawn(
            &mut self.rng,
            self.board.cols(),
            self.board.rows(),
            self.snake.body(),
        );
        self.score.reset();
        self.input.reset();
        self.run_id = self.run_id.wrapping_add(1);
        self.ticks = 0;
        info!(
            run_id = self.run_id,
            best = self.score.best(),
            "run started"
        );
    }

    /// Advance the simulation by one tick. A no-op unless running.
    pub fn update(&mut self) -> TickOutcome {
        if !self.state.is_running() {
            return TickOutcome::Skipped;
        }

        let dir = self.input.requested_direction();
        self.snake.set_direction(dir);
        self.snake.step();
        self.ticks += 1;

        let head = self.snake.head();
        trace!(
            tick = self.ticks,
            x = head.x,
            y = head.y,
            dir = self.snake.direction().as_str(),
            "tick"
        );

        match collision::detect(&self.snake, &self.board, &self.food) {
            Some(hit) if hit.is_fatal() => {
                self.apply(GameEvent::Collided);
                info!(
                    run_id = self.run_id,
                    cause = hit.as_str(),
                    score = self.score.current(),
                    best = self.score.best(),
                    ticks = self.ticks,
                    "game over"
                );
                TickOutcome::Died(hit)
            }
            Some(_) => {
                self.snake.grow();
                self.score.increment();
                self.food.respawn(
                    &mut self.rng,
                    self.board.cols(),
                    self.board.rows(),
                    self.snake.body(),
                );
                debug!(score = self.score.current(), len = self.snake.len(), "food eaten");
                TickOutcome::Ate
            }
            None => TickOutcome::Moved,
        }
    }

    /// Write the render snapshot into `out`, reusing its segment buffer.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = self.board;
        out.segments.clear();

        let last = self.snake.len() - 1;
        for (i, &cell) in self.snake.body().iter().enumerate() {
            let kind = if i == 0 {
                SegmentKind::Head
            } else if i == last {
                SegmentKind::Tail
            } else {
                SegmentKind::Body
            };
            let facing = self.snake.segment_direction(i).unwrap_or(GridVector::ZERO);
            out.segments.push(SegmentSnapshot {
                kind,
                cell,
                facing,
                angle: facing.angle(),
            });
        }

        out.food = FoodSnapshot {
            cell: self.food.position(),
            texture_key: self.food.texture_key(),
        };
        out.score = self.score.current();
        out.best_score = self.score.best();
        out.state = self.state;
        out.run_id = self.run_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot {
            board: self.board,
            segments: Vec::with_capacity(self.snake.len()),
            food: FoodSnapshot {
                cell: self.food.position(),
                texture_key: self.food.texture_key(),
            },
            score: 0,
            best_score: 0,
            state: self.state,
            run_id: 0,
        };
        self.snapshot_into(&mut s);
        s
    }
}
