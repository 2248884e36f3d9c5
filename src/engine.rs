use std::collections::HashSet;

use rand::Rng;

use crate::config::{GRID_HEIGHT, GRID_WIDTH, INITIAL_SNAKE};
use crate::grid::{Cell, Direction};

/// Injected source of uniform randomness in `[0, 1)`.
///
/// The engine never reads global randomness; callers hand in a seeded
/// generator (or a scripted sequence in tests) so every transition is
/// reproducible.
pub trait RandomSource {
    /// Returns a uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen_range(0.0..1.0)
    }
}

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Status {
    Running,
    Paused,
    Ended,
}

impl Status {
    /// Human-readable label for the HUD.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Paused => "paused",
            Self::Ended => "game over",
        }
    }
}

/// Complete game state for one session, as an immutable value.
///
/// Every transition returns a new state; the driver holds the current value
/// and replaces it wholesale. `Ended` is terminal: no transition leaves it
/// except [`GameState::restart`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameState {
    /// Body segments, head first.
    pub snake: Vec<Cell>,
    /// Direction the snake moved on the last tick.
    pub direction: Direction,
    /// Direction requested since the last tick, applied on the next one.
    pub pending_direction: Direction,
    /// Collectible cell; `None` only when the board is full.
    pub food: Option<Cell>,
    pub score: u32,
    pub status: Status,
}

impl GameState {
    /// Creates the starting state: the fixed three-segment snake moving
    /// right, score zero, food freshly spawned.
    #[must_use]
    pub fn new<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let snake = INITIAL_SNAKE.to_vec();
        let food = spawn_food(&snake, rng);

        Self {
            snake,
            direction: Direction::Right,
            pending_direction: Direction::Right,
            food,
            score: 0,
            status: Status::Running,
        }
    }

    /// Full reset from any state, including `Ended`.
    #[must_use]
    pub fn restart<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng)
    }

    /// Flips `Running` ↔ `Paused`. Pausing a finished game is a no-op.
    #[must_use]
    pub fn toggle_pause(&self) -> Self {
        let status = match self.status {
            Status::Running => Status::Paused,
            Status::Paused => Status::Running,
            Status::Ended => return self.clone(),
        };

        Self {
            status,
            ..self.clone()
        }
    }

    /// Records `requested` as the pending direction for the next tick.
    ///
    /// A request that exactly reverses the *current* direction is dropped:
    /// the head would move straight into its own neck. Requests are accepted
    /// regardless of status, so a direction queued while paused takes effect
    /// once the game resumes.
    #[must_use]
    pub fn queue_direction(&self, requested: Direction) -> Self {
        if requested == self.direction.opposite() {
            return self.clone();
        }

        Self {
            pending_direction: requested,
            ..self.clone()
        }
    }

    /// Advances the simulation by one tick.
    ///
    /// No-op unless the game is running with a non-empty snake. Out-of-bounds
    /// movement and self-collision end the game with the snake, food, and
    /// score untouched. Eating grows the snake by one segment, awards one
    /// point, and respawns food; when no free cell remains the board is full
    /// and the game ends.
    #[must_use]
    pub fn tick<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Self {
        if self.status != Status::Running || self.snake.is_empty() {
            return self.clone();
        }

        // Direction bookkeeping happens once per tick, so the reversal rule
        // from queue_direction is re-applied before the pending value wins.
        let effective = if self.pending_direction == self.direction.opposite() {
            self.direction
        } else {
            self.pending_direction
        };

        let next_head = self.snake[0].offset(effective);
        let ate_food = self.food == Some(next_head);

        // The tail cell is vacated this tick unless the snake grows into it.
        let collision_body = if ate_food {
            &self.snake[..]
        } else {
            &self.snake[..self.snake.len() - 1]
        };

        let mut next = self.clone();
        next.direction = effective;
        next.pending_direction = effective;

        if !next_head.is_within_bounds() || collision_body.contains(&next_head) {
            next.status = Status::Ended;
            return next;
        }

        next.snake.insert(0, next_head);
        if ate_food {
            next.score += 1;
            next.food = spawn_food(&next.snake, rng);
            if next.food.is_none() {
                // Board full: no distinct "won" signal, a filled grid ends
                // the game like any collision.
                next.status = Status::Ended;
            }
        } else {
            next.snake.pop();
        }

        next
    }
}

/// Picks a food cell uniformly among cells not occupied by the snake.
///
/// Free cells are enumerated in row-major order (`y` outer, `x` inner), so
/// for a given occupancy and random draw the chosen cell is fully
/// determined. Returns `None` when the snake covers the whole grid.
#[must_use]
pub fn spawn_food<R: RandomSource + ?Sized>(snake: &[Cell], rng: &mut R) -> Option<Cell> {
    let occupied: HashSet<Cell> = snake.iter().copied().collect();
    let mut free_cells = Vec::new();

    for y in 0..GRID_HEIGHT {
        for x in 0..GRID_WIDTH {
            let cell = Cell { x, y };
            if !occupied.contains(&cell) {
                free_cells.push(cell);
            }
        }
    }

    if free_cells.is_empty() {
        return None;
    }

    // The clamp guards a random source that returns exactly 1.0.
    let raw_index = (rng.next_unit() * free_cells.len() as f64).floor() as usize;
    let index = raw_index.min(free_cells.len() - 1);
    Some(free_cells[index])
}
