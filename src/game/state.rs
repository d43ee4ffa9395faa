use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// A cell on the game grid, 0-indexed from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step along `direction`.
    pub fn step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The snake: body cells with the head at index 0, plus its current heading.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    pub body: Vec<Position>,
    pub heading: Direction,
}

impl Snake {
    /// Build a horizontal snake: the body trails to the left of the head,
    /// regardless of the initial heading.
    pub fn horizontal(head: Position, heading: Direction, length: usize) -> Self {
        let body = (0..length as i32)
            .map(|i| Position::new(head.x - i, head.y))
            .collect();
        Self { body, heading }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Whether any body cell (head included) occupies `pos`.
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Commit a move to `new_head`, keeping the tail when growing.
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.insert(0, new_head);
        if !grow {
            self.body.pop();
        }
    }
}

/// Lifecycle stage of one game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Running,
    Over,
}

/// Why a running game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    /// The next head cell was outside the grid.
    HitWall,
    /// The next head cell was occupied by the snake's own body.
    HitSelf,
    /// The snake covered every cell, leaving nowhere to place food.
    BoardFull,
}

/// Authoritative snapshot of one game session.
///
/// Pure data: all mutation flows through the engine, and outside readers only
/// ever see a shared reference.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub grid_size: i32,
    pub score: u32,
    pub phase: Phase,
}

impl GameState {
    pub fn new(snake: Snake, food: Position, grid_size: i32) -> Self {
        Self {
            snake,
            food,
            grid_size,
            score: 0,
            phase: Phase::NotStarted,
        }
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.grid_size && pos.y >= 0 && pos.y < self.grid_size
    }
}
