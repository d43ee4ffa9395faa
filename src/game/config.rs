use serde::{Deserialize, Serialize};

use super::state::Position;

/// Configuration for one game session.
///
/// These are construction parameters, not runtime flags: the engine reads
/// them once and the app reads the tick interval for its clock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square grid.
    pub grid_size: i32,
    /// Milliseconds between simulation ticks. Faster means harder.
    pub tick_interval_ms: u64,
    /// Starting length of the snake.
    pub initial_snake_length: usize,
    /// Fixed food cell for a fresh game. `None` draws one at random; a cell
    /// that is out of bounds or under the snake is also replaced by a draw.
    pub initial_food: Option<Position>,
}

impl Default for GameConfig {
    /// The classic layout: 20x20 grid, 100 ms ticks, food at (15,15).
    fn default() -> Self {
        Self {
            grid_size: 20,
            tick_interval_ms: 100,
            initial_snake_length: 3,
            initial_food: Some(Position::new(15, 15)),
        }
    }
}

impl GameConfig {
    /// Configuration for a custom grid size; food is drawn at random since
    /// the classic food cell only makes sense on the classic grid.
    ///
    /// The head starts at N/2 with the body trailing left, so the grid must
    /// be wide enough to hold the initial snake with room to move; degenerate
    /// sizes are floored at twice the initial length.
    pub fn new(grid_size: i32) -> Self {
        let defaults = Self::default();
        let min_size = defaults.initial_snake_length as i32 * 2;
        Self {
            grid_size: grid_size.max(min_size),
            initial_food: None,
            ..defaults
        }
    }

    /// A small grid, handy in tests.
    pub fn small() -> Self {
        Self::new(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_size, 20);
        assert_eq!(config.tick_interval_ms, 100);
        assert_eq!(config.initial_snake_length, 3);
        assert_eq!(config.initial_food, Some(Position::new(15, 15)));
    }

    #[test]
    fn test_custom_grid_draws_food() {
        let config = GameConfig::new(12);
        assert_eq!(config.grid_size, 12);
        assert_eq!(config.initial_food, None);
    }

    #[test]
    fn test_degenerate_grid_sizes_are_floored() {
        assert_eq!(GameConfig::new(0).grid_size, 6);
        assert_eq!(GameConfig::new(-5).grid_size, 6);
        assert_eq!(GameConfig::new(3).grid_size, 6);
        assert_eq!(GameConfig::new(6).grid_size, 6);
        assert_eq!(GameConfig::new(7).grid_size, 7);
    }
}
