//! The simulation core: deterministic state advancement, collision rules,
//! food placement and input arbitration, with no I/O or rendering
//! dependencies.

pub mod config;
pub mod direction;
pub mod engine;
pub mod state;

pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, TickOutcome};
pub use state::{GameOverReason, GameState, Phase, Position, Snake};
