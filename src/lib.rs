//! Grid-based snake.
//!
//! The `game` module is the engine proper and stands alone; `input`,
//! `render` and `app` are the terminal shell around it (key mapping,
//! drawing, and the timer-driven run loop).

pub mod app;
pub mod game;
pub mod input;
pub mod render;
