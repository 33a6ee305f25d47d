//! Falling-words typing game for the terminal.
//!
//! The game state lives in [`game::Game`] and is advanced one fixed tick at a
//! time; the binary wraps it with crossterm input polling and rendering.

pub mod constants;
pub mod entry;
pub mod game;
pub mod input;
pub mod pool;
pub mod render;
pub mod score;
pub mod types;
