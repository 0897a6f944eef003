//! Core game state, tuning constants, and the turn controller.

#![allow(unused_imports)]

pub mod constants;
pub mod game_state;
pub mod turn;

pub use constants::*;
pub use game_state::*;
pub use turn::*;
