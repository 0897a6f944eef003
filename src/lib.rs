//! Skirmish - Terminal Turn-Based Combat RPG Library
//!
//! This module exposes the game logic for testing and external use.

pub mod character;
pub mod combat;
pub mod core;
pub mod items;
// The UI module is tightly coupled to the terminal; the binary is its
// only consumer.
pub mod ui;

pub use crate::core::game_state::{GameState, Intent, Outcome, StateSnapshot};
pub use crate::core::turn::{spawn_enemy_if_needed, take_turn, TurnError, TurnEvent};
