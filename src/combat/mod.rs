//! Combat resolution: per-archetype damage rolls and attack exchanges.

#![allow(unused_imports)]

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
