//! Character model: archetype tags and the stat-holding combatant.

#![allow(unused_imports)]

pub mod archetype;
pub mod types;

pub use archetype::*;
pub use types::*;
