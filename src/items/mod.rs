//! Item catalog, effects, and store/inventory transactions.

#![allow(unused_imports)]

pub mod store;
pub mod types;

pub use store::*;
pub use types::*;
