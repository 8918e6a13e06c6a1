//! Film-specific store logic, including the like actions.

mod actions;
pub mod entity;

pub use actions::*;
