//! User-specific store logic.

pub mod entity;
