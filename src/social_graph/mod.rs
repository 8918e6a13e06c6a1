//! The symmetric "friend of" relation between users.

pub mod friendship;
pub mod service;

pub use friendship::*;
pub use service::*;
