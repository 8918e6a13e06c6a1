//! Typed clients over the store actors, and the like-ranking orchestrator.

#[macro_use]
mod macros;

pub mod film_client;
pub mod popularity_ranker;
pub mod user_client;

pub use film_client::*;
pub use popularity_ranker::*;
pub use user_client::*;
