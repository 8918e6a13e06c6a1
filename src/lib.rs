//! In-memory film catalogue with likes, friendships and a popularity ranking.
//!
//! Every store is an actor that owns its state; callers talk to it through
//! cloneable clients. [`app_system::FilmorateSystem`] wires them together.

pub mod actor_framework;
pub mod app_system;
pub mod clients;
pub mod config;
pub mod domain;
pub mod error;
pub mod film_actor;
pub mod id_allocator;
pub mod social_graph;
pub mod user_actor;
pub mod validation;

#[cfg(test)]
mod mock_framework;
