//! Plain data types for films and users, plus the partial-update wrapper.

pub mod film;
pub mod patch;
pub mod user;

pub use film::*;
pub use patch::*;
pub use user::*;

pub type FilmId = u64;
pub type UserId = u64;
