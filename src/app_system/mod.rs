//! System orchestration, startup, and shutdown logic.

pub mod filmorate_system;
pub mod telemetry;

pub use filmorate_system::*;
pub use telemetry::*;
