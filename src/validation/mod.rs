//! Field rules for films and users.
//!
//! Everything here is a pure function returning [`FilmorateError`]; the
//! entity hooks call into it and the store decides what to commit. Create
//! checks require every mandatory field, update checks only look at the
//! fields the caller supplied.

pub mod film;
pub mod user;

use crate::error::{FilmorateError, FilmorateResult};

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Unwraps the id of an update request.
pub fn require_id(id: Option<u64>, kind: &str) -> FilmorateResult<u64> {
    id.ok_or_else(|| FilmorateError::ConditionsNotMet(format!("{} id must be provided", kind)))
}

/// An update must name the record it is applied to.
pub(crate) fn check_update_target(id: Option<u64>, existing_id: u64, kind: &str) -> FilmorateResult<()> {
    let id = require_id(id, kind)?;
    if id != existing_id {
        return Err(FilmorateError::not_found(kind, id));
    }
    Ok(())
}
