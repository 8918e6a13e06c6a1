use chrono::NaiveDate;
use once_cell::sync::Lazy;

use super::{check_update_target, is_blank};
use crate::domain::{Film, FilmCreate, FilmUpdate, Patch};
use crate::error::{FilmorateError, FilmorateResult};

/// Longest accepted description, in UTF-16 code units.
pub const MAX_DESCRIPTION_LEN: usize = 200;

/// The first public film screening; nothing may be released earlier.
pub static FIRST_FILM_RELEASE_DATE: Lazy<NaiveDate> =
    Lazy::new(|| NaiveDate::from_ymd_opt(1895, 12, 28).expect("valid calendar date"));

pub fn validate_name(name: &str) -> FilmorateResult<()> {
    if is_blank(name) {
        return Err(FilmorateError::validation("film name must not be empty"));
    }
    Ok(())
}

pub fn validate_release_date(release_date: NaiveDate) -> FilmorateResult<()> {
    if release_date < *FIRST_FILM_RELEASE_DATE {
        return Err(FilmorateError::validation(format!(
            "release date must be after {}",
            *FIRST_FILM_RELEASE_DATE
        )));
    }
    Ok(())
}

pub fn validate_description(description: &str) -> FilmorateResult<()> {
    let len = description.encode_utf16().count();
    if len > MAX_DESCRIPTION_LEN {
        return Err(FilmorateError::validation(format!(
            "description must be at most {} characters, got {}",
            MAX_DESCRIPTION_LEN, len
        )));
    }
    Ok(())
}

pub fn validate_duration(minutes: i32) -> FilmorateResult<()> {
    if minutes <= 0 {
        return Err(FilmorateError::validation(format!(
            "duration must be a positive number of minutes, got {}",
            minutes
        )));
    }
    Ok(())
}

pub fn validate_create(params: &FilmCreate) -> FilmorateResult<()> {
    match params.name.as_deref() {
        Some(name) => validate_name(name)?,
        None => return Err(FilmorateError::validation("film name must not be empty")),
    }
    match params.release_date {
        Some(date) => validate_release_date(date)?,
        None => return Err(FilmorateError::validation("release date is required")),
    }
    if let Some(description) = &params.description {
        validate_description(description)?;
    }
    if let Some(minutes) = params.duration {
        validate_duration(minutes)?;
    }
    Ok(())
}

/// Checks only the fields present in `update`.
pub fn validate_update(update: &FilmUpdate, existing: &Film) -> FilmorateResult<()> {
    check_update_target(update.id, existing.id, "Film")?;

    match &update.name {
        Patch::Absent => {}
        Patch::Clear => return Err(FilmorateError::validation("film name must not be empty")),
        Patch::Set(name) => validate_name(name)?,
    }
    match update.release_date {
        Patch::Absent => {}
        Patch::Clear => return Err(FilmorateError::validation("release date is required")),
        Patch::Set(date) => validate_release_date(date)?,
    }
    if let Some(description) = update.description.as_set() {
        validate_description(description)?;
    }
    if let Some(minutes) = update.duration.as_set() {
        validate_duration(*minutes)?;
    }
    Ok(())
}
