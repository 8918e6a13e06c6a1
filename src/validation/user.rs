use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use super::{check_update_target, is_blank};
use crate::domain::{Patch, User, UserCreate, UserUpdate};
use crate::error::{FilmorateError, FilmorateResult};

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9._-]+\.[a-zA-Z0-9_-]+$").expect("email pattern compiles")
});

pub fn validate_email(email: &str) -> FilmorateResult<()> {
    if is_blank(email) {
        return Err(FilmorateError::validation("email must not be empty"));
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(FilmorateError::validation(format!(
            "email '{}' must contain latin letters, digits and '@', e.g. example@domain.com",
            email
        )));
    }
    Ok(())
}

pub fn validate_login(login: &str) -> FilmorateResult<()> {
    if is_blank(login) {
        return Err(FilmorateError::validation("login must not be empty"));
    }
    if login.chars().any(char::is_whitespace) {
        return Err(FilmorateError::validation(format!(
            "login '{}' must not contain whitespace",
            login
        )));
    }
    Ok(())
}

pub fn validate_birthday(birthday: NaiveDate, today: NaiveDate) -> FilmorateResult<()> {
    if birthday > today {
        return Err(FilmorateError::validation(format!(
            "birthday {} must not be in the future",
            birthday
        )));
    }
    Ok(())
}

/// The name to store: the given one, or `fallback` when it is blank or absent.
pub fn resolve_name(name: Option<&str>, fallback: &str) -> String {
    match name {
        Some(name) if !is_blank(name) => name.to_string(),
        _ => fallback.to_string(),
    }
}

pub fn validate_create(params: &UserCreate, today: NaiveDate) -> FilmorateResult<()> {
    validate_email(params.email.as_deref().unwrap_or_default())?;
    validate_login(params.login.as_deref().unwrap_or_default())?;
    if let Some(birthday) = params.birthday {
        validate_birthday(birthday, today)?;
    }
    Ok(())
}

/// Checks only the fields present in `update`.
pub fn validate_update(update: &UserUpdate, existing: &User, today: NaiveDate) -> FilmorateResult<()> {
    check_update_target(update.id, existing.id, "User")?;

    match &update.email {
        Patch::Absent => {}
        Patch::Clear => return Err(FilmorateError::validation("email must not be empty")),
        Patch::Set(email) => validate_email(email)?,
    }
    match &update.login {
        Patch::Absent => {}
        Patch::Clear => return Err(FilmorateError::validation("login must not be empty")),
        Patch::Set(login) => validate_login(login)?,
    }
    if let Some(birthday) = update.birthday.as_set() {
        validate_birthday(*birthday, today)?;
    }
    Ok(())
}
