use chrono::{Local, NaiveDate};

use crate::actor_framework::{Entity, EntityId};
use crate::domain::{Patch, User, UserCreate, UserUpdate};
use crate::error::{FilmorateError, FilmorateResult};
use crate::validation::user as rules;

fn today() -> NaiveDate {
    Local::now().date_naive()
}

impl Entity for User {
    type CreateParams = UserCreate;
    type Update = UserUpdate;
    type Action = ();
    type ActionResult = ();

    const KIND: &'static str = "User";

    fn id(&self) -> EntityId {
        self.id
    }

    /// Creates a new User from creation parameters.
    ///
    /// # Notes
    /// A blank or missing name is replaced with the login.
    fn from_create_params(params: UserCreate) -> FilmorateResult<Self> {
        rules::validate_create(&params, today())?;
        let (Some(email), Some(login)) = (params.email, params.login) else {
            return Err(FilmorateError::validation("email and login are required"));
        };

        Ok(Self {
            id: 0,
            name: rules::resolve_name(params.name.as_deref(), &login),
            email,
            login,
            birthday: params.birthday,
        })
    }

    fn assign_id(&mut self, id: EntityId) {
        self.id = id;
    }

    /// Updates the user's profile information.
    ///
    /// # Fields Updated
    /// - `email`, `login`: replaced when supplied
    /// - `name`: replaced when supplied; a blank name keeps the stored one,
    ///   a cleared name falls back to the login
    /// - `birthday`: replaced or cleared
    fn on_update(&mut self, update: UserUpdate) -> FilmorateResult<()> {
        rules::validate_update(&update, self, today())?;

        if let Some(email) = update.email.as_set() {
            self.email = email.clone();
        }
        if let Some(login) = update.login.as_set() {
            self.login = login.clone();
        }
        match &update.name {
            Patch::Absent => {}
            Patch::Clear => self.name = self.login.clone(),
            Patch::Set(name) => self.name = rules::resolve_name(Some(name), &self.name),
        }
        update.birthday.apply_to(&mut self.birthday);
        Ok(())
    }

    /// No two users share the same (login, email) pair.
    fn conflicts_with(&self, other: &Self) -> Option<FilmorateError> {
        if self.login == other.login && self.email == other.email {
            return Some(FilmorateError::Duplicate(format!(
                "user with login '{}' and email '{}' already exists",
                self.login, self.email
            )));
        }
        None
    }

    fn on_delete(&self) -> FilmorateResult<()> {
        Err(FilmorateError::Unsupported("user deletion is not implemented".to_string()))
    }

    /// Handles user-specific actions.
    ///
    /// Currently, no custom actions are defined for users.
    fn handle_action(&mut self, _action: ()) -> FilmorateResult<()> {
        Ok(())
    }
}
