use crate::actor_framework::{Entity, EntityId};
use crate::domain::{Film, FilmCreate, FilmUpdate};
use crate::error::{FilmorateError, FilmorateResult};
use crate::validation::film as rules;

use super::actions::{FilmAction, FilmActionResult};

impl Entity for Film {
    type CreateParams = FilmCreate;
    type Update = FilmUpdate;
    type Action = FilmAction;
    type ActionResult = FilmActionResult;

    const KIND: &'static str = "Film";

    fn id(&self) -> EntityId {
        self.id
    }

    /// Creates a new Film from creation parameters.
    ///
    /// # Errors
    /// `Validation` if the name is blank, the release date is missing or
    /// precedes 1895-12-28, the description is too long or the duration is
    /// not positive.
    fn from_create_params(params: FilmCreate) -> FilmorateResult<Self> {
        rules::validate_create(&params)?;
        let (Some(name), Some(release_date)) = (params.name, params.release_date) else {
            return Err(FilmorateError::validation("film name and release date are required"));
        };

        Ok(Self {
            id: 0,
            name,
            description: params.description,
            release_date,
            duration: params.duration,
            likes: Default::default(),
        })
    }

    fn assign_id(&mut self, id: EntityId) {
        self.id = id;
    }

    /// Applies the supplied fields; absent ones keep their stored value.
    fn on_update(&mut self, update: FilmUpdate) -> FilmorateResult<()> {
        rules::validate_update(&update, self)?;

        if let Some(name) = update.name.as_set() {
            self.name = name.clone();
        }
        if let Some(release_date) = update.release_date.as_set() {
            self.release_date = *release_date;
        }
        update.description.apply_to(&mut self.description);
        update.duration.apply_to(&mut self.duration);
        Ok(())
    }

    /// Two films may not share both name and release date.
    fn conflicts_with(&self, other: &Self) -> Option<FilmorateError> {
        (self.name == other.name && self.release_date == other.release_date).then(|| {
            FilmorateError::Duplicate(format!(
                "film '{}' released on {} already exists with id = {}",
                self.name, self.release_date, other.id
            ))
        })
    }

    fn handle_action(&mut self, action: FilmAction) -> FilmorateResult<FilmActionResult> {
        match action {
            FilmAction::AddLike(user_id) => Ok(FilmActionResult::AddLike(self.likes.insert(user_id))),
            FilmAction::RemoveLike(user_id) => Ok(FilmActionResult::RemoveLike(self.likes.remove(&user_id))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Patch;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn film() -> Film {
        let mut film = Film::from_create_params(
            FilmCreate::new("Test", date(2000, 1, 1)).with_description("old").with_duration(90),
        )
        .unwrap();
        film.assign_id(1);
        film
    }

    #[test]
    fn test_create_starts_without_likes() {
        let film = film();
        assert_eq!(film.name, "Test");
        assert!(film.likes.is_empty());
    }

    #[test]
    fn test_update_keeps_absent_fields() {
        let mut film = film();
        let mut update = FilmUpdate::for_id(1);
        update.name = Patch::Set("Renamed".into());
        update.description = Patch::Clear;
        film.on_update(update).unwrap();

        assert_eq!(film.name, "Renamed");
        assert_eq!(film.description, None);
        assert_eq!(film.duration, Some(90));
        assert_eq!(film.release_date, date(2000, 1, 1));
    }

    #[test]
    fn test_like_actions_are_set_semantics() {
        let mut film = film();
        assert_eq!(film.handle_action(FilmAction::AddLike(5)), Ok(FilmActionResult::AddLike(true)));
        assert_eq!(film.handle_action(FilmAction::AddLike(5)), Ok(FilmActionResult::AddLike(false)));
        assert_eq!(film.like_count(), 1);
        assert_eq!(film.handle_action(FilmAction::RemoveLike(6)), Ok(FilmActionResult::RemoveLike(false)));
        assert_eq!(film.handle_action(FilmAction::RemoveLike(5)), Ok(FilmActionResult::RemoveLike(true)));
        assert_eq!(film.like_count(), 0);
    }

    #[test]
    fn test_conflict_on_name_and_date() {
        let a = film();
        let mut b = a.clone();
        b.id = 2;
        assert!(matches!(a.conflicts_with(&b), Some(FilmorateError::Duplicate(_))));
        b.release_date = date(2001, 1, 1);
        assert!(a.conflicts_with(&b).is_none());
    }
}
