use std::cmp::Reverse;

use tracing::{debug, info, instrument, warn};

use crate::clients::{FilmClient, UserClient};
use crate::domain::{Film, FilmId, UserId};
use crate::error::{FilmorateError, FilmorateResult};

/// Count the adapter uses when the caller does not ask for one.
pub const DEFAULT_TOP_COUNT: i64 = 10;

/// Likes and like-based ranking over the film store.
///
/// Each like change is a single film action, so it is atomic with respect
/// to other likes on the same film. Ranking works on a `list` snapshot and
/// never holds the store while sorting.
#[derive(Clone)]
pub struct PopularityRanker {
    films: FilmClient,
    users: UserClient,
}

impl PopularityRanker {
    pub fn new(films: FilmClient, users: UserClient) -> Self {
        Self { films, users }
    }

    /// Idempotent: a repeated like leaves the like set unchanged.
    #[instrument(skip(self))]
    pub async fn add_like(&self, film_id: FilmId, user_id: UserId) -> FilmorateResult<()> {
        self.users.get_user(user_id).await?;

        if self.films.add_like(film_id, user_id).await? {
            info!("Like recorded");
        } else {
            debug!("Like already recorded");
        }
        Ok(())
    }

    /// Fails with `NotFound` if the user never liked this film; the message
    /// lists the films the user did like.
    #[instrument(skip(self))]
    pub async fn remove_like(&self, film_id: FilmId, user_id: UserId) -> FilmorateResult<()> {
        self.users.get_user(user_id).await?;

        if self.films.remove_like(film_id, user_id).await? {
            info!("Like removed");
            return Ok(());
        }

        let liked: Vec<FilmId> = self
            .films
            .list_films()
            .await?
            .into_iter()
            .filter(|film| film.likes.contains(&user_id))
            .map(|film| film.id)
            .collect();
        warn!(liked = ?liked, "User has not liked this film");
        Err(FilmorateError::NotFound(missing_like_message(film_id, user_id, &liked)))
    }

    /// The `count` most liked films, most liked first.
    #[instrument(skip(self))]
    pub async fn top_films(&self, count: i64) -> FilmorateResult<Vec<Film>> {
        let limit = validate_top_count(count)?;
        let films = self.films.list_films().await?;
        let top = rank_by_likes(films, limit);
        debug!(returned = top.len(), "Ranked films");
        Ok(top)
    }
}

pub fn validate_top_count(count: i64) -> FilmorateResult<usize> {
    if count <= 0 {
        return Err(FilmorateError::validation(format!(
            "count = {} must be a positive integer",
            count
        )));
    }
    Ok(usize::try_from(count).unwrap_or(usize::MAX))
}

/// Sorts by like count, descending. The sort is stable, so films with equal
/// counts keep the order they were listed in (ascending id).
pub fn rank_by_likes(mut films: Vec<Film>, limit: usize) -> Vec<Film> {
    films.sort_by_key(|film| Reverse(film.like_count()));
    films.truncate(limit);
    films
}

fn missing_like_message(film_id: FilmId, user_id: UserId, liked: &[FilmId]) -> String {
    if liked.is_empty() {
        return format!("user with id = {} has not liked any film", user_id);
    }
    let liked = liked.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(", ");
    format!(
        "user with id = {} has not liked film with id = {}; liked films: {}",
        user_id, film_id, liked
    )
}
