use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{Film, FilmCreate, FilmId, FilmUpdate, UserId};
use crate::error::{FilmorateError, FilmorateResult};
use crate::film_actor::{FilmAction, FilmActionResult};

/// Client for interacting with the Film store.
#[derive(Clone)]
pub struct FilmClient {
    inner: ResourceClient<Film>,
}

impl_client_methods!(FilmClient, Film, FilmCreate, FilmUpdate, film);

impl FilmClient {
    /// Returns `true` if the like is new.
    #[instrument(skip(self))]
    pub async fn add_like(&self, film_id: FilmId, user_id: UserId) -> FilmorateResult<bool> {
        debug!("Sending request");
        match self.inner.perform_action(film_id, FilmAction::AddLike(user_id)).await? {
            FilmActionResult::AddLike(added) => Ok(added),
            other => Err(unexpected(other)),
        }
    }

    /// Returns `true` if a like was removed.
    #[instrument(skip(self))]
    pub async fn remove_like(&self, film_id: FilmId, user_id: UserId) -> FilmorateResult<bool> {
        debug!("Sending request");
        match self.inner.perform_action(film_id, FilmAction::RemoveLike(user_id)).await? {
            FilmActionResult::RemoveLike(removed) => Ok(removed),
            other => Err(unexpected(other)),
        }
    }
}

fn unexpected(result: FilmActionResult) -> FilmorateError {
    FilmorateError::ActorCommunication(format!("Unexpected result: {:?}", result))
}
