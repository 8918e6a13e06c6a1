use tracing::{error, info, instrument, warn};

use crate::actor_framework::ResourceActor;
use crate::clients::{FilmClient, PopularityRanker, UserClient};
use crate::config::Config;
use crate::domain::{Film, User};
use crate::error::{FilmorateError, FilmorateResult};
use crate::social_graph::{SocialGraphClient, SocialGraphService};

/// Composition root: starts every actor and hands out their clients.
///
/// Stores start first, then the services that depend on them. Each actor
/// owns its state; nothing is shared through statics.
pub struct FilmorateSystem {
    pub films: FilmClient,
    pub users: UserClient,
    pub friends: SocialGraphClient,
    pub ranker: PopularityRanker,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl FilmorateSystem {
    /// Must be called from within a tokio runtime.
    #[instrument(name = "filmorate_system", skip(config))]
    pub fn new(config: &Config) -> Self {
        info!(channel_capacity = config.channel_capacity, "Starting system");

        let (film_actor, film_inner) = ResourceActor::<Film>::new(config.channel_capacity);
        let film_handle = tokio::spawn(film_actor.run());
        let films = FilmClient::new(film_inner);

        let (user_actor, user_inner) = ResourceActor::<User>::new(config.channel_capacity);
        let user_handle = tokio::spawn(user_actor.run());
        let users = UserClient::new(user_inner);

        let (graph_service, friends) = SocialGraphService::new(config.channel_capacity, users.clone());
        let graph_handle = tokio::spawn(graph_service.run());

        let ranker = PopularityRanker::new(films.clone(), users.clone());

        info!("System started");
        Self {
            films,
            users,
            friends,
            ranker,
            handles: vec![graph_handle, film_handle, user_handle],
        }
    }

    /// Stops the social graph first, then drops the store clients so the
    /// stores see their mailboxes close, and waits for every task.
    ///
    /// A store only stops once every clone of its client is gone, so this
    /// waits for as long as a caller still holds a `FilmClient`, `UserClient`
    /// or `PopularityRanker` taken from this system.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> FilmorateResult<()> {
        info!("Shutting down system");

        if let Err(e) = self.friends.shutdown().await {
            warn!(error = %e, "Social graph already stopped");
        }
        drop(self.friends);
        drop(self.ranker);
        drop(self.films);
        drop(self.users);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Actor task failed");
                return Err(FilmorateError::ActorCommunication(format!("actor task failed: {}", e)));
            }
        }

        info!("System shutdown complete");
        Ok(())
    }
}
