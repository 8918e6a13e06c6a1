use std::collections::BTreeSet;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

use super::friendship::{FriendGraph, FriendshipEdge};
use crate::actor_framework::Response;
use crate::clients::UserClient;
use crate::domain::{User, UserId, UserProfile};
use crate::error::{FilmorateError, FilmorateResult};

// =============================================================================
// MESSAGES
// =============================================================================

#[derive(Debug)]
pub enum SocialGraphRequest {
    AddFriend {
        user_id: UserId,
        friend_id: UserId,
        respond_to: Response<()>,
    },
    RemoveFriend {
        user_id: UserId,
        friend_id: UserId,
        respond_to: Response<()>,
    },
    ListFriends {
        user_id: UserId,
        respond_to: Response<Vec<User>>,
    },
    ListMutualFriends {
        user_id: UserId,
        other_id: UserId,
        respond_to: Response<Vec<User>>,
    },
    UserProfile {
        user_id: UserId,
        respond_to: Response<UserProfile>,
    },
    Shutdown,
    #[cfg(test)]
    EdgeCount {
        respond_to: Response<usize>,
    },
}

// =============================================================================
// SERVICE
// =============================================================================

/// Owns the friendship relation and resolves ids through the user store.
///
/// Messages are handled one at a time, so adding or removing an edge is a
/// single critical section and no reader sees a one-sided friendship.
pub struct SocialGraphService {
    receiver: mpsc::Receiver<SocialGraphRequest>,
    users: UserClient,
    graph: FriendGraph,
}

impl SocialGraphService {
    pub fn new(buffer_size: usize, users: UserClient) -> (Self, SocialGraphClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            users,
            graph: FriendGraph::new(),
        };
        (service, SocialGraphClient::new(sender))
    }

    #[instrument(name = "social_graph_service", skip(self))]
    pub async fn run(mut self) {
        info!("SocialGraphService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                SocialGraphRequest::AddFriend { user_id, friend_id, respond_to } => {
                    let _ = respond_to.send(self.handle_add_friend(user_id, friend_id).await);
                }
                SocialGraphRequest::RemoveFriend { user_id, friend_id, respond_to } => {
                    let _ = respond_to.send(self.handle_remove_friend(user_id, friend_id).await);
                }
                SocialGraphRequest::ListFriends { user_id, respond_to } => {
                    let _ = respond_to.send(self.handle_list_friends(user_id).await);
                }
                SocialGraphRequest::ListMutualFriends { user_id, other_id, respond_to } => {
                    let _ = respond_to.send(self.handle_list_mutual_friends(user_id, other_id).await);
                }
                SocialGraphRequest::UserProfile { user_id, respond_to } => {
                    let _ = respond_to.send(self.handle_user_profile(user_id).await);
                }
                SocialGraphRequest::Shutdown => {
                    info!("SocialGraphService shutting down");
                    break;
                }
                #[cfg(test)]
                SocialGraphRequest::EdgeCount { respond_to } => {
                    let _ = respond_to.send(Ok(self.graph.len()));
                }
            }
        }

        info!("SocialGraphService stopped");
    }

    #[instrument(skip(self))]
    async fn handle_add_friend(&mut self, user_id: UserId, friend_id: UserId) -> FilmorateResult<()> {
        debug!("Processing add_friend request");

        let edge = self.edge_between(user_id, friend_id)?;
        let friend = self.users.get_user(friend_id).await?;
        self.users.get_user(user_id).await?;

        if !self.graph.insert(edge) {
            warn!("Already friends");
            return Err(FilmorateError::Duplicate(format!(
                "user {} is already a friend of user with id = {}",
                friend.login, user_id
            )));
        }

        info!("Friendship added");
        Ok(())
    }

    /// Removing a friendship that does not exist is not an error.
    #[instrument(skip(self))]
    async fn handle_remove_friend(&mut self, user_id: UserId, friend_id: UserId) -> FilmorateResult<()> {
        debug!("Processing remove_friend request");

        let edge = self.edge_between(user_id, friend_id)?;
        self.users.get_user(user_id).await?;
        self.users.get_user(friend_id).await?;

        if self.graph.remove(edge) {
            info!("Friendship removed");
        } else {
            debug!("No friendship to remove");
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn handle_list_friends(&self, user_id: UserId) -> FilmorateResult<Vec<User>> {
        debug!("Processing list_friends request");

        self.users.get_user(user_id).await?;
        let friends = self.resolve(&self.graph.friends_of(user_id)).await?;
        debug!(friend_count = friends.len(), "Listed friends");
        Ok(friends)
    }

    #[instrument(skip(self))]
    async fn handle_list_mutual_friends(&self, user_id: UserId, other_id: UserId) -> FilmorateResult<Vec<User>> {
        debug!("Processing list_mutual_friends request");

        self.users.get_user(user_id).await?;
        self.users.get_user(other_id).await?;
        let mutual = self.resolve(&self.graph.mutual_friends(user_id, other_id)).await?;
        debug!(mutual_count = mutual.len(), "Listed mutual friends");
        Ok(mutual)
    }

    #[instrument(skip(self))]
    async fn handle_user_profile(&self, user_id: UserId) -> FilmorateResult<UserProfile> {
        let user = self.users.get_user(user_id).await?;
        Ok(UserProfile {
            user,
            friends: self.graph.friends_of(user_id),
        })
    }

    fn edge_between(&self, user_id: UserId, friend_id: UserId) -> FilmorateResult<FriendshipEdge> {
        FriendshipEdge::new(user_id, friend_id).ok_or_else(|| {
            FilmorateError::validation(format!("user with id = {} cannot befriend themselves", user_id))
        })
    }

    async fn resolve(&self, ids: &BTreeSet<UserId>) -> FilmorateResult<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let users = self.users.list_users().await?;
        Ok(users.into_iter().filter(|user| ids.contains(&user.id)).collect())
    }
}

// =============================================================================
// CLIENT
// =============================================================================

/// Generate client methods with oneshot channel boilerplate and automatic tracing.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident) => {
        impl $client {
            #[instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> FilmorateResult<$return_type> {
                debug!("Sending request");
                let (respond_to, response) = oneshot::channel();
                self.sender
                    .send($request::$variant {
                        $($param,)*
                        respond_to,
                    })
                    .await
                    .map_err(|_| FilmorateError::ActorCommunication("social graph closed".to_string()))?;

                response
                    .await
                    .map_err(|_| FilmorateError::ActorCommunication("social graph dropped the request".to_string()))?
            }
        }
    };
}

#[derive(Clone)]
pub struct SocialGraphClient {
    sender: mpsc::Sender<SocialGraphRequest>,
}

impl SocialGraphClient {
    pub fn new(sender: mpsc::Sender<SocialGraphRequest>) -> Self {
        Self { sender }
    }

    /// Manual method for special cases (no response needed)
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> FilmorateResult<()> {
        debug!("Sending shutdown request");
        self.sender
            .send(SocialGraphRequest::Shutdown)
            .await
            .map_err(|_| FilmorateError::ActorCommunication("social graph closed".to_string()))
    }
}

client_method!(SocialGraphClient => fn add_friend(user_id: UserId, friend_id: UserId) -> () as SocialGraphRequest::AddFriend);
client_method!(SocialGraphClient => fn remove_friend(user_id: UserId, friend_id: UserId) -> () as SocialGraphRequest::RemoveFriend);
client_method!(SocialGraphClient => fn list_friends(user_id: UserId) -> Vec<User> as SocialGraphRequest::ListFriends);
client_method!(SocialGraphClient => fn list_mutual_friends(user_id: UserId, other_id: UserId) -> Vec<User> as SocialGraphRequest::ListMutualFriends);
client_method!(SocialGraphClient => fn user_profile(user_id: UserId) -> UserProfile as SocialGraphRequest::UserProfile);

// Test-only method for internal state inspection
#[cfg(test)]
client_method!(SocialGraphClient => fn edge_count() -> usize as SocialGraphRequest::EdgeCount);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor_framework::ResourceActor;
    use crate::domain::UserCreate;

    async fn start() -> (UserClient, SocialGraphClient) {
        let (user_actor, user_inner) = ResourceActor::<User>::new(10);
        tokio::spawn(user_actor.run());
        let users = UserClient::new(user_inner);

        for login in ["ann", "bob", "cat", "dan"] {
            users
                .create_user(UserCreate::new(login, format!("{}@x.com", login)))
                .await
                .unwrap();
        }

        let (service, graph) = SocialGraphService::new(10, users.clone());
        tokio::spawn(service.run());
        (users, graph)
    }

    fn ids(users: &[User]) -> Vec<UserId> {
        users.iter().map(|u| u.id).collect()
    }

    #[tokio::test]
    async fn test_add_and_remove_friend_both_sides() {
        let (_users, graph) = start().await;

        graph.add_friend(1, 2).await.unwrap();
        assert_eq!(ids(&graph.list_friends(1).await.unwrap()), vec![2]);
        assert_eq!(ids(&graph.list_friends(2).await.unwrap()), vec![1]);

        graph.remove_friend(1, 2).await.unwrap();
        assert!(graph.list_friends(1).await.unwrap().is_empty());
        assert!(graph.list_friends(2).await.unwrap().is_empty());
        assert_eq!(graph.edge_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_duplicate_friendship_rejected() {
        let (_users, graph) = start().await;

        graph.add_friend(1, 2).await.unwrap();
        let err = graph.add_friend(2, 1).await.unwrap_err();
        assert!(matches!(err, FilmorateError::Duplicate(_)));
        assert_eq!(graph.edge_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_self_friendship_rejected() {
        let (_users, graph) = start().await;
        assert!(matches!(
            graph.add_friend(3, 3).await,
            Err(FilmorateError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_unknown_user_is_not_found() {
        let (_users, graph) = start().await;
        assert_eq!(
            graph.add_friend(1, 99).await.unwrap_err(),
            FilmorateError::not_found("User", 99)
        );
        assert_eq!(
            graph.list_friends(99).await.unwrap_err(),
            FilmorateError::not_found("User", 99)
        );
        assert_eq!(graph.edge_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_removing_missing_friendship_is_noop() {
        let (_users, graph) = start().await;
        graph.remove_friend(1, 4).await.unwrap();
        assert_eq!(graph.edge_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_mutual_friends_and_profile() {
        let (_users, graph) = start().await;
        graph.add_friend(1, 3).await.unwrap();
        graph.add_friend(2, 3).await.unwrap();
        graph.add_friend(1, 4).await.unwrap();

        assert_eq!(ids(&graph.list_mutual_friends(1, 2).await.unwrap()), vec![3]);
        assert!(graph.list_mutual_friends(3, 4).await.unwrap().len() == 1);

        let profile = graph.user_profile(1).await.unwrap();
        assert_eq!(profile.user.login, "ann");
        assert_eq!(profile.friends, BTreeSet::from([3, 4]));
    }

    #[tokio::test]
    async fn test_shutdown_closes_service() {
        let (_users, graph) = start().await;
        graph.shutdown().await.unwrap();
        assert!(matches!(
            graph.list_friends(1).await,
            Err(FilmorateError::ActorCommunication(_))
        ));
    }
}
