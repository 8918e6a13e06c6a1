use crate::actor_framework::ResourceClient;
use crate::domain::{User, UserCreate, UserUpdate};

/// Client for interacting with the User store.
///
/// `delete_user` is part of the surface but the store rejects it with
/// `Unsupported`.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl_client_methods!(UserClient, User, UserCreate, UserUpdate, user);
