use std::collections::BTreeMap;
use std::fmt::Debug;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

use crate::error::{FilmorateError, FilmorateResult};
use crate::id_allocator::IdAllocator;

pub type EntityId = u64;

// =============================================================================
// 1. THE ABSTRACTION (Entity trait with lifecycle hooks and actions)
// =============================================================================

/// Trait that any domain entity must implement to be managed by [`ResourceActor`].
///
/// The actor owns the only copy of every entity, so the hooks below run
/// inside its critical section and never race with each other.
pub trait Entity: Clone + Debug + Send + Sync + 'static {
    type CreateParams: Send + Sync + Debug;
    type Update: Send + Sync + Debug;
    type Action: Send + Sync + Debug;
    type ActionResult: Send + Sync + Debug;

    /// Human-readable kind, used in messages ("Film with id = 3 not found").
    const KIND: &'static str;

    fn id(&self) -> EntityId;

    /// Validates the parameters and builds the entity. The id is assigned
    /// afterwards, once the entity is known to be acceptable.
    fn from_create_params(params: Self::CreateParams) -> FilmorateResult<Self>;

    fn assign_id(&mut self, id: EntityId);

    /// Validates and applies a partial update.
    fn on_update(&mut self, update: Self::Update) -> FilmorateResult<()>;

    /// Uniqueness rule between two distinct stored entities.
    fn conflicts_with(&self, _other: &Self) -> Option<FilmorateError> {
        None
    }

    fn on_delete(&self) -> FilmorateResult<()> {
        Ok(())
    }

    fn handle_action(&mut self, action: Self::Action) -> FilmorateResult<Self::ActionResult>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<FilmorateResult<T>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T>,
    },
    Get {
        id: EntityId,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: EntityId,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: EntityId,
        respond_to: Response<T>,
    },
    Action {
        id: EntityId,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// Single-writer store for one entity kind.
///
/// Requests are handled one at a time, which makes create, update, delete,
/// id allocation and actions linearizable for that kind. `list` returns
/// entities in ascending id order.
pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<EntityId, T>,
    ids: IdAllocator,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            ids: IdAllocator::new(),
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs until every client has been dropped.
    #[instrument(name = "resource_actor", skip(self), fields(kind = T::KIND))]
    pub async fn run(mut self) {
        info!("Store starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    let _ = respond_to.send(self.handle_create(params));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let _ = respond_to.send(Ok(self.handle_get(id)));
                }
                ResourceRequest::List { respond_to } => {
                    let _ = respond_to.send(Ok(self.handle_list()));
                }
                ResourceRequest::Update { id, update, respond_to } => {
                    let _ = respond_to.send(self.handle_update(id, update));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let _ = respond_to.send(self.handle_delete(id));
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    let _ = respond_to.send(self.handle_action(id, action));
                }
            }
        }

        info!("Store stopped");
    }

    #[instrument(skip(self, params))]
    fn handle_create(&mut self, params: T::CreateParams) -> FilmorateResult<T> {
        debug!(?params, "Processing create request");

        let mut item = T::from_create_params(params).inspect_err(|e| warn!(error = %e, "Create rejected"))?;
        if let Some(conflict) = self.find_conflict(&item) {
            warn!(error = %conflict, "Create rejected");
            return Err(conflict);
        }

        let id = self.ids.next_id(self.store.keys().copied());
        item.assign_id(id);
        self.store.insert(id, item.clone());

        info!(id, "Created");
        Ok(item)
    }

    #[instrument(skip(self))]
    fn handle_get(&self, id: EntityId) -> Option<T> {
        let item = self.store.get(&id).cloned();
        if item.is_none() {
            debug!("Not found");
        }
        item
    }

    #[instrument(skip(self))]
    fn handle_list(&self) -> Vec<T> {
        let items: Vec<T> = self.store.values().cloned().collect();
        debug!(count = items.len(), "Listed");
        items
    }

    /// Applies the update to a copy and commits only if the copy is valid
    /// and unique, so a rejected update leaves the stored entity untouched.
    #[instrument(skip(self, update))]
    fn handle_update(&mut self, id: EntityId, update: T::Update) -> FilmorateResult<T> {
        debug!(?update, "Processing update request");

        let Some(current) = self.store.get(&id) else {
            warn!("Update target not found");
            return Err(FilmorateError::not_found(T::KIND, id));
        };

        let mut candidate = current.clone();
        candidate.on_update(update).inspect_err(|e| warn!(error = %e, "Update rejected"))?;
        if let Some(conflict) = self.find_conflict(&candidate) {
            warn!(error = %conflict, "Update rejected");
            return Err(conflict);
        }

        self.store.insert(id, candidate.clone());
        info!("Updated");
        Ok(candidate)
    }

    #[instrument(skip(self))]
    fn handle_delete(&mut self, id: EntityId) -> FilmorateResult<T> {
        let Some(item) = self.store.get(&id) else {
            warn!("Delete target not found");
            return Err(FilmorateError::not_found(T::KIND, id));
        };
        item.on_delete().inspect_err(|e| warn!(error = %e, "Delete rejected"))?;

        let removed = self.store.remove(&id).ok_or_else(|| FilmorateError::not_found(T::KIND, id))?;
        info!("Deleted");
        Ok(removed)
    }

    #[instrument(skip(self))]
    fn handle_action(&mut self, id: EntityId, action: T::Action) -> FilmorateResult<T::ActionResult> {
        match self.store.get_mut(&id) {
            Some(item) => item.handle_action(action),
            None => {
                warn!("Action target not found");
                Err(FilmorateError::not_found(T::KIND, id))
            }
        }
    }

    fn find_conflict(&self, candidate: &T) -> Option<FilmorateError> {
        self.store
            .values()
            .filter(|other| other.id() != candidate.id())
            .find_map(|other| candidate.conflicts_with(other))
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn call<R>(
        &self,
        request: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> FilmorateResult<R> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(request(respond_to))
            .await
            .map_err(|_| FilmorateError::ActorCommunication(format!("{} store closed", T::KIND)))?;
        response
            .await
            .map_err(|_| FilmorateError::ActorCommunication(format!("{} store dropped the request", T::KIND)))?
    }

    pub async fn create(&self, params: T::CreateParams) -> FilmorateResult<T> {
        self.call(|respond_to| ResourceRequest::Create { params, respond_to }).await
    }

    pub async fn get(&self, id: EntityId) -> FilmorateResult<Option<T>> {
        self.call(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn list(&self) -> FilmorateResult<Vec<T>> {
        self.call(|respond_to| ResourceRequest::List { respond_to }).await
    }

    pub async fn update(&self, id: EntityId, update: T::Update) -> FilmorateResult<T> {
        self.call(|respond_to| ResourceRequest::Update { id, update, respond_to }).await
    }

    pub async fn delete(&self, id: EntityId) -> FilmorateResult<T> {
        self.call(|respond_to| ResourceRequest::Delete { id, respond_to }).await
    }

    pub async fn perform_action(&self, id: EntityId, action: T::Action) -> FilmorateResult<T::ActionResult> {
        self.call(|respond_to| ResourceRequest::Action { id, action, respond_to }).await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
