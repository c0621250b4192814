//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns one collection of
//! entities. It is the "Server" side of the Actor Model: requests are processed one at a
//! time, so the collection never needs a lock.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::ids::IdGenerator;
use crate::message::{Comparator, ResourceRequest};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages an ordered collection of entities.
///
/// # Architecture Note
/// The actor owns the store and the receiving end of the channel. Each actor runs in its
/// own Tokio task and handles its mailbox sequentially, which makes every request one
/// atomic step against the collection.
///
/// # Store Semantics
///
/// The store is a `Vec<T>` kept in insertion order:
///
/// * **Create** draws an id from the [`IdGenerator`], builds the entity, runs `on_create`,
///   then appends it.
/// * **Get** / **Update** / **Action** act on the *first* entity whose `id()` matches.
/// * **Delete** runs `on_delete` for every matching entity and removes all of them,
///   keeping the relative order of the rest. Nothing removed means `NotFound`.
/// * **List** returns a snapshot in collection order.
/// * **Sort** reorders the collection with a stable sort.
///
/// # Usage Pattern
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Room { id: u32, name: String }
/// #[derive(Debug)] struct RoomCreate { name: String }
/// #[derive(Debug)] struct RoomUpdate;
/// #[derive(Debug)] enum RoomAction {}
/// #[derive(Debug, thiserror::Error)] #[error("room error")] struct RoomError;
///
/// #[async_trait]
/// impl ActorEntity for Room {
///     type Id = u32; type Create = RoomCreate; type Update = RoomUpdate;
///     type Action = RoomAction; type ActionResult = (); type Context = (); type Error = RoomError;
///
///     fn id(&self) -> &u32 { &self.id }
///     fn from_create_params(id: u32, p: RoomCreate) -> Result<Self, RoomError> {
///         Ok(Self { id, name: p.name })
///     }
///     async fn on_update(&mut self, _: RoomUpdate, _: &()) -> Result<(), RoomError> { Ok(()) }
///     async fn handle_action(&mut self, _: RoomAction, _: &()) -> Result<(), RoomError> { Ok(()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Room>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let id = client.create(RoomCreate { name: "Triage".into() }).await.unwrap();
///     assert_eq!(client.list().await.unwrap().len(), 1);
///     assert_eq!(client.get(id).await.unwrap().unwrap().name, "Triage");
/// }
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
    ids: IdGenerator,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates an actor with its own id counter starting at 1, plus its client.
    ///
    /// `buffer_size` is the mailbox capacity; clients wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        Self::with_ids(buffer_size, IdGenerator::default())
    }

    /// Creates an actor that draws ids from `ids`, plus its client.
    ///
    /// Passing clones of one generator to several actors keeps ids unique across all of them.
    pub fn with_ids(buffer_size: usize, ids: IdGenerator) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Vec::new(),
            ids,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// # Context Injection
    /// `context` is handed to every entity hook. Dependencies (other clients) can therefore
    /// be created after this actor and still be wired in before the loop starts.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = entity_type::<T>();
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let _ = respond_to.send(self.create(params, &context).await);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.position(&id).map(|idx| self.store[idx].clone());
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.clone()));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let _ = respond_to.send(self.update(id, update, &context).await);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let _ = respond_to.send(self.delete(id, &context).await);
                }
                ResourceRequest::Sort {
                    compare,
                    respond_to,
                } => {
                    self.sort(compare);
                    info!(entity_type, size = self.store.len(), "Sorted");
                    let _ = respond_to.send(Ok(()));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let _ = respond_to.send(self.action(id, action, &context).await);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.store.iter().position(|item| item.id() == id)
    }

    async fn create(
        &mut self,
        params: T::Create,
        context: &T::Context,
    ) -> Result<T::Id, FrameworkError> {
        let entity_type = entity_type::<T>();
        let id = T::Id::from(self.ids.generate());

        let mut item = T::from_create_params(id.clone(), params).map_err(|e| {
            warn!(entity_type, %id, error = %e, "Create failed");
            FrameworkError::EntityError(Box::new(e))
        })?;

        if let Err(e) = item.on_create(context).await {
            warn!(entity_type, %id, error = %e, "on_create failed");
            return Err(FrameworkError::EntityError(Box::new(e)));
        }

        self.store.push(item);
        info!(entity_type, %id, size = self.store.len(), "Created");
        Ok(id)
    }

    async fn update(
        &mut self,
        id: T::Id,
        update: T::Update,
        context: &T::Context,
    ) -> Result<T, FrameworkError> {
        let entity_type = entity_type::<T>();
        let Some(idx) = self.position(&id) else {
            warn!(entity_type, %id, "Not found");
            return Err(not_found::<T>(&id));
        };

        let item = &mut self.store[idx];
        if let Err(e) = item.on_update(update, context).await {
            warn!(entity_type, %id, error = %e, "Update failed");
            return Err(FrameworkError::EntityError(Box::new(e)));
        }
        info!(entity_type, %id, "Updated");
        Ok(item.clone())
    }

    async fn delete(&mut self, id: T::Id, context: &T::Context) -> Result<usize, FrameworkError> {
        let entity_type = entity_type::<T>();
        let mut matched = 0;
        for item in self.store.iter().filter(|item| item.id() == &id) {
            if let Err(e) = item.on_delete(context).await {
                warn!(entity_type, %id, error = %e, "on_delete failed");
                return Err(FrameworkError::EntityError(Box::new(e)));
            }
            matched += 1;
        }

        if matched == 0 {
            warn!(entity_type, %id, "Not found");
            return Err(not_found::<T>(&id));
        }

        let before = self.store.len();
        self.store.retain(|item| item.id() != &id);
        let removed = before - self.store.len();
        info!(entity_type, %id, removed, size = self.store.len(), "Deleted");
        Ok(removed)
    }

    fn sort(&mut self, compare: Comparator<T>) {
        // `sort_by` is stable: equal elements keep their current relative order.
        self.store.sort_by(compare);
    }

    async fn action(
        &mut self,
        id: T::Id,
        action: T::Action,
        context: &T::Context,
    ) -> Result<T::ActionResult, FrameworkError> {
        let entity_type = entity_type::<T>();
        let Some(idx) = self.position(&id) else {
            warn!(entity_type, %id, "Not found");
            return Err(not_found::<T>(&id));
        };

        let result = self.store[idx]
            .handle_action(action, context)
            .await
            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
        match &result {
            Ok(_) => info!(entity_type, %id, "Action ok"),
            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
        }
        result
    }
}

/// Short type name used in log fields (e.g. "Patient" instead of the full module path).
fn entity_type<T>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}

fn not_found<T: ActorEntity>(id: &T::Id) -> FrameworkError {
    FrameworkError::NotFound {
        entity_type: entity_type::<T>(),
        id: id.to_string(),
    }
}
