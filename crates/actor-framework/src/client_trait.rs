//! # ActorClient Trait
//!
//! Common interface for resource-specific clients. Implementors supply the inner
//! `ResourceClient` and two error conversions; the standard reads and writes come for free.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard CRUD operations.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceActor, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Room { id: u32 }
/// #[derive(Debug)] struct RoomCreate;
/// #[derive(Debug)] struct RoomUpdate;
/// #[derive(Debug)] enum RoomAction {}
///
/// #[derive(Debug, thiserror::Error)]
/// enum RoomError {
///     #[error("room {0} not found")] NotFound(u32),
///     #[error("{0}")] Other(String),
/// }
/// impl From<String> for RoomError { fn from(s: String) -> Self { RoomError::Other(s) } }
///
/// #[async_trait]
/// impl ActorEntity for Room {
///     type Id = u32; type Create = RoomCreate; type Update = RoomUpdate;
///     type Action = RoomAction; type ActionResult = (); type Context = (); type Error = RoomError;
///     fn id(&self) -> &u32 { &self.id }
///     fn from_create_params(id: u32, _: RoomCreate) -> Result<Self, RoomError> { Ok(Self { id }) }
///     async fn on_update(&mut self, _: RoomUpdate, _: &()) -> Result<(), RoomError> { Ok(()) }
///     async fn handle_action(&mut self, _: RoomAction, _: &()) -> Result<(), RoomError> { Ok(()) }
/// }
///
/// struct RoomClient { inner: ResourceClient<Room> }
///
/// #[async_trait]
/// impl ActorClient<Room> for RoomClient {
///     type Error = RoomError;
///     fn inner(&self) -> &ResourceClient<Room> { &self.inner }
///     fn map_error(e: FrameworkError) -> RoomError { RoomError::Other(e.to_string()) }
///     fn not_found(id: u32) -> RoomError { RoomError::NotFound(id) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, inner) = ResourceActor::<Room>::new(8);
///     tokio::spawn(actor.run(()));
///     let rooms = RoomClient { inner };
///
///     // get(), require(), list(), update() and delete() are provided.
///     assert!(matches!(rooms.require(7).await, Err(RoomError::NotFound(7))));
///     assert!(matches!(rooms.delete(7).await, Err(RoomError::NotFound(7))));
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// The error reported when no entity carries `id`.
    fn not_found(id: T::Id) -> Self::Error;

    /// Like [`map_error`](Self::map_error), but a framework `NotFound` becomes
    /// [`not_found`](Self::not_found) for the id that was asked for.
    fn lookup_error(id: T::Id, e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound { .. } => Self::not_found(id),
            other => Self::map_error(other),
        }
    }

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch an entity by ID, treating absence as an error.
    #[tracing::instrument(skip(self))]
    async fn require(&self, id: T::Id) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        match self.inner().get(id.clone()).await {
            Ok(Some(item)) => Ok(item),
            Ok(None) => Err(Self::not_found(id)),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Snapshot of every entity in collection order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Apply a partial update to the first entity with this ID.
    #[tracing::instrument(skip(self))]
    async fn update(&self, id: T::Id, update: T::Update) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner()
            .update(id.clone(), update)
            .await
            .map_err(|e| Self::lookup_error(id, e))
    }

    /// Delete every entity with this ID, returning how many were removed.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<usize, Self::Error> {
        tracing::debug!("Sending request");
        self.inner()
            .delete(id.clone())
            .await
            .map_err(|e| Self::lookup_error(id, e))
    }
}
