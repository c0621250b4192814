//! # ActorEntity Trait
//!
//! The contract every resource (Patient, Doctor, Clinic, …) implements to be managed by the
//! generic [`ResourceActor`](crate::ResourceActor). It names the associated types for ids,
//! DTOs, actions, context and errors, and provides the lifecycle hooks
//! (`on_create`, `on_update`, `on_delete`, `handle_action`).
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! Both default to `Ok(())`. Override them when creation or removal needs to consult
//! other actors through the injected context.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// The trait is `#[async_trait]` so hooks can await other actors. The `Context` type is
/// injected into every hook by [`ResourceActor::run`](crate::ResourceActor::run), which lets
/// dependencies be bound after construction.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The identifier for this entity.
    /// Built from the `u32` drawn from the actor's [`IdGenerator`](crate::IdGenerator).
    type Id: Eq + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum of resource-specific operations (e.g., `AddSpecialization`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// One error type per entity, shared by every hook and action.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identifier this entity was created with. The store matches requests against it.
    fn id(&self) -> &Self::Id;

    /// Construct the full entity from the id and payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after construction and before the entity is appended to the store.
    /// Returning an error rejects the creation; the drawn id is not reused.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called for every matching entity before it is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
