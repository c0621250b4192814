//! # Actor Framework
//!
//! Building blocks for type-safe, resource-oriented actors on Tokio.
//!
//! Each resource type gets one [`ResourceActor`] task that owns an ordered collection of
//! entities and serves CRUD requests over a channel. Callers talk to it through a cloneable
//! [`ResourceClient`], usually wrapped in a domain client implementing [`ActorClient`].
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]) - the domain record plus its lifecycle hooks.
//! 2. **Runtime** ([`ResourceActor`]) - the message loop and the store.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]) - typed requests and replies.
//!
//! ## Store semantics
//!
//! - Collections keep insertion order until an explicit [`ResourceClient::sort_by`].
//! - Ids come from an [`IdGenerator`]; share one generator between actors to keep ids unique
//!   across resource types.
//! - `get`, `update` and actions act on the first match; `delete` removes every match.
//!
//! ## Context injection
//!
//! Dependencies are passed to [`ResourceActor::run`], not to the constructor. An actor
//! whose entities reference other resources receives those resources' clients as its
//! `Context` and can check them from `on_create`:
//!
//! ```rust,ignore
//! let (clinic_actor, clinics) = ResourceActor::<Clinic>::with_ids(32, ids.clone());
//! let (address_actor, addresses) = ResourceActor::<Address>::with_ids(32, ids.clone());
//!
//! tokio::spawn(address_actor.run(()));
//! tokio::spawn(clinic_actor.run(AddressClient::new(addresses)));
//! ```
//!
//! ## Testing
//!
//! [`mock::MockClient`] speaks the same channel protocol as a real actor and answers from a
//! queue of expectations, so an actor can be tested against mocked dependencies.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod ids;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use ids::IdGenerator;
pub use message::{Comparator, ResourceRequest, Response};
