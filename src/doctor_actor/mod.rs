//! # Doctor Actor
//!
//! Owns the doctor collection. Its context is the [`SpecializationClient`]: both creation
//! and the [`DoctorAction::AddSpecialization`] action reject specialization ids that are
//! not registered.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Doctor`]
//! - [`actions`] - [`DoctorAction`] and [`DoctorActionResult`]

pub mod actions;
pub mod entity;

pub use actions::*;

use crate::clients::DoctorClient;
use crate::model::Doctor;
use actor_framework::{IdGenerator, ResourceActor};

/// Creates a new Doctor actor and its client.
pub fn new(buffer_size: usize, ids: IdGenerator) -> (ResourceActor<Doctor>, DoctorClient) {
    let (actor, generic_client) = ResourceActor::with_ids(buffer_size, ids);
    (actor, DoctorClient::new(generic_client))
}
