//! # Specialization Actor
//!
//! Owns the catalog of specializations that doctors reference.

pub mod entity;

use crate::clients::SpecializationClient;
use crate::model::Specialization;
use actor_framework::{IdGenerator, ResourceActor};

/// Creates a new Specialization actor and its client.
pub fn new(
    buffer_size: usize,
    ids: IdGenerator,
) -> (ResourceActor<Specialization>, SpecializationClient) {
    let (actor, generic_client) = ResourceActor::with_ids(buffer_size, ids);
    (actor, SpecializationClient::new(generic_client))
}
