//! # Clinic Actor
//!
//! Owns the clinic collection. Its context is the [`AddressClient`], used by `on_create` to
//! reject a clinic whose address was never registered.

pub mod entity;

use crate::clients::ClinicClient;
use crate::model::Clinic;
use actor_framework::{IdGenerator, ResourceActor};

/// Creates a new Clinic actor and its client.
///
/// Run the actor with the address client as context:
/// `tokio::spawn(actor.run(address_client))`.
pub fn new(buffer_size: usize, ids: IdGenerator) -> (ResourceActor<Clinic>, ClinicClient) {
    let (actor, generic_client) = ResourceActor::with_ids(buffer_size, ids);
    (actor, ClinicClient::new(generic_client))
}
