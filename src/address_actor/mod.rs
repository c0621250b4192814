//! # Address Actor
//!
//! Owns the address collection. Addresses have no dependencies and no custom actions; they
//! are referenced by clinics.

pub mod entity;

use crate::clients::AddressClient;
use crate::model::Address;
use actor_framework::{IdGenerator, ResourceActor};

/// Creates a new Address actor and its client.
pub fn new(buffer_size: usize, ids: IdGenerator) -> (ResourceActor<Address>, AddressClient) {
    let (actor, generic_client) = ResourceActor::with_ids(buffer_size, ids);
    (actor, AddressClient::new(generic_client))
}
