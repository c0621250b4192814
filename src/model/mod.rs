//! Pure data structures (records and DTOs) managed by the clinic actors.
//!
//! Relations are stored as ids. The `*Record` views resolve them against a snapshot of the
//! related collection when a record is rendered.

pub mod address;
pub mod appointment;
pub mod clinic;
pub mod collation;
pub mod doctor;
pub mod ids;
pub mod patient;
pub mod person;
pub mod specialization;

pub use address::*;
pub use appointment::*;
pub use clinic::*;
pub use doctor::*;
pub use ids::*;
pub use patient::*;
pub use person::*;
pub use specialization::*;

use actor_framework::ActorEntity;

/// Action type for resources that have no custom actions.
#[derive(Debug, Clone)]
pub enum NoAction {}

/// First record in `items` carrying `id`.
pub fn find_by_id<'a, T: ActorEntity>(items: &'a [T], id: &T::Id) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}
