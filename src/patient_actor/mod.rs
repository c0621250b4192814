//! # Patient Actor
//!
//! Owns the patient collection: registration, partial updates, removal and sorting by name.
//!
//! ## Usage
//!
//! ```rust
//! use actor_framework::IdGenerator;
//! use clinic_recipe::model::{PatientCreate, PatientUpdate};
//! use clinic_recipe::patient_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, patients) = patient_actor::new(32, IdGenerator::default());
//!     tokio::spawn(actor.run(()));
//!
//!     let id = patients
//!         .register_patient(PatientCreate::new("Paulo Henrique", "111.222.333-44", "85911112222"))
//!         .await?;
//!     let updated = patients
//!         .update_patient(id, PatientUpdate::default().phone("85900000000"))
//!         .await?;
//!     assert_eq!(updated.phone, "85900000000");
//!     Ok(())
//! }
//! ```

pub mod entity;

use crate::clients::PatientClient;
use crate::model::Patient;
use actor_framework::{IdGenerator, ResourceActor};

/// Creates a new Patient actor and its client.
pub fn new(buffer_size: usize, ids: IdGenerator) -> (ResourceActor<Patient>, PatientClient) {
    let (actor, generic_client) = ResourceActor::with_ids(buffer_size, ids);
    (actor, PatientClient::new(generic_client))
}
