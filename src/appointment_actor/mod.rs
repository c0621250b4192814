//! # Appointment Actor
//!
//! Owns the appointment collection. Its context is [`AppointmentDeps`]; `on_create` checks
//! that the doctor, patient and clinic exist before the appointment is stored.
//!
//! ```rust,ignore
//! let (actor, appointments) = appointment_actor::new(32, ids.clone());
//! tokio::spawn(actor.run(AppointmentDeps {
//!     doctors: doctor_client.clone(),
//!     patients: patient_client.clone(),
//!     clinics: clinic_client.clone(),
//! }));
//! ```

pub mod entity;

use crate::clients::{AppointmentClient, ClinicClient, DoctorClient, PatientClient};
use crate::model::Appointment;
use actor_framework::{IdGenerator, ResourceActor};

/// Clients the Appointment actor consults when an appointment is booked.
#[derive(Clone)]
pub struct AppointmentDeps {
    pub doctors: DoctorClient,
    pub patients: PatientClient,
    pub clinics: ClinicClient,
}

/// Creates a new Appointment actor and its client.
pub fn new(
    buffer_size: usize,
    ids: IdGenerator,
) -> (ResourceActor<Appointment>, AppointmentClient) {
    let (actor, generic_client) = ResourceActor::with_ids(buffer_size, ids);
    (actor, AppointmentClient::new(generic_client))
}
