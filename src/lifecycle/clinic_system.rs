use super::ClinicConfig;
use crate::appointment_actor::AppointmentDeps;
use crate::clients::{
    AddressClient, AppointmentClient, ClinicClient, DoctorClient, PatientClient,
    SpecializationClient,
};
use crate::error::ClinicError;
use crate::listing::Listing;
use crate::{
    address_actor, appointment_actor, clinic_actor, doctor_actor, patient_actor,
    specialization_actor,
};
use actor_framework::{ActorClient, IdGenerator};
use tokio::task::JoinHandle;
use tracing::{error, info, instrument};

/// The orchestrator of the clinic actors.
///
/// `ClinicSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the six actors
/// - **Dependency Wiring**: handing each actor the clients it checks references against
/// - **Id Coordination**: one [`IdGenerator`] shared by every actor
///
/// # Architecture
///
/// | Actor | Context |
/// |---|---|
/// | Address | none |
/// | Specialization | none |
/// | Patient | none |
/// | Clinic | [`AddressClient`] |
/// | Doctor | [`SpecializationClient`] |
/// | Appointment | [`AppointmentDeps`] (doctors, patients, clinics) |
///
/// # Example
///
/// ```ignore
/// let system = ClinicSystem::new(ClinicConfig::default());
/// system.load_seed_data().await?;
/// println!("{}", system.patient_listing().await?);
/// system.shutdown().await?;
/// ```
pub struct ClinicSystem {
    pub addresses: AddressClient,
    pub clinics: ClinicClient,
    pub specializations: SpecializationClient,
    pub patients: PatientClient,
    pub doctors: DoctorClient,
    pub appointments: AppointmentClient,

    ids: IdGenerator,
    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl ClinicSystem {
    /// Spawns every actor with its dependencies and returns the ready system.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: ClinicConfig) -> Self {
        let ids = IdGenerator::starting_at(config.first_id);
        let capacity = config.mailbox_capacity;

        let (address_actor, addresses) = address_actor::new(capacity, ids.clone());
        let (specialization_actor, specializations) =
            specialization_actor::new(capacity, ids.clone());
        let (patient_actor, patients) = patient_actor::new(capacity, ids.clone());
        let (clinic_actor, clinics) = clinic_actor::new(capacity, ids.clone());
        let (doctor_actor, doctors) = doctor_actor::new(capacity, ids.clone());
        let (appointment_actor, appointments) = appointment_actor::new(capacity, ids.clone());

        let handles = vec![
            tokio::spawn(address_actor.run(())),
            tokio::spawn(specialization_actor.run(())),
            tokio::spawn(patient_actor.run(())),
            tokio::spawn(clinic_actor.run(addresses.clone())),
            tokio::spawn(doctor_actor.run(specializations.clone())),
            tokio::spawn(appointment_actor.run(AppointmentDeps {
                doctors: doctors.clone(),
                patients: patients.clone(),
                clinics: clinics.clone(),
            })),
        ];

        info!(
            actors = handles.len(),
            mailbox_capacity = capacity,
            first_id = config.first_id.get(),
            "Clinic system started"
        );

        Self {
            addresses,
            clinics,
            specializations,
            patients,
            doctors,
            appointments,
            ids,
            handles,
        }
    }

    /// The id generator shared by every actor.
    pub fn ids(&self) -> &IdGenerator {
        &self.ids
    }

    pub async fn address_listing(&self) -> Result<Listing, ClinicError> {
        let addresses = self.addresses.list().await?;
        Ok(Listing::new("Addresses", &addresses))
    }

    pub async fn clinic_listing(&self) -> Result<Listing, ClinicError> {
        let clinics = self.clinics.list().await?;
        let addresses = self.addresses.list().await?;
        Ok(Listing::new(
            "Clinics",
            clinics.iter().map(|c| c.record(&addresses)),
        ))
    }

    pub async fn specialization_listing(&self) -> Result<Listing, ClinicError> {
        let specializations = self.specializations.list().await?;
        Ok(Listing::new("Specializations", &specializations))
    }

    pub async fn patient_listing(&self) -> Result<Listing, ClinicError> {
        let patients = self.patients.list().await?;
        Ok(Listing::new("Patients", &patients))
    }

    /// Doctors with their specialization names resolved.
    pub async fn doctor_listing(&self) -> Result<Listing, ClinicError> {
        let doctors = self.doctors.list().await?;
        let specializations = self.specializations.list().await?;
        Ok(Listing::new(
            "Doctors",
            doctors.iter().map(|d| d.record(&specializations)),
        ))
    }

    /// Appointments with doctor, patient and clinic names resolved.
    pub async fn appointment_listing(&self) -> Result<Listing, ClinicError> {
        let appointments = self.appointments.list().await?;
        let doctors = self.doctors.list().await?;
        let patients = self.patients.list().await?;
        let clinics = self.clinics.list().await?;
        Ok(Listing::new(
            "Appointments",
            appointments
                .iter()
                .map(|a| a.record(&doctors, &patients, &clinics)),
        ))
    }

    /// Gracefully shuts down every actor.
    ///
    /// Dropping the clients closes the mailboxes; each actor then leaves its loop. Clones held
    /// elsewhere (including the ones injected as actor contexts) keep their mailbox open until
    /// the actor holding them stops, so actors are awaited dependents first.
    ///
    /// # Errors
    ///
    /// [`ClinicError::ActorTask`] for the first actor task that panicked. The remaining
    /// actors are still awaited.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), ClinicError> {
        info!("Shutting down clinic system...");

        drop(self.addresses);
        drop(self.clinics);
        drop(self.specializations);
        drop(self.patients);
        drop(self.doctors);
        drop(self.appointments);

        join_actors(self.handles.into_iter().rev()).await?;

        info!("Clinic system shutdown complete.");
        Ok(())
    }
}

/// Awaits every handle, even after a failure, and reports the first failure.
async fn join_actors(
    handles: impl IntoIterator<Item = JoinHandle<()>>,
) -> Result<(), ClinicError> {
    let mut first_failure = None;
    for handle in handles {
        if let Err(e) = handle.await {
            error!("Actor task failed: {:?}", e);
            first_failure.get_or_insert(ClinicError::ActorTask(e.to_string()));
        }
    }
    match first_failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn join_actors_waits_for_every_task_after_a_failure() {
        let finished = Arc::new(AtomicBool::new(false));
        let flag = finished.clone();

        let failing: JoinHandle<()> = tokio::spawn(async { panic!("actor loop crashed") });
        let slow = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            flag.store(true, Ordering::SeqCst);
        });

        let result = join_actors([failing, slow]).await;

        assert!(matches!(result, Err(ClinicError::ActorTask(_))));
        assert!(finished.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn join_actors_succeeds_when_every_task_exits() {
        let handles = [tokio::spawn(async {}), tokio::spawn(async {})];
        assert_eq!(join_actors(handles).await, Ok(()));
    }
}
