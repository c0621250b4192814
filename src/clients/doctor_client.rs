//! # Doctor Client

use crate::doctor_actor::{DoctorAction, DoctorActionResult};
use crate::error::ClinicError;
use crate::model::{Doctor, DoctorCreate, DoctorId, SpecializationId};
use actor_framework::{ActorClient, ResourceClient};
use tracing::{debug, info, instrument};

/// Client for interacting with the Doctor actor.
#[derive(Clone)]
pub struct DoctorClient {
    inner: ResourceClient<Doctor>,
}

impl DoctorClient {
    pub fn new(inner: ResourceClient<Doctor>) -> Self {
        Self { inner }
    }

    /// Registers a doctor; fails with `NotFound(Specialization, _)` on an unknown specialization.
    #[instrument(skip(self))]
    pub async fn register_doctor(&self, params: DoctorCreate) -> Result<DoctorId, ClinicError> {
        let name = params.name.clone();
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(%id, %name, "Doctor registered");
        Ok(id)
    }

    /// Appends a specialization to a doctor and returns the doctor's updated list.
    #[instrument(skip(self))]
    pub async fn add_specialization(
        &self,
        doctor: DoctorId,
        specialization: SpecializationId,
    ) -> Result<Vec<SpecializationId>, ClinicError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(doctor, DoctorAction::AddSpecialization(specialization))
            .await
        {
            Ok(DoctorActionResult::AddSpecialization(list)) => {
                info!(%doctor, %specialization, "Specialization added");
                Ok(list)
            }
            Err(e) => Err(Self::lookup_error(doctor, e)),
        }
    }
}

clinic_client!(DoctorClient, Doctor, Doctor);
