//! # Patient Client
//!
//! Provides the patient operations of the clinic: register, find, partial update, removal
//! and sorting by name.

use crate::error::ClinicError;
use crate::model::{by_name, Patient, PatientCreate, PatientId, PatientUpdate};
use actor_framework::{ActorClient, ResourceClient};
use tracing::{debug, info, instrument, warn};

/// Client for interacting with the Patient actor.
#[derive(Clone)]
pub struct PatientClient {
    inner: ResourceClient<Patient>,
}

impl PatientClient {
    pub fn new(inner: ResourceClient<Patient>) -> Self {
        Self { inner }
    }

    /// Appends a patient to the collection and returns its id.
    #[instrument(skip(self))]
    pub async fn register_patient(&self, params: PatientCreate) -> Result<PatientId, ClinicError> {
        let name = params.name.clone();
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(%id, %name, "Patient registered");
        Ok(id)
    }

    /// First patient with this id, if any.
    #[instrument(skip(self))]
    pub async fn find_patient(&self, id: PatientId) -> Result<Option<Patient>, ClinicError> {
        debug!("Sending request");
        self.get(id).await
    }

    /// Applies a partial update to the first patient with this id and returns the result.
    #[instrument(skip(self))]
    pub async fn update_patient(
        &self,
        id: PatientId,
        update: PatientUpdate,
    ) -> Result<Patient, ClinicError> {
        match self.update(id, update).await {
            Ok(patient) => {
                info!(%id, "Patient updated");
                Ok(patient)
            }
            Err(e) => {
                warn!(%id, error = %e, "Patient not updated");
                Err(e)
            }
        }
    }

    /// Removes every patient with this id.
    #[instrument(skip(self))]
    pub async fn remove_patient(&self, id: PatientId) -> Result<(), ClinicError> {
        match self.delete(id).await {
            Ok(removed) => {
                info!(%id, removed, "Patient removed");
                Ok(())
            }
            Err(e) => {
                warn!(%id, error = %e, "Patient not removed");
                Err(e)
            }
        }
    }

    /// Stable sort of the collection by name, locale-aware.
    #[instrument(skip(self))]
    pub async fn sort_by_name(&self) -> Result<(), ClinicError> {
        self.inner
            .sort_by(by_name::<Patient>)
            .await
            .map_err(Self::map_error)?;
        info!("Patients sorted by name");
        Ok(())
    }
}

clinic_client!(PatientClient, Patient, Patient);
