//! # Appointment Client

use crate::error::ClinicError;
use crate::model::{Appointment, AppointmentCreate, AppointmentId};
use actor_framework::{ActorClient, ResourceClient};
use tracing::{info, instrument, warn};

/// Client for interacting with the Appointment actor.
///
/// Reference checks happen in the Appointment actor's `on_create` hook; this client only
/// forwards the request.
#[derive(Clone)]
pub struct AppointmentClient {
    inner: ResourceClient<Appointment>,
}

impl AppointmentClient {
    pub fn new(inner: ResourceClient<Appointment>) -> Self {
        Self { inner }
    }

    /// Books an appointment; fails with `NotFound` naming the first missing reference.
    #[instrument(skip(self))]
    pub async fn register_appointment(
        &self,
        params: AppointmentCreate,
    ) -> Result<AppointmentId, ClinicError> {
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(%id, "Appointment registered");
        Ok(id)
    }

    /// Removes every appointment with this id.
    #[instrument(skip(self))]
    pub async fn remove_appointment(&self, id: AppointmentId) -> Result<(), ClinicError> {
        match self.delete(id).await {
            Ok(removed) => {
                info!(%id, removed, "Appointment removed");
                Ok(())
            }
            Err(e) => {
                warn!(%id, error = %e, "Appointment not removed");
                Err(e)
            }
        }
    }
}

clinic_client!(AppointmentClient, Appointment, Appointment);
