//! # Clinic Client

use crate::error::ClinicError;
use crate::model::{Clinic, ClinicCreate, ClinicId};
use actor_framework::{ActorClient, ResourceClient};
use tracing::{info, instrument};

/// Client for interacting with the Clinic actor.
#[derive(Clone)]
pub struct ClinicClient {
    inner: ResourceClient<Clinic>,
}

impl ClinicClient {
    pub fn new(inner: ResourceClient<Clinic>) -> Self {
        Self { inner }
    }

    /// Registers a clinic; fails with `NotFound(Address, _)` if its address is unknown.
    #[instrument(skip(self))]
    pub async fn register_clinic(&self, params: ClinicCreate) -> Result<ClinicId, ClinicError> {
        let name = params.name.clone();
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(%id, %name, "Clinic registered");
        Ok(id)
    }
}

clinic_client!(ClinicClient, Clinic, Clinic);
