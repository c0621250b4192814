//! # Specialization Client

use crate::error::ClinicError;
use crate::model::{Specialization, SpecializationCreate, SpecializationId};
use actor_framework::{ActorClient, ResourceClient};
use tracing::{info, instrument};

/// Client for interacting with the Specialization actor.
#[derive(Clone)]
pub struct SpecializationClient {
    inner: ResourceClient<Specialization>,
}

impl SpecializationClient {
    pub fn new(inner: ResourceClient<Specialization>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn register_specialization(
        &self,
        params: SpecializationCreate,
    ) -> Result<SpecializationId, ClinicError> {
        let name = params.name.clone();
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(%id, %name, "Specialization registered");
        Ok(id)
    }
}

clinic_client!(SpecializationClient, Specialization, Specialization);
