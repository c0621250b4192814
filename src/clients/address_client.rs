//! # Address Client

use crate::error::ClinicError;
use crate::model::{Address, AddressCreate, AddressId};
use actor_framework::{ActorClient, ResourceClient};
use tracing::{info, instrument};

/// Client for interacting with the Address actor.
#[derive(Clone)]
pub struct AddressClient {
    inner: ResourceClient<Address>,
}

impl AddressClient {
    pub fn new(inner: ResourceClient<Address>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn register_address(&self, params: AddressCreate) -> Result<AddressId, ClinicError> {
        let street = params.street.clone();
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(%id, %street, "Address registered");
        Ok(id)
    }
}

clinic_client!(AddressClient, Address, Address);
