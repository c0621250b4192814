//! [`ActorEntity`] implementation for [`Clinic`].

use crate::clients::AddressClient;
use crate::error::ClinicError;
use crate::model::{Clinic, ClinicCreate, ClinicId, NoAction};
use actor_framework::{ActorClient, ActorEntity};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl ActorEntity for Clinic {
    type Id = ClinicId;
    type Create = ClinicCreate;
    type Update = ();
    type Action = NoAction;
    type ActionResult = ();
    type Context = AddressClient;
    type Error = ClinicError;

    fn id(&self) -> &ClinicId {
        &self.id
    }

    fn from_create_params(id: ClinicId, params: ClinicCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            name: params.name,
            address: params.address,
        })
    }

    /// Rejects the clinic unless its address exists.
    async fn on_create(&mut self, addresses: &AddressClient) -> Result<(), Self::Error> {
        let address = addresses.require(self.address).await?;
        debug!(clinic_id = %self.id, address_id = %address.id, "Address resolved");
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &AddressClient) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: NoAction,
        _ctx: &AddressClient,
    ) -> Result<(), Self::Error> {
        match action {}
    }
}
