//! [`ActorEntity`] implementation for [`Address`].

use crate::error::ClinicError;
use crate::model::{Address, AddressCreate, AddressId, NoAction};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Address {
    type Id = AddressId;
    type Create = AddressCreate;
    type Update = ();
    type Action = NoAction;
    type ActionResult = ();
    type Context = ();
    type Error = ClinicError;

    fn id(&self) -> &AddressId {
        &self.id
    }

    fn from_create_params(id: AddressId, params: AddressCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params))
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(&mut self, action: NoAction, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }
}
