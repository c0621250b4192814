//! [`ActorEntity`] implementation for [`Specialization`].

use crate::error::ClinicError;
use crate::model::{NoAction, Specialization, SpecializationCreate, SpecializationId};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Specialization {
    type Id = SpecializationId;
    type Create = SpecializationCreate;
    type Update = ();
    type Action = NoAction;
    type ActionResult = ();
    type Context = ();
    type Error = ClinicError;

    fn id(&self) -> &SpecializationId {
        &self.id
    }

    fn from_create_params(
        id: SpecializationId,
        params: SpecializationCreate,
    ) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            name: params.name,
            description: params.description,
        })
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(&mut self, action: NoAction, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }
}
