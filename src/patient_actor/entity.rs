//! [`ActorEntity`] implementation for [`Patient`].

use crate::error::ClinicError;
use crate::model::{NoAction, Patient, PatientCreate, PatientId, PatientUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Patient {
    type Id = PatientId;
    type Create = PatientCreate;
    type Update = PatientUpdate;
    type Action = NoAction;
    type ActionResult = ();
    type Context = ();
    type Error = ClinicError;

    fn id(&self) -> &PatientId {
        &self.id
    }

    fn from_create_params(id: PatientId, params: PatientCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params))
    }

    /// Handles partial updates.
    ///
    /// # Fields Updated
    /// - `name`, `cpf`, `phone`: each only when present in the update
    async fn on_update(&mut self, update: PatientUpdate, _ctx: &()) -> Result<(), Self::Error> {
        self.apply(update);
        Ok(())
    }

    async fn handle_action(&mut self, action: NoAction, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }
}
