//! [`ActorEntity`] implementation for [`Appointment`].

use super::AppointmentDeps;
use crate::error::ClinicError;
use crate::model::{Appointment, AppointmentCreate, AppointmentId, NoAction};
use actor_framework::{ActorClient, ActorEntity};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl ActorEntity for Appointment {
    type Id = AppointmentId;
    type Create = AppointmentCreate;
    type Update = ();
    type Action = NoAction;
    type ActionResult = ();
    type Context = AppointmentDeps;
    type Error = ClinicError;

    fn id(&self) -> &AppointmentId {
        &self.id
    }

    fn from_create_params(
        id: AppointmentId,
        params: AppointmentCreate,
    ) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params))
    }

    /// Checks doctor, patient and clinic, in that order; the first missing one is reported.
    async fn on_create(&mut self, deps: &AppointmentDeps) -> Result<(), Self::Error> {
        deps.doctors.require(self.doctor).await?;
        deps.patients.require(self.patient).await?;
        deps.clinics.require(self.clinic).await?;
        debug!(appointment_id = %self.id, "References resolved");
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &AppointmentDeps) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: NoAction,
        _ctx: &AppointmentDeps,
    ) -> Result<(), Self::Error> {
        match action {}
    }
}
