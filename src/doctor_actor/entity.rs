//! [`ActorEntity`] implementation for [`Doctor`].

use super::actions::{DoctorAction, DoctorActionResult};
use crate::clients::SpecializationClient;
use crate::error::ClinicError;
use crate::model::{Doctor, DoctorCreate, DoctorId};
use actor_framework::{ActorClient, ActorEntity};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Doctor {
    type Id = DoctorId;
    type Create = DoctorCreate;
    type Update = ();
    type Action = DoctorAction;
    type ActionResult = DoctorActionResult;
    type Context = SpecializationClient;
    type Error = ClinicError;

    fn id(&self) -> &DoctorId {
        &self.id
    }

    fn from_create_params(id: DoctorId, params: DoctorCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params))
    }

    /// Rejects the doctor if any listed specialization is unknown.
    async fn on_create(
        &mut self,
        specializations: &SpecializationClient,
    ) -> Result<(), Self::Error> {
        for id in &self.specializations {
            specializations.require(*id).await?;
        }
        Ok(())
    }

    async fn on_update(
        &mut self,
        _update: (),
        _ctx: &SpecializationClient,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: DoctorAction,
        specializations: &SpecializationClient,
    ) -> Result<DoctorActionResult, Self::Error> {
        match action {
            DoctorAction::AddSpecialization(id) => {
                specializations.require(id).await?;
                self.add_specialization(id);
                Ok(DoctorActionResult::AddSpecialization(
                    self.specializations.clone(),
                ))
            }
        }
    }
}
