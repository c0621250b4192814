//! Custom actions for the Doctor actor.

use crate::model::SpecializationId;

/// Operations on a doctor beyond CRUD.
#[derive(Debug, Clone)]
pub enum DoctorAction {
    /// Appends a specialization to the end of the doctor's list.
    ///
    /// # Errors
    /// Fails with `NotFound` if the specialization is not registered.
    AddSpecialization(SpecializationId),
}

/// Results from DoctorActions - variants match 1:1 with DoctorAction
#[derive(Debug, Clone, PartialEq)]
pub enum DoctorActionResult {
    /// The doctor's specializations after the append.
    AddSpecialization(Vec<SpecializationId>),
}
