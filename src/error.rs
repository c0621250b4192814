//! Error type shared by every clinic actor and client.

use actor_framework::FrameworkError;
use std::fmt;
use thiserror::Error;

/// The kind of record an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Address,
    Clinic,
    Specialization,
    Patient,
    Doctor,
    Appointment,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Address => "Address",
            EntityKind::Clinic => "Clinic",
            EntityKind::Specialization => "Specialization",
            EntityKind::Patient => "Patient",
            EntityKind::Doctor => "Doctor",
            EntityKind::Appointment => "Appointment",
        };
        f.write_str(name)
    }
}

/// Errors that can occur during clinic operations.
///
/// Entity hooks return this type too, so a rejected creation (for example an
/// appointment pointing at a removed patient) reaches the caller as the same
/// `NotFound` a failed lookup would produce.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClinicError {
    /// No record of this kind carries the id.
    #[error("{0} not found: {1}")]
    NotFound(EntityKind, u32),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),

    /// An actor task panicked or was cancelled before shutdown completed.
    #[error("Actor task failed: {0}")]
    ActorTask(String),
}

impl From<String> for ClinicError {
    fn from(msg: String) -> Self {
        ClinicError::ActorCommunication(msg)
    }
}

impl From<FrameworkError> for ClinicError {
    fn from(e: FrameworkError) -> Self {
        match e.into_entity_error::<ClinicError>() {
            Ok(err) => err,
            Err(other) => ClinicError::ActorCommunication(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hook_errors_are_recovered() {
        let boxed = FrameworkError::EntityError(Box::new(ClinicError::NotFound(
            EntityKind::Doctor,
            7,
        )));
        assert_eq!(
            ClinicError::from(boxed),
            ClinicError::NotFound(EntityKind::Doctor, 7)
        );
    }

    #[test]
    fn plumbing_errors_become_communication_errors() {
        let err = ClinicError::from(FrameworkError::ActorClosed);
        assert_eq!(err, ClinicError::ActorCommunication("Actor closed".into()));
    }

    #[test]
    fn display() {
        let err = ClinicError::NotFound(EntityKind::Patient, 2);
        assert_eq!(err.to_string(), "Patient not found: 2");
    }
}
