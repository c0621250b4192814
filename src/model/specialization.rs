use crate::model::SpecializationId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A medical specialization a doctor can hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialization {
    pub id: SpecializationId,
    pub name: String,
    pub description: String,
}

/// Payload for registering a specialization.
#[derive(Debug, Clone)]
pub struct SpecializationCreate {
    pub name: String,
    pub description: String,
}

impl SpecializationCreate {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

impl fmt::Display for Specialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Specialization] ID: {}, Name: {}, Description: {}",
            self.id, self.name, self.description
        )
    }
}
