use crate::model::{PatientId, Person, PersonRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A registered patient.
///
/// # Actor Framework
/// Implements [`ActorEntity`](actor_framework::ActorEntity) in
/// [`patient_actor`](crate::patient_actor), with [`PatientCreate`] and [`PatientUpdate`] as its
/// payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: PatientId,
    pub person: Person,
    pub phone: String,
}

/// Payload for registering a patient.
#[derive(Debug, Clone)]
pub struct PatientCreate {
    pub name: String,
    pub cpf: String,
    pub phone: String,
}

impl PatientCreate {
    pub fn new(name: impl Into<String>, cpf: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cpf: cpf.into(),
            phone: phone.into(),
        }
    }
}

/// Partial update of a patient.
///
/// Each field is either present (overwrite) or absent (keep). An explicit `null` in a
/// serialized payload reads as absent: none of these fields can be cleared.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientUpdate {
    pub name: Option<String>,
    pub cpf: Option<String>,
    pub phone: Option<String>,
}

impl PatientUpdate {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn cpf(mut self, cpf: impl Into<String>) -> Self {
        self.cpf = Some(cpf.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

impl Patient {
    pub fn new(id: PatientId, params: PatientCreate) -> Self {
        Self {
            id,
            person: Person::new(params.name, params.cpf),
            phone: params.phone,
        }
    }

    /// Overwrites every field present in `update`; the id never changes.
    pub fn apply(&mut self, update: PatientUpdate) {
        if let Some(name) = update.name {
            self.person.name = name;
        }
        if let Some(cpf) = update.cpf {
            self.person.cpf = cpf;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
    }
}

impl PersonRecord for Patient {
    fn person(&self) -> &Person {
        &self.person
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Patient] ID: {}, Name: {}, CPF: {}, Phone: {}",
            self.id,
            self.name(),
            self.cpf(),
            self.phone
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> Patient {
        Patient::new(
            PatientId(8),
            PatientCreate::new("Ana Gabrielle", "123.456.789-01", "85988887777"),
        )
    }

    #[test]
    fn empty_update_changes_nothing() {
        let mut patient = ana();
        patient.apply(PatientUpdate::default());
        assert_eq!(patient, ana());
    }

    #[test]
    fn update_touches_only_present_fields() {
        let mut patient = ana();
        patient.apply(
            PatientUpdate::default()
                .name("Ana Gabrielle Souza")
                .phone("85970007777"),
        );

        assert_eq!(patient.id, PatientId(8));
        assert_eq!(patient.name(), "Ana Gabrielle Souza");
        assert_eq!(patient.cpf(), "123.456.789-01");
        assert_eq!(patient.phone, "85970007777");
    }

    #[test]
    fn null_and_missing_keys_both_keep_the_value() {
        let update: PatientUpdate =
            serde_json::from_str(r#"{"name": "Ana G.", "phone": null}"#).unwrap();
        assert_eq!(update, PatientUpdate::default().name("Ana G."));

        let mut patient = ana();
        patient.apply(update);
        assert_eq!(patient.phone, "85988887777");
    }

    #[test]
    fn rendering() {
        assert_eq!(
            ana().to_string(),
            "[Patient] ID: 8, Name: Ana Gabrielle, CPF: 123.456.789-01, Phone: 85988887777"
        );
    }
}
