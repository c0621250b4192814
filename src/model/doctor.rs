use crate::model::{find_by_id, DoctorId, Person, PersonRecord, Specialization, SpecializationId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A doctor holding zero or more specializations.
///
/// # Actor Framework
/// Implements [`ActorEntity`](actor_framework::ActorEntity) in
/// [`doctor_actor`](crate::doctor_actor). Specializations are appended through
/// [`DoctorAction::AddSpecialization`](crate::doctor_actor::DoctorAction::AddSpecialization).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: DoctorId,
    pub person: Person,
    /// License number issued by the regional medical council.
    pub crm: String,
    pub specializations: Vec<SpecializationId>,
}

/// Payload for registering a doctor. Every listed specialization must already exist.
#[derive(Debug, Clone)]
pub struct DoctorCreate {
    pub name: String,
    pub cpf: String,
    pub crm: String,
    pub specializations: Vec<SpecializationId>,
}

impl DoctorCreate {
    /// A doctor with no specializations yet.
    pub fn new(name: impl Into<String>, cpf: impl Into<String>, crm: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cpf: cpf.into(),
            crm: crm.into(),
            specializations: Vec::new(),
        }
    }

    pub fn with_specialization(mut self, id: SpecializationId) -> Self {
        self.specializations.push(id);
        self
    }
}

impl Doctor {
    pub fn new(id: DoctorId, params: DoctorCreate) -> Self {
        Self {
            id,
            person: Person::new(params.name, params.cpf),
            crm: params.crm,
            specializations: params.specializations,
        }
    }

    /// Appends to the end of the list. Duplicates are kept.
    pub fn add_specialization(&mut self, id: SpecializationId) {
        self.specializations.push(id);
    }

    /// Pairs this doctor with the specialization snapshot used to render it.
    pub fn record<'a>(&'a self, specializations: &'a [Specialization]) -> DoctorRecord<'a> {
        DoctorRecord {
            doctor: self,
            specializations,
        }
    }
}

impl PersonRecord for Doctor {
    fn person(&self) -> &Person {
        &self.person
    }
}

/// Display view of a [`Doctor`] listing its specialization names in order.
pub struct DoctorRecord<'a> {
    pub doctor: &'a Doctor,
    pub specializations: &'a [Specialization],
}

impl fmt::Display for DoctorRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self
            .doctor
            .specializations
            .iter()
            .map(|id| match find_by_id(self.specializations, id) {
                Some(spec) => spec.name.clone(),
                None => format!("<unknown specialization {}>", id),
            })
            .collect();
        write!(
            f,
            "[Doctor] ID: {}, Name: {}, CPF: {}, CRM: {}, Specializations: {}",
            self.doctor.id,
            self.doctor.name(),
            self.doctor.cpf(),
            self.doctor.crm,
            names.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(id: u32, name: &str) -> Specialization {
        Specialization {
            id: SpecializationId(id),
            name: name.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn specializations_default_to_empty_and_append_in_order() {
        let mut doctor = Doctor::new(
            DoctorId(10),
            DoctorCreate::new("Dr. João", "111.444.777-35", "CRM-CE1234"),
        );
        assert!(doctor.specializations.is_empty());

        doctor.add_specialization(SpecializationId(6));
        doctor.add_specialization(SpecializationId(5));
        doctor.add_specialization(SpecializationId(6));
        assert_eq!(
            doctor.specializations,
            [SpecializationId(6), SpecializationId(5), SpecializationId(6)]
        );
    }

    #[test]
    fn rendering_joins_names_in_list_order() {
        let catalog = [spec(5, "Cardiologia"), spec(6, "Ortopedia")];
        let doctor = Doctor::new(
            DoctorId(10),
            DoctorCreate::new("Dr. João", "111.444.777-35", "CRM-CE1234")
                .with_specialization(SpecializationId(6))
                .with_specialization(SpecializationId(5)),
        );

        assert_eq!(
            doctor.record(&catalog).to_string(),
            "[Doctor] ID: 10, Name: Dr. João, CPF: 111.444.777-35, CRM: CRM-CE1234, \
             Specializations: Ortopedia, Cardiologia"
        );
    }

    #[test]
    fn rendering_without_specializations() {
        let doctor = Doctor::new(DoctorId(1), DoctorCreate::new("Dra. Marina", "1", "CRM-2"));
        assert!(doctor.record(&[]).to_string().ends_with("Specializations: "));
    }
}
