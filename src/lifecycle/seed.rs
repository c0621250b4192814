//! Deterministic sample data.
//!
//! Records are created in dependency order (addresses, clinics, specializations, patients,
//! doctors, appointments), so on a fresh [`ClinicSystem`] with the default config the seeded
//! ids are always 1 through 13. Loading twice creates a second copy with new ids.

use super::ClinicSystem;
use crate::error::ClinicError;
use crate::model::{
    AddressCreate, AddressId, AppointmentCreate, AppointmentId, ClinicCreate, ClinicId,
    DoctorCreate, DoctorId, PatientCreate, PatientId, SpecializationCreate, SpecializationId,
};
use tracing::{info, instrument};

/// Ids of the records created by [`ClinicSystem::load_seed_data`], in creation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    pub addresses: Vec<AddressId>,
    pub clinics: Vec<ClinicId>,
    pub specializations: Vec<SpecializationId>,
    pub patients: Vec<PatientId>,
    pub doctors: Vec<DoctorId>,
    pub appointments: Vec<AppointmentId>,
}

impl SeedSummary {
    /// Total number of records created.
    pub fn len(&self) -> usize {
        self.addresses.len()
            + self.clinics.len()
            + self.specializations.len()
            + self.patients.len()
            + self.doctors.len()
            + self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ClinicSystem {
    /// Populates every collection with the sample records.
    #[instrument(skip(self))]
    pub async fn load_seed_data(&self) -> Result<SeedSummary, ClinicError> {
        info!("Loading seed data");

        let centro = self
            .addresses
            .register_address(AddressCreate::new(
                "Rua A, 100",
                "Centro",
                "Fortaleza",
                "60000-000",
            ))
            .await?;
        let meireles = self
            .addresses
            .register_address(AddressCreate::new(
                "Avenida Beira Mar, 2500",
                "Meireles",
                "Fortaleza",
                "60165-121",
            ))
            .await?;

        let saude = self
            .clinics
            .register_clinic(ClinicCreate::new("Clínica Saúde", centro))
            .await?;
        let vida = self
            .clinics
            .register_clinic(ClinicCreate::new("Clínica Vida", meireles))
            .await?;

        let cardiologia = self
            .specializations
            .register_specialization(SpecializationCreate::new("Cardiologia", "Cuida do coração"))
            .await?;
        let ortopedia = self
            .specializations
            .register_specialization(SpecializationCreate::new("Ortopedia", "Cuida dos ossos"))
            .await?;
        let pediatria = self
            .specializations
            .register_specialization(SpecializationCreate::new("Pediatria", "Cuida das crianças"))
            .await?;

        let ana = self
            .patients
            .register_patient(PatientCreate::new("Ana Gabrielle", "123.456.789-01", "85988887777"))
            .await?;
        let brunno = self
            .patients
            .register_patient(PatientCreate::new("Brunno Luiz", "987.654.321-00", "85999996666"))
            .await?;

        let joao = self
            .doctors
            .register_doctor(
                DoctorCreate::new("Dr. João", "111.444.777-35", "CRM-CE1234")
                    .with_specialization(cardiologia)
                    .with_specialization(ortopedia),
            )
            .await?;
        let marina = self
            .doctors
            .register_doctor(
                DoctorCreate::new("Dra. Marina", "222.555.888-46", "CRM-CE5678")
                    .with_specialization(pediatria),
            )
            .await?;

        let first = self
            .appointments
            .register_appointment(AppointmentCreate::new(joao, ana, saude, "2025-09-25", "14:30"))
            .await?;
        let second = self
            .appointments
            .register_appointment(AppointmentCreate::new(
                marina,
                brunno,
                vida,
                "2025-09-26",
                "09:00",
            ))
            .await?;

        let summary = SeedSummary {
            addresses: vec![centro, meireles],
            clinics: vec![saude, vida],
            specializations: vec![cardiologia, ortopedia, pediatria],
            patients: vec![ana, brunno],
            doctors: vec![joao, marina],
            appointments: vec![first, second],
        };
        info!(records = summary.len(), "Seed data loaded");
        Ok(summary)
    }
}
