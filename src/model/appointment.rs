use crate::model::{
    find_by_id, AppointmentId, Clinic, ClinicId, Doctor, DoctorId, Patient, PatientId,
    PersonRecord,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An appointment between a doctor and a patient at a clinic.
///
/// Date and time are kept as given; they are not parsed or validated.
///
/// # Actor Framework
/// Implements [`ActorEntity`](actor_framework::ActorEntity) in
/// [`appointment_actor`](crate::appointment_actor), whose `on_create` checks that the three
/// referenced records exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: AppointmentId,
    pub doctor: DoctorId,
    pub patient: PatientId,
    pub clinic: ClinicId,
    pub date: String,
    pub time: String,
}

/// Payload for booking an appointment.
#[derive(Debug, Clone)]
pub struct AppointmentCreate {
    pub doctor: DoctorId,
    pub patient: PatientId,
    pub clinic: ClinicId,
    pub date: String,
    pub time: String,
}

impl AppointmentCreate {
    pub fn new(
        doctor: DoctorId,
        patient: PatientId,
        clinic: ClinicId,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            doctor,
            patient,
            clinic,
            date: date.into(),
            time: time.into(),
        }
    }
}

impl Appointment {
    pub fn new(id: AppointmentId, params: AppointmentCreate) -> Self {
        Self {
            id,
            doctor: params.doctor,
            patient: params.patient,
            clinic: params.clinic,
            date: params.date,
            time: params.time,
        }
    }

    /// Pairs this appointment with the snapshots used to name its participants.
    pub fn record<'a>(
        &'a self,
        doctors: &'a [Doctor],
        patients: &'a [Patient],
        clinics: &'a [Clinic],
    ) -> AppointmentRecord<'a> {
        AppointmentRecord {
            appointment: self,
            doctor: find_by_id(doctors, &self.doctor),
            patient: find_by_id(patients, &self.patient),
            clinic: find_by_id(clinics, &self.clinic),
        }
    }
}

/// Display view of an [`Appointment`]. Related records appear by name only.
pub struct AppointmentRecord<'a> {
    pub appointment: &'a Appointment,
    pub doctor: Option<&'a Doctor>,
    pub patient: Option<&'a Patient>,
    pub clinic: Option<&'a Clinic>,
}

impl fmt::Display for AppointmentRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let appointment = self.appointment;
        let patient = self
            .patient
            .map(|p| p.name().to_string())
            .unwrap_or_else(|| format!("<unknown patient {}>", appointment.patient));
        let doctor = self
            .doctor
            .map(|d| d.name().to_string())
            .unwrap_or_else(|| format!("<unknown doctor {}>", appointment.doctor));
        let clinic = self
            .clinic
            .map(|c| c.name.clone())
            .unwrap_or_else(|| format!("<unknown clinic {}>", appointment.clinic));
        write!(
            f,
            "[Appointment] ID: {}, Patient: {}, Doctor: {}, Clinic: {}, Date: {} {}",
            appointment.id, patient, doctor, clinic, appointment.date, appointment.time
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AddressId, DoctorCreate, PatientCreate};

    #[test]
    fn rendering_uses_names_only() {
        let doctors = [Doctor::new(
            DoctorId(10),
            DoctorCreate::new("Dr. João", "1", "CRM-CE1234"),
        )];
        let patients = [Patient::new(
            PatientId(8),
            PatientCreate::new("Ana Gabrielle", "2", "85988887777"),
        )];
        let clinics = [Clinic {
            id: ClinicId(3),
            name: "Clínica Saúde".to_string(),
            address: AddressId(1),
        }];
        let appointment = Appointment::new(
            AppointmentId(12),
            AppointmentCreate::new(DoctorId(10), PatientId(8), ClinicId(3), "2025-09-25", "14:30"),
        );

        assert_eq!(
            appointment.record(&doctors, &patients, &clinics).to_string(),
            "[Appointment] ID: 12, Patient: Ana Gabrielle, Doctor: Dr. João, \
             Clinic: Clínica Saúde, Date: 2025-09-25 14:30"
        );
    }

    #[test]
    fn rendering_marks_missing_participants() {
        let appointment = Appointment::new(
            AppointmentId(12),
            AppointmentCreate::new(DoctorId(10), PatientId(9), ClinicId(3), "2025-09-25", "14:30"),
        );
        let rendered = appointment.record(&[], &[], &[]).to_string();
        assert!(rendered.contains("Patient: <unknown patient 9>"));
    }
}
