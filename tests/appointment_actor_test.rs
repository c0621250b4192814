use actor_framework::mock::MockClient;
use actor_framework::{ActorClient, FrameworkError, IdGenerator};
use clinic_recipe::appointment_actor::{self, AppointmentDeps};
use clinic_recipe::clients::{ClinicClient, DoctorClient, PatientClient};
use clinic_recipe::error::{ClinicError, EntityKind};
use clinic_recipe::model::{
    AddressId, AppointmentCreate, Clinic, ClinicId, Doctor, DoctorCreate, DoctorId, Patient,
    PatientCreate, PatientId,
};

fn doctor(id: u32) -> Doctor {
    Doctor::new(DoctorId(id), DoctorCreate::new("Dr. João", "111.444.777-35", "CRM-CE1234"))
}

fn patient(id: u32) -> Patient {
    Patient::new(
        PatientId(id),
        PatientCreate::new("Ana Gabrielle", "123.456.789-01", "85988887777"),
    )
}

fn clinic(id: u32) -> Clinic {
    Clinic {
        id: ClinicId(id),
        name: "Clínica Saúde".to_string(),
        address: AddressId(1),
    }
}

fn booking() -> AppointmentCreate {
    AppointmentCreate::new(DoctorId(10), PatientId(8), ClinicId(3), "2025-09-25", "14:30")
}

/// Real Appointment actor with mocked Doctor, Patient and Clinic dependencies.
/// Exercises the reference checks in `Appointment::on_create` in isolation.
#[tokio::test]
async fn test_appointment_actor_with_mocked_dependencies() {
    let mut doctor_mock = MockClient::<Doctor>::new();
    let mut patient_mock = MockClient::<Patient>::new();
    let mut clinic_mock = MockClient::<Clinic>::new();

    // on_create looks up doctor, patient and clinic, in that order
    doctor_mock.expect_get(DoctorId(10)).return_ok(Some(doctor(10)));
    patient_mock.expect_get(PatientId(8)).return_ok(Some(patient(8)));
    clinic_mock.expect_get(ClinicId(3)).return_ok(Some(clinic(3)));

    let deps = AppointmentDeps {
        doctors: DoctorClient::new(doctor_mock.client()),
        patients: PatientClient::new(patient_mock.client()),
        clinics: ClinicClient::new(clinic_mock.client()),
    };

    let (appointment_actor, appointments) = appointment_actor::new(8, IdGenerator::default());
    let actor_handle = tokio::spawn(appointment_actor.run(deps));

    let id = appointments
        .register_appointment(booking())
        .await
        .expect("appointment should be booked");

    let stored = appointments.require(id).await.unwrap();
    assert_eq!(stored.doctor, DoctorId(10));
    assert_eq!(stored.patient, PatientId(8));
    assert_eq!(stored.clinic, ClinicId(3));
    assert_eq!(stored.date, "2025-09-25");
    assert_eq!(stored.time, "14:30");

    doctor_mock.verify();
    patient_mock.verify();
    clinic_mock.verify();

    drop(appointments);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_missing_patient_rejects_appointment() {
    let mut doctor_mock = MockClient::<Doctor>::new();
    let mut patient_mock = MockClient::<Patient>::new();
    let clinic_mock = MockClient::<Clinic>::new();

    doctor_mock.expect_get(DoctorId(10)).return_ok(Some(doctor(10)));
    patient_mock.expect_get(PatientId(8)).return_ok(None);
    // The clinic is never consulted once the patient is missing

    let (appointment_actor, appointments) = appointment_actor::new(8, IdGenerator::default());
    tokio::spawn(appointment_actor.run(AppointmentDeps {
        doctors: DoctorClient::new(doctor_mock.client()),
        patients: PatientClient::new(patient_mock.client()),
        clinics: ClinicClient::new(clinic_mock.client()),
    }));

    let result = appointments.register_appointment(booking()).await;
    assert_eq!(result, Err(ClinicError::NotFound(EntityKind::Patient, 8)));
    assert!(appointments.list().await.unwrap().is_empty());

    doctor_mock.verify();
    patient_mock.verify();
    clinic_mock.verify();
}

#[tokio::test]
async fn test_unreachable_doctor_actor_surfaces_communication_error() {
    let mut doctor_mock = MockClient::<Doctor>::new();
    let patient_mock = MockClient::<Patient>::new();
    let clinic_mock = MockClient::<Clinic>::new();

    doctor_mock
        .expect_get(DoctorId(10))
        .return_err(FrameworkError::ActorClosed);

    let (appointment_actor, appointments) = appointment_actor::new(8, IdGenerator::default());
    tokio::spawn(appointment_actor.run(AppointmentDeps {
        doctors: DoctorClient::new(doctor_mock.client()),
        patients: PatientClient::new(patient_mock.client()),
        clinics: ClinicClient::new(clinic_mock.client()),
    }));

    let result = appointments.register_appointment(booking()).await;
    assert!(matches!(result, Err(ClinicError::ActorCommunication(_))));
    doctor_mock.verify();
}
