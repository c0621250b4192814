//! Demo driver: seeds the clinic, prints every collection, then walks through the patient,
//! doctor and appointment operations, printing the affected collection after each step.

use actor_framework::tracing::setup_tracing;
use clinic_recipe::error::ClinicError;
use clinic_recipe::lifecycle::{ClinicConfig, ClinicSystem};
use clinic_recipe::model::{AppointmentCreate, DoctorCreate, PatientCreate, PatientUpdate};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), ClinicError> {
    setup_tracing();

    info!("Starting clinic demo");
    let system = ClinicSystem::new(ClinicConfig::default());

    let seed = system
        .load_seed_data()
        .instrument(tracing::info_span!("seed"))
        .await?;

    println!("{}", system.address_listing().await?);
    println!("{}", system.clinic_listing().await?);
    println!("{}", system.specialization_listing().await?);
    println!("{}", system.patient_listing().await?);
    println!("{}", system.doctor_listing().await?);
    println!("{}", system.appointment_listing().await?);

    let [ana, brunno] = [seed.patients[0], seed.patients[1]];
    let [joao, marina] = [seed.doctors[0], seed.doctors[1]];
    let [saude, vida] = [seed.clinics[0], seed.clinics[1]];

    // Patients
    let span = tracing::info_span!("patients");
    async {
        let paulo = system
            .patients
            .register_patient(PatientCreate::new(
                "Paulo Henrique",
                "111.222.333-44",
                "85911112222",
            ))
            .await?;
        println!("Patient Paulo Henrique registered with ID {}.\n", paulo);
        println!("{}", system.patient_listing().await?);

        let update = PatientUpdate::default()
            .name("Ana Gabrielle Souza")
            .phone("85970007777");
        system.patients.update_patient(ana, update).await?;
        println!("Patient ID {} updated.\n", ana);
        println!("{}", system.patient_listing().await?);

        system.patients.sort_by_name().await?;
        println!("Patients sorted by name.\n");
        println!("{}", system.patient_listing().await?);

        system.patients.remove_patient(brunno).await?;
        println!("Patient ID {} removed.\n", brunno);
        println!("{}", system.patient_listing().await?);

        if let Err(e) = system.patients.remove_patient(brunno).await {
            warn!(error = %e, "Second removal rejected");
            println!("{}\n", e);
        }
        Ok::<_, ClinicError>(())
    }
    .instrument(span)
    .await?;

    // Doctors
    let span = tracing::info_span!("doctors");
    async {
        let pediatria = seed.specializations[2];
        let specializations = system.doctors.add_specialization(joao, pediatria).await?;
        info!(doctor = %joao, count = specializations.len(), "Specialization added");

        let cardiologia = seed.specializations[0];
        system
            .doctors
            .register_doctor(
                DoctorCreate::new("Dr. Ricardo", "333.666.999-57", "CRM-CE9012")
                    .with_specialization(cardiologia),
            )
            .await?;
        println!("{}", system.doctor_listing().await?);
        Ok::<_, ClinicError>(())
    }
    .instrument(span)
    .await?;

    // Appointments
    let span = tracing::info_span!("appointments");
    async {
        system
            .appointments
            .register_appointment(AppointmentCreate::new(
                marina,
                ana,
                saude,
                "2025-10-02",
                "10:15",
            ))
            .await?;
        println!("{}", system.appointment_listing().await?);

        let first = seed.appointments[0];
        system.appointments.remove_appointment(first).await?;
        println!("Appointment ID {} removed.\n", first);
        println!("{}", system.appointment_listing().await?);

        if let Err(e) = system.appointments.remove_appointment(first).await {
            warn!(error = %e, "Second removal rejected");
            println!("{}\n", e);
        }

        let booking = AppointmentCreate::new(joao, brunno, vida, "2025-10-03", "16:00");
        if let Err(e) = system.appointments.register_appointment(booking).await {
            warn!(error = %e, "Booking rejected");
            println!("{}\n", e);
        }
        Ok::<_, ClinicError>(())
    }
    .instrument(span)
    .await?;

    system.shutdown().await?;
    info!("Clinic demo finished");
    Ok(())
}
