//! # Clinic Recipe
//!
//! > **Clinic records managed by resource-oriented actors.**
//!
//! Addresses, clinics, specializations, patients, doctors and appointments each live in an
//! ordered in-memory collection owned by one [`ResourceActor`](actor_framework::ResourceActor).
//! Every actor draws ids from one shared counter, so an id is unique across all six types.
//!
//! ## Module Tour
//!
//! ### 1. The Data ([`model`])
//! Plain records, their creation payloads and their text renderings. Relations are stored as
//! ids; `*Record` views resolve them against a snapshot of the related collection.
//!
//! ### 2. The Actors ([`address_actor`], [`clinic_actor`], [`specialization_actor`],
//! [`patient_actor`], [`doctor_actor`], [`appointment_actor`])
//! [`ActorEntity`](actor_framework::ActorEntity) implementations. Actors whose records point
//! at other records receive those clients as their `Context` and reject unknown ids on create.
//!
//! ### 3. The Interface ([`clients`])
//! Domain clients wrapping the generic `ResourceClient`. All of them report failures as
//! [`ClinicError`](error::ClinicError).
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`ClinicSystem`](lifecycle::ClinicSystem) spawns and wires the actors, loads the seed data,
//! builds [`Listing`](listing::Listing)s and shuts everything down.
//!
//! ## Running the Demo
//!
//! ```bash
//! # Run with info logs
//! RUST_LOG=info cargo run
//! ```

pub mod address_actor;
pub mod appointment_actor;
pub mod clients;
pub mod clinic_actor;
pub mod doctor_actor;
pub mod error;
pub mod lifecycle;
pub mod listing;
pub mod model;
pub mod patient_actor;
pub mod specialization_actor;
