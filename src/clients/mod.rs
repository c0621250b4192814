//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).
//!
//! Each client implements [`ActorClient`](actor_framework::ActorClient) for the standard
//! reads and writes and adds the domain operations of its resource. Every client maps
//! framework errors to [`ClinicError`](crate::error::ClinicError).

// Defined before the module declarations so every client module can invoke it.
/// Implements [`ActorClient`](actor_framework::ActorClient) for a clinic client wrapping
/// `ResourceClient<$entity>`, reporting misses as `ClinicError::NotFound(EntityKind::$kind, id)`.
macro_rules! clinic_client {
    ($client:ident, $entity:ty, $kind:ident) => {
        #[async_trait::async_trait]
        impl actor_framework::ActorClient<$entity> for $client {
            type Error = $crate::error::ClinicError;

            fn inner(&self) -> &actor_framework::ResourceClient<$entity> {
                &self.inner
            }

            fn map_error(e: actor_framework::FrameworkError) -> Self::Error {
                $crate::error::ClinicError::from(e)
            }

            fn not_found(id: <$entity as actor_framework::ActorEntity>::Id) -> Self::Error {
                $crate::error::ClinicError::NotFound($crate::error::EntityKind::$kind, id.get())
            }
        }
    };
}

pub mod address_client;
pub mod appointment_client;
pub mod clinic_client;
pub mod doctor_client;
pub mod patient_client;
pub mod specialization_client;

pub use address_client::*;
pub use appointment_client::*;
pub use clinic_client::*;
pub use doctor_client::*;
pub use patient_client::*;
pub use specialization_client::*;
