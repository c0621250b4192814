//! Type-safe identifiers.
//!
//! All of them wrap a `u32` drawn from the one [`IdGenerator`](actor_framework::IdGenerator)
//! shared by every actor, so ids are unique across record kinds as well as within one.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            pub fn get(self) -> u32 {
                self.0
            }
        }

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Identifier of an [`Address`](crate::model::Address).
    AddressId
);
entity_id!(
    /// Identifier of a [`Clinic`](crate::model::Clinic).
    ClinicId
);
entity_id!(
    /// Identifier of a [`Specialization`](crate::model::Specialization).
    SpecializationId
);
entity_id!(
    /// Identifier of a [`Patient`](crate::model::Patient).
    PatientId
);
entity_id!(
    /// Identifier of a [`Doctor`](crate::model::Doctor).
    DoctorId
);
entity_id!(
    /// Identifier of an [`Appointment`](crate::model::Appointment).
    AppointmentId
);
