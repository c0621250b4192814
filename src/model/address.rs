use crate::model::AddressId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A street address. Referenced by [`Clinic`](crate::model::Clinic).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: AddressId,
    /// Street and number, e.g. `"Rua A, 100"`.
    pub street: String,
    pub district: String,
    pub city: String,
    pub postal_code: String,
}

/// Payload for registering an address.
#[derive(Debug, Clone)]
pub struct AddressCreate {
    pub street: String,
    pub district: String,
    pub city: String,
    pub postal_code: String,
}

impl AddressCreate {
    pub fn new(
        street: impl Into<String>,
        district: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            district: district.into(),
            city: city.into(),
            postal_code: postal_code.into(),
        }
    }
}

impl Address {
    pub fn new(id: AddressId, params: AddressCreate) -> Self {
        Self {
            id,
            street: params.street,
            district: params.district,
            city: params.city,
            postal_code: params.postal_code,
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Address] ID: {}, {}, {}, {} - Postal code: {}",
            self.id, self.street, self.district, self.city, self.postal_code
        )
    }
}
