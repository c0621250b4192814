use crate::model::{find_by_id, Address, AddressId, ClinicId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A clinic located at exactly one [`Address`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clinic {
    pub id: ClinicId,
    pub name: String,
    pub address: AddressId,
}

/// Payload for registering a clinic. The address must already be registered.
#[derive(Debug, Clone)]
pub struct ClinicCreate {
    pub name: String,
    pub address: AddressId,
}

impl ClinicCreate {
    pub fn new(name: impl Into<String>, address: AddressId) -> Self {
        Self {
            name: name.into(),
            address,
        }
    }
}

impl Clinic {
    /// Pairs this clinic with the address snapshot used to render it.
    pub fn record<'a>(&'a self, addresses: &'a [Address]) -> ClinicRecord<'a> {
        ClinicRecord {
            clinic: self,
            address: find_by_id(addresses, &self.address),
        }
    }
}

/// Display view of a [`Clinic`] embedding the full rendering of its address.
pub struct ClinicRecord<'a> {
    pub clinic: &'a Clinic,
    pub address: Option<&'a Address>,
}

impl fmt::Display for ClinicRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Clinic] ID: {}, Name: {}, Address: ", self.clinic.id, self.clinic.name)?;
        match self.address {
            Some(address) => write!(f, "{}", address),
            None => write!(f, "<unknown address {}>", self.clinic.address),
        }
    }
}
