//! The shape shared by patients and doctors.

use super::collation::compare_names;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Name and document id (CPF) of a person.
///
/// Embedded in [`Patient`](crate::model::Patient) and [`Doctor`](crate::model::Doctor);
/// read it through [`PersonRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub cpf: String,
}

impl Person {
    pub fn new(name: impl Into<String>, cpf: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cpf: cpf.into(),
        }
    }
}

/// Capability of any record that describes a person.
pub trait PersonRecord {
    fn person(&self) -> &Person;

    fn name(&self) -> &str {
        &self.person().name
    }

    fn cpf(&self) -> &str {
        &self.person().cpf
    }
}

/// Orders two person records by name with [`compare_names`].
pub fn by_name<P: PersonRecord>(a: &P, b: &P) -> Ordering {
    compare_names(a.name(), b.name())
}
