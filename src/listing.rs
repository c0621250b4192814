//! Labeled text listings of a collection.
//!
//! A [`Listing`] captures the renderings of a snapshot at the moment it is built, so printing
//! it later never observes a concurrent mutation.

use std::fmt;

/// Line shown in place of the records when a collection is empty.
pub const EMPTY_LINE: &str = "No records found.";

/// A header followed by one rendered line per record, in collection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    label: String,
    lines: Vec<String>,
}

impl Listing {
    pub fn new<R: fmt::Display>(
        label: impl Into<String>,
        records: impl IntoIterator<Item = R>,
    ) -> Self {
        Self {
            label: label.into(),
            lines: records.into_iter().map(|r| r.to_string()).collect(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- {} ---", self.label)?;
        if self.lines.is_empty() {
            return writeln!(f, "{}", EMPTY_LINE);
        }
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_header_then_lines_in_order() {
        let listing = Listing::new("Patients", ["first", "second"]);
        assert_eq!(listing.len(), 2);
        assert_eq!(listing.to_string(), "--- Patients ---\nfirst\nsecond\n");
    }

    #[test]
    fn empty_collection_prints_single_line() {
        let listing = Listing::new("Appointments", Vec::<String>::new());
        assert!(listing.is_empty());
        assert_eq!(
            listing.to_string(),
            format!("--- Appointments ---\n{}\n", EMPTY_LINE)
        );
    }
}
