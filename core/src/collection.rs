//! # Donor Collection
//!
//! The roster of every donor, keyed by trimmed name and kept in insertion
//! order so listings and reports are reproducible.
//!
//! Derived views live in submodules:
//! * [`report`]: the donor list and the statistics table.
//! * [`letters`]: batch export of thank-you letters.
//! * [`projection`]: "challenge" rosters with filtered, scaled gifts.

use std::collections::HashMap;
use std::io::Write;

use mailroom_common::{MailroomError, Result};
use tracing::debug;

use crate::contribution::Contribution;
use crate::donor::{self, Donor};

pub mod letters;
pub mod projection;
pub mod report;

pub use report::ReportRow;

#[derive(Debug, Clone, Default)]
pub struct DonorCollection {
    donors: Vec<Donor>,
    positions: HashMap<String, usize>,
}

impl DonorCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.donors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.donors.is_empty()
    }

    /// Donors in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Donor> {
        self.donors.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.donors.iter().map(Donor::name)
    }

    /// Finds a donor by name, ignoring surrounding whitespace.
    pub fn lookup(&self, key: &str) -> Result<&Donor> {
        let name: &str = key.trim();
        if name.is_empty() {
            return Err(MailroomError::InvalidKey { key: key.to_string() });
        }

        self.positions
            .get(name)
            .and_then(|&position| self.donors.get(position))
            .ok_or_else(|| MailroomError::NotFound { name: key.to_string() })
    }

    /// Records a contribution, creating the donor on its first gift.
    pub fn add(&mut self, name: &str, contribution: impl Into<Contribution>) -> Result<()> {
        let name: &str = donor::clean_name(name)?;

        match self.positions.get(name) {
            Some(&position) => self.donors[position].add(contribution),
            None => {
                let donor: Donor = Donor::new(name, contribution)?;
                debug!(donor = %donor.name(), "new donor");
                self.insert(donor);
                Ok(())
            }
        }
    }

    /// Writes the donor names, one per line.
    pub fn print_donors<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "\nLIST OF DONORS:")?;
        for name in self.names() {
            writeln!(out, "{name}")?;
        }
        writeln!(out, "\n")?;
        Ok(())
    }

    fn insert(&mut self, donor: Donor) {
        self.positions.insert(donor.name().to_string(), self.donors.len());
        self.donors.push(donor);
    }
}

impl<'a> IntoIterator for &'a DonorCollection {
    type Item = &'a Donor;
    type IntoIter = std::slice::Iter<'a, Donor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use mailroom_common::Amount;

    #[test]
    fn test_add_creates_then_appends() {
        let mut donors = DonorCollection::new();
        donors.add("Alice", 100.0).unwrap();
        donors.add(" Alice ", 50.005).unwrap();
        donors.add("Bob", [10.0, 20.0]).unwrap();

        assert_eq!(donors.len(), 2);
        let alice = donors.lookup("Alice").unwrap();
        assert_eq!(
            alice.donations(),
            &[Amount::from_cents(10_000), Amount::from_cents(5_001)]
        );
        assert_eq!(alice.total(), Amount::from_cents(15_001));
    }

    #[test]
    fn test_add_rejects_blank_name() {
        let mut donors = DonorCollection::new();
        assert!(matches!(donors.add("   ", 5.0), Err(MailroomError::Validation { .. })));
        assert!(donors.is_empty());
    }

    #[test]
    fn test_failed_first_gift_adds_no_donor() {
        let mut donors = DonorCollection::new();
        assert!(donors.add("Alice", 0.001).is_err());
        assert!(matches!(donors.lookup("Alice"), Err(MailroomError::NotFound { .. })));
    }

    #[test]
    fn test_lookup_trims_and_reports_missing() {
        let mut donors = DonorCollection::new();
        donors.add("Alice", 1.0).unwrap();

        assert_eq!(donors.lookup("  Alice\t").unwrap().name(), "Alice");
        assert!(matches!(donors.lookup("Carol"), Err(MailroomError::NotFound { .. })));
        assert!(matches!(donors.lookup("  "), Err(MailroomError::InvalidKey { .. })));
    }

    #[test]
    fn test_names_keep_insertion_order() {
        let mut donors = DonorCollection::new();
        for name in ["Zed", "Amy", "Mo"] {
            donors.add(name, 1.0).unwrap();
        }
        donors.add("Amy", 2.0).unwrap();
        assert_eq!(donors.names().collect::<Vec<_>>(), vec!["Zed", "Amy", "Mo"]);
    }

    #[test]
    fn test_print_donors() {
        let mut donors = DonorCollection::new();
        donors.add("Alice", 1.0).unwrap();
        donors.add("Bob", 2.0).unwrap();

        let mut out: Vec<u8> = Vec::new();
        donors.print_donors(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\nLIST OF DONORS:\nAlice\nBob\n\n\n");
    }
}
