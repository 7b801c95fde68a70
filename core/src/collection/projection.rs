//! # Challenge Projections
//!
//! A projection answers "what if every donor multiplied their gifts?". Each
//! donor's gifts are filtered to an inclusive `[min_donation, max_donation]`
//! window, judged on the original values, and the survivors are scaled by
//! `factor` and rounded to cents.
//!
//! The result is a brand-new roster. Donors whose gifts were all filtered
//! out stay in it with an empty history.

use mailroom_common::config::{DEFAULT_MAX_DONATION, DEFAULT_MIN_DONATION};
use mailroom_common::{Amount, MailroomError, Result};
use tracing::debug;

use super::DonorCollection;
use crate::donor::Donor;

/// Parameters of a single challenge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub factor: f64,
    pub min_donation: f64,
    pub max_donation: f64,
}

impl Projection {
    /// Scales every gift, keeping the default window.
    pub fn new(factor: f64) -> Self {
        Self {
            factor,
            min_donation: DEFAULT_MIN_DONATION,
            max_donation: DEFAULT_MAX_DONATION,
        }
    }

    pub fn within(self, min_donation: f64, max_donation: f64) -> Self {
        Self {
            min_donation,
            max_donation,
            ..self
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.factor.is_finite() || self.factor <= 0.0 {
            return Err(MailroomError::validation(format!(
                "The 'factor' argument is '{}' - it should be a positive number.",
                self.factor
            )));
        }
        Ok(())
    }

    fn keeps(&self, amount: Amount) -> bool {
        let value: f64 = amount.as_dollars();
        self.min_donation <= value && value <= self.max_donation
    }

    /// Filter first, then scale. Only the window removes gifts; a scaled gift
    /// that rounds to $0.00 is kept as zero.
    fn apply(&self, donor: &Donor) -> Donor {
        let donations: Vec<Amount> = donor
            .donations()
            .iter()
            .copied()
            .filter(|amount| self.keeps(*amount))
            .map(|amount| amount.scale(self.factor))
            .collect();

        Donor::with_donations(donor.name(), donations)
    }
}

impl DonorCollection {
    /// Roster with every gift multiplied by `factor`.
    pub fn challenge(&self, factor: f64) -> Result<DonorCollection> {
        self.project(Projection::new(factor))
    }

    /// Roster with gifts inside `[min_donation, max_donation]` multiplied by
    /// `factor`; gifts outside the window are dropped.
    pub fn challenge_within(
        &self,
        factor: f64,
        min_donation: f64,
        max_donation: f64,
    ) -> Result<DonorCollection> {
        self.project(Projection::new(factor).within(min_donation, max_donation))
    }

    pub fn project(&self, projection: Projection) -> Result<DonorCollection> {
        projection.validate()?;

        let mut projected = DonorCollection::new();
        for donor in self.iter() {
            projected.insert(projection.apply(donor));
        }

        debug!(
            factor = projection.factor,
            min = projection.min_donation,
            max = projection.max_donation,
            donors = projected.len(),
            "projection built"
        );
        Ok(projected)
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
