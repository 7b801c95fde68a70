//! # Donor
//!
//! A donor is a trimmed, non-blank name plus the ordered list of gifts it
//! has made. Gift order matters: the last gift is the "most recent" one and
//! letter indexes count into this list.
//!
//! Statistics are derived on demand and fall back to zero for a donor with
//! no gifts, which only happens for donors produced by a projection.

use std::fmt;

use mailroom_common::money::{self, Amount, ONE_CENT_THRESHOLD};
use mailroom_common::{MailroomError, Result};
use tracing::debug;

use crate::contribution::Contribution;
use crate::letter;

#[derive(Debug, Clone, PartialEq)]
pub struct Donor {
    name: String,
    donations: Vec<Amount>,
}

impl Donor {
    /// Creates a donor from its first contribution.
    ///
    /// Fails when the name is blank or the contribution is missing
    /// (a zero amount or no amounts at all), and on any amount `add` rejects.
    pub fn new(name: &str, contribution: impl Into<Contribution>) -> Result<Self> {
        let name: &str = clean_name(name)?;
        let contribution: Contribution = contribution.into();
        if contribution.is_missing() {
            return Err(MailroomError::validation("A donation amount must be specified."));
        }

        let mut donor = Self::with_donations(name, Vec::new());
        donor.add(contribution)?;
        Ok(donor)
    }

    /// Builds a donor from amounts that are already cent-precise.
    ///
    /// Skips every check `new` performs, so the list may be empty.
    pub(crate) fn with_donations(name: impl Into<String>, donations: Vec<Amount>) -> Self {
        Self {
            name: name.into(),
            donations,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn donations(&self) -> &[Amount] {
        &self.donations
    }

    /// Records one amount, or each amount of a sequence in order.
    ///
    /// Stops at the first rejected amount; amounts recorded before it stay.
    pub fn add(&mut self, contribution: impl Into<Contribution>) -> Result<()> {
        match contribution.into() {
            Contribution::Many(items) => {
                for item in items {
                    self.add(item)?;
                }
                Ok(())
            }
            Contribution::One(value) => {
                let amount: Amount = validate_amount(value)?;
                self.donations.push(amount);
                debug!(donor = %self.name, %amount, gifts = self.donations.len(), "donation recorded");
                Ok(())
            }
        }
    }

    pub fn total(&self) -> Amount {
        self.donations.iter().sum()
    }

    pub fn gifts(&self) -> usize {
        self.donations.len()
    }

    pub fn average(&self) -> f64 {
        if self.donations.is_empty() {
            return 0.0;
        }
        self.total().as_dollars() / self.gifts() as f64
    }

    pub fn largest(&self) -> Amount {
        self.donations.iter().copied().max().unwrap_or(Amount::ZERO)
    }

    pub fn smallest(&self) -> Amount {
        self.donations.iter().copied().min().unwrap_or(Amount::ZERO)
    }

    /// Thank-you letter for the most recent gift.
    pub fn form_letter(&self) -> Result<String> {
        self.form_letter_at(-1)
    }

    /// Thank-you letter for the gift at `index`.
    ///
    /// Negative indexes count back from the most recent gift, so the valid
    /// range is `[-gifts, gifts)`.
    pub fn form_letter_at(&self, index: isize) -> Result<String> {
        let gifts: isize = self.gifts() as isize;
        if index < -gifts || index >= gifts {
            return Err(MailroomError::Range {
                name: self.name.clone(),
                gifts: self.gifts(),
                index,
            });
        }

        let position: usize = (if index < 0 { gifts + index } else { index }) as usize;
        let history: Option<(Amount, usize)> =
            (self.gifts() > 1).then(|| (self.total(), self.gifts()));

        Ok(letter::render(&self.name, self.donations[position], history))
    }
}

impl fmt::Display for Donor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amounts: Vec<String> = self
            .donations
            .iter()
            .map(|amount| money::format_dollars(amount.as_dollars()).replace(',', ""))
            .collect();
        write!(f, "Donor('{}', '[{}]')", self.name, amounts.join(", "))
    }
}

/// Trims a donor name, rejecting names that are blank after trimming.
pub(crate) fn clean_name(name: &str) -> Result<&str> {
    let trimmed: &str = name.trim();
    if trimmed.is_empty() {
        return Err(MailroomError::validation("A non-blank name must be specified."));
    }
    Ok(trimmed)
}

fn validate_amount(value: f64) -> Result<Amount> {
    let rejected = || {
        MailroomError::validation(format!(
            "The 'amount' argument is '{value}' - it must be at least $0.01."
        ))
    };

    if !value.is_finite() || value < ONE_CENT_THRESHOLD {
        return Err(rejected());
    }
    Amount::from_dollars(value).ok_or_else(|| {
        MailroomError::validation(format!(
            "The 'amount' argument is '{value}' - it is too large to record."
        ))
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
