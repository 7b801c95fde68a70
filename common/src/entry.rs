//! # Donation Entries
//!
//! Parses the `NAME=AMOUNT[,AMOUNT...]` form used to feed donations into a
//! collection from the command line, e.g. `"Paul Allen=663.23,43.87"`.
//!
//! Only the shape is checked here. Amount validation (positive, at least a
//! cent) belongs to the donor itself.

use std::str::FromStr;

/// One donor name with the amounts it gave, in order.
#[derive(Clone, Debug, PartialEq)]
pub struct DonationEntry {
    pub name: String,
    pub amounts: Vec<f64>,
}

impl DonationEntry {
    pub fn new(name: impl Into<String>, amounts: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            amounts,
        }
    }
}

impl FromStr for DonationEntry {
    type Err = String;

    /// Splits on the last `=` so names may contain one.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((name, amounts)) = s.rsplit_once('=') else {
            return Err(format!("invalid donation '{s}': expected NAME=AMOUNT[,AMOUNT...]"));
        };

        let name: &str = name.trim();
        if name.is_empty() {
            return Err(format!("invalid donation '{s}': donor name is blank"));
        }

        let amounts: Vec<f64> = parse_amounts(amounts).map_err(|e| e.to_string())?;

        Ok(Self::new(name, amounts))
    }
}

/// Parses a comma-separated list of dollar amounts (e.g. "10, $20.50,3").
pub fn parse_amounts(s: &str) -> anyhow::Result<Vec<f64>> {
    let mut amounts = Vec::new();

    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        let digits: &str = part.strip_prefix('$').unwrap_or(part);
        let amount = digits
            .parse::<f64>()
            .map_err(|e| anyhow::anyhow!("Failed to parse amount '{}': {}", part, e))?;

        amounts.push(amount);
    }

    if amounts.is_empty() {
        anyhow::bail!("no amounts given in '{s}'");
    }

    Ok(amounts)
}
