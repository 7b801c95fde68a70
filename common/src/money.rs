//! # Money
//!
//! Donation amounts are stored as whole cents so totals stay exact. Dollar
//! values coming in as `f64` are rounded half away from zero, which is what
//! "rounded to two decimal places" means for every caller of this crate.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Smallest dollar value that still rounds to one cent.
pub const ONE_CENT_THRESHOLD: f64 = 0.005;

/// A non-negative, cent-precise monetary value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(u64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn as_dollars(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Rounds a dollar value to the nearest cent.
    ///
    /// Returns `None` for negative or non-finite input.
    pub fn from_dollars(dollars: f64) -> Option<Self> {
        if !dollars.is_finite() || dollars < 0.0 {
            return None;
        }
        let cents: f64 = (dollars * 100.0).round();
        if cents > u64::MAX as f64 {
            return None;
        }
        Some(Self(cents as u64))
    }

    /// Multiplies by `factor` and rounds back to cents.
    ///
    /// Saturates at the largest representable amount; a negative or NaN
    /// product yields zero.
    pub fn scale(self, factor: f64) -> Self {
        let product: f64 = self.as_dollars() * factor;
        match Self::from_dollars(product) {
            Some(amount) => amount,
            None if product > 0.0 => Self(u64::MAX),
            None => Self::ZERO,
        }
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        Amount(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Amount {
        iter.copied().sum()
    }
}

/// Formats as `1,234.56`. Honors width and alignment flags.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = format!("{}.{:02}", group_thousands(self.0 / 100), self.0 % 100);
        f.pad(&text)
    }
}

/// Inserts `,` between every group of three digits.
pub fn group_thousands(value: u64) -> String {
    let digits: String = value.to_string();
    let mut grouped: String = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats an arbitrary dollar value (such as an average) like an [`Amount`].
///
/// Rounds the exact stored `f64` to two decimals, so `326892.245` (stored as
/// `326892.24499...`) prints as `326,892.24`.
pub fn format_dollars(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed: String = format!("{:.2}", value.abs());
    let Some((whole, cents)) = fixed.split_once('.') else {
        return fixed;
    };
    let Ok(whole) = whole.parse::<u64>() else {
        return format!("{value:.2}");
    };

    let sign: &str = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{}.{cents}", group_thousands(whole))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
