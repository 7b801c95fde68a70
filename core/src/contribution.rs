//! The "one amount or a list of amounts" argument accepted by every `add`.

/// A donation argument: either a single dollar amount or an ordered,
/// possibly nested, sequence of them.
#[derive(Clone, Debug, PartialEq)]
pub enum Contribution {
    One(f64),
    Many(Vec<Contribution>),
}

impl Contribution {
    /// Number of scalar amounts, counting through nested sequences.
    pub fn count(&self) -> usize {
        match self {
            Contribution::One(_) => 1,
            Contribution::Many(items) => items.iter().map(Contribution::count).sum(),
        }
    }

    /// True when there is nothing to record: a zero amount or no amounts at all.
    pub fn is_missing(&self) -> bool {
        match self {
            Contribution::One(value) => *value == 0.0,
            Contribution::Many(_) => self.count() == 0,
        }
    }
}

impl From<f64> for Contribution {
    fn from(value: f64) -> Self {
        Contribution::One(value)
    }
}

impl From<Vec<f64>> for Contribution {
    fn from(values: Vec<f64>) -> Self {
        Contribution::Many(values.into_iter().map(Contribution::One).collect())
    }
}

impl From<&[f64]> for Contribution {
    fn from(values: &[f64]) -> Self {
        Contribution::Many(values.iter().copied().map(Contribution::One).collect())
    }
}

impl<const N: usize> From<[f64; N]> for Contribution {
    fn from(values: [f64; N]) -> Self {
        Contribution::Many(values.into_iter().map(Contribution::One).collect())
    }
}

impl From<Vec<Contribution>> for Contribution {
    fn from(items: Vec<Contribution>) -> Self {
        Contribution::Many(items)
    }
}
