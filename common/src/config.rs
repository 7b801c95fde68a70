use crate::entry::DonationEntry;

/// Lower bound a challenge applies when none is given.
pub const DEFAULT_MIN_DONATION: f64 = 0.0;

/// Upper bound a challenge applies when none is given.
pub const DEFAULT_MAX_DONATION: f64 = 1.0e12;

pub struct Config {
    /// 0 prints headers and summaries, 1 or more prints bare output only.
    pub quiet: u8,
    /// Disables ANSI colors in terminal output.
    pub no_color: bool,
}

/// Roster used when no donations are supplied on the command line.
pub fn sample_roster() -> Vec<DonationEntry> {
    vec![
        DonationEntry::new("William Gates, III", vec![653_772.32, 12.17]),
        DonationEntry::new("Jeff Bezos", vec![877.33]),
        DonationEntry::new("Paul Allen", vec![663.23, 43.87, 1.32]),
        DonationEntry::new("Mark Zuckerberg", vec![1_663.23, 4_300.87, 10_432.0]),
    ]
}
