pub mod challenge;
pub mod donor;
pub mod letters;
pub mod list;
pub mod report;
pub mod thank;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use mailroom_common::config::{self, DEFAULT_MAX_DONATION, DEFAULT_MIN_DONATION};
use mailroom_common::entry::DonationEntry;
use mailroom_common::info;
use mailroom_core::DonorCollection;

#[derive(Parser)]
#[command(name = "mailroom")]
#[command(about = "Donor tracking, reports and thank-you letters.")]
pub struct CommandLine {
    /// Donation to record, as NAME=AMOUNT[,AMOUNT...]. Repeat for more donors
    #[arg(short, long = "gift", global = true, value_name = "NAME=AMOUNTS")]
    pub gifts: Vec<DonationEntry>,

    /// Less output. Repeat to hide status messages too
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every donor name
    #[command(alias = "l")]
    List,
    /// Print gift statistics for every donor
    #[command(alias = "r")]
    Report,
    /// Show the statistics of a single donor
    #[command(alias = "d")]
    Donor { name: String },
    /// Print the thank-you letter for one gift
    #[command(alias = "t")]
    Thank {
        name: String,
        /// Gift to thank for; negative values count back from the most recent
        #[arg(short, long, allow_negative_numbers = true)]
        index: Option<isize>,
    },
    /// Write a thank-you letter for every donor into a folder
    #[command(alias = "w")]
    Letters {
        /// Target folder, created if missing. Defaults to the current directory
        dir: Option<PathBuf>,
    },
    /// Project the roster with every gift multiplied by FACTOR
    #[command(alias = "c")]
    Challenge {
        factor: f64,
        /// Ignore gifts below this amount
        #[arg(long, default_value_t = DEFAULT_MIN_DONATION)]
        min: f64,
        /// Ignore gifts above this amount
        #[arg(long, default_value_t = DEFAULT_MAX_DONATION)]
        max: f64,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Builds the roster from `--gift` entries, or the sample roster when none were given.
pub fn load_roster(gifts: &[DonationEntry]) -> anyhow::Result<DonorCollection> {
    let entries: Vec<DonationEntry> = if gifts.is_empty() {
        info!("No donations given, using the sample roster");
        config::sample_roster()
    } else {
        gifts.to_vec()
    };

    let mut donors = DonorCollection::new();
    for entry in entries {
        donors
            .add(&entry.name, entry.amounts)
            .with_context(|| format!("Failed to record donation for '{}'", entry.name))?;
    }
    Ok(donors)
}
