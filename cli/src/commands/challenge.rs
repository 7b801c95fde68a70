use std::io;

use colored::*;
use mailroom_common::config::Config;
use mailroom_common::{success, warn};
use mailroom_core::{DonorCollection, Projection};

use crate::mprint;
use crate::terminal::{colors, format, print};

pub fn challenge(donors: &DonorCollection, projection: Projection, cfg: &Config) -> anyhow::Result<()> {
    let projected: DonorCollection = donors.project(projection)?;

    let emptied: usize = projected.iter().filter(|donor| donor.gifts() == 0).count();
    if emptied > 0 {
        warn!("{emptied} donors have no gifts inside the challenge range");
    }

    projected.create_report(&mut io::stdout().lock())?;
    print_summary(donors, &projected, projection.factor, cfg);
    Ok(())
}

fn print_summary(donors: &DonorCollection, projected: &DonorCollection, factor: f64, cfg: &Config) {
    let before: ColoredString = format::money_value(format::roster_total(donors)).bold();
    let after: ColoredString = format::money_value(format::roster_total(projected)).bold();
    let factor: ColoredString = format!("x{factor}").bold().yellow();
    let output: ColoredString =
        format!("Challenge {factor}: {after} projected, up from {before}").color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output.to_string());
        }
        _ => {
            mprint!();
            success!("{}", output)
        }
    }
}
