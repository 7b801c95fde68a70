use std::io;

use colored::*;
use mailroom_common::config::Config;
use mailroom_core::DonorCollection;

use crate::terminal::{colors, format, print};

pub fn report(donors: &DonorCollection, cfg: &Config) -> anyhow::Result<()> {
    donors.create_report(&mut io::stdout().lock())?;
    print_summary(donors, cfg);
    Ok(())
}

fn print_summary(donors: &DonorCollection, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    let gifts: usize = donors.iter().map(|donor| donor.gifts()).sum();
    let gift_count: ColoredString = format!("{gifts} gifts").bold().green();
    let total: ColoredString = format::money_value(format::roster_total(donors)).bold();
    let output: ColoredString =
        format!("{gift_count} totalling {total}").color(colors::TEXT_DEFAULT);

    print::fat_separator();
    print::centerln(&output.to_string());
}
