use anyhow::Context;
use mailroom_common::config::Config;
use mailroom_core::DonorCollection;

use crate::terminal::{format, print};

pub fn donor(donors: &DonorCollection, name: &str, cfg: &Config) -> anyhow::Result<()> {
    let donor = donors
        .lookup(name)
        .with_context(|| format!("Cannot show donor '{name}'"))?;

    let idx: usize = donors
        .names()
        .position(|known| known == donor.name())
        .unwrap_or(0);

    print::tree_head(idx, donor.name());
    print::as_tree_one_level(format::donor_to_details(donor));

    if cfg.quiet == 0 {
        print::end_of_program();
    }
    Ok(())
}
