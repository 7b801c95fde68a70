use std::io;

use mailroom_common::config::Config;
use mailroom_common::success;
use mailroom_core::DonorCollection;

use crate::terminal::print;

pub fn list(donors: &DonorCollection, cfg: &Config) -> anyhow::Result<()> {
    if donors.is_empty() {
        print::no_donors();
        return Ok(());
    }

    donors.print_donors(&mut io::stdout().lock())?;

    if cfg.quiet == 0 {
        success!("{} donors on record", donors.len());
    }
    Ok(())
}
