use std::path::{Path, PathBuf};

use anyhow::Context;
use mailroom_common::success;
use mailroom_core::DonorCollection;

pub fn letters(donors: &DonorCollection, dir: Option<&Path>) -> anyhow::Result<()> {
    let folder: PathBuf = donors
        .save_letters(dir)
        .context("Failed to save thank-you letters")?;

    success!("Thank-you letters are in {}", folder.display());
    Ok(())
}
