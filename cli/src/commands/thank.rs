use std::io::{self, Write};

use anyhow::Context;
use mailroom_core::DonorCollection;

pub fn thank(donors: &DonorCollection, name: &str, index: Option<isize>) -> anyhow::Result<()> {
    let donor = donors
        .lookup(name)
        .with_context(|| format!("Cannot write a letter for '{name}'"))?;

    let letter: String = match index {
        Some(index) => donor.form_letter_at(index)?,
        None => donor.form_letter()?,
    };

    let mut out = io::stdout().lock();
    out.write_all(letter.as_bytes())?;
    out.flush()?;
    Ok(())
}
