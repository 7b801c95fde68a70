use mailroom_common::config;
use mailroom_common::entry::DonationEntry;
use mailroom_core::DonorCollection;

/// Roster built the same way the command line builds it.
pub fn collection_from(entries: &[DonationEntry]) -> anyhow::Result<DonorCollection> {
    let mut donors = DonorCollection::new();
    for entry in entries {
        donors.add(&entry.name, entry.amounts.clone())?;
    }
    Ok(donors)
}

pub fn sample_collection() -> anyhow::Result<DonorCollection> {
    collection_from(&config::sample_roster())
}
