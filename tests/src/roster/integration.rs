#![cfg(test)]
use std::str::FromStr;

use mailroom_common::entry::DonationEntry;
use mailroom_common::{Amount, MailroomError};
use mailroom_core::DonorCollection;

use crate::fixtures::{collection_from, sample_collection};

/// Parsing entries the way the CLI does and feeding them in should give the
/// same roster as calling `add` directly.
#[test]
fn entries_build_the_same_roster_as_direct_adds() {
    let entries: Vec<DonationEntry> = ["Alice=100", "Bob=10,20", " Alice = 50.005"]
        .iter()
        .map(|s| DonationEntry::from_str(s).unwrap())
        .collect();
    let parsed: DonorCollection = collection_from(&entries).unwrap();

    let mut direct = DonorCollection::new();
    direct.add("Alice", 100.0).unwrap();
    direct.add("Bob", [10.0, 20.0]).unwrap();
    direct.add("Alice", 50.005).unwrap();

    assert_eq!(parsed.names().collect::<Vec<_>>(), vec!["Alice", "Bob"]);
    for name in ["Alice", "Bob"] {
        assert_eq!(
            parsed.lookup(name).unwrap().donations(),
            direct.lookup(name).unwrap().donations()
        );
    }
    assert_eq!(parsed.lookup("Alice").unwrap().total(), Amount::from_cents(15_001));
}

#[test]
fn sample_roster_report() {
    let donors = sample_collection().unwrap();

    let mut out: Vec<u8> = Vec::new();
    donors.create_report(&mut out).unwrap();
    let report = String::from_utf8(out).unwrap();

    assert!(report.contains(
        "Mark Zuckerberg           |               3 | $         16,396.10 | $          5,465.37"
    ));
    assert!(report.contains("Jeff Bezos                |               1 | $            877.33"));
    assert_eq!(donors.report_rows().len(), 4);
}

#[test]
fn challenge_then_report_leaves_original_alone() {
    let donors = sample_collection().unwrap();
    let before: Vec<Vec<Amount>> = donors.iter().map(|d| d.donations().to_vec()).collect();

    let projected = donors.challenge_within(3.0, 0.0, 1_000.0).unwrap();

    let after: Vec<Vec<Amount>> = donors.iter().map(|d| d.donations().to_vec()).collect();
    assert_eq!(before, after);

    let gates = projected.lookup("William Gates, III").unwrap();
    assert_eq!(gates.donations(), &[Amount::from_cents(3_651)]);
    let zuckerberg = projected.lookup("Mark Zuckerberg").unwrap();
    assert_eq!(zuckerberg.gifts(), 0);

    let rows: Vec<String> = projected.report_rows().into_iter().map(|r| r.name).collect();
    assert_eq!(rows, vec!["William Gates, III", "Jeff Bezos", "Paul Allen"]);
}

#[test]
fn lookup_errors_surface_through_anyhow() {
    let donors = sample_collection().unwrap();
    let err: anyhow::Error = donors.lookup("Nobody").unwrap_err().into();
    assert!(matches!(
        err.downcast_ref::<MailroomError>(),
        Some(MailroomError::NotFound { .. })
    ));
    assert_eq!(
        donors.lookup("  Jeff Bezos  ").unwrap().name(),
        "Jeff Bezos"
    );
}
