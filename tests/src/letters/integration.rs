#![cfg(test)]
use std::fs;

use mailroom_core::collection::letters::letter_file_name;

use crate::fixtures::sample_collection;

#[test]
fn saves_one_letter_per_donor() {
    let donors = sample_collection().unwrap();
    let tmp = tempfile::tempdir().unwrap();

    let folder = donors.save_letters(Some(tmp.path())).unwrap();

    for donor in &donors {
        let path = folder.join(letter_file_name(donor.name()));
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains(&format!("Dear {},", donor.name())));
        assert!(text.ends_with("Random Worthy Cause Foundation\n\n"));
    }
    assert_eq!(fs::read_dir(&folder).unwrap().count(), donors.len());
}

#[test]
fn projected_letters_thank_for_scaled_gift() {
    let donors = sample_collection().unwrap();
    let projected = donors.challenge(2.0).unwrap();
    let tmp = tempfile::tempdir().unwrap();

    let folder = projected.save_letters(Some(tmp.path())).unwrap();

    let bezos = fs::read_to_string(folder.join("_Jeff Bezos.txt")).unwrap();
    assert!(bezos.contains("your donation of $1,754.66\nto the"));
}
