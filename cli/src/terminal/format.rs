use colored::*;
use mailroom_common::Amount;
use mailroom_common::money;
use mailroom_core::{Donor, DonorCollection};

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

pub fn money_value(amount: Amount) -> ColoredString {
    format!("${amount}").color(colors::MONEY)
}

pub fn donor_to_details(donor: &Donor) -> Vec<Detail> {
    let gifts: String = money::group_thousands(donor.gifts() as u64);
    let average: ColoredString =
        format!("${}", money::format_dollars(donor.average())).color(colors::MONEY);

    vec![
        (String::from("Gifts"), gifts.color(colors::TEXT_DEFAULT)),
        (String::from("Total"), money_value(donor.total())),
        (String::from("Average"), average),
        (String::from("Largest"), money_value(donor.largest())),
        (String::from("Smallest"), money_value(donor.smallest())),
    ]
}

/// Sum of every gift on the roster.
pub fn roster_total(donors: &DonorCollection) -> Amount {
    donors.iter().map(Donor::total).sum()
}
