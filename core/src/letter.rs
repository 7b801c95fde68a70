//! Thank-you letter template.

use mailroom_common::money::{self, Amount};

/// Renders the letter for a single gift.
///
/// `history` carries `(total, gifts)` for repeat donors and adds a line
/// acknowledging everything they have given so far.
pub fn render(name: &str, amount: Amount, history: Option<(Amount, usize)>) -> String {
    let extra: String = match history {
        Some((total, gifts)) => format!(
            "(and total donations of ${total} from {} gifts)\n",
            money::group_thousands(gifts as u64)
        ),
        None => String::new(),
    };

    format!(
        "\n\n\n\n\
        From:     Random Worthy Cause Foundation\n\
        To:       {name}\n\
        Subject:  Your generous donation\n\
        \n\
        Dear {name},\n\
        \n\
        We want to express our gratitude for your donation of ${amount}\n\
        {extra}to the Random Worthy Cause Foundation.  To show our\n\
        appreciation, we have enclosed a set of address labels\n\
        and a custom tote bag that lets people know that you are a\n\
        generous supporter of our cause.\n\
        \n\
        Thank you again, and please think of us the next time you want\n\
        to give to a worthy cause.\n\
        \n\
        Sincerely,\n\
        \n\
        \n\
        \n\
        Mister E. Partner\n\
        Random Worthy Cause Foundation\n\
        \n"
    )
}
