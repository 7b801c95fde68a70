//! Statistics table for the whole roster.

use std::io::Write;

use mailroom_common::Result;
use mailroom_common::money::{self, Amount};

use super::DonorCollection;
use crate::donor::Donor;

const NAME_WIDTH: usize = 25;
const GIFTS_WIDTH: usize = 15;
const MONEY_WIDTH: usize = 18;

const HEADINGS: [&str; 6] = [
    "Donor name",
    "Number of gifts",
    "Total given",
    "Average gift",
    "Largest gift",
    "Smallest gift",
];

/// One line of the report.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportRow {
    pub name: String,
    pub gifts: usize,
    pub total: Amount,
    pub average: f64,
    pub largest: Amount,
    pub smallest: Amount,
}

impl ReportRow {
    fn from_donor(donor: &Donor) -> Self {
        Self {
            name: donor.name().to_string(),
            gifts: donor.gifts(),
            total: donor.total(),
            average: donor.average(),
            largest: donor.largest(),
            smallest: donor.smallest(),
        }
    }

    fn render(&self) -> String {
        let mut line: String = format!("{:<NAME_WIDTH$} | {:>GIFTS_WIDTH$}", self.name, self.gifts);
        let average: String = money::format_dollars(self.average);
        for cell in [
            self.total.to_string(),
            average,
            self.largest.to_string(),
            self.smallest.to_string(),
        ] {
            line.push_str(&format!(" | ${cell:>MONEY_WIDTH$}"));
        }
        line
    }
}

impl DonorCollection {
    /// Rows for every donor with at least one gift, in roster order.
    pub fn report_rows(&self) -> Vec<ReportRow> {
        self.iter()
            .filter(|donor| donor.gifts() > 0)
            .map(ReportRow::from_donor)
            .collect()
    }

    /// Writes the statistics table.
    pub fn create_report<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "\n")?;
        writeln!(out, "{}", header_line())?;
        writeln!(out, "{}", separator_line())?;
        for row in self.report_rows() {
            writeln!(out, "{}", row.render())?;
        }
        writeln!(out, "\n")?;
        Ok(())
    }
}

fn header_line() -> String {
    let mut line: String = format!(
        "{:<NAME_WIDTH$} | {:>GIFTS_WIDTH$}",
        HEADINGS[0], HEADINGS[1]
    );
    for heading in &HEADINGS[2..] {
        line.push_str(&format!(" |  {heading:>MONEY_WIDTH$}"));
    }
    line
}

fn separator_line() -> String {
    let mut line: String = format!("{}-|-{}", "-".repeat(NAME_WIDTH), "-".repeat(GIFTS_WIDTH));
    for _ in 2..HEADINGS.len() {
        line.push_str(&format!("-|--{}", "-".repeat(MONEY_WIDTH)));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> DonorCollection {
        let mut donors = DonorCollection::new();
        donors.add("William Gates, III", [653_772.32, 12.17]).unwrap();
        donors.add("Jeff Bezos", 877.33).unwrap();
        donors
    }

    #[test]
    fn test_header_and_separator_line_up() {
        let header = header_line();
        let separator = separator_line();
        assert_eq!(header.len(), separator.len());
        assert_eq!(
            header,
            "Donor name                | Number of gifts |         Total given |        Average gift |        Largest gift |       Smallest gift"
        );
        assert!(separator.starts_with("--------------------------|-----------------|--"));
    }

    #[test]
    fn test_row_formatting() {
        let rows = roster().report_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0].render(),
            "William Gates, III        |               2 | $        653,784.49 | $        326,892.24 | $        653,772.32 | $             12.17"
        );
        assert_eq!(rows[0].render().len(), header_line().len());
    }

    #[test]
    fn test_report_skips_donors_without_gifts() {
        let mut donors = roster();
        donors.insert(Donor::with_donations("Nobody", Vec::new()));
        let names: Vec<String> = donors.report_rows().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["William Gates, III", "Jeff Bezos"]);
    }

    #[test]
    fn test_create_report_layout() {
        let mut out: Vec<u8> = Vec::new();
        roster().create_report(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "");
        assert!(lines[2].starts_with("Donor name"));
        assert!(lines[3].starts_with("-----"));
        assert!(lines[4].starts_with("William Gates, III"));
        assert!(lines[5].starts_with("Jeff Bezos"));
        assert!(text.ends_with("$            877.33\n\n\n"));
    }
}
