use csv::StringRecord;
use serde::Deserialize;

use fiscus_core::{Amount, StatementDate, TransactionRow};

/// Canonical roles a statement column can map to. The set is closed: a
/// configured layout naming anything else fails config parsing instead of
/// silently dropping the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Date,
    Amount,
    #[serde(rename = "type")]
    Kind,
    Name,
    Reference,
}

/// Positional column layout for one statement format. Configured as a JSON
/// list of role names where `null` marks a column to consume and drop.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ColumnLayout {
    slots: Vec<Option<Field>>,
}

impl ColumnLayout {
    pub fn new(slots: Vec<Option<Field>>) -> Self {
        ColumnLayout { slots }
    }

    /// Layout assumed for a statement with no configured columns:
    /// date, amount, type, reference.
    pub fn canonical() -> Self {
        ColumnLayout::new(vec![
            Some(Field::Date),
            Some(Field::Amount),
            Some(Field::Kind),
            Some(Field::Reference),
        ])
    }

    /// Maps one raw record into a canonical row. Cells beyond the layout
    /// are dropped; layout slots beyond the record are left empty, which
    /// leaves the date and amount as unparsed sentinels.
    pub fn canonicalize(&self, record: &StringRecord, statement: &str) -> TransactionRow {
        let mut date = "";
        let mut amount = "";
        let mut kind = "";
        let mut name = "";
        let mut memo = "";

        for (slot, cell) in self.slots.iter().zip(record.iter()) {
            match slot {
                Some(Field::Date) => date = cell,
                Some(Field::Amount) => amount = cell,
                Some(Field::Kind) => kind = cell,
                Some(Field::Name) => name = cell,
                Some(Field::Reference) => memo = cell,
                None => {}
            }
        }

        TransactionRow {
            date: StatementDate::parse(date),
            amount: Amount::parse(amount),
            kind: kind.to_string(),
            reference: synthesize_reference(name, memo),
            statement: statement.to_string(),
        }
    }
}

// Memos come with embedded tabs and padding; the counterparty name is
// joined in front when both are present.
fn synthesize_reference(name: &str, memo: &str) -> String {
    let memo = memo.replace('\t', "");
    let memo = memo.trim();
    match (name.is_empty(), memo.is_empty()) {
        (true, true) => String::new(),
        (false, true) => name.to_string(),
        (true, false) => memo.to_string(),
        (false, false) => format!("{name} | {memo}"),
    }
}
