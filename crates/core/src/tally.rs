use rust_decimal::{Decimal, RoundingStrategy};

use crate::row::TransactionRow;

/// Running aggregate for one output table. Rows arrive in file order from
/// however many statements feed the table; ordering for display is the
/// renderer's concern.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableTally {
    total_amount: Decimal,
    total_rows: u64,
    rows: Vec<TransactionRow>,
}

impl TableTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one accepted row in. A row whose amount never parsed still
    /// counts and is still kept for display, it just contributes nothing
    /// to the total.
    pub fn record(&mut self, row: TransactionRow) {
        if let Some(value) = row.amount.value() {
            self.total_amount += value;
        }
        self.total_rows += 1;
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[TransactionRow] {
        &self.rows
    }

    pub fn total_rows(&self) -> u64 {
        self.total_rows
    }

    /// The exact accumulated total, before display rounding.
    pub fn total_amount(&self) -> Decimal {
        self.total_amount
    }

    /// Total as shown in the summary line: two decimal places, halves
    /// rounded away from zero, trailing zeros dropped.
    pub fn rounded_total(&self) -> Decimal {
        self.total_amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            .normalize()
    }

    pub fn into_rows(self) -> Vec<TransactionRow> {
        self.rows
    }
}
