use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::date::StatementDate;

/// The statement-agnostic shape every parsed record is reduced to.
/// Invalid date or amount cells travel with the row; the predicates and
/// totals that depend on them treat them as never satisfied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRow {
    pub date: StatementDate,
    pub amount: Amount,
    /// Category code as printed by the bank (DEB, CRD, SO, ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Free-text memo, possibly `name | memo` when the statement carries
    /// a separate counterparty column.
    pub reference: String,
    /// Name of the configured statement this row came from.
    pub statement: String,
}
