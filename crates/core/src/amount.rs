use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One amount cell as it appeared in a statement, together with the
/// decimal it denotes when the text actually parses.
///
/// Statements occasionally carry blank or garbled amount cells. Such rows
/// are kept rather than rejected: an `Amount` without a value fails every
/// bound check and contributes nothing to a table's total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Amount {
    raw: String,
    value: Option<Decimal>,
}

impl Amount {
    pub fn parse(raw: &str) -> Self {
        let value = Decimal::from_str(raw.trim()).ok();
        Amount {
            raw: raw.to_string(),
            value,
        }
    }

    /// The parsed decimal, or `None` when the cell held no usable number.
    pub fn value(&self) -> Option<Decimal> {
        self.value
    }

    /// The cell text exactly as the statement printed it.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl From<String> for Amount {
    fn from(raw: String) -> Self {
        Amount::parse(&raw)
    }
}

impl From<Amount> for String {
    fn from(amount: Amount) -> Self {
        amount.raw
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
