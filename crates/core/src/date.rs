use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Statement dates arrive as day-first `DD/MM/YYYY`.
pub const STATEMENT_DATE_FORMAT: &str = "%d/%m/%Y";

/// One date cell: the text as it appeared in the statement plus the
/// calendar day it denotes when the text parses.
///
/// Malformed dates (wrong shape, impossible calendar day, empty cell)
/// keep their text but have no day, and every range check against them
/// fails. They are deliberately never treated as day zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct StatementDate {
    raw: String,
    day: Option<NaiveDate>,
}

impl StatementDate {
    pub fn parse(raw: &str) -> Self {
        let day = NaiveDate::parse_from_str(raw.trim(), STATEMENT_DATE_FORMAT).ok();
        StatementDate {
            raw: raw.to_string(),
            day,
        }
    }

    /// The calendar day, or `None` when the cell was not a real date.
    pub fn day(&self) -> Option<NaiveDate> {
        self.day
    }

    /// The cell text exactly as the statement printed it.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl From<String> for StatementDate {
    fn from(raw: String) -> Self {
        StatementDate::parse(&raw)
    }
}

impl From<StatementDate> for String {
    fn from(date: StatementDate) -> Self {
        date.raw
    }
}

impl fmt::Display for StatementDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
