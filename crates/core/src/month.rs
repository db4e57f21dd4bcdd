use chrono::{Datelike, NaiveDate};
use std::fmt;

use crate::date::StatementDate;

/// Calendar month carrying the canonical short name rows are styled by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// Month from its 1-based calendar index.
    pub fn new(n: u32) -> Option<Self> {
        match n {
            1 => Some(Month::Jan),
            2 => Some(Month::Feb),
            3 => Some(Month::Mar),
            4 => Some(Month::Apr),
            5 => Some(Month::May),
            6 => Some(Month::Jun),
            7 => Some(Month::Jul),
            8 => Some(Month::Aug),
            9 => Some(Month::Sep),
            10 => Some(Month::Oct),
            11 => Some(Month::Nov),
            12 => Some(Month::Dec),
            _ => None,
        }
    }

    pub fn short_name(self) -> &'static str {
        match self {
            Month::Jan => "jan",
            Month::Feb => "feb",
            Month::Mar => "mar",
            Month::Apr => "apr",
            Month::May => "may",
            Month::Jun => "jun",
            Month::Jul => "jul",
            Month::Aug => "aug",
            Month::Sep => "sep",
            Month::Oct => "oct",
            Month::Nov => "nov",
            Month::Dec => "dec",
        }
    }

    /// `short_name` spelled backwards; the odd-year half of the style key
    /// space.
    pub fn reversed_name(self) -> &'static str {
        match self {
            Month::Jan => "naj",
            Month::Feb => "bef",
            Month::Mar => "ram",
            Month::Apr => "rpa",
            Month::May => "yam",
            Month::Jun => "nuj",
            Month::Jul => "luj",
            Month::Aug => "gua",
            Month::Sep => "pes",
            Month::Oct => "tco",
            Month::Nov => "von",
            Month::Dec => "ced",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearParity {
    Even,
    Odd,
}

impl YearParity {
    pub fn of(year: i32) -> Self {
        if year % 2 == 0 {
            YearParity::Even
        } else {
            YearParity::Odd
        }
    }
}

/// The key the renderer resolves to a row style: the plain month name on
/// even years, the reversed name on odd years. 24 keys in total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleKey {
    pub month: Month,
    pub parity: YearParity,
}

impl StyleKey {
    /// Key for a statement date, or `None` when the date never parsed and
    /// the row has nothing to be styled by.
    pub fn of(date: &StatementDate) -> Option<Self> {
        date.day().map(Self::from_day)
    }

    pub fn from_day(day: NaiveDate) -> Self {
        // month() is always 1-12.
        let month = Month::new(day.month()).unwrap();
        StyleKey {
            month,
            parity: YearParity::of(day.year()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self.parity {
            YearParity::Even => self.month.short_name(),
            YearParity::Odd => self.month.reversed_name(),
        }
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
