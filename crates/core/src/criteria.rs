use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::date::StatementDate;
use crate::row::TransactionRow;

/// One filter specification. Every field is optional and an absent field
/// constrains nothing, so `Criteria::default()` accepts every row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Criteria {
    /// Lowest signed amount to keep, inclusive.
    pub min: Option<Decimal>,
    /// Highest signed amount to keep, inclusive.
    pub max: Option<Decimal>,
    /// Lowest amount magnitude to keep, inclusive.
    #[serde(rename = "absMin")]
    pub abs_min: Option<Decimal>,
    /// Highest amount magnitude to keep, inclusive.
    #[serde(rename = "absMax")]
    pub abs_max: Option<Decimal>,
    /// Earliest date to keep, inclusive.
    pub from: Option<StatementDate>,
    /// Latest date to keep, inclusive.
    pub to: Option<StatementDate>,
    /// Substring the category code must contain. Case-sensitive.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Substring the reference must contain. Case-insensitive.
    pub reference: Option<String>,
}

impl Criteria {
    /// Row-acceptance test: the AND of five optional checks, every bound
    /// inclusive. A present bound compared against a cell that never
    /// parsed is unsatisfied, as is a date bound that never parsed.
    pub fn accepts(&self, row: &TransactionRow) -> bool {
        self.within_amount(row)
            && self.within_absolute_amount(row)
            && self.within_dates(row)
            && self.matches_kind(row)
            && self.matches_reference(row)
    }

    fn within_amount(&self, row: &TransactionRow) -> bool {
        if let Some(min) = self.min {
            if !row.amount.value().is_some_and(|value| value >= min) {
                return false;
            }
        }
        if let Some(max) = self.max {
            if !row.amount.value().is_some_and(|value| value <= max) {
                return false;
            }
        }
        true
    }

    // Magnitudes are compared on both sides, so a negative bound behaves
    // like its absolute value.
    fn within_absolute_amount(&self, row: &TransactionRow) -> bool {
        if let Some(abs_min) = self.abs_min {
            if !row
                .amount
                .value()
                .is_some_and(|value| value.abs() >= abs_min.abs())
            {
                return false;
            }
        }
        if let Some(abs_max) = self.abs_max {
            if !row
                .amount
                .value()
                .is_some_and(|value| value.abs() <= abs_max.abs())
            {
                return false;
            }
        }
        true
    }

    fn within_dates(&self, row: &TransactionRow) -> bool {
        if let Some(from) = &self.from {
            let satisfied = row
                .date
                .day()
                .zip(from.day())
                .is_some_and(|(day, from)| day >= from);
            if !satisfied {
                return false;
            }
        }
        if let Some(to) = &self.to {
            let satisfied = row
                .date
                .day()
                .zip(to.day())
                .is_some_and(|(day, to)| day <= to);
            if !satisfied {
                return false;
            }
        }
        true
    }

    fn matches_kind(&self, row: &TransactionRow) -> bool {
        match &self.kind {
            Some(kind) => row.kind.contains(kind.as_str()),
            None => true,
        }
    }

    fn matches_reference(&self, row: &TransactionRow) -> bool {
        match &self.reference {
            Some(reference) => row
                .reference
                .to_lowercase()
                .contains(&reference.to_lowercase()),
            None => true,
        }
    }
}

/// A named output table: its rows are the union of what its criteria
/// accept. An empty criteria list is a table that shows nothing, which is
/// not the same as a single unconstrained `Criteria`.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSpec {
    pub name: String,
    pub criteria: Vec<Criteria>,
}

impl TableSpec {
    pub fn new(name: impl Into<String>, criteria: Vec<Criteria>) -> Self {
        TableSpec {
            name: name.into(),
            criteria,
        }
    }

    pub fn accepts(&self, row: &TransactionRow) -> bool {
        self.criteria.iter().any(|criteria| criteria.accepts(row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amount::Amount;
    use rust_decimal_macros::dec;

    fn tx(date: &str, amount: &str, kind: &str, reference: &str) -> TransactionRow {
        TransactionRow {
            date: StatementDate::parse(date),
            amount: Amount::parse(amount),
            kind: kind.to_string(),
            reference: reference.to_string(),
            statement: "test".to_string(),
        }
    }

    fn amount_tx(amount: &str) -> TransactionRow {
        tx("01/03/2021", amount, "DEB", "coffee")
    }

    fn dated_tx(date: &str) -> TransactionRow {
        tx(date, "10.00", "DEB", "coffee")
    }

    // ── signed amount bounds ──────────────────────────────────────────────

    #[test]
    fn unconstrained_accepts_everything() {
        let criteria = Criteria::default();
        assert!(criteria.accepts(&amount_tx("10.00")));
        assert!(criteria.accepts(&amount_tx("-99.99")));
        assert!(criteria.accepts(&tx("garbage", "garbage", "", "")));
    }

    #[test]
    fn amount_within_range() {
        let criteria = Criteria {
            min: Some(dec!(1)),
            max: Some(dec!(10)),
            ..Default::default()
        };
        assert!(criteria.accepts(&amount_tx("5")));
    }

    #[test]
    fn amount_bounds_are_inclusive() {
        let criteria = Criteria {
            min: Some(dec!(1)),
            max: Some(dec!(10)),
            ..Default::default()
        };
        assert!(criteria.accepts(&amount_tx("1")));
        assert!(criteria.accepts(&amount_tx("10")));
    }

    #[test]
    fn amount_outside_range() {
        let criteria = Criteria {
            min: Some(dec!(1)),
            max: Some(dec!(10)),
            ..Default::default()
        };
        assert!(!criteria.accepts(&amount_tx("0")));
        assert!(!criteria.accepts(&amount_tx("11")));
    }

    #[test]
    fn amount_negative_ranges() {
        let spanning_zero = Criteria {
            min: Some(dec!(-10)),
            max: Some(dec!(10)),
            ..Default::default()
        };
        assert!(spanning_zero.accepts(&amount_tx("0")));

        let negative_only = Criteria {
            min: Some(dec!(-10)),
            max: Some(dec!(-5)),
            ..Default::default()
        };
        assert!(!negative_only.accepts(&amount_tx("-11")));
        assert!(!negative_only.accepts(&amount_tx("0")));
        assert!(negative_only.accepts(&amount_tx("-7.50")));
    }

    #[test]
    fn amount_min_equal_to_max() {
        let criteria = Criteria {
            min: Some(dec!(5)),
            max: Some(dec!(5)),
            ..Default::default()
        };
        assert!(criteria.accepts(&amount_tx("5")));
        assert!(!criteria.accepts(&amount_tx("4")));
        assert!(!criteria.accepts(&amount_tx("6")));
    }

    #[test]
    fn amount_bound_never_matches_unparsed_cell() {
        let criteria = Criteria {
            min: Some(dec!(0)),
            ..Default::default()
        };
        assert!(!criteria.accepts(&amount_tx("not-a-number")));
        assert!(!criteria.accepts(&amount_tx("")));
    }

    // ── absolute amount bounds ────────────────────────────────────────────

    #[test]
    fn absolute_amount_within_range() {
        let criteria = Criteria {
            abs_min: Some(dec!(50)),
            abs_max: Some(dec!(150)),
            ..Default::default()
        };
        assert!(criteria.accepts(&amount_tx("100")));
        assert!(criteria.accepts(&amount_tx("-100")));
    }

    #[test]
    fn absolute_amount_bounds_are_inclusive() {
        let criteria = Criteria {
            abs_min: Some(dec!(50)),
            abs_max: Some(dec!(100)),
            ..Default::default()
        };
        assert!(criteria.accepts(&amount_tx("-50")));
        assert!(criteria.accepts(&amount_tx("100")));
    }

    #[test]
    fn absolute_amount_outside_range() {
        let criteria = Criteria {
            abs_min: Some(dec!(101)),
            abs_max: Some(dec!(200)),
            ..Default::default()
        };
        assert!(!criteria.accepts(&amount_tx("100")));

        let capped = Criteria {
            abs_min: Some(dec!(0)),
            abs_max: Some(dec!(99)),
            ..Default::default()
        };
        assert!(!capped.accepts(&amount_tx("100")));
    }

    #[test]
    fn absolute_bounds_compare_magnitudes_on_both_sides() {
        let criteria = Criteria {
            abs_min: Some(dec!(-20)),
            abs_max: Some(dec!(-50)),
            ..Default::default()
        };
        assert!(criteria.accepts(&amount_tx("-30")));

        let reversed = Criteria {
            abs_min: Some(dec!(-50)),
            abs_max: Some(dec!(-20)),
            ..Default::default()
        };
        assert!(!reversed.accepts(&amount_tx("-30")));
        assert!(!reversed.accepts(&amount_tx("-60")));
    }

    #[test]
    fn absolute_bound_never_matches_unparsed_cell() {
        let criteria = Criteria {
            abs_min: Some(dec!(10)),
            abs_max: Some(dec!(20)),
            ..Default::default()
        };
        assert!(!criteria.accepts(&amount_tx("not-a-number")));
    }

    // ── date bounds ───────────────────────────────────────────────────────

    #[test]
    fn date_within_range() {
        let criteria = Criteria {
            from: Some(StatementDate::parse("01/01/2023")),
            to: Some(StatementDate::parse("31/12/2023")),
            ..Default::default()
        };
        assert!(criteria.accepts(&dated_tx("04/07/2023")));
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let criteria = Criteria {
            from: Some(StatementDate::parse("01/01/2023")),
            to: Some(StatementDate::parse("31/12/2023")),
            ..Default::default()
        };
        assert!(criteria.accepts(&dated_tx("01/01/2023")));
        assert!(criteria.accepts(&dated_tx("31/12/2023")));
    }

    #[test]
    fn date_outside_range() {
        let criteria = Criteria {
            from: Some(StatementDate::parse("01/01/2023")),
            to: Some(StatementDate::parse("31/12/2023")),
            ..Default::default()
        };
        assert!(!criteria.accepts(&dated_tx("31/12/2022")));
        assert!(!criteria.accepts(&dated_tx("01/01/2024")));
    }

    #[test]
    fn missing_from_ignores_lower_bound() {
        let criteria = Criteria {
            to: Some(StatementDate::parse("31/12/2023")),
            ..Default::default()
        };
        assert!(criteria.accepts(&dated_tx("04/07/1999")));
        assert!(!criteria.accepts(&dated_tx("01/01/2024")));
    }

    #[test]
    fn missing_to_ignores_upper_bound() {
        let criteria = Criteria {
            from: Some(StatementDate::parse("01/01/2023")),
            ..Default::default()
        };
        assert!(criteria.accepts(&dated_tx("04/07/2030")));
        assert!(!criteria.accepts(&dated_tx("31/12/2022")));
    }

    #[test]
    fn date_bound_never_matches_unparsed_row_date() {
        let criteria = Criteria {
            from: Some(StatementDate::parse("01/01/2023")),
            ..Default::default()
        };
        assert!(!criteria.accepts(&dated_tx("not-a-date")));
        assert!(!criteria.accepts(&dated_tx("")));
    }

    #[test]
    fn unparsed_date_bound_never_matches() {
        let criteria = Criteria {
            from: Some(StatementDate::parse("31/02/2021")),
            ..Default::default()
        };
        assert!(!criteria.accepts(&dated_tx("01/03/2021")));
    }

    // ── substring matches ─────────────────────────────────────────────────

    #[test]
    fn kind_substring_is_case_sensitive() {
        let criteria = Criteria {
            kind: Some("DEB".to_string()),
            ..Default::default()
        };
        assert!(criteria.accepts(&tx("01/03/2021", "10", "DEBIT", "x")));
        assert!(!criteria.accepts(&tx("01/03/2021", "10", "debit", "x")));
    }

    #[test]
    fn reference_substring_is_case_insensitive() {
        let criteria = Criteria {
            reference: Some("Rent".to_string()),
            ..Default::default()
        };
        assert!(criteria.accepts(&tx("01/03/2021", "10", "DEB", "MONTHLY RENT")));
        assert!(criteria.accepts(&tx("01/03/2021", "10", "DEB", "rent payment")));
        assert!(!criteria.accepts(&tx("01/03/2021", "10", "DEB", "groceries")));
    }

    #[test]
    fn empty_patterns_always_match() {
        let criteria = Criteria {
            kind: Some(String::new()),
            reference: Some(String::new()),
            ..Default::default()
        };
        assert!(criteria.accepts(&tx("01/03/2021", "10", "DEB", "coffee")));
        assert!(criteria.accepts(&tx("01/03/2021", "10", "", "")));
    }

    // ── criteria from JSON ────────────────────────────────────────────────

    #[test]
    fn deserializes_config_spelling() {
        let criteria: Criteria = serde_json::from_str(
            r#"{"min": 1, "max": 10.5, "absMin": 2, "absMax": 20, "type": "DEB",
                "reference": "rent", "from": "01/01/2023", "to": "31/12/2023"}"#,
        )
        .unwrap();
        assert_eq!(criteria.min, Some(dec!(1)));
        assert_eq!(criteria.max, Some(dec!(10.5)));
        assert_eq!(criteria.abs_min, Some(dec!(2)));
        assert_eq!(criteria.abs_max, Some(dec!(20)));
        assert_eq!(criteria.kind.as_deref(), Some("DEB"));
        assert_eq!(criteria.reference.as_deref(), Some("rent"));
        assert_eq!(
            criteria.from.as_ref().and_then(StatementDate::day),
            chrono::NaiveDate::from_ymd_opt(2023, 1, 1)
        );
        assert_eq!(
            criteria.to.as_ref().and_then(StatementDate::day),
            chrono::NaiveDate::from_ymd_opt(2023, 12, 31)
        );
    }

    #[test]
    fn empty_object_is_unconstrained() {
        let criteria: Criteria = serde_json::from_str("{}").unwrap();
        assert_eq!(criteria, Criteria::default());
    }

    // ── table specs ───────────────────────────────────────────────────────

    #[test]
    fn empty_criteria_list_accepts_nothing() {
        let table = TableSpec::new("empty", vec![]);
        assert!(!table.accepts(&amount_tx("10.00")));
    }

    #[test]
    fn single_unconstrained_criteria_accepts_everything() {
        let table = TableSpec::new("all", vec![Criteria::default()]);
        assert!(table.accepts(&amount_tx("10.00")));
        assert!(table.accepts(&tx("bad", "bad", "", "")));
    }

    #[test]
    fn criteria_list_is_or_combined() {
        let table = TableSpec::new(
            "either",
            vec![
                Criteria {
                    kind: Some("CRD".to_string()),
                    ..Default::default()
                },
                Criteria {
                    min: Some(dec!(100)),
                    ..Default::default()
                },
            ],
        );
        assert!(table.accepts(&tx("01/03/2021", "5", "CRD", "refund")));
        assert!(table.accepts(&tx("01/03/2021", "150", "DEB", "rent")));
        assert!(!table.accepts(&tx("01/03/2021", "5", "DEB", "coffee")));
    }
}
