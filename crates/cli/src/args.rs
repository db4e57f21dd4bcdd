use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;

use fiscus_core::{Criteria, StatementDate};

/// Filter, aggregate and display bank statement transactions.
#[derive(Parser, Debug)]
#[command(name = "fiscus", version, about = "Bank statement analysis from the terminal")]
pub struct Args {
    /// Name of a statement listed in the config file
    #[arg(short = 'S', long)]
    pub statement: Option<String>,

    /// Path to a single bank statement CSV
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,

    /// Directory holding the configured bank statements
    #[arg(short = 'F', long)]
    pub files: Option<PathBuf>,

    /// Substring the transaction type must contain
    #[arg(short = 't', long = "type")]
    pub kind: Option<String>,

    /// Lowest signed amount to keep
    #[arg(short = 'm', long)]
    pub min: Option<Decimal>,

    /// Highest signed amount to keep
    #[arg(short = 'M', long)]
    pub max: Option<Decimal>,

    /// Lowest amount magnitude to keep
    #[arg(long)]
    pub abs_min: Option<Decimal>,

    /// Highest amount magnitude to keep
    #[arg(long)]
    pub abs_max: Option<Decimal>,

    /// Substring the reference must contain, case-insensitive
    #[arg(short = 'r', long)]
    pub reference: Option<String>,

    /// Earliest date to keep, DD/MM/YYYY
    #[arg(long)]
    pub from: Option<String>,

    /// Latest date to keep, DD/MM/YYYY
    #[arg(long)]
    pub to: Option<String>,

    /// Column to sort the table by
    #[arg(short = 's', long, value_enum, default_value = "date")]
    pub sort: SortColumn,

    /// Sort direction
    #[arg(short = 'd', long = "sort-dir", value_enum, default_value = "asc")]
    pub sort_dir: SortDir,

    /// Path to the wallet config file
    #[arg(short = 'c', long, default_value = "walletconfig.json")]
    pub config: PathBuf,
}

impl Args {
    /// True when any source or filter option was given on the command
    /// line. Such a run ignores configured tables and drives a single
    /// default table from the command-line criteria instead. Sort options
    /// never trigger this.
    pub fn overrides_config_tables(&self) -> bool {
        self.statement.is_some()
            || self.file.is_some()
            || self.files.is_some()
            || self.kind.is_some()
            || self.min.is_some()
            || self.max.is_some()
            || self.abs_min.is_some()
            || self.abs_max.is_some()
            || self.reference.is_some()
            || self.from.is_some()
            || self.to.is_some()
    }

    pub fn criteria(&self) -> Criteria {
        Criteria {
            min: self.min,
            max: self.max,
            abs_min: self.abs_min,
            abs_max: self.abs_max,
            from: self.from.as_deref().map(StatementDate::parse),
            to: self.to.as_deref().map(StatementDate::parse),
            kind: self.kind.clone(),
            reference: self.reference.clone(),
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortColumn {
    Date,
    Amount,
    Type,
    Reference,
    Statement,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}
