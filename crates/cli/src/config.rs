use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use fiscus_core::{Criteria, TableSpec};
use fiscus_import::{ColumnLayout, StatementSource};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// walletconfig.json: where the statement files live, what their columns
/// mean, and which output tables to build. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WalletConfig {
    /// Directory the configured statement files are read from.
    pub dir: PathBuf,
    /// Statement name to file name within `dir`.
    pub files: BTreeMap<String, String>,
    /// Statement name to column layout. Statements without an entry get
    /// the canonical layout.
    pub columns: BTreeMap<String, ColumnLayout>,
    /// Output table name to its criteria list. Tables render in name
    /// order.
    pub tables: BTreeMap<String, Vec<Criteria>>,
}

impl WalletConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn layout_for(&self, statement: &str) -> ColumnLayout {
        self.columns
            .get(statement)
            .cloned()
            .unwrap_or_else(ColumnLayout::canonical)
    }

    /// Every configured statement as an analyzable source. A directory
    /// given on the command line replaces the configured one.
    pub fn sources(&self, dir_override: Option<&Path>) -> Vec<StatementSource> {
        let dir = dir_override.unwrap_or(&self.dir);
        self.files
            .iter()
            .map(|(name, file)| {
                StatementSource::new(name.clone(), dir.join(file), self.layout_for(name))
            })
            .collect()
    }

    /// The source a statement name refers to, if one is configured.
    pub fn source_named(
        &self,
        statement: &str,
        dir_override: Option<&Path>,
    ) -> Option<StatementSource> {
        let dir = dir_override.unwrap_or(&self.dir);
        self.files.get(statement).map(|file| {
            StatementSource::new(
                statement.to_string(),
                dir.join(file),
                self.layout_for(statement),
            )
        })
    }

    pub fn table_specs(&self) -> Vec<TableSpec> {
        self.tables
            .iter()
            .map(|(name, criteria)| TableSpec::new(name.clone(), criteria.clone()))
            .collect()
    }
}
