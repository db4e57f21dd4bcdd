use anyhow::Result;

use fiscus_core::{Criteria, TableSpec, TableTally};
use fiscus_import::{analyze_file, AnalyzeError, ColumnLayout, StatementSource};

use crate::args::Args;
use crate::config::WalletConfig;
use crate::render;

const DEFAULT_TABLE: &str = "transactions";

/// Runs one full session: resolve sources and tables, analyze every
/// statement feeding each table, render each table as it completes.
/// Tables are independent; a failure in one is reported and the next
/// table still runs, with the first failure returned at the end.
pub async fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    let sources = resolve_sources(&args, &config);

    if sources.is_empty() {
        println!("Provide a path to the bank statement");
        return Ok(());
    }

    let tables = resolve_tables(&args, &config);
    let mut first_failure = None;

    for table in &tables {
        match collect_table(table, &sources).await {
            Ok((seen, tally)) => {
                tracing::debug!(
                    "table {}: {} rows accepted out of {} seen",
                    table.name,
                    tally.total_rows(),
                    seen
                );
                render::print_table(&table.name, seen, &tally, args.sort, args.sort_dir);
            }
            Err(err) => {
                tracing::error!("table {} failed: {err:#}", table.name);
                first_failure.get_or_insert(err);
            }
        }
    }

    match first_failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Analyzes every source concurrently for one table, folding accepted
/// rows into a single tally in source order. The row count covers every
/// data row seen, accepted or not. The first file failure abandons the
/// table.
pub async fn collect_table(
    table: &TableSpec,
    sources: &[StatementSource],
) -> Result<(u64, TableTally)> {
    let mut handles = Vec::with_capacity(sources.len());
    for source in sources {
        let source = source.clone();
        let spec = table.clone();
        handles.push(tokio::spawn(async move {
            tracing::debug!("analyzing {} for table {}", source.name, spec.name);
            let mut tally = TableTally::new();
            let seen = analyze_file(&source, |row| {
                if spec.accepts(&row) {
                    tally.record(row);
                }
            })
            .await?;
            Ok::<(u64, TableTally), AnalyzeError>((seen, tally))
        }));
    }

    let mut seen = 0u64;
    let mut tally = TableTally::new();
    for handle in handles {
        let (file_seen, partial) = handle.await??;
        seen += file_seen;
        for row in partial.into_rows() {
            tally.record(row);
        }
    }
    Ok((seen, tally))
}

// With --file the config is optional; without it a missing or broken
// config is fatal before any processing starts.
fn load_config(args: &Args) -> Result<WalletConfig> {
    match WalletConfig::load(&args.config) {
        Ok(config) => Ok(config),
        Err(err) if args.file.is_some() => {
            tracing::debug!("config {} not used: {err}", args.config.display());
            Ok(WalletConfig::default())
        }
        Err(err) => Err(anyhow::Error::new(err).context(format!(
            "could not load {}; create it or pass --file <statement.csv>",
            args.config.display()
        ))),
    }
}

/// Which statement files feed this session. `--file` names one directly,
/// `--statement` picks one from the config, otherwise every configured
/// file is used. `--files` replaces the configured directory.
fn resolve_sources(args: &Args, config: &WalletConfig) -> Vec<StatementSource> {
    if let Some(file) = &args.file {
        // Configured columns apply only when --statement names the
        // statement; a bare --file is read with the canonical layout.
        let (name, layout) = match &args.statement {
            Some(statement) => (statement.clone(), config.layout_for(statement)),
            None => {
                let name = file
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_default();
                (name, ColumnLayout::canonical())
            }
        };
        return vec![StatementSource::new(name, file.clone(), layout)];
    }

    if let Some(statement) = &args.statement {
        return config
            .source_named(statement, args.files.as_deref())
            .into_iter()
            .collect();
    }

    config.sources(args.files.as_deref())
}

/// Which tables this session builds. Command-line filters replace the
/// configured tables with a single default one; a config without tables
/// gets a default table that accepts every row.
fn resolve_tables(args: &Args, config: &WalletConfig) -> Vec<TableSpec> {
    if args.overrides_config_tables() {
        return vec![TableSpec::new(DEFAULT_TABLE, vec![args.criteria()])];
    }
    let tables = config.table_specs();
    if tables.is_empty() {
        return vec![TableSpec::new(DEFAULT_TABLE, vec![Criteria::default()])];
    }
    tables
}
