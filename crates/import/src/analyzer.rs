use std::io::Read;
use std::path::PathBuf;

use thiserror::Error;

use fiscus_core::TransactionRow;

use crate::layout::ColumnLayout;

#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// One statement file to analyze: where it lives, what its columns mean,
/// and the identifier stamped onto every row it produces.
#[derive(Debug, Clone)]
pub struct StatementSource {
    pub name: String,
    pub path: PathBuf,
    pub layout: ColumnLayout,
}

impl StatementSource {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, layout: ColumnLayout) -> Self {
        StatementSource {
            name: name.into(),
            path: path.into(),
            layout,
        }
    }
}

/// Parses statement CSV data, handing each canonical row to `sink` and
/// returning how many data rows were seen. The first record is the header
/// and is discarded; the layout is positional. Rows whose cells are all
/// empty are skipped and not counted. Ragged rows are tolerated, their
/// missing cells end up as unparsed sentinels.
pub fn analyze_records<R: Read>(
    data: R,
    layout: &ColumnLayout,
    statement: &str,
    mut sink: impl FnMut(TransactionRow),
) -> Result<u64, AnalyzeError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    let mut seen = 0u64;
    for result in reader.records() {
        let record = result?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        seen += 1;
        sink(layout.canonicalize(&record, statement));
    }
    Ok(seen)
}

/// Reads and analyzes one statement file. Fails on a missing or unreadable
/// file and on malformed CSV; the caller decides how far that failure
/// spreads.
pub async fn analyze_file(
    source: &StatementSource,
    sink: impl FnMut(TransactionRow),
) -> Result<u64, AnalyzeError> {
    let bytes = tokio::fs::read(&source.path).await?;
    analyze_records(bytes.as_slice(), &source.layout, &source.name, sink)
}
