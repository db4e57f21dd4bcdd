pub mod analyzer;
pub mod layout;

pub use analyzer::{analyze_file, analyze_records, AnalyzeError, StatementSource};
pub use layout::{ColumnLayout, Field};
