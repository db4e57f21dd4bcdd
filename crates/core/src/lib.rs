pub mod amount;
pub mod criteria;
pub mod date;
pub mod month;
pub mod row;
pub mod tally;

pub use amount::Amount;
pub use criteria::{Criteria, TableSpec};
pub use date::{StatementDate, STATEMENT_DATE_FORMAT};
pub use month::{Month, StyleKey, YearParity};
pub use row::TransactionRow;
pub use tally::TableTally;
