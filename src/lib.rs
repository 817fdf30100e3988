//! Bestandsaufnahme
//!
//! A small desktop form for recording inventory entries (article, quantity,
//! location, notes) and exporting them as a CSV file.

pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod ui;

// Re-export commonly used items
pub use error::{LedgerError, LedgerResult};
pub use export::{suggested_file_name, write_csv};
pub use ledger::{validate_request, Ledger};
pub use models::{Entry, EntryRequest, COLUMN_LABELS};
