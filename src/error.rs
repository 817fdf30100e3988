//! Error types for ledger operations

use thiserror::Error;

/// Everything that can go wrong while editing or exporting the ledger.
///
/// The `Display` text is what the user sees in the notice dialog.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Name was empty after trimming
    #[error("Bitte einen Artikelnamen eingeben.")]
    EmptyName,
    /// Quantity text was not an integer >= 1
    #[error("Menge muss eine Zahl größer oder gleich 1 sein (Eingabe: \"{0}\").")]
    InvalidQuantity(String),
    /// Delete requested without a selected row
    #[error("Kein Eintrag ausgewählt.")]
    NoSelection,
    /// Selected position does not exist in the ledger
    #[error("Eintrag {index} existiert nicht (Liste hat {len} Einträge).")]
    IndexOutOfRange { index: usize, len: usize },
    /// Export refused, nothing to write
    #[error("Keine Daten zum Speichern vorhanden.")]
    EmptyLedger,
    /// Writing the export file failed
    #[error("Datei konnte nicht gespeichert werden: {0}")]
    Io(#[from] std::io::Error),
}

impl LedgerError {
    /// True for conditions caused by user input rather than the environment.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, LedgerError::Io(_))
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        if !err.is_io_error() {
            return LedgerError::Io(std::io::Error::other(err));
        }
        match err.into_kind() {
            csv::ErrorKind::Io(e) => LedgerError::Io(e),
            kind => LedgerError::Io(std::io::Error::other(format!("{kind:?}"))),
        }
    }
}

/// Result alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
