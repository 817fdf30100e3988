//! The inventory ledger.
//!
//! Holds the entries in insertion order and is the single source of truth
//! behind the table shown in the window. The presentation layer forwards
//! its four actions (add, delete selected, clear, export) to the methods
//! here and renders [`Ledger::entries`].

use std::path::Path;

use log::{debug, info, warn};

use crate::error::{LedgerError, LedgerResult};
use crate::export::write_csv;
use crate::models::{Entry, EntryRequest};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    entries: Vec<Entry>,
}

/// Validates a form request and turns it into an [`Entry`].
///
/// All text fields are trimmed. The name must not be empty and the
/// quantity must parse as an integer of at least 1.
pub fn validate_request(request: &EntryRequest) -> LedgerResult<Entry> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(LedgerError::EmptyName);
    }

    let quantity = match request.quantity_text.trim().parse::<u32>() {
        Ok(q) if q >= 1 => q,
        _ => return Err(LedgerError::InvalidQuantity(request.quantity_text.clone())),
    };

    Ok(Entry {
        name: name.to_string(),
        quantity,
        location: request.location.trim().to_string(),
        notes: request.notes.trim().to_string(),
    })
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all quantities, shown in the window footer.
    pub fn total_quantity(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.quantity)).sum()
    }

    /// Validates `request` and appends the resulting entry.
    ///
    /// On error the ledger is unchanged.
    pub fn add(&mut self, request: &EntryRequest) -> LedgerResult<Entry> {
        let entry = match validate_request(request) {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Rejected entry {:?}: {e}", request.name);
                return Err(e);
            }
        };

        debug!("Adding entry {} x{}", entry.name, entry.quantity);
        self.entries.push(entry.clone());
        Ok(entry)
    }

    /// Removes the entry at `index` and returns it.
    ///
    /// `None` means nothing was selected.
    pub fn remove_at(&mut self, index: Option<usize>) -> LedgerResult<Entry> {
        let index = index.ok_or(LedgerError::NoSelection)?;
        if index >= self.entries.len() {
            return Err(LedgerError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }

        let removed = self.entries.remove(index);
        debug!("Removed entry {index}: {}", removed.name);
        Ok(removed)
    }

    /// Drops every entry. Callers confirm with the user first.
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            info!("Clearing {} entries", self.entries.len());
        }
        self.entries.clear();
    }

    /// Rebuilds the ledger from the rows currently on screen.
    ///
    /// Only for the recovery path where a positional delete no longer
    /// matches the ledger. Every row goes through the same validation as
    /// [`Ledger::add`]; if one fails, nothing is replaced.
    pub fn resync_from<'a, I>(&mut self, rows: I) -> LedgerResult<()>
    where
        I: IntoIterator<Item = &'a [String; 4]>,
    {
        let entries = rows
            .into_iter()
            .map(|row| validate_request(&EntryRequest::from_row(row)))
            .collect::<LedgerResult<Vec<_>>>()?;

        warn!(
            "Resynchronised ledger from table: {} -> {} entries",
            self.entries.len(),
            entries.len()
        );
        self.entries = entries;
        Ok(())
    }

    /// Writes all entries to `path` as CSV.
    ///
    /// Refuses with [`LedgerError::EmptyLedger`] when there is nothing to
    /// write; no file is created in that case. The ledger itself is never
    /// modified by an export.
    pub fn export_csv(&self, path: &Path) -> LedgerResult<()> {
        if self.entries.is_empty() {
            return Err(LedgerError::EmptyLedger);
        }
        write_csv(path, &self.entries)
    }
}

#[cfg(test)]
#[path = "ledger_tests.rs"]
mod tests;
