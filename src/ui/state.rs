use crate::ledger::Ledger;
use crate::models::{Entry, EntryRequest};

/// Text currently typed into the entry form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub quantity: String,
    pub location: String,
    pub notes: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            quantity: "1".to_string(),
            location: String::new(),
            notes: String::new(),
        }
    }
}

impl FormState {
    pub fn to_request(&self) -> EntryRequest {
        EntryRequest::new(
            self.name.clone(),
            self.quantity.clone(),
            self.location.clone(),
            self.notes.clone(),
        )
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Rows shown in the table plus the current selection.
///
/// Kept positionally identical to the ledger. When that can no longer be
/// trusted the ledger is rebuilt from these rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableView {
    rows: Vec<[String; 4]>,
    selected: Option<usize>,
}

impl TableView {
    pub fn from_ledger(ledger: &Ledger) -> Self {
        Self {
            rows: ledger.entries().iter().map(Entry::to_row).collect(),
            selected: None,
        }
    }

    pub fn rows(&self) -> &[[String; 4]] {
        &self.rows
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn push(&mut self, entry: &Entry) {
        self.rows.push(entry.to_row());
    }

    /// Clicking the selected row again deselects it.
    pub fn toggle_selection(&mut self, index: usize) {
        if index >= self.rows.len() {
            return;
        }
        self.selected = if self.selected == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    /// Removes the row at `index` and drops the selection.
    pub fn remove(&mut self, index: usize) -> Option<[String; 4]> {
        self.selected = None;
        (index < self.rows.len()).then(|| self.rows.remove(index))
    }

    pub fn clear(&mut self) {
        self.rows.clear();
        self.selected = None;
    }

    /// True when every row equals the ledger entry at the same position.
    pub fn mirrors(&self, ledger: &Ledger) -> bool {
        self.rows.len() == ledger.len()
            && self
                .rows
                .iter()
                .zip(ledger.entries())
                .all(|(row, entry)| *row == entry.to_row())
    }
}
