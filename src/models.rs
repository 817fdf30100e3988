use serde::{Deserialize, Serialize};

/// Column labels shared by the table header and the CSV header.
pub const COLUMN_LABELS: [&str; 4] = ["Artikel", "Menge", "Standort", "Notizen"];

/// One inventory record. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "Artikel")]
    pub name: String,

    #[serde(rename = "Menge")]
    pub quantity: u32,

    #[serde(rename = "Standort")]
    pub location: String,

    #[serde(rename = "Notizen")]
    pub notes: String,
}

impl Entry {
    /// Display strings in column order.
    pub fn to_row(&self) -> [String; 4] {
        [
            self.name.clone(),
            self.quantity.to_string(),
            self.location.clone(),
            self.notes.clone(),
        ]
    }
}

/// Raw form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryRequest {
    pub name: String,
    pub quantity_text: String,
    pub location: String,
    pub notes: String,
}

impl EntryRequest {
    pub fn new(
        name: impl Into<String>,
        quantity_text: impl Into<String>,
        location: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity_text: quantity_text.into(),
            location: location.into(),
            notes: notes.into(),
        }
    }

    /// Builds a request from a displayed table row.
    pub fn from_row(row: &[String; 4]) -> Self {
        let [name, quantity_text, location, notes] = row.clone();
        Self {
            name,
            quantity_text,
            location,
            notes,
        }
    }
}
