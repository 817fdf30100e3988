//! CSV export of ledger entries.

use std::fs;
use std::io;
use std::path::Path;

use chrono::NaiveDate;
use csv::{QuoteStyle, WriterBuilder};
use log::{debug, info};
use tempfile::NamedTempFile;

use crate::error::LedgerResult;
use crate::models::Entry;

/// Writes `entries` to `path` as UTF-8 CSV with the German column header.
///
/// The rows go to a temporary file next to the target first, which then
/// replaces `path` in one rename. If anything fails the target is left
/// as it was and the temporary file is removed.
pub fn write_csv(path: &Path, entries: &[Entry]) -> LedgerResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    debug!("Staging CSV export in {}", dir.display());

    let staged = NamedTempFile::new_in(dir)?;
    {
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Necessary)
            .from_writer(staged.as_file());

        for entry in entries {
            writer.serialize(entry)?;
        }
        writer.flush()?;
    }
    staged.as_file().sync_all()?;
    apply_target_permissions(&staged, path)?;
    staged.persist(path).map_err(|e| e.error)?;

    info!("Wrote {} entries to {}", entries.len(), path.display());
    Ok(())
}

/// Gives the staged file the mode the export should end up with.
///
/// An existing target keeps its own permissions; a new file gets 0644
/// instead of the owner-only mode temporary files are created with.
#[cfg(unix)]
fn apply_target_permissions(staged: &NamedTempFile, path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let permissions = match fs::metadata(path) {
        Ok(existing) => existing.permissions(),
        Err(_) => fs::Permissions::from_mode(0o644),
    };
    staged.as_file().set_permissions(permissions)
}

#[cfg(not(unix))]
fn apply_target_permissions(staged: &NamedTempFile, path: &Path) -> io::Result<()> {
    match fs::metadata(path) {
        Ok(existing) => staged.as_file().set_permissions(existing.permissions()),
        Err(_) => Ok(()),
    }
}

/// Default file name offered by the save prompt, e.g. `Inventur_2024-03-01.csv`.
pub fn suggested_file_name(date: NaiveDate) -> String {
    format!("Inventur_{}.csv", date.format("%Y-%m-%d"))
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
