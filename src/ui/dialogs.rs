//! Modal notices, the clear confirmation and the save prompt.
//!
//! Event handling only talks to the [`Dialogs`] trait so it can run in
//! tests without a desktop session.

use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

pub trait Dialogs {
    /// Shows a blocking notice with a single OK button.
    fn notify(&self, level: NoticeLevel, title: &str, message: &str);

    /// Asks a yes/no question. Returns `true` for yes.
    fn confirm(&self, title: &str, question: &str) -> bool;

    /// Asks where to save the CSV file. `None` if the user cancelled.
    fn choose_save_path(&self, suggested_name: &str) -> Option<PathBuf>;
}

/// Native dialogs via `rfd`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeDialogs;

impl Dialogs for NativeDialogs {
    fn notify(&self, level: NoticeLevel, title: &str, message: &str) {
        let level = match level {
            NoticeLevel::Info => rfd::MessageLevel::Info,
            NoticeLevel::Warning => rfd::MessageLevel::Warning,
            NoticeLevel::Error => rfd::MessageLevel::Error,
        };
        rfd::MessageDialog::new()
            .set_level(level)
            .set_title(title)
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }

    fn confirm(&self, title: &str, question: &str) -> bool {
        let answer = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Warning)
            .set_title(title)
            .set_description(question)
            .set_buttons(rfd::MessageButtons::YesNo)
            .show();
        matches!(answer, rfd::MessageDialogResult::Yes)
    }

    fn choose_save_path(&self, suggested_name: &str) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title("CSV speichern")
            .set_file_name(suggested_name)
            .add_filter("CSV-Datei", &["csv"])
            .save_file()
    }
}
