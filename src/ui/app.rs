use std::path::PathBuf;

use chrono::Local;
use eframe::{self, egui};
use egui::ViewportBuilder;
use egui_extras::{Column, TableBuilder};
use log::{debug, error, info, warn};

use super::{
    dialogs::{Dialogs, NativeDialogs, NoticeLevel},
    state::{FormState, TableView},
};
use crate::{
    error::LedgerError,
    export::suggested_file_name,
    ledger::Ledger,
    models::COLUMN_LABELS,
};

pub const WINDOW_TITLE: &str = "Bestandsaufnahme";
const WINDOW_SIZE: [f32; 2] = [640.0, 420.0];
const ROW_HEIGHT: f32 = 18.0;

/// User actions collected while drawing, handled after the frame is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Add,
    DeleteSelected,
    Clear,
    Export,
}

pub struct InventoryApp<D: Dialogs = NativeDialogs> {
    ledger: Ledger,
    form: FormState,
    table: TableView,
    dialogs: D,
}

impl Default for InventoryApp<NativeDialogs> {
    fn default() -> Self {
        info!("Initializing InventoryApp");
        Self::with_dialogs(NativeDialogs)
    }
}

impl<D: Dialogs> InventoryApp<D> {
    pub fn with_dialogs(dialogs: D) -> Self {
        Self {
            ledger: Ledger::new(),
            form: FormState::default(),
            table: TableView::default(),
            dialogs,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    fn handle(&mut self, action: Action) {
        debug!("Handling {action:?}");
        match action {
            Action::Add => self.add_entry(),
            Action::DeleteSelected => self.delete_selected(),
            Action::Clear => self.clear_entries(),
            Action::Export => self.export_csv(),
        }
    }

    fn add_entry(&mut self) {
        match self.ledger.add(&self.form.to_request()) {
            Ok(entry) => {
                info!("Added {} x{}", entry.name, entry.quantity);
                self.table.push(&entry);
                self.form.reset();
            }
            Err(e) => {
                self.dialogs
                    .notify(NoticeLevel::Warning, "Eingabe prüfen", &e.to_string());
            }
        }
    }

    fn delete_selected(&mut self) {
        let selected = self.table.selected();
        if let Some(index) = selected {
            self.table.remove(index);
        }

        match self.ledger.remove_at(selected) {
            Ok(entry) => info!("Deleted {}", entry.name),
            Err(LedgerError::NoSelection) => {
                self.dialogs.notify(
                    NoticeLevel::Info,
                    "Auswahl",
                    &LedgerError::NoSelection.to_string(),
                );
                return;
            }
            Err(e) => warn!("Positional delete failed: {e}"),
        }

        if !self.table.mirrors(&self.ledger) {
            self.resync_ledger();
        }
    }

    /// Rebuilds the ledger from the table after the two went out of step.
    fn resync_ledger(&mut self) {
        if let Err(e) = self.ledger.resync_from(self.table.rows()) {
            error!("Could not rebuild ledger from table: {e}");
            self.table = TableView::from_ledger(&self.ledger);
            self.dialogs
                .notify(NoticeLevel::Error, "Auswahl", &e.to_string());
        }
    }

    fn clear_entries(&mut self) {
        if self
            .dialogs
            .confirm("Bestätigen", "Alle Einträge wirklich löschen?")
        {
            self.table.clear();
            self.ledger.clear();
        } else {
            debug!("Clear cancelled by user");
        }
    }

    fn export_csv(&mut self) {
        if self.ledger.is_empty() {
            self.dialogs.notify(
                NoticeLevel::Info,
                "Export",
                &LedgerError::EmptyLedger.to_string(),
            );
            return;
        }

        let suggested = suggested_file_name(Local::now().date_naive());
        let Some(path) = self.dialogs.choose_save_path(&suggested) else {
            debug!("Save dialog cancelled by user");
            return;
        };
        let path = with_csv_extension(path);

        match self.ledger.export_csv(&path) {
            Ok(()) => self.dialogs.notify(
                NoticeLevel::Info,
                "Export",
                &format!("Datei gespeichert: {}", path.display()),
            ),
            Err(e) => {
                error!("Export to {} failed: {e}", path.display());
                let level = if e.is_user_error() {
                    NoticeLevel::Info
                } else {
                    NoticeLevel::Error
                };
                self.dialogs.notify(level, "Export", &e.to_string());
            }
        }
    }

    fn show_form(&mut self, ui: &mut egui::Ui) -> Option<Action> {
        let mut action = None;
        ui.group(|ui| {
            ui.label(egui::RichText::new("Neuer Eintrag").strong());
            egui::Grid::new("entry_form")
                .num_columns(5)
                .spacing([6.0, 6.0])
                .show(ui, |ui| {
                    for label in COLUMN_LABELS {
                        ui.label(label);
                    }
                    ui.end_row();

                    let fields = [
                        (&mut self.form.name, 150.0),
                        (&mut self.form.quantity, 50.0),
                        (&mut self.form.location, 110.0),
                        (&mut self.form.notes, 160.0),
                    ];
                    let mut submitted = false;
                    for (text, width) in fields {
                        let response =
                            ui.add(egui::TextEdit::singleline(text).desired_width(width));
                        submitted |= response.lost_focus()
                            && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    }

                    if ui.button("Hinzufügen").clicked() || submitted {
                        action = Some(Action::Add);
                    }
                    ui.end_row();
                });
        });
        action
    }

    fn show_actions(&self, ui: &mut egui::Ui) -> Option<Action> {
        let mut action = None;
        ui.horizontal(|ui| {
            if ui.button("Ausgewählten Eintrag löschen").clicked() {
                action = Some(Action::DeleteSelected);
            }
            if ui.button("Liste leeren").clicked() {
                action = Some(Action::Clear);
            }
            ui.label(format!(
                "{} Einträge, Gesamtmenge {}",
                self.ledger.len(),
                self.ledger.total_quantity()
            ));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Als CSV speichern").clicked() {
                    action = Some(Action::Export);
                }
            });
        });
        action
    }

    fn show_table(ui: &mut egui::Ui, table: &mut TableView) {
        let selected = table.selected();
        let mut clicked = None;

        TableBuilder::new(ui)
            .striped(true)
            .sense(egui::Sense::click())
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::initial(170.0))
            .column(Column::initial(70.0))
            .column(Column::initial(120.0))
            .column(Column::remainder())
            .header(20.0, |mut header| {
                for label in COLUMN_LABELS {
                    header.col(|ui| {
                        ui.strong(label);
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, table.rows().len(), |mut row| {
                    let index = row.index();
                    row.set_selected(selected == Some(index));
                    for cell in &table.rows()[index] {
                        row.col(|ui| {
                            ui.label(cell);
                        });
                    }
                    if row.response().clicked() {
                        clicked = Some(index);
                    }
                });
            });

        if let Some(index) = clicked {
            table.toggle_selection(index);
        }
    }
}

impl<D: Dialogs> eframe::App for InventoryApp<D> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut action = None;

        egui::TopBottomPanel::top("form").show(ctx, |ui| {
            ui.add_space(6.0);
            action = action.or(self.show_form(ui));
            ui.add_space(6.0);
        });

        egui::TopBottomPanel::bottom("actions").show(ctx, |ui| {
            ui.add_space(6.0);
            action = action.or(self.show_actions(ui));
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            Self::show_table(ui, &mut self.table);
        });

        if let Some(action) = action {
            self.handle(action);
        }
    }
}

/// Appends `.csv` when the chosen file name has no extension.
fn with_csv_extension(mut path: PathBuf) -> PathBuf {
    if path.extension().is_none() {
        path.set_extension("csv");
    }
    path
}

pub fn launch_gui() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(WINDOW_SIZE)
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(InventoryApp::<NativeDialogs>::default()))),
    )
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
