mod app;
mod dialogs;
mod state;

pub use app::{launch_gui, InventoryApp, WINDOW_TITLE};
pub use dialogs::{Dialogs, NativeDialogs, NoticeLevel};
pub use state::{FormState, TableView};
