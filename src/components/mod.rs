//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod data_table;
pub mod draft_list;
pub mod draft_page;
pub mod layout;
pub mod players_table;
pub mod quit_dialog;
pub mod reset_dialog;
pub mod settings_dialog;

pub use draft_page::DraftPage;
pub use layout::centered_popup;
pub use quit_dialog::QuitDialog;
pub use settings_dialog::SettingsDialog;
