//! UI components for the Notepad window

mod content;
mod find_panel;
mod menu_bar;
mod status_bar;

pub use content::editor_content;
pub use find_panel::find_panel;
pub use menu_bar::{menu_bar, menu_dropdown};
pub use status_bar::status_bar;
