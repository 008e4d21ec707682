//! Shared application state for Notepad

mod app;

pub use app::{AppEditor, AppState};
