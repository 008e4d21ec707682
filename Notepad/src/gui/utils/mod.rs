//! Shared utilities for the Notepad GUI

pub mod dialogs;

pub use dialogs::RfdDialogs;
