//! Notepad - a minimal desktop text editor
//!
//! The editing engine lives in [`notecore`]; this crate adds config
//! persistence and, behind the `gui` feature, the floem window.

// Re-export notecore
pub use notecore;

pub mod config;
pub mod error;

// Feature-gated modules
#[cfg(feature = "gui")]
pub mod gui;

pub use error::{Error, Result};
