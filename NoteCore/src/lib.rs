//! # NoteCore
//!
//! The headless engine behind Notepad, a single-window plain text editor.
//!
//! - **Documents** - Open / Save / Save As of raw UTF-8 text files
//! - **Find/Replace** - literal next-match search with one wraparound, replace-all with counts
//! - **Insertion** - date/time stamps, name and signature boilerplate
//! - **Commands** - the full menu and shortcut table, dispatched through [`Editor`]
//!
//! The text buffer itself belongs to the GUI toolkit and is reached through
//! [`TextSurface`]; pickers and message boxes go through [`Dialogs`].
//!
//! ## Quick Start
//!
//! ```
//! use notecore::prelude::*;
//!
//! let mut editor = Editor::new(
//!     MemorySurface::with_text("foo bar foo"),
//!     RecordingDialogs::new(),
//!     EditorConfig::default(),
//! );
//! *editor.query_mut() = FindReplaceQuery::new("foo", "baz");
//! assert_eq!(editor.replace_all(), 2);
//! assert_eq!(editor.surface().text(), "baz bar baz");
//! ```

pub mod commands;
pub mod config;
pub mod dialogs;
pub mod document;
pub mod editor;
pub mod error;
pub mod find_replace;
pub mod insert;
pub mod surface;
pub mod view;

// Re-exports for convenience
pub use dialogs::Dialogs;
pub use editor::{Editor, Flow};
pub use error::{Error, Result};
pub use surface::TextSurface;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::commands::{Command, Key, Menu, MenuEntry, Shortcut};
    pub use crate::config::EditorConfig;
    pub use crate::dialogs::{Dialogs, Notice, NoticeLevel, RecordingDialogs};
    pub use crate::document::{Document, DocumentOutcome};
    pub use crate::editor::{Editor, Flow};
    pub use crate::error::{Error, Result};
    pub use crate::find_replace::{FindReplaceQuery, SearchOutcome};
    pub use crate::insert::InsertPosition;
    pub use crate::surface::{MemorySurface, TextSurface};
    pub use crate::view::ViewState;
}
