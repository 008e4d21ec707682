//! Modal dialog collaborator
//!
//! File pickers and acknowledgement dialogs sit behind [`Dialogs`] so the
//! document controller and find/replace engine never touch a windowing system
//! directly.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// File dialog filter: display name plus extensions (without dots).
pub type FileFilter = (&'static str, &'static [&'static str]);

/// Filters offered by the Open picker.
pub const OPEN_FILTERS: &[FileFilter] = &[("Text documents", &["txt"]), ("All files", &["*"])];

/// Filters offered by the Save picker.
pub const SAVE_FILTERS: &[FileFilter] = &[("Text documents", &["txt"])];

/// Native pickers and notifications.
pub trait Dialogs {
    /// Ask for a file to open. `None` when the user cancels.
    fn pick_open_path(&mut self) -> Option<PathBuf>;

    /// Ask for a destination. `current` is the document's present path, if any.
    fn pick_save_path(&mut self, current: Option<&Path>) -> Option<PathBuf>;

    /// Informational acknowledgement ("Text not found.", replace counts).
    fn inform(&mut self, title: &str, message: &str);

    /// Warning acknowledgement (file errors).
    fn warn(&mut self, title: &str, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
}

/// A notification captured by [`RecordingDialogs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

/// Scripted [`Dialogs`] for headless use.
///
/// Picker answers are queued up front; an empty queue behaves like the user
/// pressing Cancel. Every notification is recorded in order.
#[derive(Debug, Default)]
pub struct RecordingDialogs {
    open_answers: VecDeque<PathBuf>,
    save_answers: VecDeque<PathBuf>,
    notices: Vec<Notice>,
}

impl RecordingDialogs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next answer of the Open picker.
    pub fn answer_open(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.open_answers.push_back(path.into());
        self
    }

    /// Queue the next answer of the Save picker.
    pub fn answer_save(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.save_answers.push_back(path.into());
        self
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn last_notice(&self) -> Option<&Notice> {
        self.notices.last()
    }

    /// Drain recorded notices.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    fn record(&mut self, level: NoticeLevel, title: &str, message: &str) {
        self.notices.push(Notice {
            level,
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}

impl Dialogs for RecordingDialogs {
    fn pick_open_path(&mut self) -> Option<PathBuf> {
        self.open_answers.pop_front()
    }

    fn pick_save_path(&mut self, _current: Option<&Path>) -> Option<PathBuf> {
        self.save_answers.pop_front()
    }

    fn inform(&mut self, title: &str, message: &str) {
        self.record(NoticeLevel::Info, title, message);
    }

    fn warn(&mut self, title: &str, message: &str) {
        self.record(NoticeLevel::Warning, title, message);
    }
}
