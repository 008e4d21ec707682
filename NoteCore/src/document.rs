//! Document controller: Open / Save / Save As
//!
//! The document only owns its path. Content lives in the [`TextSurface`] and
//! is read or replaced wholesale. Failures are reported through [`Dialogs`]
//! and never change the path or the surface content.

use std::fs;
use std::path::{Path, PathBuf};

use crate::dialogs::Dialogs;
use crate::error::{Error, Result};
use crate::surface::TextSurface;

/// Window title used when no file is associated with the document.
pub const APP_TITLE: &str = "QT Notepad";

/// Read a document as UTF-8 text.
///
/// The handle is closed before returning on every path.
pub fn read_text_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| Error::read(path, e))?;
    String::from_utf8(bytes).map_err(|_| Error::Decode {
        path: path.to_path_buf(),
    })
}

/// Write a document as UTF-8 text, truncating any existing file.
pub fn write_text_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::write(path, e))
}

/// What a document operation ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentOutcome {
    /// The user dismissed the picker.
    Cancelled,
    Opened(PathBuf),
    Saved(PathBuf),
    /// The error has already been reported to the user.
    Failed,
}

impl DocumentOutcome {
    /// Path that should be remembered in the recent files list.
    pub fn touched_path(&self) -> Option<&Path> {
        match self {
            Self::Opened(path) | Self::Saved(path) => Some(path),
            Self::Cancelled | Self::Failed => None,
        }
    }
}

/// The file-backed document shown in the window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    path: Option<PathBuf>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Window title for the current document.
    pub fn title(&self) -> String {
        match self.path.as_deref().and_then(Path::file_name) {
            Some(name) => format!("{} - {APP_TITLE}", name.to_string_lossy()),
            None => APP_TITLE.to_string(),
        }
    }

    /// Pick a file and load it into the surface.
    pub fn open(&mut self, surface: &mut impl TextSurface, dialogs: &mut impl Dialogs) -> DocumentOutcome {
        match dialogs.pick_open_path() {
            Some(path) => self.open_path(&path, surface, dialogs),
            None => DocumentOutcome::Cancelled,
        }
    }

    /// Load `path` into the surface without asking.
    pub fn open_path(
        &mut self,
        path: &Path,
        surface: &mut impl TextSurface,
        dialogs: &mut impl Dialogs,
    ) -> DocumentOutcome {
        match read_text_file(path) {
            Ok(content) => {
                surface.set_text(&content);
                self.path = Some(path.to_path_buf());
                tracing::info!("Opened {} ({} bytes)", path.display(), content.len());
                DocumentOutcome::Opened(path.to_path_buf())
            }
            Err(e) => {
                tracing::warn!("Failed to open {}: {}", path.display(), e);
                dialogs.warn("Error", &format!("Error opening file:\n{e}"));
                DocumentOutcome::Failed
            }
        }
    }

    /// Save to the current path, or fall back to Save As.
    pub fn save(&mut self, surface: &impl TextSurface, dialogs: &mut impl Dialogs) -> DocumentOutcome {
        let Some(path) = self.path.clone() else {
            return self.save_as(surface, dialogs);
        };
        Self::write_reporting(&path, surface, dialogs)
    }

    /// Pick a destination, write to it and adopt it as the document path.
    pub fn save_as(&mut self, surface: &impl TextSurface, dialogs: &mut impl Dialogs) -> DocumentOutcome {
        let Some(path) = dialogs.pick_save_path(self.path()) else {
            return DocumentOutcome::Cancelled;
        };
        let outcome = Self::write_reporting(&path, surface, dialogs);
        if matches!(outcome, DocumentOutcome::Saved(_)) {
            self.path = Some(path);
        }
        outcome
    }

    fn write_reporting(
        path: &Path,
        surface: &impl TextSurface,
        dialogs: &mut impl Dialogs,
    ) -> DocumentOutcome {
        let content = surface.text();
        match write_text_file(path, &content) {
            Ok(()) => {
                tracing::info!("Saved {} ({} bytes)", path.display(), content.len());
                DocumentOutcome::Saved(path.to_path_buf())
            }
            Err(e) => {
                tracing::warn!("Failed to save {}: {}", path.display(), e);
                dialogs.warn("Error", &format!("Error saving file:\n{e}"));
                DocumentOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogs::{NoticeLevel, RecordingDialogs};
    use crate::surface::MemorySurface;

    #[test]
    fn test_title_follows_path() {
        let mut doc = Document::new();
        assert_eq!(doc.title(), "QT Notepad");
        doc.path = Some(PathBuf::from("/tmp/letters/draft.txt"));
        assert_eq!(doc.title(), "draft.txt - QT Notepad");
    }

    #[test]
    fn test_open_cancelled_does_nothing() {
        let mut doc = Document::new();
        let mut surface = MemorySurface::with_text("keep me");
        let mut dialogs = RecordingDialogs::new();

        let outcome = doc.open(&mut surface, &mut dialogs);

        assert_eq!(outcome, DocumentOutcome::Cancelled);
        assert_eq!(surface.text(), "keep me");
        assert!(doc.path().is_none());
        assert!(dialogs.notices().is_empty());
    }

    #[test]
    fn test_open_missing_file_reports_and_keeps_state() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        let existing = dir.path().join("current.txt");

        let mut doc = Document {
            path: Some(existing.clone()),
        };
        let mut surface = MemorySurface::with_text("unsaved work");
        let mut dialogs = RecordingDialogs::new();
        dialogs.answer_open(&missing);

        let outcome = doc.open(&mut surface, &mut dialogs);

        assert_eq!(outcome, DocumentOutcome::Failed);
        assert_eq!(surface.text(), "unsaved work");
        assert_eq!(doc.path(), Some(existing.as_path()));
        let notice = dialogs.last_notice().unwrap();
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert!(notice.message.starts_with("Error opening file:\n"));
    }

    #[test]
    fn test_open_rejects_binary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blob.bin");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x81]).unwrap();

        let err = read_text_file(&path).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn test_open_binary_reports_and_keeps_state() {
        let dir = tempfile::tempdir().unwrap();
        let blob = dir.path().join("image.png");
        fs::write(&blob, [0x89, 0x50, 0x4e, 0x47, 0xff, 0xfe]).unwrap();
        let existing = dir.path().join("letter.txt");

        let mut doc = Document {
            path: Some(existing.clone()),
        };
        let mut surface = MemorySurface::with_text("unsaved work");
        let mut dialogs = RecordingDialogs::new();
        dialogs.answer_open(&blob);

        let outcome = doc.open(&mut surface, &mut dialogs);

        assert_eq!(outcome, DocumentOutcome::Failed);
        assert_eq!(surface.text(), "unsaved work");
        assert_eq!(doc.path(), Some(existing.as_path()));
        let notice = dialogs.last_notice().unwrap();
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(notice.title, "Error");
        assert!(notice.message.starts_with("Error opening file:\n"));
        assert!(notice.message.ends_with("file is not valid UTF-8 text"));
    }

    #[test]
    fn test_save_without_path_delegates_to_save_as() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("new.txt");

        let mut doc = Document::new();
        let surface = MemorySurface::with_text("fresh");
        let mut dialogs = RecordingDialogs::new();
        dialogs.answer_save(&target);

        let outcome = doc.save(&surface, &mut dialogs);

        assert_eq!(outcome, DocumentOutcome::Saved(target.clone()));
        assert_eq!(doc.path(), Some(target.as_path()));
        assert_eq!(fs::read_to_string(&target).unwrap(), "fresh");
    }

    #[test]
    fn test_save_as_failure_keeps_path() {
        let dir = tempfile::tempdir().unwrap();
        let original = dir.path().join("a.txt");
        let unwritable = dir.path().join("missing-dir").join("b.txt");

        let mut doc = Document {
            path: Some(original.clone()),
        };
        let surface = MemorySurface::with_text("text");
        let mut dialogs = RecordingDialogs::new();
        dialogs.answer_save(&unwritable);

        let outcome = doc.save_as(&surface, &mut dialogs);

        assert_eq!(outcome, DocumentOutcome::Failed);
        assert_eq!(doc.path(), Some(original.as_path()));
        assert!(dialogs.last_notice().unwrap().message.starts_with("Error saving file:\n"));
    }
}
