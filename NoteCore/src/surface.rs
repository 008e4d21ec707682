//! Text surface abstraction
//!
//! The editing buffer, cursor, undo history and clipboard belong to the GUI
//! toolkit's text widget. Everything in `NoteCore` talks to that widget through
//! [`TextSurface`], so the controllers can run against [`MemorySurface`] in
//! tests and against the real widget in the app.
//!
//! Offsets are byte offsets into the UTF-8 content and always sit on char
//! boundaries.

use std::ops::Range;

/// Capability interface over an editable text widget.
pub trait TextSurface {
    /// Full document content.
    fn text(&self) -> String;

    /// Replace the full document content. The cursor moves to the start.
    fn set_text(&mut self, text: &str);

    /// Current selection. An empty range is a plain caret.
    fn selection(&self) -> Range<usize>;

    /// Move the cursor / selection.
    fn set_selection(&mut self, range: Range<usize>);

    /// Insert `text` at the cursor, replacing the selection if there is one.
    /// The caret ends up after the inserted text.
    fn insert_text(&mut self, text: &str);

    fn undo(&mut self);
    fn redo(&mut self);
    fn cut(&mut self);
    fn copy(&mut self);
    fn paste(&mut self);

    fn select_all(&mut self) {
        let len = self.text().len();
        self.set_selection(0..len);
    }

    fn move_to_start(&mut self) {
        self.set_selection(0..0);
    }

    fn has_selection(&self) -> bool {
        !self.selection().is_empty()
    }

    fn selected_text(&self) -> String {
        let text = self.text();
        text.get(self.selection()).unwrap_or_default().to_string()
    }

    /// Forward literal search starting after the current selection.
    ///
    /// On a hit the match becomes the selection and `true` is returned. On a
    /// miss the cursor is left where it was.
    fn find_forward(&mut self, needle: &str) -> bool {
        if needle.is_empty() {
            return false;
        }
        let text = self.text();
        let from = self.selection().end.min(text.len());
        let Some(offset) = text.get(from..).and_then(|rest| rest.find(needle)) else {
            return false;
        };
        let start = from + offset;
        self.set_selection(start..start + needle.len());
        true
    }
}

/// In-memory [`TextSurface`] with snapshot undo and a private clipboard.
///
/// Used as the headless surface for tests and scripted sessions.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    text: String,
    selection: Range<usize>,
    clipboard: String,
    undo_stack: Vec<(String, Range<usize>)>,
    redo_stack: Vec<(String, Range<usize>)>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface pre-filled with `text`, caret at the start.
    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Self::default()
        }
    }

    pub fn clipboard(&self) -> &str {
        &self.clipboard
    }

    fn snapshot(&mut self) {
        self.undo_stack
            .push((self.text.clone(), self.selection.clone()));
        self.redo_stack.clear();
    }

    fn clamp(&self, offset: usize) -> usize {
        let mut offset = offset.min(self.text.len());
        while !self.text.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    }
}

impl TextSurface for MemorySurface {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.snapshot();
        self.text = text.to_string();
        self.selection = 0..0;
    }

    fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    fn set_selection(&mut self, range: Range<usize>) {
        let start = self.clamp(range.start.min(range.end));
        let end = self.clamp(range.start.max(range.end));
        self.selection = start..end;
    }

    fn insert_text(&mut self, text: &str) {
        self.snapshot();
        let range = self.selection.clone();
        self.text.replace_range(range.clone(), text);
        let caret = range.start + text.len();
        self.selection = caret..caret;
    }

    fn undo(&mut self) {
        if let Some((text, selection)) = self.undo_stack.pop() {
            let current = std::mem::replace(&mut self.text, text);
            self.redo_stack
                .push((current, std::mem::replace(&mut self.selection, selection)));
        }
    }

    fn redo(&mut self) {
        if let Some((text, selection)) = self.redo_stack.pop() {
            let current = std::mem::replace(&mut self.text, text);
            self.undo_stack
                .push((current, std::mem::replace(&mut self.selection, selection)));
        }
    }

    fn cut(&mut self) {
        if self.has_selection() {
            self.clipboard = self.selected_text();
            self.insert_text("");
        }
    }

    fn copy(&mut self) {
        if self.has_selection() {
            self.clipboard = self.selected_text();
        }
    }

    fn paste(&mut self) {
        let clip = self.clipboard.clone();
        self.insert_text(&clip);
    }
}
