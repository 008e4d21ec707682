//! [`TextSurface`] backed by floem's text editor
//!
//! Content, cursor, clipboard and undo history all stay inside the floem
//! `Editor`; this wrapper only translates between byte ranges and floem
//! selections.

use std::ops::Range;

use floem::keyboard::Modifiers;
use floem::prelude::*;
use floem::views::editor::Editor;
use floem::views::editor::command::Command as EditorCommand;
use floem::views::editor::core::command::EditCommand;
use floem::views::editor::core::cursor::{Cursor, CursorMode};
use floem::views::editor::core::editor::EditType;
use floem::views::editor::core::selection::Selection;
use floem::views::editor::text::Document;
use notecore::TextSurface;

pub struct FloemSurface {
    editor: Editor,
}

impl FloemSurface {
    pub fn new(editor: Editor) -> Self {
        Self { editor }
    }

    fn run(&self, command: EditCommand) {
        let doc = self.editor.doc();
        doc.run_command(
            &self.editor,
            &EditorCommand::Edit(command),
            None,
            Modifiers::empty(),
        );
    }

    /// Programmatic edits are their own undo step. `InsertChars` would merge
    /// them into the undo group of the surrounding typing.
    fn replace_range(&self, range: Range<usize>, text: &str) {
        let doc = self.editor.doc();
        doc.edit_single(
            Selection::region(range.start, range.end),
            text,
            EditType::Other,
        );
    }
}

impl TextSurface for FloemSurface {
    fn text(&self) -> String {
        self.editor.doc().text().to_string()
    }

    fn set_text(&mut self, text: &str) {
        let len = self.editor.doc().text().len();
        self.replace_range(0..len, text);
        self.move_to_start();
    }

    fn selection(&self) -> Range<usize> {
        let cursor = self.editor.cursor.get_untracked();
        let offset = cursor.offset();
        match &cursor.mode {
            CursorMode::Insert(selection) => selection
                .first()
                .map_or(offset..offset, |region| region.min()..region.max()),
            _ => offset..offset,
        }
    }

    fn set_selection(&mut self, range: Range<usize>) {
        self.editor.cursor.set(Cursor::new(
            CursorMode::Insert(Selection::region(range.start, range.end)),
            None,
            None,
        ));
    }

    fn insert_text(&mut self, text: &str) {
        let range = self.selection();
        self.replace_range(range.clone(), text);
        let caret = range.start + text.len();
        self.set_selection(caret..caret);
    }

    fn undo(&mut self) {
        self.run(EditCommand::Undo);
    }

    fn redo(&mut self) {
        self.run(EditCommand::Redo);
    }

    fn cut(&mut self) {
        self.run(EditCommand::ClipboardCut);
    }

    fn copy(&mut self) {
        self.run(EditCommand::ClipboardCopy);
    }

    fn paste(&mut self) {
        self.run(EditCommand::ClipboardPaste);
    }
}
