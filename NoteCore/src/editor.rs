//! Application context
//!
//! [`Editor`] owns the text surface, the dialog collaborator and all session
//! state (document path, find/replace query, view state, config). The GUI
//! holds exactly one and routes every menu item and shortcut through
//! [`Editor::execute`].

use std::path::Path;

use crate::commands::Command;
use crate::config::{EditorConfig, WindowConfig};
use crate::dialogs::Dialogs;
use crate::document::{Document, DocumentOutcome};
use crate::find_replace::{self, FindReplaceQuery, ReplaceOutcome, SearchOutcome};
use crate::insert::{self, InsertPosition};
use crate::surface::TextSurface;
use crate::view::ViewState;

/// What the host should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Close the window and quit.
    Exit,
    /// Present the Find and Replace panel.
    ShowFindReplace,
}

pub struct Editor<S, D> {
    surface: S,
    dialogs: D,
    document: Document,
    query: FindReplaceQuery,
    view: ViewState,
    config: EditorConfig,
}

impl<S: TextSurface, D: Dialogs> Editor<S, D> {
    pub fn new(surface: S, dialogs: D, config: EditorConfig) -> Self {
        Self {
            surface,
            dialogs,
            document: Document::new(),
            query: FindReplaceQuery::default(),
            view: ViewState::with_font_size(config.font_size),
            config,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn dialogs(&self) -> &D {
        &self.dialogs
    }

    pub fn dialogs_mut(&mut self) -> &mut D {
        &mut self.dialogs
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn query_mut(&mut self) -> &mut FindReplaceQuery {
        &mut self.query
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn title(&self) -> String {
        self.document.title()
    }

    /// Run a menu command or shortcut.
    pub fn execute(&mut self, command: Command) -> Flow {
        tracing::debug!("execute {:?}", command);
        match command {
            Command::Open => {
                self.open();
            }
            Command::Save => {
                self.save();
            }
            Command::SaveAs => {
                self.save_as();
            }
            Command::Exit => return Flow::Exit,
            Command::Undo => self.surface.undo(),
            Command::Redo => self.surface.redo(),
            Command::Cut => self.surface.cut(),
            Command::Copy => self.surface.copy(),
            Command::Paste => self.surface.paste(),
            Command::SelectAll => self.surface.select_all(),
            Command::FindReplace => return Flow::ShowFindReplace,
            Command::InsertDateTimeAtCursor => self.insert_timestamp(InsertPosition::Cursor),
            Command::InsertDateTimeAtTop => self.insert_timestamp(InsertPosition::Top),
            Command::InsertDateTimeAtBottom => self.insert_timestamp(InsertPosition::Bottom),
            Command::InsertName => {
                insert::insert_at(&mut self.surface, &self.config.insert_name, InsertPosition::Cursor);
            }
            Command::InsertSignature => {
                insert::insert_at(&mut self.surface, &self.config.signature, InsertPosition::Cursor);
            }
            Command::ToggleFullscreen => {
                self.view.toggle_fullscreen();
            }
            Command::ZoomIn => {
                self.config.font_size = self.view.zoom_in();
            }
            Command::ZoomOut => {
                self.config.font_size = self.view.zoom_out();
            }
            Command::ToggleCursor => {
                self.view.toggle_cursor_visibility();
            }
        }
        Flow::Continue
    }

    // ==================== Document ====================

    pub fn open(&mut self) -> DocumentOutcome {
        let outcome = self.document.open(&mut self.surface, &mut self.dialogs);
        self.remember(&outcome)
    }

    pub fn open_path(&mut self, path: &Path) -> DocumentOutcome {
        let outcome = self
            .document
            .open_path(path, &mut self.surface, &mut self.dialogs);
        self.remember(&outcome)
    }

    pub fn save(&mut self) -> DocumentOutcome {
        let outcome = self.document.save(&self.surface, &mut self.dialogs);
        self.remember(&outcome)
    }

    pub fn save_as(&mut self) -> DocumentOutcome {
        let outcome = self.document.save_as(&self.surface, &mut self.dialogs);
        self.remember(&outcome)
    }

    fn remember(&mut self, outcome: &DocumentOutcome) -> DocumentOutcome {
        if let Some(path) = outcome.touched_path() {
            self.config.add_recent_file(path);
        }
        outcome.clone()
    }

    pub fn clear_recent_files(&mut self) {
        self.config.clear_recent_files();
    }

    /// Remember the window size so the next launch opens at it.
    pub fn resize_window(&mut self, width: f64, height: f64) {
        self.config.window = WindowConfig { width, height };
    }

    // ==================== Find / Replace ====================

    pub fn find_next(&mut self) -> SearchOutcome {
        find_replace::find_next(&mut self.surface, &mut self.dialogs, &self.query)
    }

    pub fn replace_one(&mut self) -> ReplaceOutcome {
        find_replace::replace_one(&mut self.surface, &mut self.dialogs, &self.query)
    }

    pub fn replace_all(&mut self) -> usize {
        find_replace::replace_all(&mut self.surface, &mut self.dialogs, &self.query)
    }

    // ==================== Insert ====================

    fn insert_timestamp(&mut self, position: InsertPosition) {
        let stamp = insert::now_timestamp();
        insert::insert_at(&mut self.surface, &stamp, position);
    }
}
