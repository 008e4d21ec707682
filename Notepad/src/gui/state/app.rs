//! Global application state
//!
//! The [`AppEditor`] is shared by every view through `Rc<RefCell<..>>`; the
//! signals mirror the parts of it the views render. After each command the
//! signals are re-synced from the editor.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use floem::prelude::*;
use notecore::commands::{Command, Menu};
use notecore::config::EditorConfig;
use notecore::document::DocumentOutcome;
use notecore::{Editor, Flow};

use crate::config::save_config;
use crate::gui::surface::FloemSurface;
use crate::gui::utils::RfdDialogs;

pub type AppEditor = Editor<FloemSurface, RfdDialogs>;

/// Global application state
#[derive(Clone)]
pub struct AppState {
    editor: Rc<RefCell<Option<AppEditor>>>,
    /// Menu whose dropdown is open
    pub open_menu: RwSignal<Option<Menu>>,
    /// Whether the Find and Replace panel is shown
    pub find_visible: RwSignal<bool>,
    pub find_text: RwSignal<String>,
    pub replace_text: RwSignal<String>,
    pub title: RwSignal<String>,
    pub file_path: RwSignal<Option<PathBuf>>,
    pub modified: RwSignal<bool>,
    pub font_size: RwSignal<u32>,
    pub fullscreen: RwSignal<bool>,
    pub cursor_visible: RwSignal<bool>,
    /// Most recent first
    pub recent_files: RwSignal<Vec<PathBuf>>,
}

impl AppState {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            editor: Rc::new(RefCell::new(None)),
            open_menu: RwSignal::new(None),
            find_visible: RwSignal::new(false),
            find_text: RwSignal::new(String::new()),
            replace_text: RwSignal::new(String::new()),
            title: RwSignal::new(notecore::document::APP_TITLE.to_string()),
            file_path: RwSignal::new(None),
            modified: RwSignal::new(false),
            font_size: RwSignal::new(config.font_size),
            fullscreen: RwSignal::new(false),
            cursor_visible: RwSignal::new(true),
            recent_files: RwSignal::new(config.recent_files.clone()),
        }
    }

    /// Install the editor once the text view exists.
    pub fn attach(&self, editor: AppEditor) {
        *self.editor.borrow_mut() = Some(editor);
        self.sync();
    }

    /// Run `f` against the editor. `None` if it is not attached yet or is
    /// already borrowed by an outer command (modal dialogs can re-enter).
    fn with_editor<R>(&self, f: impl FnOnce(&mut AppEditor) -> R) -> Option<R> {
        let Ok(mut guard) = self.editor.try_borrow_mut() else {
            tracing::warn!("Editor busy, ignoring re-entrant command");
            return None;
        };
        guard.as_mut().map(f)
    }

    /// Run a menu command or shortcut.
    pub fn dispatch(&self, command: Command) {
        self.open_menu.set(None);

        let result = self.with_editor(|ed| {
            let before = ed.config().clone();
            // Document commands are run directly so their outcome is visible
            let (flow, outcome) = match command {
                Command::Open => (Flow::Continue, Some(ed.open())),
                Command::Save => (Flow::Continue, Some(ed.save())),
                Command::SaveAs => (Flow::Continue, Some(ed.save_as())),
                other => (ed.execute(other), None),
            };
            let config_changed = ed.config() != &before;
            (flow, outcome, config_changed, ed.config().clone())
        });
        let Some((flow, outcome, config_changed, config)) = result else {
            return;
        };

        if outcome.as_ref().and_then(DocumentOutcome::touched_path).is_some() {
            self.modified.set(false);
        }
        if config_changed {
            persist(&config);
        }
        self.sync();

        match flow {
            Flow::Continue => {}
            Flow::ShowFindReplace => self.find_visible.set(true),
            Flow::Exit => {
                persist(&config);
                floem::quit_app();
            }
        }
    }

    /// Open a file from the recent list or the command line.
    pub fn open_path(&self, path: &Path) {
        self.open_menu.set(None);
        let result = self.with_editor(|ed| (ed.open_path(path), ed.config().clone()));
        if let Some((outcome, config)) = result {
            if let DocumentOutcome::Opened(_) = outcome {
                self.modified.set(false);
                persist(&config);
            }
            self.sync();
        }
    }

    pub fn clear_recent_files(&self) {
        self.open_menu.set(None);
        if let Some(config) = self.with_editor(|ed| {
            ed.clear_recent_files();
            ed.config().clone()
        }) {
            persist(&config);
            self.sync();
        }
    }

    /// Track the live window size. Written to disk on close.
    pub fn record_window_size(&self, width: f64, height: f64) {
        self.with_editor(|ed| ed.resize_window(width, height));
    }

    /// Write the current config to disk.
    pub fn save_settings(&self) {
        if let Some(config) = self.with_editor(|ed| ed.config().clone()) {
            persist(&config);
        }
    }

    // ==================== Find / Replace ====================

    fn load_query(&self, ed: &mut AppEditor) {
        let query = ed.query_mut();
        query.find_text = self.find_text.get_untracked();
        query.replace_text = self.replace_text.get_untracked();
    }

    pub fn find_next(&self) {
        self.with_editor(|ed| {
            self.load_query(ed);
            ed.find_next();
        });
    }

    pub fn replace_one(&self) {
        self.with_editor(|ed| {
            self.load_query(ed);
            ed.replace_one();
        });
    }

    pub fn replace_all(&self) {
        self.with_editor(|ed| {
            self.load_query(ed);
            ed.replace_all();
        });
    }

    pub fn close_find(&self) {
        self.find_visible.set(false);
    }

    // ==================== Sync ====================

    /// Copy editor state into the signals.
    fn sync(&self) {
        let Ok(guard) = self.editor.try_borrow() else {
            return;
        };
        let Some(ed) = guard.as_ref() else {
            return;
        };

        let view = *ed.view();
        if view.fullscreen != self.fullscreen.get_untracked() {
            floem::action::set_window_maximized(view.fullscreen);
        }

        self.title.set(ed.title());
        self.file_path.set(ed.document().path().map(Path::to_path_buf));
        self.font_size.set(view.font_size);
        self.fullscreen.set(view.fullscreen);
        self.cursor_visible.set(view.cursor_visible);
        self.recent_files.set(ed.config().recent_files.clone());
    }
}

fn persist(config: &EditorConfig) {
    if let Err(e) = save_config(config) {
        tracing::warn!("Failed to save config: {}", e);
    }
}
