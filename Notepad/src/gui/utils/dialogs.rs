//! Native dialogs via rfd
//!
//! File pickers and blocking acknowledgement boxes. All of them run on the UI
//! thread and return once the user dismisses them.

use std::path::{Path, PathBuf};

use notecore::Dialogs;
use notecore::dialogs::{FileFilter, OPEN_FILTERS, SAVE_FILTERS};

const UNTITLED: &str = "Untitled.txt";

#[derive(Debug, Default, Clone, Copy)]
pub struct RfdDialogs;

fn with_filters(mut dialog: rfd::FileDialog, filters: &[FileFilter]) -> rfd::FileDialog {
    for &(name, extensions) in filters {
        dialog = dialog.add_filter(name, extensions);
    }
    dialog
}

fn show_message(level: rfd::MessageLevel, title: &str, message: &str) {
    rfd::MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

impl Dialogs for RfdDialogs {
    fn pick_open_path(&mut self) -> Option<PathBuf> {
        with_filters(rfd::FileDialog::new().set_title("Open file"), OPEN_FILTERS).pick_file()
    }

    fn pick_save_path(&mut self, current: Option<&Path>) -> Option<PathBuf> {
        let mut dialog = with_filters(rfd::FileDialog::new().set_title("Save file"), SAVE_FILTERS);

        // Start next to the current file if there is one
        let filename = current
            .and_then(Path::file_name)
            .and_then(std::ffi::OsStr::to_str)
            .unwrap_or(UNTITLED);
        dialog = dialog.set_file_name(filename);
        if let Some(parent) = current.and_then(Path::parent) {
            dialog = dialog.set_directory(parent);
        }

        dialog.save_file()
    }

    fn inform(&mut self, title: &str, message: &str) {
        show_message(rfd::MessageLevel::Info, title, message);
    }

    fn warn(&mut self, title: &str, message: &str) {
        show_message(rfd::MessageLevel::Warning, title, message);
    }
}
