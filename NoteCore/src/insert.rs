//! Insertion helpers: date/time stamps and boilerplate text

use chrono::{Local, NaiveDateTime};

use crate::surface::TextSurface;

/// `DD-MM-YYYY HH:MM:SS`, independent of locale.
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

pub const DEFAULT_NAME: &str = "Your Name Here";
pub const DEFAULT_SIGNATURE: &str = "\n\n--\nBest regards,\nYour Name";

/// Where inserted text goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    /// At the caret, replacing any selection.
    Cursor,
    /// Before the whole document, followed by a newline.
    Top,
    /// After the whole document, preceded by a newline.
    Bottom,
}

pub fn format_timestamp(at: &NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Current local time as a timestamp.
pub fn now_timestamp() -> String {
    format_timestamp(&Local::now().naive_local())
}

pub fn prepend_line(content: &str, line: &str) -> String {
    format!("{line}\n{content}")
}

pub fn append_line(content: &str, line: &str) -> String {
    format!("{content}\n{line}")
}

/// Insert `text` into the surface at `position`.
pub fn insert_at(surface: &mut impl TextSurface, text: &str, position: InsertPosition) {
    match position {
        InsertPosition::Cursor => surface.insert_text(text),
        InsertPosition::Top => {
            let content = surface.text();
            surface.set_text(&prepend_line(&content, text));
        }
        InsertPosition::Bottom => {
            let content = surface.text();
            surface.set_text(&append_line(&content, text));
        }
    }
}
