//! Command surface: every menu item, its label, menu and shortcut

use std::fmt;

/// Top-level menus, in menu bar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Menu {
    File,
    Edit,
    Insert,
    View,
    Tools,
    Window,
    Settings,
}

impl Menu {
    pub const ALL: [Menu; 7] = [
        Menu::File,
        Menu::Edit,
        Menu::Insert,
        Menu::View,
        Menu::Tools,
        Menu::Window,
        Menu::Settings,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Menu::File => "File",
            Menu::Edit => "Edit",
            Menu::Insert => "Insert",
            Menu::View => "View",
            Menu::Tools => "Tools",
            Menu::Window => "Window",
            Menu::Settings => "Settings",
        }
    }

    /// Menu contents, top to bottom. Tools, Window and Settings are empty.
    pub fn entries(self) -> &'static [MenuEntry] {
        use Command as C;
        use MenuEntry::{Item, Separator};
        match self {
            Menu::File => &[Item(C::Open), Item(C::Save), Item(C::SaveAs), Separator, Item(C::Exit)],
            Menu::Edit => &[
                Item(C::Undo),
                Item(C::Redo),
                Separator,
                Item(C::Cut),
                Item(C::Copy),
                Item(C::Paste),
                Separator,
                Item(C::SelectAll),
                Item(C::FindReplace),
            ],
            Menu::Insert => &[
                Item(C::InsertDateTimeAtCursor),
                Item(C::InsertDateTimeAtTop),
                Item(C::InsertDateTimeAtBottom),
                Separator,
                Item(C::InsertName),
                Item(C::InsertSignature),
            ],
            Menu::View => &[
                Item(C::ToggleFullscreen),
                Item(C::ZoomIn),
                Item(C::ZoomOut),
                Item(C::ToggleCursor),
            ],
            Menu::Tools | Menu::Window | Menu::Settings => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Item(Command),
    Separator,
}

/// A key on a shortcut chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable key, stored lowercase.
    Char(char),
    /// Function key F1..F12
    F(u8),
}

/// A keyboard chord. `ctrl` also stands for Cmd on macOS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shortcut {
    pub ctrl: bool,
    pub shift: bool,
    pub key: Key,
}

impl Shortcut {
    pub const fn ctrl(c: char) -> Self {
        Self {
            ctrl: true,
            shift: false,
            key: Key::Char(c),
        }
    }

    pub const fn ctrl_shift(c: char) -> Self {
        Self {
            ctrl: true,
            shift: true,
            key: Key::Char(c),
        }
    }

    pub const fn function(n: u8) -> Self {
        Self {
            ctrl: false,
            shift: false,
            key: Key::F(n),
        }
    }

    /// Build a chord from raw key input, normalising case and the `+`/`=`
    /// pair (Ctrl+= and Ctrl+Shift+= both mean Zoom In).
    pub fn from_input(ctrl: bool, shift: bool, key: Key) -> Self {
        let key = match key {
            Key::Char('=') => Key::Char('+'),
            Key::Char(c) => Key::Char(c.to_ascii_lowercase()),
            other => other,
        };
        let shift = shift && key != Key::Char('+');
        Self { ctrl, shift, key }
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            f.write_str("Ctrl+")?;
        }
        if self.shift {
            f.write_str("Shift+")?;
        }
        match self.key {
            Key::Char(c) => write!(f, "{}", c.to_ascii_uppercase()),
            Key::F(n) => write!(f, "F{n}"),
        }
    }
}

/// Every user-triggerable command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // File
    Open,
    Save,
    SaveAs,
    Exit,
    // Edit
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
    SelectAll,
    FindReplace,
    // Insert
    InsertDateTimeAtCursor,
    InsertDateTimeAtTop,
    InsertDateTimeAtBottom,
    InsertName,
    InsertSignature,
    // View
    ToggleFullscreen,
    ZoomIn,
    ZoomOut,
    ToggleCursor,
}

impl Command {
    pub const ALL: [Command; 20] = [
        Command::Open,
        Command::Save,
        Command::SaveAs,
        Command::Exit,
        Command::Undo,
        Command::Redo,
        Command::Cut,
        Command::Copy,
        Command::Paste,
        Command::SelectAll,
        Command::FindReplace,
        Command::InsertDateTimeAtCursor,
        Command::InsertDateTimeAtTop,
        Command::InsertDateTimeAtBottom,
        Command::InsertName,
        Command::InsertSignature,
        Command::ToggleFullscreen,
        Command::ZoomIn,
        Command::ZoomOut,
        Command::ToggleCursor,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Command::Open => "Open",
            Command::Save => "Save",
            Command::SaveAs => "Save As",
            Command::Exit => "Exit",
            Command::Undo => "Undo",
            Command::Redo => "Redo",
            Command::Cut => "Cut",
            Command::Copy => "Copy",
            Command::Paste => "Paste",
            Command::SelectAll => "Select All",
            Command::FindReplace => "Find and Replace",
            Command::InsertDateTimeAtCursor => "Insert Date/Time at Cursor",
            Command::InsertDateTimeAtTop => "Insert Date/Time at Top",
            Command::InsertDateTimeAtBottom => "Insert Date/Time at Bottom",
            Command::InsertName => "Insert Name",
            Command::InsertSignature => "Insert Signature",
            Command::ToggleFullscreen => "Toggle Fullscreen",
            Command::ZoomIn => "Zoom In",
            Command::ZoomOut => "Zoom Out",
            Command::ToggleCursor => "Disable Cursor",
        }
    }

    pub fn menu(self) -> Menu {
        match self {
            Command::Open | Command::Save | Command::SaveAs | Command::Exit => Menu::File,
            Command::Undo
            | Command::Redo
            | Command::Cut
            | Command::Copy
            | Command::Paste
            | Command::SelectAll
            | Command::FindReplace => Menu::Edit,
            Command::InsertDateTimeAtCursor
            | Command::InsertDateTimeAtTop
            | Command::InsertDateTimeAtBottom
            | Command::InsertName
            | Command::InsertSignature => Menu::Insert,
            Command::ToggleFullscreen
            | Command::ZoomIn
            | Command::ZoomOut
            | Command::ToggleCursor => Menu::View,
        }
    }

    pub fn shortcut(self) -> Option<Shortcut> {
        let shortcut = match self {
            Command::Open => Shortcut::ctrl('o'),
            Command::Save => Shortcut::ctrl('s'),
            Command::SaveAs => Shortcut::ctrl_shift('s'),
            Command::Exit => Shortcut::ctrl('q'),
            Command::Undo => Shortcut::ctrl('z'),
            Command::Redo => Shortcut::ctrl_shift('z'),
            Command::Cut => Shortcut::ctrl('x'),
            Command::Copy => Shortcut::ctrl('c'),
            Command::Paste => Shortcut::ctrl('v'),
            Command::SelectAll => Shortcut::ctrl('a'),
            Command::FindReplace => Shortcut::ctrl('f'),
            Command::InsertDateTimeAtCursor => Shortcut::ctrl('d'),
            Command::ToggleFullscreen => Shortcut::function(11),
            Command::ZoomIn => Shortcut::ctrl('+'),
            Command::ZoomOut => Shortcut::ctrl('-'),
            Command::ToggleCursor => Shortcut::ctrl('m'),
            Command::InsertDateTimeAtTop
            | Command::InsertDateTimeAtBottom
            | Command::InsertName
            | Command::InsertSignature => return None,
        };
        Some(shortcut)
    }

    /// Checkable items (shown with a tick while active).
    pub fn is_toggle(self) -> bool {
        matches!(self, Command::ToggleFullscreen | Command::ToggleCursor)
    }

    /// Commands the text widget already performs on its own key bindings.
    pub fn is_native_edit(self) -> bool {
        matches!(
            self,
            Command::Undo
                | Command::Redo
                | Command::Cut
                | Command::Copy
                | Command::Paste
                | Command::SelectAll
        )
    }

    pub fn from_shortcut(shortcut: Shortcut) -> Option<Command> {
        Command::ALL
            .into_iter()
            .find(|cmd| cmd.shortcut() == Some(shortcut))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_shortcuts_are_unique() {
        let mut seen = HashSet::new();
        for cmd in Command::ALL {
            if let Some(shortcut) = cmd.shortcut() {
                assert!(seen.insert(shortcut), "duplicate shortcut {shortcut}");
            }
        }
    }

    #[test]
    fn test_every_command_appears_in_its_menu() {
        for cmd in Command::ALL {
            assert!(
                cmd.menu().entries().contains(&MenuEntry::Item(cmd)),
                "{cmd:?} missing from {:?}",
                cmd.menu()
            );
        }
    }

    #[test]
    fn test_from_input_normalises() {
        let zoom = Shortcut::from_input(true, true, Key::Char('='));
        assert_eq!(Command::from_shortcut(zoom), Some(Command::ZoomIn));

        let save_as = Shortcut::from_input(true, true, Key::Char('S'));
        assert_eq!(Command::from_shortcut(save_as), Some(Command::SaveAs));

        let plain = Shortcut::from_input(false, false, Key::Char('s'));
        assert_eq!(Command::from_shortcut(plain), None);
    }

    #[test]
    fn test_shortcut_display() {
        assert_eq!(Shortcut::ctrl_shift('s').to_string(), "Ctrl+Shift+S");
        assert_eq!(Shortcut::function(11).to_string(), "F11");
    }
}
