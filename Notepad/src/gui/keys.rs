//! Keyboard chord translation from floem key events

use floem::keyboard::{Key, Modifiers, NamedKey};
use notecore::commands::{Command, Key as ChordKey, Shortcut};

/// Translate a floem key + modifiers into a chord. CMD and Ctrl are treated
/// the same so macOS and other platforms share one shortcut table.
pub fn shortcut_for(key: &Key, mods: Modifiers) -> Option<Shortcut> {
    let chord_key = match key {
        Key::Character(c) => ChordKey::Char(c.as_str().chars().next()?),
        Key::Named(NamedKey::F11) => ChordKey::F(11),
        _ => return None,
    };
    let ctrl = mods.meta() || mods.control();
    Some(Shortcut::from_input(ctrl, mods.shift(), chord_key))
}

/// The command bound to this key, skipping those the text widget performs
/// itself (undo, clipboard, select all).
pub fn app_command_for(key: &Key, mods: Modifiers) -> Option<Command> {
    shortcut_for(key, mods)
        .and_then(Command::from_shortcut)
        .filter(|command| !command.is_native_edit())
}
