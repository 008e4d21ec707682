//! Main editor content component

use std::rc::Rc;

use floem::keyboard::Modifiers;
use floem::prelude::*;
use floem::views::editor::Editor;
use floem::views::editor::command::CommandExecuted;
use floem::views::editor::keypress::{default_key_handler, key::KeyInput, press::KeyPress};
use floem::views::editor::text::{SimpleStyling, SimpleStylingBuilder, WrapMethod};
use floem::views::text_editor_keys;
use floem_reactive::create_effect;
use notecore::config::EditorConfig;

use crate::gui::keys::app_command_for;
use crate::gui::state::AppState;
use crate::gui::surface::FloemSurface;
use crate::gui::utils::RfdDialogs;

fn styling(font_size: u32) -> SimpleStyling {
    SimpleStylingBuilder::default()
        .wrap(WrapMethod::EditorWidth)
        .font_size(font_size as usize)
        .build()
}

pub fn editor_content(state: AppState, config: EditorConfig) -> impl IntoView {
    let modified = state.modified;
    let font_size = state.font_size;
    let cursor_visible = state.cursor_visible;

    // App shortcuts are left unhandled so they bubble up to the window
    let key_handler =
        move |editor_sig: RwSignal<Editor>, keypress: &KeyPress, mods: Modifiers| {
            if let KeyInput::Keyboard(key, _) = &keypress.key
                && app_command_for(key, mods).is_some()
            {
                return CommandExecuted::No;
            }
            default_key_handler(editor_sig)(keypress, mods)
        };

    let text_view = text_editor_keys("", key_handler);
    let editor = text_view.editor().clone();
    let initial_size = config.font_size;

    state.attach(notecore::Editor::new(
        FloemSurface::new(editor.clone()),
        RfdDialogs,
        config,
    ));

    // Zoom rebuilds the styling in place so the undo history survives
    create_effect(move |_| {
        let size = font_size.get();
        editor.update_styling(Rc::new(styling(size)));
    });

    text_view
        .styling(styling(initial_size))
        .editor_style(move |s| {
            let caret = if cursor_visible.get() {
                Color::BLACK
            } else {
                Color::TRANSPARENT
            };
            s.hide_gutter(true).cursor_color(caret)
        })
        .placeholder("Start typing...")
        .update(move |_| {
            modified.set(true);
        })
        .style(|s| s.size_full().flex_grow(1.0).padding_left(12.0))
}
