//! Notepad GUI
//!
//! A single-window plain text editor built with Floem: a menu bar, the
//! Find and Replace panel, the text area and a status bar.

mod keys;
pub mod state;
pub mod surface;
pub mod utils;
pub mod views;

use std::path::PathBuf;
use std::time::Duration;

use floem::Application;
use floem::action::exec_after;
use floem::event::{Event, EventListener};
use floem::keyboard::{Key, NamedKey};
use floem::prelude::*;
use floem::window::WindowConfig;
use notecore::commands::Command;
use notecore::config::EditorConfig;
use notecore::document::APP_TITLE;

use crate::config::load_config;
use state::AppState;
use views::{editor_content, find_panel, menu_bar, menu_dropdown, status_bar};

/// Run the Notepad GUI, optionally opening `initial_file` at startup
pub fn run_app(initial_file: Option<PathBuf>) {
    let config = load_config();
    let size = (config.window.width, config.window.height);

    Application::new()
        .window(
            move |_| app_view(config, initial_file),
            Some(WindowConfig::default().size(size).title(APP_TITLE)),
        )
        .run();
}

fn app_view(config: EditorConfig, initial_file: Option<PathBuf>) -> impl IntoView {
    let state = AppState::new(&config);
    let title = state.title;
    let open_menu = state.open_menu;
    let state_for_keyboard = state.clone();
    let state_for_resize = state.clone();
    let state_for_close = state.clone();

    let content = editor_content(state.clone(), config);

    if let Some(path) = initial_file {
        state.open_path(&path);
    }

    v_stack((
        menu_bar(state.clone()),
        find_panel(state.clone()),
        content,
        status_bar(state.clone()),
        // Last so it paints above the text area
        menu_dropdown(state),
    ))
    .style(|s| s.width_full().height_full())
    .window_title(move || title.get())
    .on_event_cont(EventListener::WindowResized, move |e| {
        if let Event::WindowResized(size) = e {
            state_for_resize.record_window_size(size.width, size.height);
        }
    })
    .on_event_cont(EventListener::WindowClosed, move |_| {
        state_for_close.save_settings();
    })
    .on_event_cont(EventListener::KeyDown, move |e| {
        // Global keyboard shortcuts
        if let Event::KeyDown(key_event) = e {
            let key = &key_event.key.logical_key;
            if *key == Key::Named(NamedKey::Escape) {
                open_menu.set(None);
                return;
            }
            if let Some(command) = keys::app_command_for(key, key_event.modifiers) {
                if command == Command::FindReplace {
                    let visible = state_for_keyboard.find_visible;
                    visible.set(!visible.get_untracked());
                    return;
                }
                // Run after the key event so modal dialogs open outside the handler
                let state = state_for_keyboard.clone();
                exec_after(Duration::from_millis(50), move |_| {
                    state.dispatch(command);
                });
            }
        }
    })
}
