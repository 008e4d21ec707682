//! In-window menu bar and its dropdowns

use std::path::PathBuf;

use floem::AnyView;
use floem::prelude::*;
use notecore::commands::{Command, Menu, MenuEntry};

use crate::gui::state::AppState;

const MENU_BAR_HEIGHT: f64 = 30.0;
const MENU_BUTTON_WIDTH: f64 = 72.0;
const DROPDOWN_WIDTH: f64 = 280.0;

/// Left edge of a menu's button in the bar.
fn menu_offset(menu: Menu) -> f64 {
    let mut left = 4.0;
    for m in Menu::ALL {
        if m == menu {
            break;
        }
        left += MENU_BUTTON_WIDTH;
    }
    left
}

pub fn menu_bar(state: AppState) -> impl IntoView {
    let open_menu = state.open_menu;

    h_stack_from_iter(Menu::ALL.into_iter().map(move |menu| menu_button(menu, open_menu)))
        .style(|s| {
            s.width_full()
                .height(MENU_BAR_HEIGHT)
                .padding_horiz(4.0)
                .items_center()
                .background(Color::rgb8(245, 245, 245))
                .border_bottom(1.0)
                .border_color(Color::rgb8(220, 220, 220))
        })
}

fn menu_button(menu: Menu, open_menu: RwSignal<Option<Menu>>) -> impl IntoView {
    button(menu.title())
        .style(move |s| {
            let is_open = open_menu.get() == Some(menu);
            let s = s
                .width(MENU_BUTTON_WIDTH)
                .height(24.0)
                .padding_horiz(8.0)
                .border(0.0)
                .border_radius(4.0)
                .font_size(13.0)
                .justify_center();

            if is_open {
                s.background(Color::rgb8(33, 150, 243)).color(Color::WHITE)
            } else {
                s.background(Color::TRANSPARENT)
                    .color(Color::rgb8(40, 40, 40))
                    .hover(|s| s.background(Color::rgb8(225, 225, 225)))
            }
        })
        .action(move || {
            // Clicking the open menu again closes it
            let next = if open_menu.get_untracked() == Some(menu) {
                None
            } else {
                Some(menu)
            };
            open_menu.set(next);
        })
}

/// Dropdown for the open menu, drawn over the window content.
pub fn menu_dropdown(state: AppState) -> impl IntoView {
    let open_menu = state.open_menu;

    dyn_container(
        move || open_menu.get(),
        move |maybe_menu| {
            let Some(menu) = maybe_menu else {
                return empty().into_any();
            };
            let left = menu_offset(menu);

            let mut rows: Vec<AnyView> = menu
                .entries()
                .iter()
                .map(|entry| match entry {
                    MenuEntry::Item(command) => menu_item(*command, state.clone()).into_any(),
                    MenuEntry::Separator => separator().into_any(),
                })
                .collect();

            if menu == Menu::File {
                rows.push(separator().into_any());
                rows.push(recent_files_section(state.clone()).into_any());
            }
            if rows.is_empty() {
                rows.push(
                    label(|| "(empty)")
                        .style(|s| {
                            s.padding_horiz(12.0)
                                .padding_vert(6.0)
                                .font_size(12.0)
                                .color(Color::rgb8(150, 150, 150))
                        })
                        .into_any(),
                );
            }

            v_stack_from_iter(rows)
                .style(move |s| {
                    s.absolute()
                        .inset_top(MENU_BAR_HEIGHT)
                        .inset_left(left)
                        .width(DROPDOWN_WIDTH)
                        .padding_vert(4.0)
                        .background(Color::WHITE)
                        .border(1.0)
                        .border_color(Color::rgb8(200, 200, 200))
                        .border_radius(4.0)
                        .z_index(10)
                })
                .into_any()
        },
    )
}

fn menu_item(command: Command, state: AppState) -> impl IntoView {
    let fullscreen = state.fullscreen;
    let cursor_visible = state.cursor_visible;
    let shortcut = command
        .shortcut()
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default();

    h_stack((
        // Tick for checkable items
        label(move || {
            // The cursor item reads "Disable Cursor", so it is ticked while hidden
            let checked = command.is_toggle()
                && match command {
                    Command::ToggleFullscreen => fullscreen.get(),
                    _ => !cursor_visible.get(),
                };
            if checked { "✓" } else { "" }.to_string()
        })
        .style(|s| s.width(18.0).font_size(12.0)),
        label(move || command.label()).style(|s| s.font_size(13.0)),
        empty().style(|s| s.flex_grow(1.0)),
        label(move || shortcut.clone())
            .style(|s| s.font_size(12.0).color(Color::rgb8(130, 130, 130))),
    ))
    .on_click_stop(move |_| {
        state.dispatch(command);
    })
    .style(|s| {
        s.width_full()
            .padding_horiz(8.0)
            .padding_vert(5.0)
            .items_center()
            .hover(|s| s.background(Color::rgb8(230, 240, 250)))
    })
}

fn recent_files_section(state: AppState) -> impl IntoView {
    let recent_files = state.recent_files;

    dyn_container(
        move || recent_files.get(),
        move |files| {
            if files.is_empty() {
                return label(|| "No recent files")
                    .style(|s| {
                        s.padding_horiz(26.0)
                            .padding_vert(5.0)
                            .font_size(12.0)
                            .color(Color::rgb8(150, 150, 150))
                    })
                    .into_any();
            }
            let mut rows: Vec<AnyView> = files
                .into_iter()
                .map(|path| recent_file_item(path, state.clone()).into_any())
                .collect();
            rows.push(clear_recent_item(state.clone()).into_any());

            v_stack_from_iter(rows)
                .style(|s| s.width_full())
                .into_any()
        },
    )
}

fn recent_file_item(path: PathBuf, state: AppState) -> impl IntoView {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    label(move || name.clone())
        .on_click_stop(move |_| {
            state.open_path(&path);
        })
        .style(|s| {
            s.width_full()
                .padding_left(26.0)
                .padding_vert(5.0)
                .font_size(12.0)
                .text_ellipsis()
                .hover(|s| s.background(Color::rgb8(230, 240, 250)))
        })
}

fn clear_recent_item(state: AppState) -> impl IntoView {
    label(|| "Clear Recent Files")
        .on_click_stop(move |_| {
            state.clear_recent_files();
        })
        .style(|s| {
            s.width_full()
                .padding_left(26.0)
                .padding_vert(5.0)
                .font_size(12.0)
                .color(Color::rgb8(100, 100, 100))
                .hover(|s| s.background(Color::rgb8(230, 240, 250)))
        })
}

fn separator() -> impl IntoView {
    empty().style(|s| {
        s.width_full()
            .height(1.0)
            .background(Color::rgb8(220, 220, 220))
            .margin_vert(4.0)
    })
}
