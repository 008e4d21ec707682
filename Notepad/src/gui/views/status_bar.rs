//! Window status bar component

use floem::prelude::*;

use crate::gui::state::AppState;

pub fn status_bar(state: AppState) -> impl IntoView {
    let file_path = state.file_path;
    let modified = state.modified;
    let font_size = state.font_size;

    h_stack((
        // File path
        label(move || {
            file_path
                .get()
                .map_or_else(|| "No file loaded".to_string(), |p| p.display().to_string())
        })
        .style(|s| {
            s.color(Color::rgb8(100, 100, 100))
                .font_size(12.0)
                .text_ellipsis()
                .max_width(500.0)
        }),
        empty().style(|s| s.flex_grow(1.0)),
        // Modified indicator
        label(move || if modified.get() { "● Modified" } else { "" }.to_string()).style(|s| {
            s.color(Color::rgb8(255, 152, 0))
                .font_size(12.0)
                .margin_right(12.0)
        }),
        label(move || format!("{} pt", font_size.get()))
            .style(|s| s.color(Color::rgb8(100, 100, 100)).font_size(12.0)),
    ))
    .style(|s| {
        s.width_full()
            .height(28.0)
            .padding_horiz(12.0)
            .items_center()
            .background(Color::rgb8(248, 248, 248))
            .border_top(1.0)
            .border_color(Color::rgb8(220, 220, 220))
    })
}
