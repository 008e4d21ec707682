//! Find and Replace panel component

use floem::event::{Event, EventListener, EventPropagation};
use floem::keyboard::{Key, Modifiers, NamedKey};
use floem::prelude::*;

use crate::gui::state::AppState;

fn input_style(s: floem::style::Style) -> floem::style::Style {
    s.width(250.0)
        .padding(6.0)
        .border(1.0)
        .border_color(Color::rgb8(200, 200, 200))
        .border_radius(4.0)
}

/// CMD+F / Ctrl+F
fn is_find_chord(event: &Event) -> bool {
    let Event::KeyDown(key_event) = event else {
        return false;
    };
    let is_cmd_or_ctrl = key_event.modifiers.contains(Modifiers::META)
        || key_event.modifiers.contains(Modifiers::CONTROL);
    let is_f_key = matches!(
        &key_event.key.logical_key,
        Key::Character(c) if c.as_str().eq_ignore_ascii_case("f")
    );
    is_cmd_or_ctrl && is_f_key
}

fn is_named_key(event: &Event, named: NamedKey) -> bool {
    matches!(event, Event::KeyDown(key_event) if key_event.key.logical_key == Key::Named(named))
}

pub fn find_panel(state: AppState) -> impl IntoView {
    let visible = state.find_visible;
    let find_text = state.find_text;
    let replace_text = state.replace_text;

    dyn_container(
        move || visible.get(),
        move |is_visible| {
            if !is_visible {
                return empty().into_any();
            }

            let state_enter = state.clone();
            let state_next = state.clone();
            let state_replace = state.clone();
            let state_replace_all = state.clone();
            let state_close = state.clone();
            let state_keys = state.clone();

            v_stack((
                // Find row
                h_stack((
                    label(|| "Find:").style(|s| s.width(60.0)),
                    {
                        let input = text_input(find_text)
                            .placeholder("Find text...")
                            .style(input_style);
                        // Focus the find input when the panel opens
                        input.id().request_focus();
                        input
                    }
                    .on_event_cont(EventListener::KeyDown, move |e| {
                        // Enter searches forward
                        if is_named_key(e, NamedKey::Enter) {
                            state_enter.find_next();
                        }
                    }),
                    button("Find Next").action(move || state_next.find_next()),
                    empty().style(|s| s.flex_grow(1.0)),
                    button("✕").action(move || state_close.close_find()),
                ))
                .style(|s| s.width_full().gap(8.0).items_center()),
                // Replace row
                h_stack((
                    label(|| "Replace:").style(|s| s.width(60.0)),
                    text_input(replace_text)
                        .placeholder("Replace with...")
                        .style(input_style),
                    button("Replace").action(move || state_replace.replace_one()),
                    button("Replace All").action(move || state_replace_all.replace_all()),
                ))
                .style(|s| s.width_full().gap(8.0).items_center()),
            ))
            .on_event(EventListener::KeyDown, move |e| {
                // CMD+F / Ctrl+F or Escape closes the panel
                if is_find_chord(e) || is_named_key(e, NamedKey::Escape) {
                    state_keys.close_find();
                    return EventPropagation::Stop;
                }
                EventPropagation::Continue
            })
            .style(|s| {
                s.width_full()
                    .padding(12.0)
                    .gap(8.0)
                    .background(Color::rgb8(250, 250, 250))
                    .border_bottom(1.0)
                    .border_color(Color::rgb8(220, 220, 220))
            })
            .into_any()
        },
    )
}
