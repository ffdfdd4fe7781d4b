use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;
use crate::util::unicode;

/// Move the list cursor by `delta`, clamped to the visible rows.
pub(super) fn move_cursor(app: &mut App, delta: i32) {
    let len = app.visible_rows().len();
    if len == 0 {
        app.cursor = 0;
        return;
    }
    let cur = app.cursor.min(len - 1) as i32;
    app.cursor = (cur + delta).clamp(0, len as i32 - 1) as usize;
}

/// Jump the list cursor to the first or last visible row.
pub(super) fn move_cursor_to_boundary(app: &mut App, to_top: bool) {
    let len = app.visible_rows().len();
    app.cursor = if to_top || len == 0 { 0 } else { len - 1 };
}

/// Apply a key to the shared single-line input buffer (Insert/Edit modes).
/// Cursor movement and deletion are grapheme-aware so combined characters
/// never get split. Returns true if the key was consumed.
pub(super) fn handle_buffer_key(app: &mut App, key: KeyEvent) -> bool {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            app.input.insert(app.input_cursor, c);
            app.input_cursor += c.len_utf8();
            true
        }
        (_, KeyCode::Backspace) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.input, app.input_cursor) {
                app.input.replace_range(prev..app.input_cursor, "");
                app.input_cursor = prev;
            }
            true
        }
        (_, KeyCode::Delete) => {
            if let Some(next) = unicode::next_grapheme_boundary(&app.input, app.input_cursor) {
                app.input.replace_range(app.input_cursor..next, "");
            }
            true
        }
        (_, KeyCode::Left) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.input, app.input_cursor) {
                app.input_cursor = prev;
            }
            true
        }
        (_, KeyCode::Right) => {
            if let Some(next) = unicode::next_grapheme_boundary(&app.input, app.input_cursor) {
                app.input_cursor = next;
            }
            true
        }
        (_, KeyCode::Home) => {
            app.input_cursor = 0;
            true
        }
        (_, KeyCode::End) => {
            app.input_cursor = app.input.len();
            true
        }
        _ => false,
    }
}
