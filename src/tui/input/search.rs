use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

/// The query filters the list live on every keystroke. Enter commits it as
/// the active filter; Esc abandons the query and the previous filter (if
/// any) stays in force.
pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => {
            app.search_input.clear();
            app.mode = Mode::Navigate;
            app.clamp_cursor();
        }
        (_, KeyCode::Enter) => {
            let term = app.search_input.trim().to_string();
            app.filter = if term.is_empty() { None } else { Some(term) };
            app.search_input.clear();
            app.mode = Mode::Navigate;
            app.clamp_cursor();
        }
        (_, KeyCode::Backspace) => {
            app.search_input.pop();
            app.clamp_cursor();
        }
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            app.search_input.push(c);
            app.clamp_cursor();
        }
        _ => {}
    }
}
