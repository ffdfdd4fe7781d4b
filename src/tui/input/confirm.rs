use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::roster_ops;
use crate::tui::app::{App, Mode};

pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Confirm: y
        (KeyModifiers::NONE, KeyCode::Char('y')) => {
            roster_ops::clear_all(&mut app.roster);
            app.cursor = 0;
            app.mode = Mode::Navigate;
        }
        // Cancel: n or Esc
        (KeyModifiers::NONE, KeyCode::Char('n')) | (_, KeyCode::Esc) => {
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
}
