use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::roster_ops;
use crate::tui::app::{App, Mode};

use super::*;

/// Move mode is the drag-and-drop analog: the source row was recorded on
/// entry, the cursor picks the destination, Enter performs the swap.
pub(super) fn handle_move(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Enter) | (KeyModifiers::NONE, KeyCode::Char('m')) => confirm_swap(app),
        (_, KeyCode::Esc) => {
            app.move_from = None;
            app.mode = Mode::Navigate;
        }
        (KeyModifiers::NONE, KeyCode::Char('j')) | (_, KeyCode::Down) => move_cursor(app, 1),
        (KeyModifiers::NONE, KeyCode::Char('k')) | (_, KeyCode::Up) => move_cursor(app, -1),
        (KeyModifiers::NONE, KeyCode::Char('g')) | (_, KeyCode::Home) => {
            move_cursor_to_boundary(app, true)
        }
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('G')) | (_, KeyCode::End) => {
            move_cursor_to_boundary(app, false)
        }
        _ => {}
    }
}

/// Swap the recorded source with the row under the cursor. Both indices
/// are validated by the store; a stale source surfaces as a notice rather
/// than touching the wrong entry.
pub(super) fn confirm_swap(app: &mut App) {
    let from = app.move_from.take();
    app.mode = Mode::Navigate;

    let (Some(from), Some(to)) = (from, app.cursor_row()) else {
        return;
    };
    if let Err(e) = roster_ops::swap_names(&mut app.roster, from, to) {
        app.notify(e.to_string());
    }
}
