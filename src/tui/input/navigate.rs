use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::roster_ops;
use crate::tui::app::{App, Mode};

use super::*;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('q')) => app.should_quit = true,

        // Cursor movement
        (KeyModifiers::NONE, KeyCode::Char('j')) | (_, KeyCode::Down) => move_cursor(app, 1),
        (KeyModifiers::NONE, KeyCode::Char('k')) | (_, KeyCode::Up) => move_cursor(app, -1),
        (KeyModifiers::NONE, KeyCode::Char('g')) | (_, KeyCode::Home) => {
            move_cursor_to_boundary(app, true)
        }
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('G')) | (_, KeyCode::End) => {
            move_cursor_to_boundary(app, false)
        }

        // Roster operations
        (KeyModifiers::NONE, KeyCode::Char('a' | 'i')) => enter_insert(app),
        (KeyModifiers::NONE, KeyCode::Char('e')) | (_, KeyCode::Enter) => enter_edit(app),
        (KeyModifiers::NONE, KeyCode::Char('d')) | (_, KeyCode::Delete) => {
            delete_under_cursor(app)
        }
        (KeyModifiers::NONE, KeyCode::Char('m')) => enter_move(app),
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('C')) => request_clear_all(app),

        // Search / filter
        (KeyModifiers::NONE, KeyCode::Char('/')) => enter_search(app),
        (_, KeyCode::Esc) => {
            app.filter = None;
            app.clamp_cursor();
        }

        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('?')) => app.show_help = true,
        _ => {}
    }
}

/// Open an empty buffer for a new name.
pub(super) fn enter_insert(app: &mut App) {
    app.input.clear();
    app.input_cursor = 0;
    app.mode = Mode::Insert;
}

/// Begin editing the entry under the cursor. The roster index is derived
/// from the visible rows right now, never reused from an earlier render.
pub(super) fn enter_edit(app: &mut App) {
    let Some(index) = app.cursor_row() else {
        return;
    };
    match roster_ops::begin_edit(&mut app.roster, index) {
        Ok(name) => {
            app.input = name.to_string();
            app.input_cursor = app.input.len();
            app.mode = Mode::Edit;
        }
        Err(e) => app.notify(e.to_string()),
    }
}

pub(super) fn delete_under_cursor(app: &mut App) {
    let Some(index) = app.cursor_row() else {
        return;
    };
    if let Err(e) = roster_ops::delete_name(&mut app.roster, index) {
        app.notify(e.to_string());
    }
    app.clamp_cursor();
}

/// Record the swap source (the drag start) and switch to Move mode.
pub(super) fn enter_move(app: &mut App) {
    if let Some(index) = app.cursor_row() {
        app.move_from = Some(index);
        app.mode = Mode::Move;
    }
}

pub(super) fn enter_search(app: &mut App) {
    app.search_input = app.filter.clone().unwrap_or_default();
    app.mode = Mode::Search;
}

/// Clearing is destructive, so it goes through the Confirm gate.
/// An empty roster has nothing to clear.
pub(super) fn request_clear_all(app: &mut App) {
    if !app.roster.is_empty() {
        app.mode = Mode::Confirm;
    }
}
