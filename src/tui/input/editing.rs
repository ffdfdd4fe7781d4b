use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::roster_ops;
use crate::tui::app::{App, Mode};

use super::*;

/// Insert and Edit share the input buffer; only commit and cancel differ.
pub(super) fn handle_editing(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            if app.mode == Mode::Edit {
                roster_ops::cancel_edit(&mut app.roster);
            }
            app.input.clear();
            app.input_cursor = 0;
            app.mode = Mode::Navigate;
        }
        KeyCode::Enter => commit_input(app),
        _ => {
            handle_buffer_key(app, key);
        }
    }
}

fn commit_input(app: &mut App) {
    match app.mode {
        Mode::Insert => match roster_ops::add_name(&mut app.roster, &app.input) {
            Ok(_) => {
                // Stay in Insert with a fresh buffer for rapid entry
                app.input.clear();
                app.input_cursor = 0;
            }
            Err(e) => app.notify(e.to_string()),
        },
        Mode::Edit => match roster_ops::save_edit(&mut app.roster, &app.input) {
            Ok(_) => {
                app.input.clear();
                app.input_cursor = 0;
                app.mode = Mode::Navigate;
                app.clamp_cursor();
            }
            // Roster unchanged, edit cursor retained — stay in Edit so the
            // user can fix the name
            Err(e) => app.notify(e.to_string()),
        },
        _ => {}
    }
}
