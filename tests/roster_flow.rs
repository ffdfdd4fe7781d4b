//! End-to-end flows through the public API: a scripted key sequence is fed
//! to the input dispatcher and the resulting roster state is verified.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;

use roster::model::{Roster, RosterConfig};
use roster::tui::app::{App, Mode};
use roster::tui::input::handle_key;

fn app_with(names: &[&str]) -> App {
    App::new(Roster::from_names(names), &RosterConfig::default())
}

fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Add a name through the Insert mode prompt.
fn add(app: &mut App, name: &str) {
    press(app, KeyCode::Char('a'));
    type_str(app, name);
    press(app, KeyCode::Enter);
    press(app, KeyCode::Esc);
}

#[test]
fn build_up_a_roster_from_scratch() {
    let mut app = app_with(&[]);
    assert!(app.roster.is_empty());

    add(&mut app, "Alice");
    add(&mut app, "Bob");
    add(&mut app, "Charlie");

    assert_eq!(app.roster.names(), &["Alice", "Bob", "Charlie"]);
    assert_eq!(app.roster.count_label(), "3 students");
}

#[test]
fn edit_then_delete_then_swap() {
    let mut app = app_with(&["Alice", "Bob", "Charlie", "Dave"]);

    // Rename Bob to Ben
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('e'));
    assert_eq!(app.mode, Mode::Edit);
    for _ in 0..3 {
        press(&mut app, KeyCode::Backspace);
    }
    type_str(&mut app, "Ben");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.roster.names(), &["Alice", "Ben", "Charlie", "Dave"]);

    // Delete Charlie
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.roster.names(), &["Alice", "Ben", "Dave"]);

    // Swap Alice with Dave
    press(&mut app, KeyCode::Char('g'));
    press(&mut app, KeyCode::Char('m'));
    press(&mut app, KeyCode::Char('G'));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.roster.names(), &["Dave", "Ben", "Alice"]);
}

#[test]
fn swap_is_a_swap_not_an_insert() {
    let mut app = app_with(&["A", "B", "C", "D"]);

    // Move B to where D is. Under move-and-shift semantics the result
    // would be A,C,D,B; a swap leaves C where it was.
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('m'));
    press(&mut app, KeyCode::Char('G'));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.roster.names(), &["A", "D", "C", "B"]);
}

#[test]
fn abandoned_edit_leaves_no_cursor_behind() {
    let mut app = app_with(&["Alice", "Bob"]);

    press(&mut app, KeyCode::Char('e'));
    assert_eq!(app.roster.editing(), Some(0));
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.roster.editing(), None);

    press(&mut app, KeyCode::Char('e'));
    type_str(&mut app, "!");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.roster.names(), &["Alice!", "Bob"]);
}

#[test]
fn filter_edit_and_count_stay_consistent() {
    let mut app = app_with(&["Alice", "Bob", "Charlie"]);

    press(&mut app, KeyCode::Char('/'));
    type_str(&mut app, "li");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.visible_rows(), vec![0, 2]);

    // Edit the second visible row (Charlie, roster index 2)
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('e'));
    assert_eq!(app.input, "Charlie");
    press(&mut app, KeyCode::Esc);

    // Count reflects the whole roster while filtered
    assert_eq!(app.roster.count_label(), "3 students");

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.visible_rows(), vec![0, 1, 2]);
}

#[test]
fn clear_all_empties_the_roster_after_confirmation() {
    let mut app = app_with(&["Alice", "Bob"]);

    handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('C'), KeyModifiers::SHIFT),
    );
    assert_eq!(app.mode, Mode::Confirm);
    press(&mut app, KeyCode::Char('y'));

    assert!(app.roster.is_empty());
    assert_eq!(app.roster.count_label(), "0 students");
    assert_eq!(app.cursor_row(), None);

    // The roster is usable again immediately
    add(&mut app, "Eve");
    assert_eq!(app.roster.names(), &["Eve"]);
}

#[test]
fn rejected_input_raises_a_transient_notice() {
    let mut app = app_with(&[]);

    press(&mut app, KeyCode::Char('a'));
    type_str(&mut app, "   ");
    press(&mut app, KeyCode::Enter);

    let notice = app.notice.as_ref().expect("notice after empty add");
    assert_eq!(notice.text, "name cannot be empty");
    assert!(app.roster.is_empty());

    // A second failure replaces the notice rather than stacking
    press(&mut app, KeyCode::Enter);
    assert!(app.notice.is_some());
}
