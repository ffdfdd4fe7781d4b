use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode::truncate_to_width;

use super::push_highlighted_spans;

/// Render the roster list. Rows come from `visible_rows()` so the display
/// and the key handlers always agree on which roster entry each row is.
pub fn render_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    if app.roster.is_empty() {
        let empty = Paragraph::new(" No students in the list")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let rows = app.visible_rows();
    if rows.is_empty() {
        let empty = Paragraph::new(" No matches")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let visible_height = area.height as usize;
    let width = area.width as usize;
    let search_re = app.active_search_re();

    // Keep the cursor row on screen
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if visible_height > 0 && app.cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = app.cursor + 1 - visible_height;
    }
    if app.scroll_offset >= rows.len() {
        app.scroll_offset = rows.len().saturating_sub(1);
    }

    let highlight_style = Style::default()
        .fg(app.theme.search_match_fg)
        .bg(app.theme.search_match_bg);

    let mut lines: Vec<Line> = Vec::new();
    for (row, &index) in rows.iter().enumerate().skip(app.scroll_offset).take(visible_height) {
        let is_cursor = row == app.cursor;
        let is_move_source = app.move_from == Some(index);
        let is_editing = app.roster.editing() == Some(index);
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };

        let mut spans: Vec<Span> = Vec::new();
        let marker = if is_move_source { " \u{2261} " } else { " \u{2022} " };
        spans.push(Span::styled(
            marker,
            Style::default().fg(app.theme.highlight).bg(row_bg),
        ));

        let name_style = if is_cursor {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(row_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text).bg(row_bg)
        };

        let name = app.roster.get(index).unwrap_or("");
        let name = truncate_to_width(name, width.saturating_sub(3));
        push_highlighted_spans(&mut spans, &name, name_style, highlight_style, search_re.as_ref());

        if is_editing && matches!(app.mode, Mode::Edit) {
            spans.push(Span::styled(
                " (editing)",
                Style::default().fg(app.theme.warn).bg(row_bg),
            ));
        }

        // Pad cursor line to full width
        if is_cursor {
            let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
            if content_width < width {
                spans.push(Span::styled(
                    " ".repeat(width - content_width),
                    Style::default().bg(row_bg),
                ));
            }
        }

        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn empty_roster_message() {
        let mut app = app_with_names(&[]);
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_list(frame, &mut app, area);
        });
        assert_eq!(output, " No students in the list");
    }

    #[test]
    fn lists_names_with_bullets() {
        let mut app = app_with_names(&["Alice", "Bob"]);
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_list(frame, &mut app, area);
        });
        assert_eq!(output, " \u{2022} Alice\n \u{2022} Bob");
    }

    #[test]
    fn filter_hides_non_matching_rows() {
        let mut app = app_with_names(&["Alice", "Bob", "Charlie"]);
        app.filter = Some("li".to_string());
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_list(frame, &mut app, area);
        });
        assert!(output.contains("Alice"));
        assert!(output.contains("Charlie"));
        assert!(!output.contains("Bob"));
    }

    #[test]
    fn filter_with_no_matches_shows_message() {
        let mut app = app_with_names(&["Alice"]);
        app.filter = Some("zzz".to_string());
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_list(frame, &mut app, area);
        });
        assert_eq!(output, " No matches");
    }

    #[test]
    fn move_source_row_is_marked() {
        let mut app = app_with_names(&["Alice", "Bob"]);
        app.move_from = Some(0);
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_list(frame, &mut app, area);
        });
        assert!(output.starts_with(" \u{2261} Alice"));
    }

    #[test]
    fn editing_row_is_marked() {
        let mut app = app_with_names(&["Alice", "Bob"]);
        crate::ops::roster_ops::begin_edit(&mut app.roster, 1).unwrap();
        app.mode = crate::tui::app::Mode::Edit;
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_list(frame, &mut app, area);
        });
        assert!(output.contains("Bob (editing)"));
    }

    #[test]
    fn scrolls_to_keep_cursor_visible() {
        let names: Vec<String> = (1..=20).map(|i| format!("Student {i:02}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut app = app_with_names(&refs);
        app.cursor = 19;
        let output = render_to_string(TERM_W, 5, |frame, area| {
            render_list(frame, &mut app, area);
        });
        assert!(output.contains("Student 20"));
        assert!(!output.contains("Student 01"));
        assert_eq!(app.scroll_offset, 15);
    }
}
