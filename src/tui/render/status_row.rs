use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen). A pending notice always wins
/// over the mode prompt so validation failures are never hidden by the
/// input line that caused them.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    if let Some(notice) = &app.notice {
        let line = Line::from(Span::styled(
            format!(" {}", notice.text),
            Style::default().fg(app.theme.error).bg(bg),
        ));
        let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
        frame.render_widget(paragraph, area);
        return;
    }

    let line = match app.mode {
        Mode::Navigate => {
            // Empty in navigate mode, but an active filter stays visible
            // dimmed, with key hints right-aligned when enabled
            let mut spans = Vec::new();
            if let Some(ref term) = app.filter {
                spans.push(Span::styled(
                    format!(" /{}", term),
                    Style::default().fg(app.theme.dim).bg(bg),
                ));
            }
            if app.show_key_hints {
                let hint = "a add  e edit  d delete  m move  / search  ? help ";
                let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
                let hint_width = hint.chars().count();
                if content_width + hint_width < width {
                    let padding = width - content_width - hint_width;
                    spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
                    spans.push(Span::styled(
                        hint,
                        Style::default().fg(app.theme.dim).bg(bg),
                    ));
                }
            }
            Line::from(spans)
        }
        Mode::Insert => prompt_line(app, "add: ", width),
        Mode::Edit => prompt_line(app, "edit: ", width),
        Mode::Search => {
            let mut spans = vec![
                Span::styled(
                    format!(" /{}", app.search_input),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)),
            ];
            push_hint(app, &mut spans, "Enter filter  Esc cancel ", width);
            Line::from(spans)
        }
        Mode::Move => {
            let mut spans = vec![Span::styled(
                " move: pick a destination",
                Style::default().fg(app.theme.warn).bg(bg),
            )];
            push_hint(app, &mut spans, "Enter swap  Esc cancel ", width);
            Line::from(spans)
        }
        Mode::Confirm => Line::from(Span::styled(
            format!(" clear all {}? y/n", app.roster.count_label()),
            Style::default().fg(app.theme.warn).bg(bg),
        )),
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Input prompt with the caret rendered at the byte cursor, e.g. `add: Al▌ice`.
fn prompt_line<'a>(app: &'a App, label: &'a str, width: usize) -> Line<'a> {
    let bg = app.theme.background;
    let text_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let cursor = app.input_cursor.min(app.input.len());

    let mut spans = vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(label, Style::default().fg(app.theme.highlight).bg(bg)),
        Span::styled(&app.input[..cursor], text_style),
        Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)),
        Span::styled(&app.input[cursor..], text_style),
    ];
    push_hint(app, &mut spans, "Enter save  Esc cancel ", width);
    Line::from(spans)
}

fn push_hint<'a>(app: &App, spans: &mut Vec<Span<'a>>, hint: &'a str, width: usize) {
    if !app.show_key_hints {
        return;
    }
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hint_width = hint.chars().count();
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(
            " ".repeat(padding),
            Style::default().bg(app.theme.background),
        ));
        spans.push(Span::styled(
            hint,
            Style::default().fg(app.theme.dim).bg(app.theme.background),
        ));
    }
}
