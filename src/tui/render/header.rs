use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Render the header: title + total count, with a separator line below.
/// The count always reflects the whole roster, even while a filter hides
/// some rows.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title row
            Constraint::Length(1), // separator
        ])
        .split(area);

    render_title(frame, app, chunks[0]);
    render_separator(frame, app, chunks[1]);
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = vec![Span::styled(
        " Student Roster",
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];

    let count = app.roster.count_label();
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let count_width = count.chars().count() + 1;
    if content_width + count_width < width {
        let padding = width - content_width - count_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            count,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        spans.push(Span::styled(" ", Style::default().bg(bg)));
    }

    let title = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(title, area);
}

fn render_separator(frame: &mut Frame, app: &App, area: Rect) {
    let width = area.width as usize;
    let line: String = "\u{2500}".repeat(width);
    let sep = Paragraph::new(line)
        .style(Style::default().fg(app.theme.dim).bg(app.theme.background));
    frame.render_widget(sep, area);
}
