use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use regex::Regex;

use crate::cli::Cli;
use crate::io::config_io::load_config;
use crate::model::{Roster, RosterConfig};
use crate::ops::search;

use super::input;
use super::render;
use super::theme::Theme;

/// How long a transient notice stays on screen.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing a new name
    Insert,
    /// Editing the name under the roster's edit cursor
    Edit,
    /// Typing a search filter (applied live)
    Search,
    /// Picking the swap destination for a reorder
    Move,
    /// Yes/no gate before clearing the whole roster
    Confirm,
}

/// A transient status-row message with its auto-dismiss deadline.
/// A new notice replaces the old one and restarts the clock, so an earlier
/// deadline can never clip a later message.
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub deadline: Instant,
}

/// Main application state
pub struct App {
    pub roster: Roster,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_key_hints: bool,
    /// Cursor index into the visible rows (not the roster)
    pub cursor: usize,
    /// First visible row (set by the list renderer)
    pub scroll_offset: usize,
    /// Shared single-line buffer for Insert and Edit modes
    pub input: String,
    /// Byte offset of the caret within `input`
    pub input_cursor: usize,
    /// Query being typed in Search mode
    pub search_input: String,
    /// Committed filter applied outside Search mode
    pub filter: Option<String>,
    /// Source roster index of an in-flight reorder (Move mode)
    pub move_from: Option<usize>,
    pub notice: Option<Notice>,
    pub show_help: bool,
}

impl App {
    pub fn new(roster: Roster, config: &RosterConfig) -> Self {
        App {
            roster,
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            cursor: 0,
            scroll_offset: 0,
            input: String::new(),
            input_cursor: 0,
            search_input: String::new(),
            filter: None,
            move_from: None,
            notice: None,
            show_help: false,
        }
    }

    /// The search term currently shaping the visible list: the live query
    /// while typing a search, the committed filter otherwise.
    pub fn active_filter(&self) -> &str {
        match self.mode {
            Mode::Search => &self.search_input,
            _ => self.filter.as_deref().unwrap_or(""),
        }
    }

    /// Roster indices currently visible, in display order. Recomputed on
    /// every call — row-to-index mappings are never cached across renders,
    /// so a gesture always dispatches against the current roster.
    pub fn visible_rows(&self) -> Vec<usize> {
        search::match_indices(&self.roster, self.active_filter())
    }

    /// Roster index under the cursor, if any row is visible.
    pub fn cursor_row(&self) -> Option<usize> {
        self.visible_rows().get(self.cursor).copied()
    }

    /// Keep the cursor inside the visible rows after any mutation.
    pub fn clamp_cursor(&mut self) {
        let len = self.visible_rows().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// Show a transient error. Replaces any existing notice.
    pub fn notify(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            text: text.into(),
            deadline: Instant::now() + NOTICE_TTL,
        });
    }

    /// Drop the notice once its deadline passes. Called every loop tick.
    pub fn expire_notice(&mut self) {
        if let Some(notice) = &self.notice
            && Instant::now() >= notice.deadline
        {
            self.notice = None;
        }
    }

    /// The regex used to highlight matches in the rendered list.
    pub fn active_search_re(&self) -> Option<Regex> {
        search::search_matcher(self.active_filter())
    }
}

/// Run the TUI application
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(cli.config.as_deref())?;
    let roster = Roster::from_names(config.roster.names.iter().map(String::as_str).chain(
        cli.names.iter().map(String::as_str),
    ));
    let mut app = App::new(roster, &config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.expire_notice();
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
