//! Terminal dashboard.
//!
//! Two list pages (users, audit logs) with live search, category cycling,
//! a display mode switch and a language switch. All state lives in
//! [`AppState`]; rendering reads it and derives colours from the theme
//! manager's palette on every frame.

pub mod records_table;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tracing::debug;

use crate::config::{Config, StartPage};
use crate::data::SampleData;
use crate::filter::{CategorySelector, FilterQuery, RecordFilter};
use crate::i18n::{Language, Strings, TextDirection};
use crate::models::{AuditLogEntry, Searchable, Severity, User, USER_ROLES};
use crate::theme::ThemeManager;

pub use status_bar::StatusBar;
pub use theme::Theme;

/// Dashboard page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// User management table
    Users,
    /// Audit log table
    AuditLogs,
}

impl Page {
    /// Pages in navigation order.
    pub const ALL: [Self; 2] = [Self::Users, Self::AuditLogs];

    /// The other page.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Users => Self::AuditLogs,
            Self::AuditLogs => Self::Users,
        }
    }

    /// Navigation label.
    #[must_use]
    pub const fn label(self, strings: &Strings) -> &'static str {
        match self {
            Self::Users => strings.nav_users,
            Self::AuditLogs => strings.nav_audit_logs,
        }
    }
}

impl From<StartPage> for Page {
    fn from(page: StartPage) -> Self {
        match page {
            StartPage::Users => Self::Users,
            StartPage::AuditLogs => Self::AuditLogs,
        }
    }
}

/// Complete dashboard state.
pub struct AppState {
    /// Owner of the display mode
    pub theme_manager: ThemeManager,
    /// Interface language for this session
    pub language: Language,
    /// Visible page
    pub page: Page,
    /// Search text of the visible page
    pub search: String,
    /// Whether keystrokes go to the search field
    pub search_active: bool,
    /// Role filter of the users page
    pub role: CategorySelector,
    /// Severity filter of the audit log page
    pub severity: CategorySelector,
    /// Selected row in the filtered table
    pub selected: usize,
    /// Records shown by the list pages
    pub data: SampleData,
    /// Transient message shown in the status bar
    pub status_message: Option<String>,
    /// Whether the status bar lists key hints
    pub show_hints: bool,
    /// Set when the user asked to quit
    pub should_quit: bool,
    user_filter: RecordFilter<User>,
    log_filter: RecordFilter<AuditLogEntry>,
}

impl AppState {
    /// Creates the state for a fresh session.
    #[must_use]
    pub fn new(theme_manager: ThemeManager, config: &Config, data: SampleData) -> Self {
        Self {
            theme_manager,
            language: config.ui.language,
            page: config.ui.start_page.into(),
            search: String::new(),
            search_active: false,
            role: CategorySelector::All,
            severity: CategorySelector::All,
            selected: 0,
            data,
            status_message: None,
            show_hints: config.ui.show_help_on_startup,
            should_quit: false,
            user_filter: User::record_filter(),
            log_filter: AuditLogEntry::record_filter(),
        }
    }

    /// String table of the session language.
    #[must_use]
    pub fn strings(&self) -> &'static Strings {
        self.language.strings()
    }

    /// Colours for the current display mode.
    #[must_use]
    pub fn theme(&self) -> Theme {
        Theme::from_palette(self.theme_manager.palette())
    }

    /// Query of the visible page.
    #[must_use]
    pub fn query(&self) -> FilterQuery {
        let category = match self.page {
            Page::Users => self.role.clone(),
            Page::AuditLogs => self.severity.clone(),
        };
        FilterQuery {
            text: self.search.clone(),
            category,
        }
    }

    /// Users matching the current query.
    #[must_use]
    pub fn visible_users(&self) -> Vec<&User> {
        self.user_filter.apply(&self.data.users, &self.query())
    }

    /// Audit events matching the current query.
    #[must_use]
    pub fn visible_logs(&self) -> Vec<&AuditLogEntry> {
        self.log_filter.apply(&self.data.audit_logs, &self.query())
    }

    /// Number of rows in the visible table.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        match self.page {
            Page::Users => self.visible_users().len(),
            Page::AuditLogs => self.visible_logs().len(),
        }
    }

    /// Number of records on the visible page before filtering.
    #[must_use]
    pub fn total_count(&self) -> usize {
        match self.page {
            Page::Users => self.data.users.len(),
            Page::AuditLogs => self.data.audit_logs.len(),
        }
    }

    /// Label of the active category filter.
    #[must_use]
    pub fn category_label(&self) -> String {
        let strings = self.strings();
        match (self.page, self.query().category) {
            (Page::Users, CategorySelector::All) => strings.all_roles.to_string(),
            (Page::AuditLogs, CategorySelector::All) => strings.all_severities.to_string(),
            (Page::Users, CategorySelector::Only(role)) => role,
            (Page::AuditLogs, CategorySelector::Only(severity)) => severity
                .parse::<Severity>()
                .map_or(severity, |s| s.label().to_string()),
        }
    }

    /// Flips the display mode.
    pub fn toggle_theme(&mut self) {
        let mode = self.theme_manager.toggle();
        let strings = self.strings();
        let label = if mode.is_dark() {
            strings.dark_mode
        } else {
            strings.light_mode
        };
        self.status_message = Some(label.to_string());
    }

    /// Switches between Arabic and English for this session.
    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
        debug!("Language switched to {}", self.language);
    }

    /// Moves to the other page. Search and selection start fresh.
    pub fn switch_page(&mut self) {
        self.page = self.page.next();
        self.search.clear();
        self.search_active = false;
        self.selected = 0;
        self.status_message = None;
    }

    /// Advances the category filter of the visible page.
    pub fn cycle_category(&mut self) {
        match self.page {
            Page::Users => self.role = self.role.cycle(&USER_ROLES),
            Page::AuditLogs => self.severity = self.severity.cycle(&Severity::names()),
        }
        self.clamp_selection();
    }

    /// Moves the selection up.
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Moves the selection down.
    pub fn select_next(&mut self) {
        let count = self.visible_count();
        if count > 0 && self.selected < count - 1 {
            self.selected += 1;
        }
    }

    fn clamp_selection(&mut self) {
        let count = self.visible_count();
        self.selected = self.selected.min(count.saturating_sub(1));
    }

    /// Applies one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.search_active {
            self.handle_search_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('/') => self.search_active = true,
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('l') => self.toggle_language(),
            KeyCode::Char('f') => self.cycle_category(),
            KeyCode::Tab | KeyCode::BackTab => self.switch_page(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(ch) => self.search.push(ch),
            KeyCode::Backspace => {
                self.search.pop();
            }
            KeyCode::Enter => self.search_active = false,
            KeyCode::Esc => {
                self.search.clear();
                self.search_active = false;
            }
            _ => return,
        }
        // Any edit may shrink the table
        self.clamp_selection();
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    state.handle_key(key);
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Sets up the terminal, runs the dashboard and restores the terminal.
pub fn run(state: &mut AppState) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_tui(state, &mut terminal);
    restore_terminal(terminal)?;
    result
}

/// Paragraph alignment for the session's reading direction.
#[must_use]
pub const fn alignment(direction: TextDirection) -> Alignment {
    match direction {
        TextDirection::Ltr => Alignment::Left,
        TextDirection::Rtl => Alignment::Right,
    }
}

fn render(f: &mut Frame, state: &AppState) {
    let theme = state.theme();
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Navigation
            Constraint::Length(3), // Search
            Constraint::Min(5),    // Table
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    render_navigation(f, chunks[0], state, &theme);
    render_search(f, chunks[1], state, &theme);
    records_table::render(f, chunks[2], state, &theme);
    StatusBar::render(f, chunks[3], state, &theme);
}

/// Navigation labels in display order and the index of the active page.
fn tab_titles(state: &AppState) -> (Vec<&'static str>, usize) {
    let strings = state.strings();
    let mut titles: Vec<&'static str> = Page::ALL.iter().map(|page| page.label(strings)).collect();
    let mut selected = Page::ALL
        .iter()
        .position(|page| *page == state.page)
        .unwrap_or(0);

    // Right-to-left layouts list the first page on the right
    if state.language.direction() == TextDirection::Rtl {
        titles.reverse();
        selected = titles.len() - 1 - selected;
    }

    (titles, selected)
}

fn render_navigation(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let strings = state.strings();
    let (titles, selected) = tab_titles(state);

    let switch_label = if state.theme_manager.is_dark() {
        strings.switch_to_light
    } else {
        strings.switch_to_dark
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(theme.text_secondary))
        .highlight_style(
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )
        .divider("|")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.divider))
                .title(Span::styled(
                    format!(" {} ", strings.app_title),
                    Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
                ))
                .title(
                    Line::from(Span::styled(
                        format!(" t: {switch_label} "),
                        Style::default().fg(theme.text_muted),
                    ))
                    .right_aligned(),
                )
                .style(Style::default().bg(theme.surface)),
        );

    f.render_widget(tabs, area);
}

fn render_search(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let strings = state.strings();
    let (title, subtitle, placeholder) = match state.page {
        Page::Users => (strings.users_title, strings.users_subtitle, strings.search_users),
        Page::AuditLogs => (
            strings.audit_logs_title,
            strings.audit_logs_subtitle,
            strings.search_logs,
        ),
    };

    let search_span = if state.search.is_empty() && !state.search_active {
        Span::styled(placeholder, Style::default().fg(theme.text_muted))
    } else {
        let cursor = if state.search_active { "_" } else { "" };
        Span::styled(
            format!("{}{cursor}", state.search),
            Style::default().fg(theme.text),
        )
    };

    let line = Line::from(vec![
        Span::styled("/ ", Style::default().fg(theme.text_secondary)),
        search_span,
        Span::raw("   "),
        Span::styled(
            format!("[{}]", state.category_label()),
            Style::default().fg(theme.accent),
        ),
    ]);

    let border_color = if state.search_active {
        theme.active
    } else {
        theme.divider
    };

    let paragraph = Paragraph::new(line)
        .alignment(alignment(state.language.direction()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .title(Span::styled(
                    format!(" {title} "),
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                ))
                .title(
                    Line::from(Span::styled(
                        format!(" {subtitle} "),
                        Style::default().fg(theme.text_muted),
                    ))
                    .right_aligned(),
                )
                .style(Style::default().bg(theme.surface)),
        );

    f.render_widget(paragraph, area);
}
