//! Status bar widget for displaying status messages and key hints

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{alignment, AppState, Page, Theme};
use crate::constants::THEME_ATTRIBUTE;
use crate::models::{SeverityCounts, UserCounts};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar: result count, page totals, status message or
    /// hints, and the current root theme attribute.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let line = Line::from(Self::spans(state, theme));

        let status = Paragraph::new(line)
            .alignment(alignment(state.language.direction()))
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.divider))
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    fn spans(state: &AppState, theme: &Theme) -> Vec<Span<'static>> {
        let strings = state.strings();
        let mut spans = vec![Span::styled(
            strings.showing(state.visible_count(), state.total_count()),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )];
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            Self::page_counts(state),
            Style::default().fg(theme.text_secondary),
        ));

        // Status message replaces hints until the next page switch
        match &state.status_message {
            Some(message) => {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    message.clone(),
                    Style::default().fg(theme.accent),
                ));
            }
            None if state.show_hints => {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    strings.key_hints,
                    Style::default().fg(theme.text_muted),
                ));
            }
            None => {}
        }

        let data_theme = state
            .theme_manager
            .root_attributes()
            .get(THEME_ATTRIBUTE)
            .unwrap_or_default()
            .to_string();
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("{THEME_ATTRIBUTE}={data_theme}"),
            Style::default().fg(theme.text_secondary),
        ));

        spans
    }

    /// Totals of the whole page, independent of the active filter.
    fn page_counts(state: &AppState) -> String {
        let strings = state.strings();
        match state.page {
            Page::Users => {
                let counts = UserCounts::tally(&state.data.users);
                format!(
                    "{}: {}  {}: {}",
                    strings.count_active, counts.active, strings.count_admins, counts.admins
                )
            }
            Page::AuditLogs => {
                let counts = SeverityCounts::tally(&state.data.audit_logs);
                format!(
                    "{}: {}  {}: {}  {}: {}",
                    strings.count_errors,
                    counts.error,
                    strings.count_warnings,
                    counts.warning,
                    strings.count_info,
                    counts.info
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::data::SampleData;
    use crate::i18n::Language;
    use crate::storage::MemoryStorage;
    use crate::theme::{FixedColorScheme, ThemeManager};
    use chrono::{TimeZone, Utc};

    fn state(prefers_dark: Option<bool>) -> AppState {
        let manager =
            ThemeManager::init(Box::new(MemoryStorage::new()), &FixedColorScheme(prefers_dark));
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        AppState::new(manager, &Config::default(), SampleData::generate(now))
    }

    fn text(spans: &[Span]) -> String {
        spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_shows_hints_and_attribute() {
        let mut state = state(Some(true));
        state.language = Language::English;
        let theme = state.theme();
        let line = text(&StatusBar::spans(&state, &theme));
        assert!(line.contains("Showing 6 of 6"));
        assert!(line.contains("q quit"));
        assert!(line.contains("data-theme=dark"));
    }

    #[test]
    fn test_users_page_shows_user_totals() {
        let mut state = state(None);
        state.language = Language::English;
        state.search = "sarah".to_string();
        let theme = state.theme();
        let line = text(&StatusBar::spans(&state, &theme));
        assert!(line.contains("Showing 1 of 6"));
        assert!(line.contains("Active: 5  Admins: 2"));
    }

    #[test]
    fn test_audit_page_shows_severity_totals() {
        let mut state = state(None);
        state.language = Language::English;
        state.switch_page();
        let theme = state.theme();
        let line = text(&StatusBar::spans(&state, &theme));
        assert!(line.contains("Showing 8 of 8"));
        assert!(line.contains("Errors: 1  Warnings: 2  Info: 5"));
    }

    #[test]
    fn test_totals_use_session_language() {
        let mut state = state(None);
        state.switch_page();
        let theme = state.theme();
        let line = text(&StatusBar::spans(&state, &theme));
        assert!(line.contains("أخطاء: 1"));
    }

    #[test]
    fn test_hints_can_be_disabled() {
        let mut state = state(None);
        state.language = Language::English;
        state.show_hints = false;
        let theme = state.theme();
        let line = text(&StatusBar::spans(&state, &theme));
        assert!(!line.contains("q quit"));
        assert!(line.contains("data-theme=light"));
    }

    #[test]
    fn test_status_message_replaces_hints() {
        let mut state = state(None);
        state.language = Language::English;
        state.toggle_theme();
        let theme = state.theme();
        let line = text(&StatusBar::spans(&state, &theme));
        assert!(line.contains("Dark mode"));
        assert!(!line.contains("q quit"));
        assert!(line.contains("data-theme=dark"));
    }
}
