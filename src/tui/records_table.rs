//! Users and audit log tables.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use super::{alignment, AppState, Page, Theme};
use crate::i18n::TextDirection;

/// Render the table of the visible page
pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let (header, rows, widths) = match state.page {
        Page::Users => user_rows(state, theme),
        Page::AuditLogs => log_rows(state, theme),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.divider))
        .style(Style::default().bg(theme.surface));

    if rows.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            state.strings().showing(0, state.total_count()),
            Style::default().fg(theme.text_muted),
        )))
        .alignment(alignment(state.language.direction()))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let (header, rows, widths) = if state.language.direction() == TextDirection::Rtl {
        (
            reversed(header),
            rows.into_iter().map(reversed).collect(),
            widths.into_iter().rev().collect(),
        )
    } else {
        (header, rows, widths)
    };

    let header = Row::new(header).style(
        Style::default()
            .fg(theme.text_secondary)
            .add_modifier(Modifier::BOLD),
    );
    let rows: Vec<Row> = rows.into_iter().map(Row::new).collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1)
        .row_highlight_style(Style::default().bg(theme.highlight_bg).fg(theme.text));

    let mut table_state = TableState::default().with_selected(Some(state.selected));
    f.render_stateful_widget(table, area, &mut table_state);
}

type TableParts = (Vec<Cell<'static>>, Vec<Vec<Cell<'static>>>, Vec<Constraint>);

fn reversed(mut cells: Vec<Cell<'static>>) -> Vec<Cell<'static>> {
    cells.reverse();
    cells
}

fn header_cells(columns: &[&'static str]) -> Vec<Cell<'static>> {
    columns.iter().map(|title| Cell::from(*title)).collect()
}

fn user_rows(state: &AppState, theme: &Theme) -> TableParts {
    let strings = state.strings();
    let now = state.data.generated_at;

    let rows = state
        .visible_users()
        .into_iter()
        .map(|user| {
            let status_color = if user.status == crate::models::UserStatus::Active {
                theme.success
            } else {
                theme.inactive
            };
            let last_active = user
                .last_active_label(now)
                .unwrap_or_else(|| strings.never.to_string());

            vec![
                Cell::from(Line::from(vec![
                    Span::styled(user.name.clone(), Style::default().fg(theme.text)),
                    Span::styled(
                        format!(" <{}>", user.email),
                        Style::default().fg(theme.text_muted),
                    ),
                ])),
                Cell::from(Span::styled(
                    user.role.clone(),
                    Style::default().fg(theme.role_color(&user.role)),
                )),
                Cell::from(Span::styled(
                    user.department.clone(),
                    Style::default().fg(theme.text_secondary),
                )),
                Cell::from(Span::styled(
                    user.status.as_str(),
                    Style::default().fg(status_color),
                )),
                Cell::from(Span::styled(last_active, Style::default().fg(theme.text_secondary))),
                Cell::from(Span::styled(
                    user.join_date.format("%Y-%m-%d").to_string(),
                    Style::default().fg(theme.text_secondary),
                )),
            ]
        })
        .collect();

    let widths = vec![
        Constraint::Min(30),
        Constraint::Length(8),
        Constraint::Length(14),
        Constraint::Length(9),
        Constraint::Length(12),
        Constraint::Length(11),
    ];

    (header_cells(&strings.user_columns), rows, widths)
}

fn log_rows(state: &AppState, theme: &Theme) -> TableParts {
    let strings = state.strings();

    let rows = state
        .visible_logs()
        .into_iter()
        .map(|entry| {
            vec![
                Cell::from(Line::from(vec![
                    Span::styled(entry.action.clone(), Style::default().fg(theme.text)),
                    Span::styled(
                        format!("  {}", entry.details),
                        Style::default().fg(theme.text_muted),
                    ),
                ])),
                Cell::from(Span::styled(
                    entry.user.clone(),
                    Style::default().fg(theme.text_secondary),
                )),
                Cell::from(Span::styled(
                    entry.resource.clone(),
                    Style::default().fg(theme.text_secondary),
                )),
                Cell::from(Span::styled(
                    entry.severity.label(),
                    Style::default()
                        .fg(theme.severity_color(entry.severity))
                        .add_modifier(Modifier::BOLD),
                )),
                Cell::from(Span::styled(
                    entry.formatted_timestamp(),
                    Style::default().fg(theme.text_secondary),
                )),
            ]
        })
        .collect();

    let widths = vec![
        Constraint::Min(36),
        Constraint::Length(16),
        Constraint::Length(16),
        Constraint::Length(9),
        Constraint::Length(16),
    ];

    (header_cells(&strings.log_columns), rows, widths)
}
