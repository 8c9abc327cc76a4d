use cradle_metrics::PaletteToken;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use crate::app::App;
use crate::theme::ThemeColors;

use super::utils::{badge, format_age, panel};

pub fn render(frame: &mut Frame, area: Rect, app: &App, theme: &ThemeColors) {
    let block = panel("📡 Alert & Notification Center", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(inner);

    let feed = &app.feed;
    let recent = &feed.recent_alert;

    let summary = Paragraph::new(vec![
        Line::from(badge(
            feed.status.icon,
            &format!("Status: {}", feed.status.label),
            PaletteToken::Success,
            theme,
        )),
        Line::from(vec![
            Span::styled("Recent: ", theme.muted_style()),
            Span::styled(format!("⚠ \"{}\"", recent.message), theme.fg_style()),
        ]),
        Line::from(Span::styled(format_age(recent.age), theme.muted_style())),
        Line::from(vec![
            Span::styled("Priority: ", theme.muted_style()),
            badge("", recent.priority.label(), app.model.alert_token, theme),
        ]),
    ]);
    frame.render_widget(summary, columns[0]);

    let header = Row::new(vec!["Time", "Alert", "Priority"]).style(
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = feed
        .alerts
        .iter()
        .map(|alert| {
            Row::new(vec![
                Cell::from(alert.time.clone()).style(theme.muted_style()),
                Cell::from(alert.message.clone()).style(theme.fg_style()),
                Cell::from(alert.priority.label())
                    .style(Style::default().fg(theme.token(alert.priority.token()))),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Min(10),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .column_spacing(1);

    frame.render_widget(table, columns[1]);
}
