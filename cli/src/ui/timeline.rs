use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Cell, Row, Table},
    Frame,
};

use crate::app::App;
use crate::theme::ThemeColors;

use super::utils::panel;

pub fn render(frame: &mut Frame, area: Rect, app: &App, theme: &ThemeColors) {
    let block = panel("📈 Care Timeline", theme);

    let header = Row::new(vec!["Time", "Event"]).style(
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = app
        .feed
        .timeline
        .iter()
        .map(|entry| {
            Row::new(vec![
                Cell::from(entry.time.clone()).style(theme.muted_style()),
                Cell::from(entry.event.clone()).style(theme.fg_style()),
            ])
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(6), Constraint::Min(10)])
        .header(header)
        .column_spacing(1)
        .block(block);

    frame.render_widget(table, area);
}
