use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::dashboard::NO_DATA;
use crate::theme::ThemeColors;

use super::utils::panel;

pub fn render(frame: &mut Frame, area: Rect, app: &App, theme: &ThemeColors) {
    let block = panel("🌍 Energy-Free Impact", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(20)])
        .split(inner);

    render_summary(frame, columns[0], app, theme);
    render_chart(frame, columns[1], app, theme);
}

fn render_summary(frame: &mut Frame, area: Rect, app: &App, theme: &ThemeColors) {
    let impact = &app.model.impact;

    let saved = impact.saved_kwh.display_or(NO_DATA, |kwh| format!("{:.1} kWh", kwh));
    let charges = impact
        .phone_charges
        .map(|n| format!("⚡ Charging a phone {} times", n))
        .unwrap_or_else(|| NO_DATA.to_string());

    let value_style = Style::default().fg(theme.fg).add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(Span::styled("Electricity Saved", theme.muted_style())),
        Line::from(Span::styled(saved, value_style)),
        Line::from(Span::styled(
            format!("Estimated for {}", app.feed.impact_period),
            theme.muted_style(),
        )),
        Line::from(""),
        Line::from(Span::styled("Equivalent to", theme.muted_style())),
        Line::from(Span::styled(charges, value_style)),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_chart(frame: &mut Frame, area: Rect, app: &App, theme: &ThemeColors) {
    let recent = &app.model.impact.recent;

    if recent.is_empty() {
        let empty = Paragraph::new(Span::styled(NO_DATA, theme.muted_style()));
        frame.render_widget(empty, area);
        return;
    }

    let data: Vec<(f64, f64)> = recent
        .iter()
        .enumerate()
        .map(|(i, s)| (i as f64, s.kwh_saved))
        .collect();

    let max_x = (recent.len().saturating_sub(1)).max(1) as f64;
    let max_y = recent
        .iter()
        .map(|s| s.kwh_saved)
        .fold(0.0_f64, f64::max)
        .max(0.1);

    let dataset = Dataset::default()
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(theme.graph_line))
        .data(&data);

    let first = recent.first().map(|s| s.timestamp.as_str()).unwrap_or_default();
    let last = recent.last().map(|s| s.timestamp.as_str()).unwrap_or_default();

    let x_axis = Axis::default()
        .style(theme.muted_style())
        .bounds([0.0, max_x])
        .labels(vec![
            Span::styled(first.to_string(), theme.muted_style()),
            Span::styled(last.to_string(), theme.muted_style()),
        ]);

    let y_axis = Axis::default()
        .title(Span::styled("kWh", theme.muted_style()))
        .style(theme.muted_style())
        .bounds([0.0, max_y])
        .labels(vec![
            Span::styled("0.0", theme.muted_style()),
            Span::styled(format!("{:.2}", max_y / 2.0), theme.muted_style()),
            Span::styled(format!("{:.2}", max_y), theme.muted_style()),
        ]);

    let chart = Chart::new(vec![dataset])
        .x_axis(x_axis)
        .y_axis(y_axis)
        .style(Style::default().bg(theme.bg));

    frame.render_widget(chart, area);
}
