use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Paragraph},
    Frame,
};

use crate::app::App;
use crate::theme::ThemeColors;

use super::utils::{blend, panel};

/// Bars are drawn in tenths of a degree so the chart keeps one decimal.
const BAR_SCALE: f64 = 10.0;

pub fn render(frame: &mut Frame, area: Rect, app: &App, theme: &ThemeColors) {
    let block = panel("🔥 Thermal Heat Map", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 3 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(2), Constraint::Length(1)])
        .split(inner);

    let bars: Vec<Bar> = app
        .model
        .zones
        .iter()
        .map(|zone| {
            let color = match zone.heat {
                Some(heat) => blend(theme.info, theme.danger, heat),
                None => theme.muted,
            };
            Bar::default()
                .value((zone.temperature_c.max(0.0) * BAR_SCALE).round() as u64)
                .text_value(format!("{:.1}°", zone.temperature_c))
                .label(Line::from(format!("Zone {}", zone.zone)))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(theme.bg).bg(color))
        })
        .collect();

    let bar_width = if bars.is_empty() {
        1
    } else {
        (chunks[0].width / bars.len() as u16).saturating_sub(2).clamp(3, 12)
    };

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(2)
        .label_style(theme.muted_style());
    frame.render_widget(chart, chunks[0]);

    let caption = Paragraph::new(Span::styled(app.feed.heatmap_caption, theme.muted_style()));
    frame.render_widget(caption, chunks[1]);
}
