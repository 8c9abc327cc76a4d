use cradle_metrics::PaletteToken;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::data::dashboard::NO_DATA;
use crate::theme::ThemeColors;

use super::utils::{badge, panel};

fn metric<'a>(
    label: &'a str,
    value: String,
    extra: Option<Span<'a>>,
    theme: &ThemeColors,
) -> Paragraph<'a> {
    let mut value_line = vec![Span::styled(
        value,
        Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
    )];
    if let Some(extra) = extra {
        value_line.push(Span::raw(" "));
        value_line.push(extra);
    }

    Paragraph::new(vec![
        Line::from(Span::styled(label, theme.muted_style())),
        Line::from(value_line),
    ])
}

pub fn render(frame: &mut Frame, area: Rect, app: &App, theme: &ThemeColors) {
    let block = panel("👶 Baby Vitals", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(12, 68),
            Constraint::Ratio(12, 68),
            Constraint::Ratio(14, 68),
            Constraint::Ratio(15, 68),
            Constraint::Ratio(15, 68),
        ])
        .split(inner);

    let feed = &app.feed;
    let vitals = &app.model.vitals;

    frame.render_widget(
        metric(
            "Skin Temperature",
            format!("{:.1} °C", feed.skin_temp_c),
            None,
            theme,
        ),
        columns[0],
    );
    frame.render_widget(
        metric(
            "Mat Temperature",
            format!("{:.1} °C", feed.mat_temp_c),
            None,
            theme,
        ),
        columns[1],
    );

    let weight = vitals
        .weight_kg
        .display_or(NO_DATA, |w| format!("{:.2} kg", w));
    let trend = vitals.trend.zip(vitals.delta).map(|(trend, delta)| {
        let estimate = if delta.is_placeholder() { " est." } else { "" };
        Span::styled(
            format!(
                "{} {} ({}{})",
                trend.icon,
                trend.label.as_str(),
                delta.formatted(),
                estimate
            ),
            Style::default().fg(theme.token(trend.label.token())),
        )
    });
    frame.render_widget(metric("Weight", weight, trend, theme), columns[2]);

    let expression = Paragraph::new(vec![
        Line::from(Span::styled("Expression Analysis", theme.muted_style())),
        Line::from(badge(
            feed.expression.icon,
            feed.expression.label,
            PaletteToken::Success,
            theme,
        )),
    ]);
    frame.render_widget(expression, columns[3]);

    let sleep = Paragraph::new(vec![
        Line::from(Span::styled("Sleep State", theme.muted_style())),
        Line::from(badge(
            feed.sleep_state.icon,
            feed.sleep_state.label,
            PaletteToken::Info,
            theme,
        )),
    ]);
    frame.render_widget(sleep, columns[4]);
}
