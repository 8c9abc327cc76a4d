use cradle_metrics::PaletteToken;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::data::dashboard::NO_DATA;
use crate::theme::ThemeColors;

use super::utils::{badge, panel};

pub fn render(frame: &mut Frame, area: Rect, app: &App, theme: &ThemeColors) {
    let block = panel("🤖 Predictive Comfort Score", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let risk = match app.model.comfort {
        Some(band) => badge("●", &format!("Risk Level: {}", band.label), band.token, theme),
        None => badge("", &format!("Risk Level: {}", NO_DATA), PaletteToken::Neutral, theme),
    };

    let lines = vec![
        Line::from(Span::styled("Comfort Score", theme.muted_style())),
        Line::from(vec![
            Span::styled(
                format!("{:.0}", app.feed.comfort_score),
                Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
            ),
            Span::styled("/100", theme.muted_style()),
        ]),
        Line::from(""),
        Line::from(risk),
        Line::from(""),
        Line::from(Span::styled(
            format!("Prediction: \"{}\"", app.feed.prediction),
            Style::default().fg(theme.info),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
