use cradle_metrics::PaletteToken;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::dashboard::NO_DATA;
use crate::theme::ThemeColors;

use super::utils::{badge, panel};

pub fn render(frame: &mut Frame, area: Rect, app: &App, theme: &ThemeColors) {
    let block = panel("🧊 Smart PCM Blanket", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 3 {
        return;
    }

    let blanket = &app.model.blanket;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(inner);

    let state = Line::from(vec![
        Span::styled("PCM state: ", theme.muted_style()),
        Span::styled(app.feed.pcm_state, theme.fg_style()),
    ]);
    frame.render_widget(Paragraph::new(state), chunks[0]);

    let adaptive = if blanket.adaptive_mode {
        badge("✅", "Adaptive Mode: ON", PaletteToken::Success, theme)
    } else {
        badge("❌", "Adaptive Mode: OFF", PaletteToken::Neutral, theme)
    };
    frame.render_widget(Paragraph::new(Line::from(adaptive)), chunks[1]);

    let caption = match blanket.progress {
        Some(fraction) => format!(
            "Manual override: {:.0} °C ({:.0}% of {:.0}–{:.0} °C)",
            blanket.target_c,
            fraction * 100.0,
            blanket.min_c,
            blanket.max_c
        ),
        None => format!("Manual override: {}", NO_DATA),
    };
    frame.render_widget(
        Paragraph::new(Span::styled(caption, theme.muted_style())),
        chunks[2],
    );

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme.accent).bg(theme.border))
        .ratio(blanket.progress.unwrap_or(0.0))
        .label(format!("{:.0} °C", blanket.target_c))
        .use_unicode(true);
    frame.render_widget(gauge, chunks[3]);
}
