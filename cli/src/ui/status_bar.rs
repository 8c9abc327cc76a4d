use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::input::keys;
use crate::theme::ThemeColors;

pub fn render_title_bar(frame: &mut Frame, area: Rect, theme: &ThemeColors) {
    let version = super::VERSION;

    let left_spans = vec![
        Span::styled("👶 cradle ", Style::default().fg(theme.accent)),
        Span::styled(format!("v{}", version), Style::default().fg(theme.muted)),
    ];

    let right_text = "Baby Comfort Monitor · demo data ";

    let left_width: usize = left_spans.iter().map(|s| s.width()).sum();
    let right_width = right_text.chars().count();
    let padding = (area.width as usize).saturating_sub(left_width + right_width);

    let mut spans = left_spans;
    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(right_text, Style::default().fg(theme.muted)));

    let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.bg));
    frame.render_widget(bar, area);
}

pub fn render_status_bar(frame: &mut Frame, area: Rect, app: &App, theme: &ThemeColors) {
    let theme_name = app.config.theme_name();
    let theme_display = if theme_name.chars().count() > 12 {
        format!("{}...", theme_name.chars().take(9).collect::<String>())
    } else {
        theme_name.to_string()
    };

    let appearance = app.config.appearance_label().to_lowercase();

    let hints: Vec<(&str, String)> = vec![
        (keys::HELP, "help".to_string()),
        (keys::ADAPTIVE, "adaptive".to_string()),
        (keys::TARGET_DOWN, "target".to_string()),
        (keys::THEME, format!("theme ({})", theme_display)),
        (keys::APPEARANCE, format!("appearance ({})", appearance)),
        (keys::QUIT, "quit".to_string()),
    ];

    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(theme.border)));
        }
        spans.push(Span::styled(*key, Style::default().fg(theme.accent)));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(theme.muted),
        ));
    }

    let bar = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(theme.bg))
        .alignment(Alignment::Left);

    frame.render_widget(bar, area);
}
