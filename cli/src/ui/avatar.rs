use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::theme::ThemeColors;

use super::utils::panel;

pub fn render(frame: &mut Frame, area: Rect, app: &App, theme: &ThemeColors) {
    let block = panel("🎨 Avatar", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let feed = &app.feed;

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            feed.expression.icon,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(feed.avatar_caption, theme.muted_style())),
        Line::from(""),
        Line::from(Span::styled(feed.expression.label, theme.fg_style())),
        Line::from(Span::styled(feed.sleep_state.label, theme.fg_style())),
    ];

    let avatar = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(ratatui::widgets::Wrap { trim: true });
    frame.render_widget(avatar, inner);
}
