use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::input::{keys, KEY_BINDINGS};
use crate::theme::ThemeColors;
use crate::ui::VERSION;

use super::utils::centered_rect;

pub fn render(frame: &mut Frame, app: &App, theme: &ThemeColors) {
    let content_height = KEY_BINDINGS.len() as u16 + 10;
    let area = centered_rect(frame.area(), 52, content_height);

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .style(Style::default().bg(theme.dialog_bg));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(KEY_BINDINGS.len() as u16 + 1),
            Constraint::Min(1),
        ])
        .margin(1)
        .split(inner);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("cradle v{} - Baby Comfort Monitor", VERSION),
            theme.title_style(),
        )),
        Line::from(Span::styled(
            format!(
                "Theme: {} ({})",
                app.config.theme_name(),
                app.config.appearance_label()
            ),
            theme.muted_style(),
        )),
    ])
    .centered();
    frame.render_widget(title, chunks[0]);

    let lines: Vec<Line> = KEY_BINDINGS
        .iter()
        .map(|binding| {
            Line::from(vec![
                Span::styled(
                    format!("{:10}", binding.key),
                    Style::default()
                        .fg(theme.warning)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(binding.description, theme.fg_style()),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), chunks[1]);

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("All values are demo data. Press ", theme.muted_style()),
        Span::styled(keys::ESC, theme.accent_style()),
        Span::styled(" to close.", theme.muted_style()),
    ]))
    .centered();
    frame.render_widget(footer, chunks[2]);
}
