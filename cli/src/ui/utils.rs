use std::time::Duration;

use cradle_metrics::PaletteToken;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders},
};

use crate::theme::ThemeColors;

/// Center a fixed-size rectangle within an area (clamped to fit).
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Bordered panel with the section title used across the dashboard.
pub fn panel<'a>(title: &'a str, theme: &ThemeColors) -> Block<'a> {
    Block::default()
        .title(Span::styled(format!(" {} ", title), theme.title_style()))
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .style(Style::default().bg(theme.bg))
}

/// Padded label on a token-coloured background.
pub fn badge<'a>(icon: &str, label: &str, token: PaletteToken, theme: &ThemeColors) -> Span<'a> {
    let text = if icon.is_empty() {
        format!(" {} ", label)
    } else {
        format!(" {} {} ", icon, label)
    };
    Span::styled(text, theme.badge_style(token))
}

/// Linear blend between two RGB colours; non-RGB inputs return `from`.
pub fn blend(from: Color, to: Color, t: f64) -> Color {
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let t = t.clamp(0.0, 1.0);
            let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ => from,
    }
}

/// Relative age such as "10m ago".
pub fn format_age(age: Duration) -> String {
    let rounded = Duration::from_secs(age.as_secs() - age.as_secs() % 60);
    if rounded.is_zero() {
        return "just now".to_string();
    }
    format!("{} ago", humantime::format_duration(rounded))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        let a = Color::Rgb(0, 0, 0);
        let b = Color::Rgb(200, 100, 50);
        assert_eq!(blend(a, b, 0.0), a);
        assert_eq!(blend(a, b, 1.0), b);
        assert_eq!(blend(a, b, 0.5), Color::Rgb(100, 50, 25));
        assert_eq!(blend(Color::Reset, b, 0.5), Color::Reset);
    }

    #[test]
    fn test_format_age() {
        assert_eq!(format_age(Duration::from_secs(600)), "10m ago");
        assert_eq!(format_age(Duration::from_secs(3725)), "1h 2m ago");
        assert_eq!(format_age(Duration::from_secs(30)), "just now");
    }

    #[test]
    fn test_centered_rect_fits() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(area, 50, 20);
        assert_eq!(rect, Rect::new(25, 10, 50, 20));

        let small = centered_rect(Rect::new(0, 0, 20, 10), 50, 20);
        assert!(small.width <= 16 && small.height <= 8);
    }
}
