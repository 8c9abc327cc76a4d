// UI adapter: converts cradle-theme colors to ratatui colors and resolves
// metric palette tokens against the active theme.

use cradle_metrics::PaletteToken;
use ratatui::style::{Color as RatatuiColor, Modifier, Style};

use cradle_theme::Color;

/// ThemeColors with ratatui Color types for direct use in UI rendering
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    pub bg: RatatuiColor,
    pub dialog_bg: RatatuiColor,
    pub fg: RatatuiColor,
    pub accent: RatatuiColor,
    pub muted: RatatuiColor,
    pub success: RatatuiColor,
    pub warning: RatatuiColor,
    pub danger: RatatuiColor,
    pub info: RatatuiColor,
    pub border: RatatuiColor,
    pub graph_line: RatatuiColor,
    source: cradle_theme::ThemeColors,
}

impl From<cradle_theme::ThemeColors> for ThemeColors {
    fn from(colors: cradle_theme::ThemeColors) -> Self {
        Self {
            bg: to_ratatui_color(colors.bg),
            dialog_bg: to_ratatui_color(colors.dialog_bg),
            fg: to_ratatui_color(colors.fg),
            accent: to_ratatui_color(colors.accent),
            muted: to_ratatui_color(colors.muted),
            success: to_ratatui_color(colors.success),
            warning: to_ratatui_color(colors.warning),
            danger: to_ratatui_color(colors.danger),
            info: to_ratatui_color(colors.info),
            border: to_ratatui_color(colors.border),
            graph_line: to_ratatui_color(colors.graph_line),
            source: colors,
        }
    }
}

fn to_ratatui_color(color: Color) -> RatatuiColor {
    RatatuiColor::Rgb(color.r, color.g, color.b)
}

impl ThemeColors {
    fn source_color(&self, token: PaletteToken) -> Color {
        match token {
            PaletteToken::Success => self.source.success,
            PaletteToken::Warning => self.source.warning,
            PaletteToken::Danger => self.source.danger,
            PaletteToken::Info => self.source.info,
            PaletteToken::Neutral => self.source.border,
        }
    }

    /// Concrete color for a metric palette token.
    pub fn token(&self, token: PaletteToken) -> RatatuiColor {
        to_ratatui_color(self.source_color(token))
    }

    /// Filled badge: token background with whichever text color reads best on it.
    pub fn badge_style(&self, token: PaletteToken) -> Style {
        let bg = self.source_color(token);
        let text = bg.more_readable(self.source.fg, self.source.bg);
        Style::default()
            .bg(to_ratatui_color(bg))
            .fg(to_ratatui_color(text))
            .add_modifier(Modifier::BOLD)
    }

    #[inline]
    pub fn fg_style(&self) -> Style {
        Style::default().fg(self.fg)
    }

    #[inline]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    #[inline]
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    #[inline]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    #[inline]
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }
}
