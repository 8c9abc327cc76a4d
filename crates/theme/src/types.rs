//! Core theme types.
//!
//! - `Color` - RGB color representation
//! - `ThemeColors` - the semantic colors the dashboard draws with
//! - `ThemeVariants` - dark and light variants of a theme
//! - `NamedTheme` - a complete theme with metadata

use serde::{Deserialize, Serialize};

/// RGB color representation.
///
/// Each component is a value from 0-255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Create a new color from RGB components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string (e.g., "#c6f6d5" or "c6f6d5").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Convert to hex string (e.g., "#ffffff").
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    fn linearize(val: u8) -> f64 {
        let v = val as f64 / 255.0;
        if v <= 0.03928 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    }

    /// Relative luminance (0.0 = black, 1.0 = white).
    pub fn luminance(&self) -> f64 {
        0.2126 * Self::linearize(self.r)
            + 0.7152 * Self::linearize(self.g)
            + 0.0722 * Self::linearize(self.b)
    }

    /// WCAG contrast ratio between two colors (1:1 to 21:1).
    pub fn contrast_ratio(&self, other: &Color) -> f64 {
        let l1 = self.luminance();
        let l2 = other.luminance();
        let lighter = l1.max(l2);
        let darker = l1.min(l2);
        (lighter + 0.05) / (darker + 0.05)
    }

    /// Whichever of `a` and `b` reads better on top of `self`.
    pub fn more_readable(&self, a: Color, b: Color) -> Color {
        if self.contrast_ratio(&a) >= self.contrast_ratio(&b) {
            a
        } else {
            b
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new(128, 128, 128)
    }
}

/// Semantic colors used by the dashboard.
///
/// `success`, `warning`, `danger` and `info` back the badge palette tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    /// Main background color
    pub bg: Color,
    /// Overlay background (help popup)
    pub dialog_bg: Color,
    /// Primary text color
    pub fg: Color,
    /// Panel titles and key hints
    pub accent: Color,
    /// Secondary text
    pub muted: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub info: Color,
    pub border: Color,
    pub graph_line: Color,
}

impl Default for ThemeColors {
    fn default() -> Self {
        // Default dark theme
        Self {
            bg: Color::new(0x16, 0x16, 0x1e),
            dialog_bg: Color::new(0x23, 0x23, 0x2d),
            fg: Color::new(0xe6, 0xe6, 0xf0),
            accent: Color::new(0x8a, 0xb4, 0xf8),
            muted: Color::new(0x80, 0x80, 0x8c),
            success: Color::new(0x81, 0xc7, 0x84),
            warning: Color::new(0xff, 0xb7, 0x4d),
            danger: Color::new(0xef, 0x53, 0x50),
            info: Color::new(0x80, 0xde, 0xea),
            border: Color::new(0x3c, 0x3c, 0x50),
            graph_line: Color::new(0x8a, 0xb4, 0xf8),
        }
    }
}

/// Dark and light variants of a theme.
#[derive(Debug, Clone, Default)]
pub struct ThemeVariants {
    pub dark: Option<ThemeColors>,
    pub light: Option<ThemeColors>,
}

/// A complete theme with metadata.
#[derive(Debug, Clone)]
pub struct NamedTheme {
    /// Unique identifier (filename without extension)
    pub id: String,
    /// Display name
    pub name: String,
    pub variants: ThemeVariants,
    pub is_builtin: bool,
}

impl NamedTheme {
    /// Colors for the requested appearance, falling back to the other
    /// variant when the theme only ships one.
    pub fn get_colors(&self, is_dark: bool) -> ThemeColors {
        let (preferred, fallback) = if is_dark {
            (self.variants.dark, self.variants.light)
        } else {
            (self.variants.light, self.variants.dark)
        };
        preferred.or(fallback).unwrap_or_default()
    }

    pub fn has_dark(&self) -> bool {
        self.variants.dark.is_some()
    }

    pub fn has_light(&self) -> bool {
        self.variants.light.is_some()
    }
}
