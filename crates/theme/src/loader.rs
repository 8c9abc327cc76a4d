use crate::{Color, NamedTheme, ThemeColors, ThemeError, ThemeVariants};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct ThemeFile {
    name: String,
    dark: Option<ThemeColorsToml>,
    light: Option<ThemeColorsToml>,
}

#[derive(Debug, Deserialize)]
struct ThemeColorsToml {
    bg: String,
    dialog_bg: String,
    fg: String,
    accent: String,
    muted: String,
    success: String,
    warning: String,
    danger: String,
    info: String,
    border: String,
    graph_line: String,
}

fn parse_color(field: &'static str, value: &str) -> Result<Color, ThemeError> {
    Color::from_hex(value).ok_or_else(|| ThemeError::InvalidColor {
        field,
        value: value.to_string(),
    })
}

fn convert_colors(colors: &ThemeColorsToml) -> Result<ThemeColors, ThemeError> {
    Ok(ThemeColors {
        bg: parse_color("bg", &colors.bg)?,
        dialog_bg: parse_color("dialog_bg", &colors.dialog_bg)?,
        fg: parse_color("fg", &colors.fg)?,
        accent: parse_color("accent", &colors.accent)?,
        muted: parse_color("muted", &colors.muted)?,
        success: parse_color("success", &colors.success)?,
        warning: parse_color("warning", &colors.warning)?,
        danger: parse_color("danger", &colors.danger)?,
        info: parse_color("info", &colors.info)?,
        border: parse_color("border", &colors.border)?,
        graph_line: parse_color("graph_line", &colors.graph_line)?,
    })
}

pub fn parse_theme_toml(id: &str, content: &str, is_builtin: bool) -> Result<NamedTheme, ThemeError> {
    let theme_file: ThemeFile = toml::from_str(content)?;

    let dark = theme_file.dark.as_ref().map(convert_colors).transpose()?;
    let light = theme_file.light.as_ref().map(convert_colors).transpose()?;

    if dark.is_none() && light.is_none() {
        return Err(ThemeError::NoVariants);
    }

    Ok(NamedTheme {
        id: id.to_string(),
        name: theme_file.name,
        is_builtin,
        variants: ThemeVariants { dark, light },
    })
}

/// Loads every `*.toml` theme in `dir`. Files that fail to parse are skipped.
pub fn load_themes_from_dir(dir: &Path) -> Vec<NamedTheme> {
    if !dir.exists() {
        return Vec::new();
    }

    let mut themes = Vec::new();

    if let Ok(entries) = fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|e| e == "toml") {
                if let Ok(content) = fs::read_to_string(&path) {
                    let id = path
                        .file_stem()
                        .and_then(|s| s.to_str())
                        .unwrap_or("unknown")
                        .to_string();

                    if let Ok(mut theme) = parse_theme_toml(&id, &content, false) {
                        theme.name = format!("{} (user)", theme.name);
                        themes.push(theme);
                    }
                }
            }
        }
    }

    themes.sort_by(|a, b| a.id.cmp(&b.id));
    themes
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LIGHT_ONLY: &str = r##"
name = "Mint"

[light]
bg = "#ffffff"
dialog_bg = "#f4f4f4"
fg = "#111111"
accent = "#2b6cb0"
muted = "#718096"
success = "#c6f6d5"
warning = "#feebc8"
danger = "#fed7d7"
info = "#e6fffa"
border = "#e2e8f0"
graph_line = "#3182ce"
"##;

    #[test]
    fn test_parse_light_only() {
        let theme = parse_theme_toml("mint", LIGHT_ONLY, false).unwrap();
        assert_eq!(theme.name, "Mint");
        assert!(!theme.has_dark());
        assert_eq!(
            theme.get_colors(false).success,
            Color::new(0xc6, 0xf6, 0xd5)
        );
    }

    #[test]
    fn test_invalid_color_names_field() {
        let content = LIGHT_ONLY.replace("#fed7d7", "red");
        match parse_theme_toml("mint", &content, false) {
            Err(ThemeError::InvalidColor { field, value }) => {
                assert_eq!(field, "danger");
                assert_eq!(value, "red");
            }
            other => panic!("expected InvalidColor, got {:?}", other),
        }
    }

    #[test]
    fn test_no_variants() {
        let result = parse_theme_toml("empty", "name = \"Empty\"\n", false);
        assert!(matches!(result, Err(ThemeError::NoVariants)));
    }

    #[test]
    fn test_malformed_toml() {
        let result = parse_theme_toml("bad", "name = ", false);
        assert!(matches!(result, Err(ThemeError::Parse(_))));
    }

    #[test]
    fn test_missing_dir_is_empty() {
        let themes = load_themes_from_dir(Path::new("/nonexistent/cradle/themes"));
        assert!(themes.is_empty());
    }
}
