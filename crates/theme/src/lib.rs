mod builtin;
mod error;
mod loader;
mod types;

pub use builtin::get_builtin_themes;
pub use error::ThemeError;
pub use loader::{load_themes_from_dir, parse_theme_toml};
pub use types::{Color, NamedTheme, ThemeColors, ThemeVariants};

use std::path::Path;

pub fn get_all_themes(user_themes_dir: Option<&Path>) -> Vec<NamedTheme> {
    let mut themes = get_builtin_themes();
    if let Some(dir) = user_themes_dir {
        themes.extend(load_themes_from_dir(dir));
    }
    themes
}

pub fn get_theme_by_id(id: &str, user_themes_dir: Option<&Path>) -> Option<NamedTheme> {
    get_all_themes(user_themes_dir)
        .into_iter()
        .find(|t| t.id == id)
}

/// Id of the theme after `current` in `themes`, wrapping around.
pub fn next_theme_id(themes: &[NamedTheme], current: &str) -> Option<String> {
    if themes.is_empty() {
        return None;
    }
    let next = themes
        .iter()
        .position(|t| t.id == current)
        .map_or(0, |i| (i + 1) % themes.len());
    Some(themes[next].id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let theme = get_theme_by_id("nursery", None).unwrap();
        assert!(theme.is_builtin);
        assert!(get_theme_by_id("missing", None).is_none());
    }

    #[test]
    fn test_next_theme_wraps() {
        let themes = get_builtin_themes();
        let last = themes.last().unwrap().id.clone();
        assert_eq!(next_theme_id(&themes, &last), Some(themes[0].id.clone()));
        assert_eq!(
            next_theme_id(&themes, "does-not-exist"),
            Some(themes[0].id.clone())
        );
        assert_eq!(next_theme_id(&[], "default"), None);
    }
}
