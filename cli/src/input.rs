use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{Action, App, AppView};

pub mod keys {
    pub const HELP: &str = "?";
    pub const QUIT: &str = "q";
    pub const ADAPTIVE: &str = "a";
    pub const APPEARANCE: &str = "A";
    pub const THEME: &str = "t";
    pub const TARGET_DOWN: &str = "\u{2190}/-";
    pub const TARGET_UP: &str = "\u{2192}/+";
    pub const ESC: &str = "Esc";
}

pub struct KeyBinding {
    pub key: &'static str,
    pub description: &'static str,
}

pub const KEY_BINDINGS: &[KeyBinding] = &[
    KeyBinding {
        key: keys::ADAPTIVE,
        description: "Toggle blanket adaptive mode",
    },
    KeyBinding {
        key: keys::TARGET_DOWN,
        description: "Lower manual override target",
    },
    KeyBinding {
        key: keys::TARGET_UP,
        description: "Raise manual override target",
    },
    KeyBinding {
        key: keys::THEME,
        description: "Cycle theme",
    },
    KeyBinding {
        key: keys::APPEARANCE,
        description: "Cycle appearance (auto/dark/light)",
    },
    KeyBinding {
        key: keys::HELP,
        description: "Toggle this help",
    },
    KeyBinding {
        key: keys::QUIT,
        description: "Quit",
    },
];

pub fn handle_key(app: &App, key: KeyEvent) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    match app.view {
        AppView::Main => handle_main_keys(key),
        AppView::Help => handle_help_keys(key),
    }
}

fn handle_main_keys(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('?') | KeyCode::Char('/') => Action::ToggleHelp,
        KeyCode::Char('a') => Action::ToggleAdaptiveMode,
        KeyCode::Char('A') => Action::CycleAppearance,
        KeyCode::Char('t') => Action::CycleTheme,
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char('l') => {
            Action::IncreaseTarget
        }
        KeyCode::Left | KeyCode::Char('-') | KeyCode::Char('h') => Action::DecreaseTarget,
        _ => Action::None,
    }
}

fn handle_help_keys(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('/') | KeyCode::Char('q') => {
            Action::ToggleHelp
        }
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_main_keys() {
        assert_eq!(handle_main_keys(press(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(
            handle_main_keys(press(KeyCode::Char('a'))),
            Action::ToggleAdaptiveMode
        );
        assert_eq!(
            handle_main_keys(press(KeyCode::Char('A'))),
            Action::CycleAppearance
        );
        assert_eq!(handle_main_keys(press(KeyCode::Right)), Action::IncreaseTarget);
        assert_eq!(handle_main_keys(press(KeyCode::Char('-'))), Action::DecreaseTarget);
        assert_eq!(handle_main_keys(press(KeyCode::Char('x'))), Action::None);
    }

    #[test]
    fn test_help_keys_close_overlay() {
        assert_eq!(handle_help_keys(press(KeyCode::Esc)), Action::ToggleHelp);
        assert_eq!(handle_help_keys(press(KeyCode::Char('q'))), Action::ToggleHelp);
        assert_eq!(handle_help_keys(press(KeyCode::Char('a'))), Action::None);
    }

    #[test]
    fn test_ctrl_c_quits_from_any_view() {
        let mut app = App::new(crate::config::UserConfig::default());
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(&app, ctrl_c), Action::Quit);

        app.view = AppView::Help;
        assert_eq!(handle_key(&app, ctrl_c), Action::Quit);
    }
}
