//! Application core module.
//!
//! Holds the dashboard state: the demo feed, the two user controls (adaptive
//! mode and the manual override target) and the derived model rendered from
//! them.

mod tui;
pub mod types;

pub use tui::run_tui;
pub use types::{Action, AppView};

use tracing::{debug, info};

use crate::config::{themes_dir, BlanketConfig, RuntimeConfig, UserConfig};
use crate::data::{DashboardModel, DemoFeed};
use crate::theme::ThemeColors;

pub struct App {
    pub config: RuntimeConfig,
    pub view: AppView,
    pub feed: DemoFeed,
    pub adaptive_mode: bool,
    pub target_c: f64,
    pub model: DashboardModel,
}

/// Keeps a target inside the blanket range. The range is sanitized in
/// `App::new`, so the clamp bounds are finite and ordered.
fn clamp_target(target_c: f64, blanket: &BlanketConfig) -> f64 {
    target_c.clamp(blanket.min_c, blanket.max_c)
}

impl App {
    pub fn new(mut user_config: UserConfig) -> Self {
        user_config.sanitize();
        info!(theme = %user_config.theme, "Initializing app");

        let feed = DemoFeed::new();
        let adaptive_mode = true;
        let target_c = clamp_target(user_config.blanket.target_c, &user_config.blanket);
        let model = DashboardModel::build(&feed, &user_config, adaptive_mode, target_c);

        Self {
            config: RuntimeConfig::new(user_config),
            view: AppView::Main,
            feed,
            adaptive_mode,
            target_c,
            model,
        }
    }

    pub fn current_theme(&self) -> ThemeColors {
        self.config.theme()
    }

    fn rebuild(&mut self) {
        self.model = DashboardModel::build(
            &self.feed,
            &self.config.user_config,
            self.adaptive_mode,
            self.target_c,
        );
    }

    fn step_target(&mut self, direction: f64) {
        let blanket = self.config.user_config.blanket;
        let next = clamp_target(self.target_c + direction * blanket.step_c, &blanket);
        if next != self.target_c {
            debug!(from = self.target_c, to = next, "Manual override changed");
            self.target_c = next;
            self.rebuild();
        }
    }

    fn cycle_theme(&mut self) {
        let themes = cradle_theme::get_all_themes(Some(&themes_dir()));
        if let Some(next) = cradle_theme::next_theme_id(&themes, self.config.theme_id()) {
            debug!(theme = %next, "Switching theme");
            self.config.set_theme(&next);
        }
    }

    /// Applies an action. Returns `false` when the app should exit.
    pub fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return false,
            Action::ToggleHelp => {
                self.view = match self.view {
                    AppView::Help => AppView::Main,
                    AppView::Main => AppView::Help,
                };
            }
            Action::ToggleAdaptiveMode => {
                self.adaptive_mode = !self.adaptive_mode;
                info!(adaptive_mode = self.adaptive_mode, "Adaptive mode toggled");
                self.rebuild();
            }
            Action::IncreaseTarget => self.step_target(1.0),
            Action::DecreaseTarget => self.step_target(-1.0),
            Action::CycleTheme => self.cycle_theme(),
            Action::CycleAppearance => self.config.cycle_appearance(),
            Action::None => {}
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(UserConfig::default())
    }

    #[test]
    fn test_quit_stops_loop() {
        let mut app = app();
        assert!(!app.handle_action(Action::Quit));
        assert!(app.handle_action(Action::None));
    }

    #[test]
    fn test_toggle_help() {
        let mut app = app();
        app.handle_action(Action::ToggleHelp);
        assert_eq!(app.view, AppView::Help);
        app.handle_action(Action::ToggleHelp);
        assert_eq!(app.view, AppView::Main);
    }

    #[test]
    fn test_adaptive_mode_toggle_updates_model() {
        let mut app = app();
        assert!(app.model.blanket.adaptive_mode);
        app.handle_action(Action::ToggleAdaptiveMode);
        assert!(!app.adaptive_mode);
        assert!(!app.model.blanket.adaptive_mode);
    }

    #[test]
    fn test_target_is_clamped_to_range() {
        let mut app = app();
        for _ in 0..10 {
            app.handle_action(Action::IncreaseTarget);
        }
        assert_eq!(app.target_c, 32.0);
        assert_eq!(app.model.blanket.progress, Some(1.0));

        for _ in 0..10 {
            app.handle_action(Action::DecreaseTarget);
        }
        assert_eq!(app.target_c, 28.0);
        assert_eq!(app.model.blanket.progress, Some(0.0));
    }

    #[test]
    fn test_nan_blanket_bound_does_not_crash() {
        let app = App::new(UserConfig::parse("[blanket]\nmin_c = nan\n"));
        assert_eq!(app.target_c, 30.0);
        assert_eq!(app.model.blanket.progress, Some(0.5));

        let mut config = UserConfig::default();
        config.blanket.min_c = f64::NAN;
        let mut app = App::new(config);
        app.handle_action(Action::IncreaseTarget);
        assert_eq!(app.target_c, 31.0);
    }

    #[test]
    fn test_out_of_range_default_target_is_clamped() {
        let mut config = UserConfig::default();
        config.blanket.target_c = 45.0;
        let app = App::new(config);
        assert_eq!(app.target_c, 32.0);
    }
}
