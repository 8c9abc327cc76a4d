//! Core types for the TUI application.

/// Actions that can be performed in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleHelp,
    ToggleAdaptiveMode,
    IncreaseTarget,
    DecreaseTarget,
    CycleTheme,
    CycleAppearance,
    None,
}

/// Current view/screen of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    Main,
    Help,
}
