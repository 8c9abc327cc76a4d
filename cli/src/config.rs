use cradle_metrics::{ComfortBands, ThresholdConfig, DEFAULT_KWH_PER_PHONE_CHARGE};
use cradle_theme::{get_theme_by_id, NamedTheme, ThemeColors as PaletteColors};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::theme::ThemeColors;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AppearanceMode {
    #[default]
    Auto,
    Dark,
    Light,
}

impl AppearanceMode {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "dark" => AppearanceMode::Dark,
            "light" => AppearanceMode::Light,
            _ => AppearanceMode::Auto,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AppearanceMode::Auto => "Auto",
            AppearanceMode::Dark => "Dark",
            AppearanceMode::Light => "Light",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            AppearanceMode::Auto => AppearanceMode::Dark,
            AppearanceMode::Dark => AppearanceMode::Light,
            AppearanceMode::Light => AppearanceMode::Auto,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "off" | "none" => LogLevel::Off,
            "error" => LogLevel::Error,
            "info" => LogLevel::Info,
            "debug" => LogLevel::Debug,
            "trace" => LogLevel::Trace,
            _ => LogLevel::Warn,
        }
    }

    pub fn as_tracing_level(&self) -> Option<tracing::Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Trace => Some(tracing::Level::TRACE),
        }
    }
}

fn default_theme_name() -> String {
    "default".to_string()
}

/// Manual override range of the PCM blanket, in °C.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlanketConfig {
    pub min_c: f64,
    pub max_c: f64,
    pub target_c: f64,
    pub step_c: f64,
}

impl BlanketConfig {
    /// Finite, ordered range with a finite positive step and finite target.
    pub fn is_valid(&self) -> bool {
        self.min_c.is_finite()
            && self.max_c.is_finite()
            && self.min_c < self.max_c
            && self.target_c.is_finite()
            && self.step_c.is_finite()
            && self.step_c > 0.0
    }
}

impl Default for BlanketConfig {
    fn default() -> Self {
        Self {
            min_c: 28.0,
            max_c: 32.0,
            target_c: 30.0,
            step_c: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImpactConfig {
    /// Number of most recent samples plotted.
    pub window: usize,
    pub kwh_per_phone_charge: f64,
}

impl Default for ImpactConfig {
    fn default() -> Self {
        Self {
            window: 7,
            kwh_per_phone_charge: DEFAULT_KWH_PER_PHONE_CHARGE,
        }
    }
}

/// Temperature span the heat map colours are scaled to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapConfig {
    pub min_c: f64,
    pub max_c: f64,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            min_c: 25.0,
            max_c: 40.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub appearance: AppearanceMode,
    #[serde(default = "default_theme_name")]
    pub theme: String,
    pub log_level: LogLevel,
    pub thresholds: ThresholdConfig,
    pub comfort_bands: ComfortBands,
    pub blanket: BlanketConfig,
    pub impact: ImpactConfig,
    pub heatmap: HeatmapConfig,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            appearance: AppearanceMode::Auto,
            theme: default_theme_name(),
            log_level: LogLevel::default(),
            thresholds: ThresholdConfig::default(),
            comfort_bands: ComfortBands::default(),
            blanket: BlanketConfig::default(),
            impact: ImpactConfig::default(),
            heatmap: HeatmapConfig::default(),
        }
    }
}

pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join("cradle")
}

pub fn runtime_dir() -> PathBuf {
    dirs::runtime_dir()
        .or_else(dirs::cache_dir)
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("cradle")
}

pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

pub fn themes_dir() -> PathBuf {
    config_dir().join("themes")
}

pub fn ensure_dirs() -> std::io::Result<()> {
    fs::create_dir_all(config_dir())?;
    Ok(())
}

impl UserConfig {
    pub fn load() -> Self {
        let path = config_path();
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => Self::parse(&content),
            Err(_) => Self::default(),
        }
    }

    /// Parses config TOML, falling back to defaults when it is malformed.
    pub fn parse(content: &str) -> Self {
        let mut config: Self = toml::from_str(content).unwrap_or_default();
        config.sanitize();
        config
    }

    /// Resets sections whose values would break the dashboard controls.
    pub fn sanitize(&mut self) {
        if !self.blanket.is_valid() {
            warn!(
                min_c = self.blanket.min_c,
                max_c = self.blanket.max_c,
                target_c = self.blanket.target_c,
                step_c = self.blanket.step_c,
                "Invalid blanket range in config, using defaults"
            );
            self.blanket = BlanketConfig::default();
        }
    }

    pub fn save(&self) -> std::io::Result<()> {
        let _ = ensure_dirs();
        let path = config_path();
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        fs::write(path, content)
    }

    pub fn merge_with_args(&mut self, appearance: Option<&str>, theme: Option<&str>) {
        if let Some(a) = appearance {
            self.appearance = AppearanceMode::from_str(a);
        }
        if let Some(t) = theme {
            self.theme = t.to_string();
        }
    }
}

pub struct RuntimeConfig {
    pub user_config: UserConfig,
    pub terminal_is_dark: bool,
    current_theme: NamedTheme,
}

impl RuntimeConfig {
    pub fn new(user_config: UserConfig) -> Self {
        let terminal_is_dark = detect_terminal_dark_mode();
        let current_theme = resolve_theme(&user_config.theme);

        debug!(
            theme = %current_theme.id,
            terminal_is_dark,
            "Runtime config resolved"
        );

        Self {
            user_config,
            terminal_is_dark,
            current_theme,
        }
    }

    pub fn is_dark_mode(&self) -> bool {
        match self.user_config.appearance {
            AppearanceMode::Auto => self.terminal_is_dark,
            AppearanceMode::Dark => true,
            AppearanceMode::Light => false,
        }
    }

    pub fn palette(&self) -> PaletteColors {
        self.current_theme.get_colors(self.is_dark_mode())
    }

    pub fn theme(&self) -> ThemeColors {
        self.palette().into()
    }

    pub fn theme_id(&self) -> &str {
        &self.current_theme.id
    }

    pub fn theme_name(&self) -> &str {
        &self.current_theme.name
    }

    pub fn appearance_label(&self) -> &'static str {
        self.user_config.appearance.label()
    }

    pub fn set_theme(&mut self, theme_id: &str) {
        if let Some(theme) = get_theme_by_id(theme_id, Some(&themes_dir())) {
            self.current_theme = theme;
            self.user_config.theme = theme_id.to_string();
            if let Err(e) = self.user_config.save() {
                warn!(error = %e, "Failed to persist theme choice");
            }
        }
    }

    pub fn cycle_appearance(&mut self) {
        self.user_config.appearance = self.user_config.appearance.next();
        if let Err(e) = self.user_config.save() {
            warn!(error = %e, "Failed to persist appearance");
        }
    }
}

fn resolve_theme(id: &str) -> NamedTheme {
    let dir = themes_dir();
    get_theme_by_id(id, Some(&dir))
        .or_else(|| {
            warn!(theme = id, "Unknown theme, using default");
            get_theme_by_id("default", None)
        })
        .unwrap_or_else(|| NamedTheme {
            id: "default".into(),
            name: "Default".into(),
            variants: cradle_theme::ThemeVariants {
                dark: Some(PaletteColors::default()),
                light: None,
            },
            is_builtin: true,
        })
}

/// Reads `COLORFGBG` ("fg;bg") as set by most terminals. Background indices
/// 7 and 15 are light; anything else, or no variable, is treated as dark.
fn detect_terminal_dark_mode() -> bool {
    std::env::var("COLORFGBG")
        .ok()
        .map(|v| colorfgbg_is_dark(&v))
        .unwrap_or(true)
}

fn colorfgbg_is_dark(value: &str) -> bool {
    match value.rsplit(';').next().and_then(|bg| bg.trim().parse::<u8>().ok()) {
        Some(7) | Some(15) => false,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_demo() {
        let config = UserConfig::default();
        assert_eq!(config.blanket.min_c, 28.0);
        assert_eq!(config.blanket.max_c, 32.0);
        assert_eq!(config.blanket.target_c, 30.0);
        assert_eq!(config.comfort_bands, ComfortBands::default());
        assert_eq!(config.impact.window, 7);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = UserConfig::parse(
            r#"
theme = "nursery"

[comfort_bands]
low_max = 40.0
"#,
        );
        assert_eq!(config.theme, "nursery");
        assert_eq!(config.comfort_bands.low_max, 40.0);
        assert_eq!(config.comfort_bands.medium_max, 99.0);
        assert_eq!(config.appearance, AppearanceMode::Auto);
    }

    #[test]
    fn test_malformed_config_is_default() {
        let config = UserConfig::parse("theme = [");
        assert_eq!(config.theme, "default");
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = UserConfig::default();
        config.log_level = LogLevel::Debug;
        config.thresholds.weight_gain_threshold_kg = 4.0;

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed = UserConfig::parse(&text);
        assert_eq!(parsed.log_level, LogLevel::Debug);
        assert_eq!(parsed.thresholds.weight_gain_threshold_kg, 4.0);
    }

    #[test]
    fn test_non_finite_blanket_falls_back_to_defaults() {
        for content in [
            "[blanket]\nmin_c = nan\n",
            "[blanket]\nmin_c = -inf\n",
            "[blanket]\nmax_c = inf\n",
            "[blanket]\nstep_c = 0.0\n",
            "[blanket]\nmin_c = 32.0\nmax_c = 28.0\n",
        ] {
            let config = UserConfig::parse(content);
            assert_eq!(config.blanket, BlanketConfig::default(), "{content}");
        }
    }

    #[test]
    fn test_valid_custom_blanket_is_kept() {
        let config = UserConfig::parse("[blanket]\nmin_c = 26.0\nmax_c = 34.0\nstep_c = 0.5\n");
        assert_eq!(config.blanket.min_c, 26.0);
        assert_eq!(config.blanket.max_c, 34.0);
        assert_eq!(config.blanket.step_c, 0.5);
    }

    #[test]
    fn test_merge_with_args() {
        let mut config = UserConfig::default();
        config.merge_with_args(Some("LIGHT"), Some("nursery"));
        assert_eq!(config.appearance, AppearanceMode::Light);
        assert_eq!(config.theme, "nursery");

        config.merge_with_args(None, None);
        assert_eq!(config.appearance, AppearanceMode::Light);
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("DEBUG"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("none"), LogLevel::Off);
        assert_eq!(LogLevel::from_str("bogus"), LogLevel::Warn);
        assert!(LogLevel::Off.as_tracing_level().is_none());
    }

    #[test]
    fn test_colorfgbg() {
        assert!(colorfgbg_is_dark("15;0"));
        assert!(!colorfgbg_is_dark("0;15"));
        assert!(!colorfgbg_is_dark("0;default;7"));
        assert!(colorfgbg_is_dark("garbage"));
    }
}
