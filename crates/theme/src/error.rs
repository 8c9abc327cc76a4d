#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("Invalid theme file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid color for '{field}': {value}")]
    InvalidColor { field: &'static str, value: String },

    #[error("Theme must define a dark or light variant")]
    NoVariants,
}
