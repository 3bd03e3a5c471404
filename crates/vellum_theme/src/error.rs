//! Theme error types

use thiserror::Error;

/// Errors raised while building or loading themes
#[derive(Error, Debug)]
pub enum ThemeError {
    /// TOML document or theme table failed to parse
    #[error("Failed to parse theme configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Theme definition failed to serialize
    #[error("Failed to serialize theme definition: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Configuration file could not be read
    #[error("Failed to read theme configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Theme name is empty or whitespace
    #[error("Theme name must not be empty")]
    EmptyName,

    /// Color string is not `#RRGGBB` or `#RRGGBBAA`
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Metric value is negative or not finite
    #[error("Theme '{theme}' has an invalid metric: {field}")]
    InvalidMetric { theme: String, field: &'static str },

    /// Font size or weight outside the usable range
    #[error("Theme '{theme}' has an invalid font: {detail}")]
    InvalidFont { theme: String, detail: String },
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
