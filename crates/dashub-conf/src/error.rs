//! Settings errors

use thiserror::Error;

/// Errors raised while loading or resolving settings
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SettingsError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	/// Environment variable holding settings is not valid UTF-8
	#[error("Environment variable '{0}' is not valid unicode")]
	EnvNotUnicode(String),

	/// `theme_color` is not `#RRGGBB`
	#[error("Invalid hex colour '{0}', expected 6 hex digits after an optional '#'")]
	InvalidColor(String),
}

/// Result type for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;
