//! Error types shared by the dashub crates

use thiserror::Error;

/// Errors raised by host lookups
///
/// None of these ever reach a rendered page: callers collapse them into
/// placeholder values (`"#"` URLs, literal labels, hidden links).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DashubError {
	/// Model path is not of the form `app_label.ModelName`
	#[error("Invalid model path '{0}', expected 'app_label.ModelName'")]
	InvalidModelPath(String),

	/// Model is not registered with the admin
	#[error("Model '{0}' is not registered with admin")]
	ModelNotFound(String),

	/// App label is not installed
	#[error("App '{0}' is not installed")]
	AppNotFound(String),

	/// Named route could not be reversed
	#[error("Reverse for '{0}' not found")]
	NoReverseMatch(String),

	/// Permission check itself failed
	#[error("Permission check failed: {0}")]
	PermissionCheck(String),
}

/// Result type for host lookups
pub type DashubResult<T> = Result<T, DashubError>;
