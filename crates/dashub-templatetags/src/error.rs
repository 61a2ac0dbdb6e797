//! Errors raised while rendering template fragments

use thiserror::Error;

/// Template tag errors
#[derive(Debug, Error)]
pub enum TemplateTagError {
	/// Template could not be loaded or rendered
	#[error("Template error: {0}")]
	Template(#[from] tera::Error),

	/// Value could not be serialized for a template
	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

/// Result type for template tags
pub type TemplateTagResult<T> = Result<T, TemplateTagError>;
