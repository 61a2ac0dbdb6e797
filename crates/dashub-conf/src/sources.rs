//! Configuration sources for layered settings
//!
//! Sources are merged in priority order (higher wins) into one
//! [`SettingsOverrides`] which [`crate::resolve`] then lays over the defaults.

use crate::overrides::SettingsOverrides;
use crate::{DashubSettings, SettingsError, SettingsResult, resolve};
use std::env::VarError;
use std::path::PathBuf;

/// Environment variable holding a JSON object of overrides
pub const SETTINGS_ENV_VAR: &str = "DASHUB_SETTINGS";

/// Trait for configuration sources
pub trait SettingsSource: Send + Sync {
	/// Load overrides from this source
	fn load(&self) -> SettingsResult<SettingsOverrides>;

	/// Get the priority of this source (higher = more important)
	fn priority(&self) -> u8;

	/// Get a description of this source
	fn description(&self) -> String;
}

/// TOML file source
pub struct TomlFileSource {
	path: PathBuf,
	required: bool,
}

impl TomlFileSource {
	/// A file that must exist
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			required: true,
		}
	}

	/// A file that is skipped when missing
	pub fn optional(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			required: false,
		}
	}
}

impl SettingsSource for TomlFileSource {
	fn load(&self) -> SettingsResult<SettingsOverrides> {
		if !self.required && !self.path.exists() {
			tracing::debug!("Optional settings file {} not found", self.path.display());
			return Ok(SettingsOverrides::default());
		}
		SettingsOverrides::from_toml_file(&self.path)
	}

	fn priority(&self) -> u8 {
		10
	}

	fn description(&self) -> String {
		format!("TOML file: {}", self.path.display())
	}
}

/// JSON object read from an environment variable
pub struct EnvJsonSource {
	var: String,
}

impl EnvJsonSource {
	/// Read from [`SETTINGS_ENV_VAR`]
	pub fn new() -> Self {
		Self::with_var(SETTINGS_ENV_VAR)
	}

	/// Read from a custom variable
	pub fn with_var(var: impl Into<String>) -> Self {
		Self { var: var.into() }
	}
}

impl Default for EnvJsonSource {
	fn default() -> Self {
		Self::new()
	}
}

impl SettingsSource for EnvJsonSource {
	fn load(&self) -> SettingsResult<SettingsOverrides> {
		match std::env::var(&self.var) {
			Ok(text) if !text.trim().is_empty() => SettingsOverrides::from_json_str(&text),
			Ok(_) | Err(VarError::NotPresent) => Ok(SettingsOverrides::default()),
			Err(VarError::NotUnicode(_)) => {
				tracing::warn!("Settings in '{}' are not valid unicode", self.var);
				Err(SettingsError::EnvNotUnicode(self.var.clone()))
			}
		}
	}

	fn priority(&self) -> u8 {
		20
	}

	fn description(&self) -> String {
		format!("Environment variable: {}", self.var)
	}
}

/// Overrides built in code
pub struct MemorySource {
	overrides: SettingsOverrides,
	priority: u8,
}

impl MemorySource {
	/// Wrap overrides with the highest priority
	pub fn new(overrides: SettingsOverrides) -> Self {
		Self {
			overrides,
			priority: u8::MAX,
		}
	}

	/// Change the priority
	pub fn with_priority(mut self, priority: u8) -> Self {
		self.priority = priority;
		self
	}
}

impl SettingsSource for MemorySource {
	fn load(&self) -> SettingsResult<SettingsOverrides> {
		Ok(self.overrides.clone())
	}

	fn priority(&self) -> u8 {
		self.priority
	}

	fn description(&self) -> String {
		"In-memory overrides".to_string()
	}
}

/// Collects sources and merges them
///
/// # Examples
///
/// ```
/// use dashub_conf::sources::{MemorySource, SettingsLoader};
/// use dashub_conf::SettingsOverrides;
///
/// let settings = SettingsLoader::new()
///     .add_source(MemorySource::new(SettingsOverrides {
///         site_title: Some("Ops".into()),
///         ..SettingsOverrides::default()
///     }))
///     .resolve()
///     .unwrap();
///
/// assert_eq!(settings.site_title.as_deref(), Some("Ops"));
/// ```
#[derive(Default)]
pub struct SettingsLoader {
	sources: Vec<Box<dyn SettingsSource>>,
}

impl SettingsLoader {
	/// Create a loader with no sources
	pub fn new() -> Self {
		Self::default()
	}

	/// Add a source
	pub fn add_source(mut self, source: impl SettingsSource + 'static) -> Self {
		self.sources.push(Box::new(source));
		self
	}

	/// Merge all sources, lowest priority first
	pub fn load(&self) -> SettingsResult<SettingsOverrides> {
		let mut ordered: Vec<&dyn SettingsSource> = self.sources.iter().map(|source| source.as_ref()).collect();
		ordered.sort_by_key(|source| source.priority());

		ordered
			.into_iter()
			.try_fold(SettingsOverrides::default(), |merged, source| -> SettingsResult<_> {
				tracing::debug!("Loading settings from {}", source.description());
				Ok(merged.merge(source.load()?))
			})
	}

	/// Merge all sources and resolve them against the defaults
	pub fn resolve(&self) -> SettingsResult<DashubSettings> {
		resolve(self.load()?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::SettingsError;
	use rstest::rstest;
	use std::io::Write;

	#[rstest]
	fn toml_file_and_memory_layers() {
		// Arrange
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "site_title = \"From file\"\ntheme_color = \"#000000\"").unwrap();
		let loader = SettingsLoader::new()
			.add_source(MemorySource::new(SettingsOverrides {
				site_title: Some("From code".into()),
				..SettingsOverrides::default()
			}))
			.add_source(TomlFileSource::new(file.path()));

		// Act
		let settings = loader.resolve().unwrap();

		// Assert
		assert_eq!(settings.site_title.as_deref(), Some("From code"));
		assert_eq!(settings.theme_color, "#000000");
	}

	#[rstest]
	fn missing_optional_file_is_empty() {
		// Arrange
		let source = TomlFileSource::optional("/nonexistent/dashub.toml");

		// Act
		let overrides = source.load().unwrap();

		// Assert
		assert!(overrides.site_title.is_none());
	}

	#[rstest]
	fn missing_required_file_is_an_error() {
		let source = TomlFileSource::new("/nonexistent/dashub.toml");
		assert!(matches!(source.load(), Err(SettingsError::Io(_))));
	}

	#[rstest]
	fn env_source_reads_json() {
		// Arrange
		let var = "DASHUB_SETTINGS_ENV_SOURCE_TEST";
		// SAFETY: variable name is unique to this test
		unsafe { std::env::set_var(var, r#"{"hide_apps": "auth"}"#) };
		let source = EnvJsonSource::with_var(var);

		// Act
		let overrides = source.load().unwrap();

		// Assert
		let hidden: Vec<String> = overrides.hide_apps.unwrap().into();
		assert_eq!(hidden, vec!["auth"]);
		assert_eq!(source.description(), format!("Environment variable: {}", var));
	}

	#[cfg(unix)]
	#[rstest]
	fn env_source_rejects_non_unicode() {
		// Arrange
		use std::os::unix::ffi::OsStringExt;
		let var = "DASHUB_SETTINGS_NON_UNICODE_TEST";
		// SAFETY: variable name is unique to this test
		unsafe { std::env::set_var(var, std::ffi::OsString::from_vec(vec![b'{', 0xff, b'}'])) };
		let source = EnvJsonSource::with_var(var);

		// Act
		let result = source.load();

		// Assert
		assert!(matches!(result, Err(SettingsError::EnvNotUnicode(name)) if name == var));
	}
}
