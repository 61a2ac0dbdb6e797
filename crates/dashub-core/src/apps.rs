//! Per-request app list supplied by the host admin site
//!
//! Mirrors the `available_apps` structure an admin index page receives: one
//! entry per app the user may see, each already filtered down to the models
//! the user has permissions for.

use serde::{Deserialize, Serialize};

/// One app of the `available_apps` list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppEntry {
	/// Display name
	pub name: String,
	pub app_label: String,
	pub app_url: String,
	pub has_module_perms: bool,
	pub models: Vec<ModelEntry>,
}

impl AppEntry {
	/// Create an app entry with the conventional admin index URL
	pub fn new(app_label: impl Into<String>, name: impl Into<String>) -> Self {
		let app_label = app_label.into();
		Self {
			name: name.into(),
			app_url: format!("/admin/{}/", app_label),
			app_label,
			has_module_perms: true,
			models: Vec::new(),
		}
	}

	/// Placeholder group for custom links whose app is not installed
	pub fn placeholder(app_label: impl Into<String>) -> Self {
		let app_label = app_label.into();
		Self {
			name: app_label.clone(),
			app_label,
			app_url: crate::urls::PLACEHOLDER_URL.to_string(),
			has_module_perms: true,
			models: Vec::new(),
		}
	}

	/// Add a model
	pub fn with_model(mut self, model: ModelEntry) -> Self {
		self.models.push(model);
		self
	}
}

/// One model of an [`AppEntry`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelEntry {
	/// Plural display name
	pub name: String,
	/// Class-style name, e.g. `BlogPost`
	pub object_name: String,
	/// Changelist URL, absent when the user may not view it
	pub admin_url: Option<String>,
	/// Add-form URL, absent when the user may not add
	pub add_url: Option<String>,
	#[serde(default)]
	pub view_only: bool,
	/// Number of stored records, when the host counted them
	#[serde(default)]
	pub count: Option<u64>,
}

impl ModelEntry {
	/// Create a model entry with conventional admin URLs under `/admin/`
	pub fn new(app_label: &str, object_name: impl Into<String>, name: impl Into<String>) -> Self {
		let object_name = object_name.into();
		let model_name = object_name.to_lowercase();
		Self {
			name: name.into(),
			admin_url: Some(format!("/admin/{}/{}/", app_label, model_name)),
			add_url: Some(format!("/admin/{}/{}/add/", app_label, model_name)),
			object_name,
			view_only: false,
			count: None,
		}
	}

	/// Attach a record count
	pub fn with_count(mut self, count: u64) -> Self {
		self.count = Some(count);
		self
	}
}
