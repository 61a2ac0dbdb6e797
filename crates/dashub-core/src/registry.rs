//! Model registry capability and an in-memory implementation

use crate::text::camel_case_to_spaces;
use crate::urls::{self, AdminView};
use crate::{DashubError, DashubResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metadata of a registered model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
	/// Owning app label
	pub app_label: String,
	/// Class-style name, e.g. `BlogPost`
	pub object_name: String,
	/// Lower-cased name, e.g. `blogpost`
	pub model_name: String,
	/// Human-readable singular name
	pub verbose_name: String,
	/// Human-readable plural name
	pub verbose_name_plural: String,
}

impl ModelInfo {
	/// Create model metadata with derived names
	///
	/// # Examples
	///
	/// ```
	/// use dashub_core::ModelInfo;
	///
	/// let info = ModelInfo::new("shop", "OrderLine");
	/// assert_eq!(info.model_name, "orderline");
	/// assert_eq!(info.verbose_name, "order line");
	/// assert_eq!(info.verbose_name_plural, "order lines");
	/// ```
	pub fn new(app_label: impl Into<String>, object_name: impl Into<String>) -> Self {
		let object_name = object_name.into();
		let verbose_name = camel_case_to_spaces(&object_name);
		Self {
			app_label: app_label.into(),
			model_name: object_name.to_lowercase(),
			verbose_name_plural: format!("{}s", verbose_name),
			verbose_name,
			object_name,
		}
	}

	/// Set the singular verbose name
	pub fn with_verbose_name(mut self, name: impl Into<String>) -> Self {
		self.verbose_name = name.into();
		self
	}

	/// Set the plural verbose name
	pub fn with_verbose_name_plural(mut self, name: impl Into<String>) -> Self {
		self.verbose_name_plural = name.into();
		self
	}

	/// Lower-cased `app_label.model_name` lookup key
	pub fn key(&self) -> String {
		format!("{}.{}", self.app_label, self.model_name).to_lowercase()
	}
}

/// Metadata of an installed app
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInfo {
	pub app_label: String,
	pub verbose_name: String,
	pub models: Vec<ModelInfo>,
}

impl AppInfo {
	/// Create an app without models
	pub fn new(app_label: impl Into<String>, verbose_name: impl Into<String>) -> Self {
		Self {
			app_label: app_label.into(),
			verbose_name: verbose_name.into(),
			models: Vec::new(),
		}
	}

	/// Add a model
	pub fn with_model(mut self, model: ModelInfo) -> Self {
		self.models.push(model);
		self
	}
}

/// Lookup interface onto the host's app and model registry
pub trait ModelRegistry: Send + Sync {
	/// Labels of all installed apps
	fn installed_apps(&self) -> Vec<String>;

	/// App metadata by label
	fn get_app(&self, app_label: &str) -> Option<AppInfo>;

	/// Model metadata; `model_name` is matched case-insensitively
	fn get_model(&self, app_label: &str, model_name: &str) -> Option<ModelInfo>;

	/// Reverse a named route such as `admin:blog_post_changelist`
	fn reverse(&self, route: &str, args: &[&str]) -> Option<String>;

	/// Whether an app label is installed (case-insensitive)
	fn is_installed(&self, app_label: &str) -> bool {
		self.installed_apps()
			.iter()
			.any(|label| label.eq_ignore_ascii_case(app_label))
	}

	/// Resolve an `app_label.ModelName` path
	fn resolve_model(&self, path: &str) -> DashubResult<ModelInfo> {
		let (app_label, model_name) = split_model_path(path)?;
		self.get_model(app_label, model_name)
			.ok_or_else(|| DashubError::ModelNotFound(path.to_string()))
	}
}

/// Split `app_label.ModelName` into its parts
pub fn split_model_path(path: &str) -> DashubResult<(&str, &str)> {
	match path.split_once('.') {
		Some((app, model)) if !app.is_empty() && !model.is_empty() && !model.contains('.') => {
			Ok((app, model))
		}
		_ => Err(DashubError::InvalidModelPath(path.to_string())),
	}
}

/// Registry built up front, for hosts without a dynamic app registry and
/// for tests
///
/// Admin routes (`changelist`, `add`, `change`) are derived for every
/// registered model under the configured site name; extra named routes can be
/// added with [`StaticRegistry::with_route`].
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
	site: String,
	apps: IndexMap<String, AppInfo>,
	routes: HashMap<String, String>,
}

impl StaticRegistry {
	/// Create an empty registry for the given admin site name
	pub fn new(site: impl Into<String>) -> Self {
		Self {
			site: site.into(),
			apps: IndexMap::new(),
			routes: HashMap::new(),
		}
	}

	/// Register an app and its models
	pub fn with_app(mut self, app: AppInfo) -> Self {
		self.apps.insert(app.app_label.to_lowercase(), app);
		self
	}

	/// Register a named route
	pub fn with_route(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
		self.routes.insert(name.into(), url.into());
		self
	}

	fn reverse_admin(&self, route: &str, args: &[&str]) -> Option<String> {
		let (site, name) = route.split_once(':')?;
		if site != self.site {
			return None;
		}
		self.apps
			.values()
			.flat_map(|app| app.models.iter())
			.find_map(|model| {
				[AdminView::Changelist, AdminView::Add, AdminView::Change]
					.into_iter()
					.find(|view| name == urls::route_name(&model.app_label, &model.model_name, *view))
					.and_then(|view| match view {
						AdminView::Change => args.first().map(|pk| {
							format!("/{}/{}/{}/{}/change/", site, model.app_label, model.model_name, pk)
						}),
						AdminView::Add => Some(format!(
							"/{}/{}/{}/add/",
							site, model.app_label, model.model_name
						)),
						AdminView::Changelist => {
							Some(format!("/{}/{}/{}/", site, model.app_label, model.model_name))
						}
					})
			})
	}
}

impl ModelRegistry for StaticRegistry {
	fn installed_apps(&self) -> Vec<String> {
		self.apps.values().map(|app| app.app_label.clone()).collect()
	}

	fn get_app(&self, app_label: &str) -> Option<AppInfo> {
		self.apps.get(&app_label.to_lowercase()).cloned()
	}

	fn get_model(&self, app_label: &str, model_name: &str) -> Option<ModelInfo> {
		let model_name = model_name.to_lowercase();
		self.apps
			.get(&app_label.to_lowercase())?
			.models
			.iter()
			.find(|model| model.model_name == model_name)
			.cloned()
	}

	fn reverse(&self, route: &str, args: &[&str]) -> Option<String> {
		if let Some(url) = self.routes.get(route) {
			return Some(url.clone());
		}
		self.reverse_admin(route, args)
	}
}
