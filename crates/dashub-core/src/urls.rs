//! Admin URL naming and reversal with placeholder fallbacks

use crate::registry::{ModelRegistry, split_model_path};

/// Placeholder URL used whenever a link target cannot be resolved
pub const PLACEHOLDER_URL: &str = "#";

/// Admin views that have named routes per model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminView {
	Changelist,
	Add,
	Change,
}

impl AdminView {
	fn suffix(self) -> &'static str {
		match self {
			AdminView::Changelist => "changelist",
			AdminView::Add => "add",
			AdminView::Change => "change",
		}
	}
}

/// Route name without the site namespace, e.g. `blog_post_changelist`
pub fn route_name(app_label: &str, model_name: &str, view: AdminView) -> String {
	format!(
		"{}_{}_{}",
		app_label.to_lowercase(),
		model_name.to_lowercase(),
		view.suffix()
	)
}

/// Fully qualified admin route, e.g. `admin:blog_post_changelist`
pub fn admin_route(site: &str, app_label: &str, model_name: &str, view: AdminView) -> String {
	format!("{}:{}", site, route_name(app_label, model_name, view))
}

/// Changelist URL for an `app_label.ModelName` path
///
/// Returns `"#"` for malformed paths and unknown routes.
///
/// # Examples
///
/// ```
/// use dashub_core::{AppInfo, ModelInfo, StaticRegistry};
/// use dashub_core::urls::admin_url;
///
/// let registry = StaticRegistry::new("admin")
///     .with_app(AppInfo::new("blog", "Blog").with_model(ModelInfo::new("blog", "Post")));
///
/// assert_eq!(admin_url(&registry, "blog.Post", "admin"), "/admin/blog/post/");
/// assert_eq!(admin_url(&registry, "blog.Comment", "admin"), "#");
/// assert_eq!(admin_url(&registry, "nonsense", "admin"), "#");
/// ```
pub fn admin_url(registry: &dyn ModelRegistry, model_path: &str, site: &str) -> String {
	let Ok((app_label, model_name)) = split_model_path(model_path) else {
		return PLACEHOLDER_URL.to_string();
	};
	let route = admin_route(site, app_label, model_name, AdminView::Changelist);
	registry.reverse(&route, &[]).unwrap_or_else(|| {
		tracing::debug!("No admin route '{}' for '{}'", route, model_path);
		PLACEHOLDER_URL.to_string()
	})
}

/// URL for a configured custom link
///
/// Absolute `http(s)` URLs are kept, anything else is tried as a route name
/// and falls back to the literal text.
pub fn custom_url(registry: &dyn ModelRegistry, url: &str, site: &str) -> String {
	if url.starts_with("http") {
		return url.to_string();
	}
	registry
		.reverse(url, &[])
		.or_else(|| registry.reverse(&format!("{}:{}", site, url), &[]))
		.unwrap_or_else(|| url.to_string())
}
