//! Configured menu links

use dashub_core::{AdminUser, DashubResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

type PredicateFn = dyn Fn(&dyn AdminUser) -> DashubResult<bool> + Send + Sync;

/// Visibility check attached to a link in code
///
/// An `Err` from the check hides the link.
#[derive(Clone)]
pub struct LinkPredicate(Arc<PredicateFn>);

impl LinkPredicate {
	/// Wrap a closure
	pub fn new<F>(check: F) -> Self
	where
		F: Fn(&dyn AdminUser) -> DashubResult<bool> + Send + Sync + 'static,
	{
		Self(Arc::new(check))
	}

	/// Run the check for a user
	pub fn check(&self, user: &dyn AdminUser) -> DashubResult<bool> {
		(self.0)(user)
	}
}

impl fmt::Debug for LinkPredicate {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("LinkPredicate(..)")
	}
}

/// Where a link points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget<'a> {
	/// URL or named route
	Url(&'a str),
	/// `app_label.ModelName`
	Model(&'a str),
	/// App label, expands to the app's models
	App(&'a str),
}

/// One entry of `topmenu_links`, `usermenu_links` or a `custom_links` group
///
/// # Examples
///
/// ```
/// use dashub_conf::{LinkConfig, LinkTarget};
///
/// let link: LinkConfig = serde_json::from_str(
///     r#"{"name": "Support", "url": "https://example.com", "new_window": true}"#,
/// ).unwrap();
///
/// assert_eq!(link.target(), Some(LinkTarget::Url("https://example.com")));
/// assert!(link.new_window);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinkConfig {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub url: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub model: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub app: Option<String>,
	/// Every permission must hold for the link to show
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub permissions: Vec<String>,
	#[serde(default)]
	pub new_window: bool,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub icon: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub order: Option<i64>,
	#[serde(skip)]
	pub predicate: Option<LinkPredicate>,
}

impl LinkConfig {
	/// Link to a URL or named route
	pub fn url(name: impl Into<String>, url: impl Into<String>) -> Self {
		Self {
			name: Some(name.into()),
			url: Some(url.into()),
			..Self::default()
		}
	}

	/// Link to a model's changelist
	pub fn model(path: impl Into<String>) -> Self {
		Self {
			model: Some(path.into()),
			..Self::default()
		}
	}

	/// Dropdown of an app's models
	pub fn app(app_label: impl Into<String>) -> Self {
		Self {
			app: Some(app_label.into()),
			..Self::default()
		}
	}

	/// Require a permission
	pub fn with_permission(mut self, perm: impl Into<String>) -> Self {
		self.permissions.push(perm.into());
		self
	}

	/// Attach a visibility check
	pub fn with_predicate<F>(mut self, check: F) -> Self
	where
		F: Fn(&dyn AdminUser) -> DashubResult<bool> + Send + Sync + 'static,
	{
		self.predicate = Some(LinkPredicate::new(check));
		self
	}

	/// Open in a new window
	pub fn in_new_window(mut self) -> Self {
		self.new_window = true;
		self
	}

	/// Set the icon class
	pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
		self.icon = Some(icon.into());
		self
	}

	/// Set the sort order
	pub fn with_order(mut self, order: i64) -> Self {
		self.order = Some(order);
		self
	}

	/// Link target; `url` wins over `model`, which wins over `app`
	pub fn target(&self) -> Option<LinkTarget<'_>> {
		if let Some(url) = &self.url {
			Some(LinkTarget::Url(url))
		} else if let Some(model) = &self.model {
			Some(LinkTarget::Model(model))
		} else {
			self.app.as_deref().map(LinkTarget::App)
		}
	}
}

/// One configured entry of a model's submenu
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubmenuEntry {
	/// Display name, replaced by the model name for model entries
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub url: Option<String>,
	/// `app_label.ModelName` to link to
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub model: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub order: Option<i64>,
}

impl SubmenuEntry {
	/// Entry pointing at another model's changelist
	pub fn model(path: impl Into<String>) -> Self {
		Self {
			model: Some(path.into()),
			..Self::default()
		}
	}

	/// Literal link
	pub fn link(name: impl Into<String>, url: impl Into<String>) -> Self {
		Self {
			name: Some(name.into()),
			url: Some(url.into()),
			..Self::default()
		}
	}

	/// Set the sort order
	pub fn with_order(mut self, order: i64) -> Self {
		self.order = Some(order);
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use dashub_core::DashubError;
	use rstest::rstest;

	struct Nobody;

	impl AdminUser for Nobody {
		fn username(&self) -> &str {
			"nobody"
		}

		fn has_perm(&self, _perm: &str) -> DashubResult<bool> {
			Ok(false)
		}
	}

	#[rstest]
	fn target_precedence() {
		// Arrange
		let link = LinkConfig {
			url: Some("/a/".into()),
			model: Some("auth.user".into()),
			app: Some("auth".into()),
			..LinkConfig::default()
		};

		// Act & Assert
		assert_eq!(link.target(), Some(LinkTarget::Url("/a/")));
		assert_eq!(LinkConfig::model("auth.user").target(), Some(LinkTarget::Model("auth.user")));
		assert_eq!(LinkConfig::app("auth").target(), Some(LinkTarget::App("auth")));
		assert_eq!(LinkConfig::default().target(), None);
	}

	#[rstest]
	fn predicate_is_skipped_by_serde() {
		// Arrange
		let link = LinkConfig::url("Home", "/").with_predicate(|_| Ok(true));

		// Act
		let value = serde_json::to_value(&link).unwrap();

		// Assert
		assert_eq!(value, serde_json::json!({"name": "Home", "url": "/", "new_window": false}));
	}

	#[rstest]
	fn predicate_errors_surface_to_caller() {
		// Arrange
		let predicate = LinkPredicate::new(|_| Err(DashubError::PermissionCheck("boom".into())));

		// Act & Assert
		assert!(predicate.check(&Nobody).is_err());
	}

	#[rstest]
	fn unknown_link_keys_are_rejected() {
		let parsed = serde_json::from_str::<LinkConfig>(r#"{"name": "x", "colour": "red"}"#);
		assert!(parsed.is_err());
	}
}
