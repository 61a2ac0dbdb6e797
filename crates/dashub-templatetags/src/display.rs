//! Small display helpers used across the admin templates

use crate::error::TemplateTagResult;
use dashub_conf::DashubSettings;
use dashub_core::registry::split_model_path;
use dashub_core::text::escape;
use dashub_core::{AdminUser, ModelRegistry};
use serde::Serialize;

pub use dashub_core::text::unicode_slugify;

/// Package version shown in the footer
pub fn version() -> &'static str {
	env!("CARGO_PKG_VERSION")
}

/// HTML-escape `message` and wrap its first word in `<strong>`
///
/// # Examples
///
/// ```
/// use dashub_templatetags::style_bold_first_word;
///
/// assert_eq!(style_bold_first_word("Deleted <b>all</b>  rows"), "<strong>Deleted</strong> &lt;b&gt;all&lt;/b&gt; rows");
/// assert_eq!(style_bold_first_word("   "), "");
/// ```
pub fn style_bold_first_word(message: &str) -> String {
	let escaped = escape(message);
	let mut words = escaped.split_whitespace();
	let Some(first) = words.next() else {
		return String::new();
	};
	std::iter::once(format!("<strong>{}</strong>", first))
		.chain(words.map(str::to_string))
		.collect::<Vec<_>>()
		.join(" ")
}

/// Serialize a value as JSON text for embedding in a template
pub fn as_json<T: Serialize + ?Sized>(value: &T) -> TemplateTagResult<String> {
	Ok(serde_json::to_string(value)?)
}

/// Whether `key` is set in the resolved settings
pub fn has_dashub_setting(settings: &DashubSettings, key: &str) -> bool {
	settings.has_setting(key)
}

/// Whether the user may view its own user record
pub fn can_view_self(user: &dyn AdminUser, settings: &DashubSettings) -> bool {
	let Ok((app_label, model_name)) = split_model_path(&settings.user_model) else {
		tracing::warn!("Invalid user model '{}'", settings.user_model);
		return false;
	};
	let perm = format!("{}.view_{}", app_label, model_name.to_lowercase());
	user.has_perm(&perm).unwrap_or_else(|err| {
		tracing::debug!("Permission check for '{}' failed: {}", perm, err);
		false
	})
}

/// Whether an app is installed in the host
pub fn app_is_installed(registry: &dyn ModelRegistry, app_label: &str) -> bool {
	registry.is_installed(app_label)
}
