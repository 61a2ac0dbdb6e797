//! User-supplied settings overrides
//!
//! Every field is optional. An absent or `null` value keeps the default, so a
//! file only has to name the options it changes.

use crate::avatar::AvatarConfig;
use crate::links::{LinkConfig, SubmenuEntry};
use crate::{SettingsError, SettingsResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single string or a list of strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
	One(String),
	Many(Vec<String>),
}

impl From<OneOrMany> for Vec<String> {
	fn from(value: OneOrMany) -> Self {
		match value {
			OneOrMany::One(item) => vec![item],
			OneOrMany::Many(items) => items,
		}
	}
}

/// Overrides layered on top of the default settings
///
/// # Examples
///
/// ```
/// use dashub_conf::SettingsOverrides;
///
/// let overrides = SettingsOverrides::from_toml_str(r#"
/// site_title = "Shop admin"
/// hide_apps = "Auth"
///
/// [icons]
/// "shop.Order" = "fas fa-box"
/// "#).unwrap();
///
/// assert_eq!(overrides.site_title.as_deref(), Some("Shop admin"));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsOverrides {
	pub site_title: Option<String>,
	pub site_header: Option<String>,
	pub site_brand: Option<String>,
	pub site_logo: Option<String>,
	pub site_icon: Option<String>,
	pub topmenu_links: Option<Vec<LinkConfig>>,
	pub usermenu_links: Option<Vec<LinkConfig>>,
	pub hide_apps: Option<OneOrMany>,
	pub hide_models: Option<OneOrMany>,
	pub order_menus: Option<Vec<String>>,
	pub default_orders: Option<IndexMap<String, i64>>,
	pub custom_links: Option<IndexMap<String, Vec<LinkConfig>>>,
	pub icons: Option<IndexMap<String, String>>,
	pub default_icon_parents: Option<String>,
	pub default_icon_children: Option<String>,
	pub custom_css: Option<String>,
	pub custom_js: Option<String>,
	pub changeform_format: Option<String>,
	pub changeform_format_overrides: Option<IndexMap<String, String>>,
	pub language_chooser: Option<bool>,
	pub theme_color: Option<String>,
	pub model_submenus: Option<IndexMap<String, Vec<SubmenuEntry>>>,
	pub submenus_models: Option<Vec<String>>,
	pub related_modal_active: Option<bool>,
	pub user_avatar: Option<AvatarConfig>,
	pub user_model: Option<String>,
	pub static_url: Option<String>,
}

impl SettingsOverrides {
	/// Parse overrides from TOML text
	pub fn from_toml_str(text: &str) -> SettingsResult<Self> {
		Ok(toml::from_str(text)?)
	}

	/// Read overrides from a TOML file
	pub fn from_toml_file(path: impl AsRef<Path>) -> SettingsResult<Self> {
		let text = std::fs::read_to_string(path.as_ref())?;
		Self::from_toml_str(&text)
	}

	/// Parse overrides from JSON text
	pub fn from_json_str(text: &str) -> SettingsResult<Self> {
		Ok(serde_json::from_str(text)?)
	}

	/// Convert an already parsed JSON value
	pub fn from_json_value(value: serde_json::Value) -> SettingsResult<Self> {
		serde_json::from_value(value).map_err(SettingsError::from)
	}

	/// Layer `higher` on top of `self`; fields set in `higher` win
	pub fn merge(mut self, higher: SettingsOverrides) -> Self {
		macro_rules! take_set {
			($($field:ident),* $(,)?) => {
				$(
					if higher.$field.is_some() {
						self.$field = higher.$field;
					}
				)*
			};
		}

		take_set!(
			site_title,
			site_header,
			site_brand,
			site_logo,
			site_icon,
			topmenu_links,
			usermenu_links,
			hide_apps,
			hide_models,
			order_menus,
			default_orders,
			custom_links,
			icons,
			default_icon_parents,
			default_icon_children,
			custom_css,
			custom_js,
			changeform_format,
			changeform_format_overrides,
			language_chooser,
			theme_color,
			model_submenus,
			submenus_models,
			related_modal_active,
			user_avatar,
			user_model,
			static_url,
		);
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(r#"{"hide_apps": "auth"}"#, vec!["auth"])]
	#[case(r#"{"hide_apps": ["auth", "Sites"]}"#, vec!["auth", "Sites"])]
	#[case(r#"{"hide_apps": []}"#, vec![])]
	fn hide_apps_accepts_string_or_list(#[case] json: &str, #[case] expected: Vec<&str>) {
		// Act
		let overrides = SettingsOverrides::from_json_str(json).unwrap();

		// Assert
		let hidden: Vec<String> = overrides.hide_apps.unwrap().into();
		assert_eq!(hidden, expected);
	}

	#[rstest]
	fn nulls_mean_unset() {
		// Act
		let overrides =
			SettingsOverrides::from_json_str(r#"{"site_title": null, "theme_color": null}"#).unwrap();

		// Assert
		assert!(overrides.site_title.is_none());
		assert!(overrides.theme_color.is_none());
	}

	#[rstest]
	fn unknown_keys_are_rejected() {
		assert!(matches!(
			SettingsOverrides::from_json_str(r#"{"site_tilte": "typo"}"#),
			Err(SettingsError::Json(_))
		));
	}

	#[rstest]
	fn toml_custom_links_keep_declaration_order() {
		// Arrange
		let text = r#"
[[custom_links.reports]]
name = "Sales"
url = "/reports/sales/"

[[custom_links.books]]
name = "Import"
url = "/books/import/"
permissions = ["books.add_book"]
"#;

		// Act
		let overrides = SettingsOverrides::from_toml_str(text).unwrap();

		// Assert
		let links = overrides.custom_links.unwrap();
		assert_eq!(links.keys().collect::<Vec<_>>(), vec!["reports", "books"]);
		assert_eq!(links["books"][0].permissions, vec!["books.add_book"]);
	}

	#[rstest]
	fn merge_prefers_higher_layer() {
		// Arrange
		let base = SettingsOverrides {
			site_title: Some("Base".into()),
			theme_color: Some("#000000".into()),
			..SettingsOverrides::default()
		};
		let higher = SettingsOverrides {
			site_title: Some("Higher".into()),
			..SettingsOverrides::default()
		};

		// Act
		let merged = base.merge(higher);

		// Assert
		assert_eq!(merged.site_title.as_deref(), Some("Higher"));
		assert_eq!(merged.theme_color.as_deref(), Some("#000000"));
	}
}
