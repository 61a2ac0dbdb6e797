//! Resolved dashub settings

use crate::avatar::AvatarSource;
use crate::color::{Rgb, hex_to_rgb};
use crate::links::{LinkConfig, SubmenuEntry};
use crate::overrides::SettingsOverrides;
use crate::SettingsResult;
use dashub_core::AdminUser;
use indexmap::IndexMap;
use serde::Serialize;
use std::sync::Arc;

/// Default window title
pub const DEFAULT_SITE_TITLE: &str = "Admin Dashboard";
/// Default brand logo
pub const DEFAULT_SITE_LOGO: &str = "https://cdn.practet.com/static/logo-new.webp";
/// Default theme colour
pub const DEFAULT_THEME_COLOR: &str = "#e31837";
/// Icon for apps without a configured icon
pub const DEFAULT_ICON_PARENTS: &str = "fas fa-chevron-circle-right";
/// Icon for models and links without a configured icon
pub const DEFAULT_ICON_CHILDREN: &str = "fas fa-circle";

const DEFAULT_THEME_RGB: Rgb = Rgb(227, 24, 55);

/// Fully resolved settings
///
/// Built once per request by [`resolve`] and passed by reference to every
/// menu and template-tag routine.
#[derive(Debug, Clone, Serialize)]
pub struct DashubSettings {
	pub site_title: Option<String>,
	pub site_header: Option<String>,
	pub site_brand: Option<String>,
	pub site_logo: Option<String>,
	pub site_icon: Option<String>,
	pub topmenu_links: Vec<LinkConfig>,
	pub usermenu_links: Vec<LinkConfig>,
	/// Lower-cased app labels left out of the side menu
	pub hide_apps: Vec<String>,
	/// Lower-cased `app.model` keys left out of the side menu
	pub hide_models: Vec<String>,
	/// App labels, highest priority first
	pub order_menus: Vec<String>,
	/// Fallback orders keyed by app label, model key or submenu slug
	pub default_orders: IndexMap<String, i64>,
	/// Extra links per app label
	pub custom_links: IndexMap<String, Vec<LinkConfig>>,
	/// Icon classes keyed by app label or model key
	pub icons: IndexMap<String, String>,
	pub default_icon_parents: String,
	pub default_icon_children: String,
	pub custom_css: Option<String>,
	pub custom_js: Option<String>,
	pub changeform_format: String,
	pub changeform_format_overrides: IndexMap<String, String>,
	pub language_chooser: bool,
	pub theme_color: String,
	pub theme_color_rgb: Rgb,
	pub model_submenus: IndexMap<String, Vec<SubmenuEntry>>,
	pub submenus_models: Vec<String>,
	pub related_modal_active: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub user_avatar: Option<AvatarSource>,
	/// `app.model` of the user model
	pub user_model: String,
	pub static_url: String,
}

impl DashubSettings {
	fn base() -> Self {
		let icons = [
			("auth", "fas fa-users-cog"),
			("auth.user", "fas fa-user"),
			("auth.Group", "fas fa-users"),
		]
		.into_iter()
		.map(|(key, icon)| (key.to_string(), icon.to_string()))
		.collect();

		Self {
			site_title: Some(DEFAULT_SITE_TITLE.to_string()),
			site_header: None,
			site_brand: None,
			site_logo: Some(DEFAULT_SITE_LOGO.to_string()),
			site_icon: None,
			topmenu_links: Vec::new(),
			usermenu_links: Vec::new(),
			hide_apps: Vec::new(),
			hide_models: Vec::new(),
			order_menus: Vec::new(),
			default_orders: IndexMap::new(),
			custom_links: IndexMap::new(),
			icons,
			default_icon_parents: DEFAULT_ICON_PARENTS.to_string(),
			default_icon_children: DEFAULT_ICON_CHILDREN.to_string(),
			custom_css: None,
			custom_js: None,
			changeform_format: "horizontal_tabs".to_string(),
			changeform_format_overrides: IndexMap::new(),
			language_chooser: false,
			theme_color: DEFAULT_THEME_COLOR.to_string(),
			theme_color_rgb: DEFAULT_THEME_RGB,
			model_submenus: IndexMap::new(),
			submenus_models: Vec::new(),
			related_modal_active: true,
			user_avatar: None,
			user_model: "auth.user".to_string(),
			static_url: "/static/".to_string(),
		}
	}

	fn apply(&mut self, overrides: SettingsOverrides) {
		macro_rules! replace_optional {
			($($field:ident),* $(,)?) => {
				$(
					if let Some(value) = overrides.$field {
						self.$field = Some(value);
					}
				)*
			};
		}
		macro_rules! replace {
			($($field:ident),* $(,)?) => {
				$(
					if let Some(value) = overrides.$field {
						self.$field = value.into();
					}
				)*
			};
		}

		replace_optional!(site_title, site_header, site_brand, site_logo, site_icon, custom_css, custom_js);
		replace!(
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
			changeform_format,
			changeform_format_overrides,
			language_chooser,
			theme_color,
			model_submenus,
			submenus_models,
			related_modal_active,
			user_model,
			static_url,
		);
		if let Some(avatar) = overrides.user_avatar {
			self.user_avatar = Some(avatar.into());
		}
	}

	fn normalize(&mut self) {
		let lower_all = |items: &mut Vec<String>| {
			for item in items.iter_mut() {
				*item = item.to_lowercase();
			}
		};
		lower_all(&mut self.hide_apps);
		lower_all(&mut self.hide_models);
		lower_all(&mut self.submenus_models);

		self.icons = lower_pairs(&self.icons);
		self.changeform_format_overrides = lower_pairs(&self.changeform_format_overrides);
		self.default_orders = std::mem::take(&mut self.default_orders)
			.into_iter()
			.map(|(key, order)| (key.to_lowercase(), order))
			.collect();
		self.model_submenus = std::mem::take(&mut self.model_submenus)
			.into_iter()
			.map(|(key, entries)| (key.to_lowercase(), entries))
			.collect();

		if self.site_icon.as_deref().is_none_or(str::is_empty) {
			self.site_icon = self.site_logo.clone();
		}
	}

	/// Set an avatar resolver closure
	pub fn with_avatar_resolver<F>(mut self, resolver: F) -> Self
	where
		F: Fn(&dyn AdminUser) -> Option<String> + Send + Sync + 'static,
	{
		self.user_avatar = Some(AvatarSource::Resolver(Arc::new(resolver)));
		self
	}

	/// Icon for an app label or model key, falling back to `default`
	pub fn icon_for<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
		self.icons
			.get(&key.to_lowercase())
			.map(String::as_str)
			.unwrap_or(default)
	}

	/// Fallback order for an app label, model key or submenu slug
	pub fn default_order(&self, key: &str) -> i64 {
		self.default_orders
			.get(&key.to_lowercase())
			.copied()
			.unwrap_or(0)
	}

	/// Whether `key` is present and non-null in the serialized settings
	///
	/// # Examples
	///
	/// ```
	/// use dashub_conf::DashubSettings;
	///
	/// let settings = DashubSettings::default();
	/// assert!(settings.has_setting("site_title"));
	/// assert!(!settings.has_setting("custom_css"));
	/// assert!(!settings.has_setting("no_such_key"));
	/// ```
	pub fn has_setting(&self, key: &str) -> bool {
		match serde_json::to_value(self) {
			Ok(serde_json::Value::Object(map)) => map.get(key).is_some_and(|value| !value.is_null()),
			_ => false,
		}
	}
}

impl Default for DashubSettings {
	fn default() -> Self {
		merged(SettingsOverrides::default())
	}
}

fn lower_pairs(map: &IndexMap<String, String>) -> IndexMap<String, String> {
	map.iter()
		.map(|(key, value)| (key.to_lowercase(), value.to_lowercase()))
		.collect()
}

fn merged(overrides: SettingsOverrides) -> DashubSettings {
	let mut settings = DashubSettings::base();
	settings.apply(overrides);
	settings.normalize();
	settings
}

/// Resolve user overrides into settings
///
/// Overrides replace defaults key by key, list/map keys are lower-cased, the
/// site icon falls back to the logo and the theme colour is parsed into RGB.
///
/// # Errors
///
/// [`crate::SettingsError::InvalidColor`] when `theme_color` is not `#RRGGBB`.
///
/// # Examples
///
/// ```
/// use dashub_conf::{resolve, SettingsOverrides};
/// use dashub_conf::color::Rgb;
///
/// let settings = resolve(SettingsOverrides {
///     theme_color: Some("#30AA99".into()),
///     ..SettingsOverrides::default()
/// }).unwrap();
///
/// assert_eq!(settings.theme_color_rgb, Rgb(48, 170, 153));
/// assert_eq!(settings.site_icon, settings.site_logo);
/// ```
pub fn resolve(overrides: SettingsOverrides) -> SettingsResult<DashubSettings> {
	let mut settings = merged(overrides);
	settings.theme_color_rgb = hex_to_rgb(&settings.theme_color)?;
	Ok(settings)
}

/// Like [`resolve`] but never fails: a malformed theme colour is logged and
/// replaced by the default colour
pub fn resolve_or_default(overrides: SettingsOverrides) -> DashubSettings {
	let mut settings = merged(overrides);
	match hex_to_rgb(&settings.theme_color) {
		Ok(rgb) => settings.theme_color_rgb = rgb,
		Err(err) => {
			tracing::warn!("{}; using default theme colour {}", err, DEFAULT_THEME_COLOR);
			settings.theme_color = DEFAULT_THEME_COLOR.to_string();
			settings.theme_color_rgb = DEFAULT_THEME_RGB;
		}
	}
	settings
}

/// Names the host admin site provides for the page chrome
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminSiteInfo {
	pub site_title: Option<String>,
	pub site_header: Option<String>,
}

/// Fill empty title, header and brand from the admin site
///
/// # Examples
///
/// ```
/// use dashub_conf::{site_defaults, AdminSiteInfo, DashubSettings};
///
/// let site = AdminSiteInfo {
///     site_title: Some("Shop".into()),
///     site_header: Some("Shop administration".into()),
/// };
/// let settings = site_defaults(&DashubSettings::default(), &site);
///
/// assert_eq!(settings.site_title.as_deref(), Some("Admin Dashboard"));
/// assert_eq!(settings.site_brand.as_deref(), Some("Shop administration"));
/// ```
pub fn site_defaults(settings: &DashubSettings, site: &AdminSiteInfo) -> DashubSettings {
	let mut settings = settings.clone();
	let is_blank = |value: &Option<String>| value.as_deref().is_none_or(str::is_empty);

	if is_blank(&settings.site_title) {
		settings.site_title = site.site_title.clone();
	}
	if is_blank(&settings.site_header) {
		settings.site_header = site.site_header.clone();
	}
	if is_blank(&settings.site_brand) {
		settings.site_brand = site.site_header.clone();
	}
	settings
}
