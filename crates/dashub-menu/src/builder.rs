//! Menu builder entry points

use crate::types::{MenuLink, SideMenuApp};
use dashub_conf::DashubSettings;
use dashub_core::{AdminUser, AppEntry, ModelRegistry};

/// Default admin site namespace
pub const DEFAULT_ADMIN_SITE: &str = "admin";

/// Builds the navigation structures for one request
///
/// Holds the resolved settings and the host registry so every menu of a page
/// is built from the same inputs.
///
/// # Examples
///
/// ```
/// use dashub_conf::{DashubSettings, LinkConfig, SettingsOverrides, resolve};
/// use dashub_core::StaticRegistry;
/// use dashub_menu::MenuBuilder;
/// # use dashub_core::{AdminUser, DashubResult};
/// # struct Staff;
/// # impl AdminUser for Staff {
/// #     fn username(&self) -> &str { "staff" }
/// #     fn has_perm(&self, _perm: &str) -> DashubResult<bool> { Ok(true) }
/// # }
///
/// let settings = resolve(SettingsOverrides {
///     topmenu_links: Some(vec![LinkConfig::url("Docs", "https://docs.example.com")]),
///     ..SettingsOverrides::default()
/// }).unwrap();
/// let registry = StaticRegistry::new("admin");
///
/// let menu = MenuBuilder::new(&settings, &registry).top_menu(&Staff);
/// assert_eq!(menu[0].url, "https://docs.example.com");
/// ```
#[derive(Clone, Copy)]
pub struct MenuBuilder<'a> {
	pub(crate) settings: &'a DashubSettings,
	pub(crate) registry: &'a dyn ModelRegistry,
	pub(crate) site: &'a str,
}

impl<'a> MenuBuilder<'a> {
	/// Create a builder for the default `admin` site
	pub fn new(settings: &'a DashubSettings, registry: &'a dyn ModelRegistry) -> Self {
		Self {
			settings,
			registry,
			site: DEFAULT_ADMIN_SITE,
		}
	}

	/// Use another admin site namespace for route reversal
	pub fn with_site(mut self, site: &'a str) -> Self {
		self.site = site;
		self
	}

	/// Settings the builder reads
	pub fn settings(&self) -> &DashubSettings {
		self.settings
	}

	/// Links of the top navigation bar; app dropdowns are allowed
	pub fn top_menu(&self, user: &dyn AdminUser) -> Vec<MenuLink> {
		self.make_menu(user, &self.settings.topmenu_links, true)
	}

	/// Links of the user dropdown; app dropdowns are not allowed
	pub fn user_menu(&self, user: &dyn AdminUser) -> Vec<MenuLink> {
		self.make_menu(user, &self.settings.usermenu_links, false)
	}
}

/// Build the side menu for `user` from the host's app list
///
/// Returns an empty menu when there is no user.
pub fn build_side_menu(
	user: Option<&dyn AdminUser>,
	available_apps: &[AppEntry],
	settings: &DashubSettings,
	registry: &dyn ModelRegistry,
) -> Vec<SideMenuApp> {
	MenuBuilder::new(settings, registry).side_menu(user, available_apps)
}

/// Build the top menu from `links`
pub fn build_top_menu(
	user: &dyn AdminUser,
	links: &[dashub_conf::LinkConfig],
	settings: &DashubSettings,
	registry: &dyn ModelRegistry,
) -> Vec<MenuLink> {
	MenuBuilder::new(settings, registry).make_menu(user, links, true)
}

/// Build the user menu from `links`
pub fn build_user_menu(
	user: &dyn AdminUser,
	links: &[dashub_conf::LinkConfig],
	settings: &DashubSettings,
	registry: &dyn ModelRegistry,
) -> Vec<MenuLink> {
	MenuBuilder::new(settings, registry).make_menu(user, links, false)
}
