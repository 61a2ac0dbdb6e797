//! # dashub
//!
//! Admin dashboard theming for Django-style admin sites.
//!
//! dashub reshapes what the host admin already knows (installed apps, model
//! metadata, permissions, changelists, log entries) into plain values its
//! templates render: navigation menus, the change-form layout, audit-log
//! messages, pagination and list filters.
//!
//! ## Feature Flags
//!
//! - `full` (default) - every module below
//! - `minimal` - settings resolution only
//! - `conf` - settings defaults, overrides and sources
//! - `menu` - side, top and user menus
//! - `templatetags` - change-form layouts, audit log, pagination, filters
//! - `forms` - select widgets and field classes
//! - `test` - rstest fixtures for host test suites
//!
//! ## Quick Example
//!
//! ```
//! use dashub::prelude::*;
//! # struct Staff;
//! # impl AdminUser for Staff {
//! #     fn username(&self) -> &str { "staff" }
//! #     fn has_perm(&self, _perm: &str) -> DashubResult<bool> { Ok(true) }
//! # }
//!
//! let settings = resolve(SettingsOverrides::from_toml_str(r##"
//!     theme_color = "#336699"
//!     changeform_format = "collapsible"
//! "##)?)?;
//! assert_eq!(settings.theme_color_rgb, Rgb(0x33, 0x66, 0x99));
//!
//! let apps = vec![
//!     AppEntry::new("shop", "Shop").with_model(ModelEntry::new("shop", "Order", "orders")),
//! ];
//! let registry = StaticRegistry::new("admin");
//! let menu = build_side_menu(Some(&Staff), &apps, &settings, &registry);
//! assert_eq!(menu[0].name, "Shop");
//!
//! let layout = select_changeform_template("shop.order", true, false, &settings);
//! assert_eq!(layout, ChangeformFormat::Collapsible);
//! # Ok::<(), dashub::conf::SettingsError>(())
//! ```

pub use dashub_core as core;

#[cfg(feature = "conf")]
pub use dashub_conf as conf;

#[cfg(feature = "menu")]
pub use dashub_menu as menu;

#[cfg(feature = "templatetags")]
pub use dashub_templatetags as templatetags;

#[cfg(feature = "forms")]
pub use dashub_forms as forms;

#[cfg(feature = "test")]
pub use dashub_test as test;

pub use dashub_core::{DashubError, DashubResult};

/// Commonly used types and functions
pub mod prelude {
	// Core - always available
	pub use dashub_core::{
		AdminUser, AppEntry, AppInfo, DashubError, DashubResult, ModelEntry, ModelInfo,
		ModelRegistry, StaticRegistry, Translator,
	};

	#[cfg(feature = "conf")]
	pub use dashub_conf::{
		ChangeformFormat, DashubSettings, LinkConfig, Rgb, SettingsError, SettingsOverrides,
		hex_to_rgb, resolve, resolve_or_default,
	};

	#[cfg(feature = "menu")]
	pub use dashub_menu::{
		MenuBuilder, MenuLink, SideMenuApp, SideMenuItem, build_side_menu, build_top_menu,
		build_user_menu,
	};

	#[cfg(feature = "templatetags")]
	pub use dashub_templatetags::{
		ActionMessages, ActionRecord, FilterRenderer, FilterSpec, PageIndicator, PaginatedList,
		format_log_entry, list_filter_choices, paginator_number, select_changeform_template,
	};

	#[cfg(feature = "forms")]
	pub use dashub_forms::{DashubSelect, DashubSelectMultiple, FormField, Widget, render_form_field_class};
}
