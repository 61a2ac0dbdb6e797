//! # dashub-menu
//!
//! Navigation menus for the dashub admin theme.
//!
//! - **Side menu**: apps of the host's `available_apps` list with their
//!   models, custom links and submenus, filtered by the hide lists and sorted
//!   by `order_menus` and `default_orders`
//! - **Top menu**: `topmenu_links`, which may expand into app dropdowns
//! - **User menu**: `usermenu_links`
//!
//! Menus never fail to build. Unknown models and routes degrade to the
//! literal path and a `"#"` URL, and links whose permission check errors are
//! hidden.
//!
//! ## Example
//!
//! ```
//! use dashub_conf::{OneOrMany, SettingsOverrides, resolve};
//! use dashub_core::{AppEntry, ModelEntry, StaticRegistry};
//! use dashub_menu::build_side_menu;
//! # use dashub_core::{AdminUser, DashubResult};
//! # struct Staff;
//! # impl AdminUser for Staff {
//! #     fn username(&self) -> &str { "staff" }
//! #     fn has_perm(&self, _perm: &str) -> DashubResult<bool> { Ok(true) }
//! # }
//!
//! let settings = resolve(SettingsOverrides {
//!     hide_apps: Some(OneOrMany::One("auth".into())),
//!     ..SettingsOverrides::default()
//! }).unwrap();
//! let apps = vec![
//!     AppEntry::new("auth", "Authentication")
//!         .with_model(ModelEntry::new("auth", "User", "users")),
//!     AppEntry::new("shop", "Shop")
//!         .with_model(ModelEntry::new("shop", "Order", "orders")),
//! ];
//!
//! let menu = build_side_menu(Some(&Staff), &apps, &settings, &StaticRegistry::new("admin"));
//! assert_eq!(menu.len(), 1);
//! assert_eq!(menu[0].app_label, "shop");
//! ```

pub mod builder;
pub mod links;
pub mod ordering;
pub mod side;
pub mod types;

pub use builder::{DEFAULT_ADMIN_SITE, MenuBuilder, build_side_menu, build_top_menu, build_user_menu};
pub use links::link_is_visible;
pub use ordering::{order_menu_priorities, order_menus_with_order, order_with_respect_to};
pub use side::ADD_NEW_LABEL;
pub use types::{MenuLink, MenuModel, SideMenuApp, SideMenuItem, SubmenuLink};
