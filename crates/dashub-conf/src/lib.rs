//! # dashub-conf
//!
//! Settings for the dashub admin theme.
//!
//! Settings are resolved from a fixed default table plus user overrides. The
//! result is an immutable [`DashubSettings`] value that the caller resolves
//! once per request and passes to every menu and template-tag routine.
//!
//! ## Example
//!
//! ```
//! use dashub_conf::{resolve, ChangeformFormat, SettingsOverrides};
//!
//! let overrides = SettingsOverrides::from_toml_str(r#"
//! site_brand = "Bookshop"
//! hide_models = ["Auth.Group"]
//! order_menus = ["books", "auth"]
//!
//! [changeform_format_overrides]
//! "Books.Author" = "collapsible"
//! "#).unwrap();
//!
//! let settings = resolve(overrides).unwrap();
//! assert_eq!(settings.hide_models, vec!["auth.group"]);
//! assert_eq!(
//!     settings.changeform_format_overrides["books.author"].parse::<ChangeformFormat>(),
//!     Ok(ChangeformFormat::Collapsible)
//! );
//! ```

pub mod avatar;
pub mod color;
pub mod error;
pub mod layout;
pub mod links;
pub mod overrides;
pub mod settings;
pub mod sources;

pub use avatar::{AvatarConfig, AvatarSource};
pub use color::{Rgb, hex_to_rgb};
pub use error::{SettingsError, SettingsResult};
pub use layout::{ChangeformFormat, UnknownLayout};
pub use links::{LinkConfig, LinkPredicate, LinkTarget, SubmenuEntry};
pub use overrides::{OneOrMany, SettingsOverrides};
pub use settings::{AdminSiteInfo, DashubSettings, resolve, resolve_or_default, site_defaults};
pub use sources::{EnvJsonSource, MemorySource, SettingsLoader, SettingsSource, TomlFileSource};
