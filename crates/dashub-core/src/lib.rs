//! # dashub-core
//!
//! Shared building blocks for the dashub admin theme.
//!
//! The theme never talks to an ORM or a URL router directly. Instead the host
//! admin site implements two capability traits:
//!
//! - [`AdminUser`]: the current user and its permission checks
//! - [`ModelRegistry`]: installed apps, model metadata and named-route reversal
//!
//! Everything else in this crate is plain data:
//!
//! - **apps**: the per-request `available_apps` list handed over by the host
//! - **i18n**: message catalogs used to translate audit-log fragments
//! - **text**: slug, title-case and list-joining helpers
//! - **urls**: admin route naming and URL fallbacks
//!
//! ## Example
//!
//! ```
//! use dashub_core::{AppInfo, ModelInfo, ModelRegistry, StaticRegistry};
//!
//! let registry = StaticRegistry::new("admin").with_app(
//!     AppInfo::new("blog", "Blog").with_model(ModelInfo::new("blog", "Post")),
//! );
//!
//! let post = registry.resolve_model("blog.Post").unwrap();
//! assert_eq!(post.verbose_name_plural, "posts");
//! assert_eq!(
//!     dashub_core::urls::admin_url(&registry, "blog.Post", "admin"),
//!     "/admin/blog/post/"
//! );
//! ```

pub mod apps;
pub mod error;
pub mod i18n;
pub mod registry;
pub mod text;
pub mod urls;
pub mod user;

pub use apps::{AppEntry, ModelEntry};
pub use error::{DashubError, DashubResult};
pub use i18n::{MessageCatalog, NullTranslator, Translator};
pub use registry::{AppInfo, ModelInfo, ModelRegistry, StaticRegistry};
pub use user::{AdminUser, UserFieldValue};
