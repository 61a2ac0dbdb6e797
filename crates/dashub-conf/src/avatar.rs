//! Where the user-menu avatar comes from

use dashub_core::AdminUser;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

type ResolverFn = dyn Fn(&dyn AdminUser) -> Option<String> + Send + Sync;

/// Avatar source
///
/// `Field` and `Url` can come from configuration files; `Resolver` is set in
/// code with [`crate::DashubSettings::with_avatar_resolver`].
#[derive(Clone)]
pub enum AvatarSource {
	/// Read a field of the user model
	Field(String),
	/// Fixed image URL
	Url(String),
	/// Compute the URL from the user
	Resolver(Arc<ResolverFn>),
}

impl fmt::Debug for AvatarSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			AvatarSource::Field(name) => f.debug_tuple("Field").field(name).finish(),
			AvatarSource::Url(url) => f.debug_tuple("Url").field(url).finish(),
			AvatarSource::Resolver(_) => f.write_str("Resolver(..)"),
		}
	}
}

impl Serialize for AvatarSource {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(1))?;
		match self {
			AvatarSource::Field(name) => map.serialize_entry("field", name)?,
			AvatarSource::Url(url) => map.serialize_entry("url", url)?,
			AvatarSource::Resolver(_) => map.serialize_entry("resolver", &true)?,
		}
		map.end()
	}
}

/// File form of [`AvatarSource`]: `{ field = "photo" }` or `{ url = "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvatarConfig {
	Field(String),
	Url(String),
}

impl From<AvatarConfig> for AvatarSource {
	fn from(config: AvatarConfig) -> Self {
		match config {
			AvatarConfig::Field(name) => AvatarSource::Field(name),
			AvatarConfig::Url(url) => AvatarSource::Url(url),
		}
	}
}
