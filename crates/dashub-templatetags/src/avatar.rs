//! User-menu avatar

use dashub_conf::{AvatarSource, DashubSettings};
use dashub_core::{AdminUser, UserFieldValue};

/// Image shown when the user has no avatar, relative to the static URL
pub const NO_AVATAR_IMAGE: &str = "vendor/adminlte/img/user2-160x160.jpg";

/// Static URL of `path`
pub fn static_url(settings: &DashubSettings, path: &str) -> String {
	format!(
		"{}/{}",
		settings.static_url.trim_end_matches('/'),
		path.trim_start_matches('/')
	)
}

/// Avatar URL for `user`
///
/// Resolves the configured [`AvatarSource`]. Empty values, missing fields and
/// fields that cannot hold an image URL fall back to [`NO_AVATAR_IMAGE`].
///
/// # Examples
///
/// ```
/// use dashub_conf::DashubSettings;
/// use dashub_templatetags::user_avatar;
/// # use dashub_core::{AdminUser, DashubResult};
/// # struct Staff;
/// # impl AdminUser for Staff {
/// #     fn username(&self) -> &str { "staff" }
/// #     fn has_perm(&self, _perm: &str) -> DashubResult<bool> { Ok(true) }
/// # }
///
/// let settings = DashubSettings::default()
///     .with_avatar_resolver(|user| Some(format!("/media/{}.png", user.username())));
/// assert_eq!(user_avatar(&Staff, &settings), "/media/staff.png");
///
/// let plain = DashubSettings::default();
/// assert_eq!(user_avatar(&Staff, &plain), "/static/vendor/adminlte/img/user2-160x160.jpg");
/// ```
pub fn user_avatar(user: &dyn AdminUser, settings: &DashubSettings) -> String {
	let fallback = || static_url(settings, NO_AVATAR_IMAGE);

	match &settings.user_avatar {
		None => fallback(),
		Some(AvatarSource::Url(url)) if url.is_empty() => fallback(),
		Some(AvatarSource::Url(url)) => url.clone(),
		Some(AvatarSource::Resolver(resolve)) => resolve(user)
			.filter(|url| !url.is_empty())
			.unwrap_or_else(fallback),
		Some(AvatarSource::Field(name)) => match user.field_value(name) {
			Some(value) if value.is_empty() => fallback(),
			Some(UserFieldValue::Text(url)) => url,
			Some(UserFieldValue::File(Some(url))) => url,
			Some(UserFieldValue::File(None)) => fallback(),
			Some(UserFieldValue::Unsupported(kind)) => {
				tracing::warn!(
					"Avatar field '{}' holds {}; it must be an image, file or URL field",
					name,
					kind
				);
				fallback()
			}
			None => {
				tracing::warn!("Avatar field '{}' does not exist on the user model", name);
				fallback()
			}
		},
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use dashub_conf::{AvatarConfig, SettingsOverrides, resolve};
	use dashub_core::DashubResult;
	use rstest::rstest;
	use std::collections::HashMap;

	struct Member(HashMap<&'static str, UserFieldValue>);

	impl AdminUser for Member {
		fn username(&self) -> &str {
			"member"
		}

		fn has_perm(&self, _perm: &str) -> DashubResult<bool> {
			Ok(false)
		}

		fn field_value(&self, field: &str) -> Option<UserFieldValue> {
			self.0.get(field).cloned()
		}
	}

	fn field_settings(field: &str) -> DashubSettings {
		resolve(SettingsOverrides {
			user_avatar: Some(AvatarConfig::Field(field.to_string())),
			static_url: Some("https://cdn.example.com/static".to_string()),
			..SettingsOverrides::default()
		})
		.unwrap()
	}

	const FALLBACK: &str = "https://cdn.example.com/static/vendor/adminlte/img/user2-160x160.jpg";

	#[rstest]
	#[case(UserFieldValue::Text("/media/me.png".into()), "/media/me.png")]
	#[case(UserFieldValue::File(Some("/media/photo.jpg".into())), "/media/photo.jpg")]
	#[case(UserFieldValue::File(None), FALLBACK)]
	#[case(UserFieldValue::Text(String::new()), FALLBACK)]
	#[case(UserFieldValue::Unsupported("an integer".into()), FALLBACK)]
	fn field_values(#[case] value: UserFieldValue, #[case] expected: &str) {
		// Arrange
		let user = Member([("photo", value)].into_iter().collect());

		// Act & Assert
		assert_eq!(user_avatar(&user, &field_settings("photo")), expected);
	}

	#[rstest]
	fn missing_field_falls_back() {
		let user = Member(HashMap::new());
		assert_eq!(user_avatar(&user, &field_settings("photo")), FALLBACK);
	}

	#[rstest]
	#[case(Some("/img/fixed.png"), "/img/fixed.png")]
	#[case(Some(""), "/static/vendor/adminlte/img/user2-160x160.jpg")]
	fn fixed_url(#[case] url: Option<&str>, #[case] expected: &str) {
		// Arrange
		let settings = resolve(SettingsOverrides {
			user_avatar: url.map(|url| AvatarConfig::Url(url.to_string())),
			..SettingsOverrides::default()
		})
		.unwrap();

		// Act & Assert
		assert_eq!(user_avatar(&Member(HashMap::new()), &settings), expected);
	}

	#[rstest]
	fn resolver_returning_nothing_falls_back() {
		// Arrange
		let settings = DashubSettings::default().with_avatar_resolver(|_| None);

		// Act & Assert
		assert_eq!(
			user_avatar(&Member(HashMap::new()), &settings),
			"/static/vendor/adminlte/img/user2-160x160.jpg"
		);
	}
}
