//! Current-user capability interface

use crate::DashubResult;

/// Value of a field read off the user model
///
/// Used to resolve a configured avatar field without probing attributes at
/// runtime: the host decides what the field holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserFieldValue {
	/// Character/URL field
	Text(String),
	/// File or image field; `None` when no file is attached
	File(Option<String>),
	/// Field exists but holds something that cannot become an image URL
	Unsupported(String),
}

impl UserFieldValue {
	/// Whether the field holds nothing
	pub fn is_empty(&self) -> bool {
		match self {
			UserFieldValue::Text(text) => text.is_empty(),
			UserFieldValue::File(url) => url.as_deref().is_none_or(str::is_empty),
			UserFieldValue::Unsupported(_) => false,
		}
	}
}

/// The authenticated user of the current request
///
/// Permission strings follow the `app_label.codename` convention, e.g.
/// `blog.view_post`.
///
/// # Examples
///
/// ```
/// use dashub_core::{AdminUser, DashubResult};
///
/// struct Staff;
///
/// impl AdminUser for Staff {
///     fn username(&self) -> &str {
///         "staff"
///     }
///
///     fn has_perm(&self, perm: &str) -> DashubResult<bool> {
///         Ok(perm.starts_with("blog."))
///     }
/// }
///
/// assert!(Staff.can_view_model("blog", "post"));
/// assert!(!Staff.can_view_model("auth", "user"));
/// ```
pub trait AdminUser: Send + Sync {
	/// Login name
	fn username(&self) -> &str;

	/// Check a single permission
	fn has_perm(&self, perm: &str) -> DashubResult<bool>;

	/// Whether the user is active
	fn is_active(&self) -> bool {
		true
	}

	/// Read a named field off the user model, `None` when it does not exist
	fn field_value(&self, _field: &str) -> Option<UserFieldValue> {
		None
	}

	/// Whether the user may see the model's changelist
	///
	/// Failed checks count as "no".
	fn can_view_model(&self, app_label: &str, model_name: &str) -> bool {
		let model_name = model_name.to_lowercase();
		["view", "change"].iter().any(|action| {
			let perm = format!("{}.{}_{}", app_label, action, model_name);
			self.has_perm(&perm).unwrap_or_else(|err| {
				tracing::debug!("Permission check for '{}' failed: {}", perm, err);
				false
			})
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::DashubError;
	use rstest::rstest;

	struct Checker {
		granted: Vec<&'static str>,
		broken: bool,
	}

	impl AdminUser for Checker {
		fn username(&self) -> &str {
			"checker"
		}

		fn has_perm(&self, perm: &str) -> DashubResult<bool> {
			if self.broken {
				return Err(DashubError::PermissionCheck("backend down".into()));
			}
			Ok(self.granted.iter().any(|granted| *granted == perm))
		}
	}

	#[rstest]
	#[case(vec!["blog.view_post"], true)]
	#[case(vec!["blog.change_post"], true)]
	#[case(vec!["blog.add_post"], false)]
	#[case(vec![], false)]
	fn can_view_model_accepts_view_or_change(#[case] granted: Vec<&'static str>, #[case] expected: bool) {
		// Arrange
		let user = Checker {
			granted,
			broken: false,
		};

		// Act & Assert
		assert_eq!(user.can_view_model("blog", "Post"), expected);
	}

	#[rstest]
	fn can_view_model_treats_errors_as_denied() {
		// Arrange
		let user = Checker {
			granted: vec!["blog.view_post"],
			broken: true,
		};

		// Act & Assert
		assert!(!user.can_view_model("blog", "post"));
	}

	#[rstest]
	#[case(UserFieldValue::Text(String::new()), true)]
	#[case(UserFieldValue::Text("a.png".into()), false)]
	#[case(UserFieldValue::File(None), true)]
	#[case(UserFieldValue::File(Some(String::new())), true)]
	#[case(UserFieldValue::File(Some("/media/a.png".into())), false)]
	#[case(UserFieldValue::Unsupported("int".into()), false)]
	fn field_value_emptiness(#[case] value: UserFieldValue, #[case] expected: bool) {
		assert_eq!(value.is_empty(), expected);
	}
}
