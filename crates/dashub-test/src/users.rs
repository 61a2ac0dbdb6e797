//! Fake admin users

use dashub_core::{AdminUser, DashubError, DashubResult, UserFieldValue};
use rstest::*;
use std::collections::{HashMap, HashSet};

/// In-memory user with a fixed permission set
///
/// # Examples
///
/// ```
/// use dashub_core::AdminUser;
/// use dashub_test::FakeUser;
///
/// let user = FakeUser::new("ann").with_perms(["library.view_book"]);
/// assert!(user.can_view_model("library", "Book"));
/// assert!(!user.can_view_model("library", "Author"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct FakeUser {
	pub username: String,
	pub perms: HashSet<String>,
	pub is_superuser: bool,
	pub is_active: bool,
	pub fields: HashMap<String, UserFieldValue>,
	/// Every permission check fails with an error
	pub broken: bool,
}

impl FakeUser {
	/// Active user without permissions
	pub fn new(username: impl Into<String>) -> Self {
		Self {
			username: username.into(),
			is_active: true,
			..Self::default()
		}
	}

	/// Active user holding every permission
	pub fn superuser(username: impl Into<String>) -> Self {
		Self {
			is_superuser: true,
			..Self::new(username)
		}
	}

	/// User whose permission backend always errors
	pub fn broken(username: impl Into<String>) -> Self {
		Self {
			broken: true,
			..Self::new(username)
		}
	}

	/// Grant permissions
	pub fn with_perms<I, S>(mut self, perms: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.perms.extend(perms.into_iter().map(Into::into));
		self
	}

	/// Set a model field
	pub fn with_field(mut self, name: impl Into<String>, value: UserFieldValue) -> Self {
		self.fields.insert(name.into(), value);
		self
	}
}

impl AdminUser for FakeUser {
	fn username(&self) -> &str {
		&self.username
	}

	fn has_perm(&self, perm: &str) -> DashubResult<bool> {
		if self.broken {
			return Err(DashubError::PermissionCheck(format!("backend unavailable for '{}'", perm)));
		}
		Ok(self.is_active && (self.is_superuser || self.perms.contains(perm)))
	}

	fn is_active(&self) -> bool {
		self.is_active
	}

	fn field_value(&self, field: &str) -> Option<UserFieldValue> {
		self.fields.get(field).cloned()
	}
}

/// Superuser fixture
#[fixture]
pub fn superuser() -> FakeUser {
	FakeUser::superuser("admin")
}

/// Staff member who may browse the library but not manage users
#[fixture]
pub fn librarian() -> FakeUser {
	FakeUser::new("librarian").with_perms([
		"library.view_book",
		"library.change_book",
		"library.add_book",
		"library.view_author",
		"auth.view_user",
	])
}
