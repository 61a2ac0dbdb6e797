//! Sample registry and `available_apps` list
//!
//! Two apps: `auth` (User, Group) and `library` (Book, Author, Loan). The
//! registry also knows the `admin:index` and `admin:password_change` routes.

use dashub_core::{AppEntry, AppInfo, ModelEntry, ModelInfo, StaticRegistry};
use rstest::*;

/// Registry with the sample apps installed under the `admin` site
#[fixture]
pub fn sample_registry() -> StaticRegistry {
	StaticRegistry::new("admin")
		.with_app(
			AppInfo::new("auth", "Authentication and Authorization")
				.with_model(ModelInfo::new("auth", "User"))
				.with_model(ModelInfo::new("auth", "Group")),
		)
		.with_app(
			AppInfo::new("library", "Library")
				.with_model(ModelInfo::new("library", "Book"))
				.with_model(ModelInfo::new("library", "Author"))
				.with_model(ModelInfo::new("library", "Loan")),
		)
		.with_route("admin:index", "/admin/")
		.with_route("admin:password_change", "/admin/password_change/")
}

/// `available_apps` as the host hands it to a superuser
#[fixture]
pub fn sample_apps() -> Vec<AppEntry> {
	vec![
		AppEntry::new("auth", "Authentication and Authorization")
			.with_model(ModelEntry::new("auth", "User", "users").with_count(3))
			.with_model(ModelEntry::new("auth", "Group", "groups")),
		AppEntry::new("library", "Library")
			.with_model(ModelEntry::new("library", "Book", "books").with_count(42))
			.with_model(ModelEntry::new("library", "Author", "authors").with_count(7))
			.with_model(ModelEntry::new("library", "Loan", "loans")),
	]
}

/// Two apps with no configured order, for ordering tests
#[fixture]
pub fn unordered_apps() -> Vec<AppEntry> {
	vec![
		AppEntry::new("apps_a", "Apps A").with_model(ModelEntry::new("apps_a", "Alpha", "alphas")),
		AppEntry::new("apps_b", "Apps B").with_model(ModelEntry::new("apps_b", "Beta", "betas")),
	]
}
