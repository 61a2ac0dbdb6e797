//! Link visibility and resolution

use crate::builder::MenuBuilder;
use crate::types::MenuLink;
use dashub_conf::{LinkConfig, LinkTarget};
use dashub_core::registry::split_model_path;
use dashub_core::text::title;
use dashub_core::urls::{PLACEHOLDER_URL, admin_url, custom_url};
use dashub_core::{AdminUser, AppInfo, ModelInfo};

/// Whether every permission and the predicate of `link` hold for `user`
///
/// Errors from the host's permission check hide the link.
pub fn link_is_visible(user: &dyn AdminUser, link: &LinkConfig) -> bool {
	for perm in &link.permissions {
		match user.has_perm(perm) {
			Ok(true) => {}
			Ok(false) => return false,
			Err(err) => {
				tracing::debug!("Permission check for '{}' failed: {}", perm, err);
				return false;
			}
		}
	}

	match &link.predicate {
		Some(predicate) => predicate.check(user).unwrap_or_else(|err| {
			tracing::debug!("Link predicate for {:?} failed: {}", link.name, err);
			false
		}),
		None => true,
	}
}

impl MenuBuilder<'_> {
	/// Resolve configured links into menu links the user may see
	///
	/// Links the user cannot see and links without a target are dropped.
	/// App dropdowns are expanded only when `allow_appmenus` is set.
	pub fn make_menu(&self, user: &dyn AdminUser, links: &[LinkConfig], allow_appmenus: bool) -> Vec<MenuLink> {
		links
			.iter()
			.filter(|link| link_is_visible(user, link))
			.filter_map(|link| match link.target() {
				Some(LinkTarget::Url(url)) => Some(self.url_link(link, url)),
				Some(LinkTarget::Model(path)) => self.model_link(user, link, path),
				Some(LinkTarget::App(app_label)) if allow_appmenus => self.app_link(user, link, app_label),
				Some(LinkTarget::App(app_label)) => {
					tracing::debug!("App menu '{}' is not allowed here", app_label);
					None
				}
				None => {
					tracing::warn!("Menu link {:?} has no url, model or app", link.name);
					None
				}
			})
			.collect()
	}

	fn url_link(&self, link: &LinkConfig, url: &str) -> MenuLink {
		let name = link.name.clone().unwrap_or_else(|| url.to_string());
		MenuLink {
			order: link.order.unwrap_or_else(|| self.settings.default_order(&name)),
			url: custom_url(self.registry, url, self.site),
			icon: link
				.icon
				.clone()
				.unwrap_or_else(|| self.settings.default_icon_children.clone()),
			new_window: link.new_window,
			children: None,
			name,
		}
	}

	fn model_link(&self, user: &dyn AdminUser, link: &LinkConfig, path: &str) -> Option<MenuLink> {
		let (app_label, model_name) = match split_model_path(path) {
			Ok(parts) => parts,
			Err(err) => {
				tracing::debug!("Skipping model link: {}", err);
				return None;
			}
		};
		if !user.can_view_model(app_label, model_name) {
			return None;
		}

		let key = path.to_lowercase();
		let name = match (&link.name, self.registry.resolve_model(path)) {
			(Some(name), _) => name.clone(),
			(None, Ok(info)) => title(&info.verbose_name_plural),
			(None, Err(err)) => {
				tracing::debug!("Model link falls back to its path: {}", err);
				path.to_string()
			}
		};

		Some(MenuLink {
			name,
			url: admin_url(self.registry, path, self.site),
			icon: link
				.icon
				.clone()
				.unwrap_or_else(|| self.settings.icon_for(&key, &self.settings.default_icon_children).to_string()),
			new_window: link.new_window,
			order: link.order.unwrap_or_else(|| self.settings.default_order(&key)),
			children: None,
		})
	}

	fn app_link(&self, user: &dyn AdminUser, link: &LinkConfig, app_label: &str) -> Option<MenuLink> {
		let Some(app) = self.registry.get_app(app_label) else {
			tracing::warn!("App menu '{}' refers to an app that is not installed", app_label);
			return None;
		};

		let children: Vec<MenuLink> = app
			.models
			.iter()
			.filter(|model| self.model_is_listed(user, &app, model))
			.map(|model| {
				let key = model.key();
				MenuLink {
					name: title(&model.verbose_name_plural),
					url: admin_url(self.registry, &format!("{}.{}", app.app_label, model.object_name), self.site),
					icon: self
						.settings
						.icon_for(&key, &self.settings.default_icon_children)
						.to_string(),
					new_window: link.new_window,
					order: self.settings.default_order(&key),
					children: None,
				}
			})
			.collect();

		if children.is_empty() {
			return None;
		}

		let label = app.app_label.to_lowercase();
		Some(MenuLink {
			name: link.name.clone().unwrap_or_else(|| title(&app.verbose_name)),
			url: PLACEHOLDER_URL.to_string(),
			icon: link
				.icon
				.clone()
				.unwrap_or_else(|| self.settings.icon_for(&label, &self.settings.default_icon_parents).to_string()),
			new_window: link.new_window,
			order: link.order.unwrap_or_else(|| self.settings.default_order(&label)),
			children: Some(children),
		})
	}

	fn model_is_listed(&self, user: &dyn AdminUser, app: &AppInfo, model: &ModelInfo) -> bool {
		user.can_view_model(&app.app_label, &model.model_name)
			&& !self.settings.hide_models.contains(&model.key())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use dashub_conf::{DashubSettings, SettingsOverrides, resolve};
	use dashub_core::{DashubError, StaticRegistry};
	use dashub_test::{FakeUser, sample_registry};
	use rstest::rstest;

	fn settings_with_top(links: Vec<LinkConfig>) -> DashubSettings {
		resolve(SettingsOverrides {
			topmenu_links: Some(links),
			hide_models: Some(dashub_conf::OneOrMany::One("Library.Loan".into())),
			icons: Some([("Library.Book".to_string(), "fas fa-book".to_string())].into_iter().collect()),
			..SettingsOverrides::default()
		})
		.unwrap()
	}

	#[rstest]
	#[case(vec![], true)]
	#[case(vec!["library.view_book"], true)]
	#[case(vec!["library.view_book", "library.delete_book"], false)]
	fn every_permission_must_hold(#[case] perms: Vec<&str>, #[case] expected: bool) {
		// Arrange
		let user = FakeUser::new("ann").with_perms(["library.view_book"]);
		let link = perms
			.into_iter()
			.fold(LinkConfig::url("Books", "/books/"), |link, perm| link.with_permission(perm));

		// Act & Assert
		assert_eq!(link_is_visible(&user, &link), expected);
	}

	#[rstest]
	fn predicate_errors_hide_the_link() {
		// Arrange
		let user = FakeUser::superuser("root");
		let link = LinkConfig::url("Broken", "/broken/")
			.with_predicate(|_| Err(DashubError::PermissionCheck("backend down".into())));

		// Act & Assert
		assert!(!link_is_visible(&user, &link));
	}

	#[rstest]
	fn url_links_reverse_named_routes(sample_registry: StaticRegistry) {
		// Arrange
		let settings = settings_with_top(vec![
			LinkConfig::url("Home", "admin:index"),
			LinkConfig::url("Docs", "https://docs.example.com").in_new_window(),
			LinkConfig::url("Raw", "/raw/"),
		]);
		let user = FakeUser::superuser("root");

		// Act
		let menu = MenuBuilder::new(&settings, &sample_registry).top_menu(&user);

		// Assert
		let urls: Vec<&str> = menu.iter().map(|link| link.url.as_str()).collect();
		assert_eq!(urls, vec!["/admin/", "https://docs.example.com", "/raw/"]);
		assert!(menu[1].new_window);
		assert!(menu.iter().all(|link| link.children.is_none()));
	}

	#[rstest]
	fn model_links_need_view_permission(sample_registry: StaticRegistry) {
		// Arrange
		let settings = settings_with_top(vec![
			LinkConfig::model("library.Book"),
			LinkConfig::model("library.Author"),
			LinkConfig::model("library.Missing"),
		]);
		let user = FakeUser::new("ann").with_perms(["library.view_book", "library.change_missing"]);

		// Act
		let menu = MenuBuilder::new(&settings, &sample_registry).top_menu(&user);

		// Assert
		assert_eq!(menu.len(), 2);
		assert_eq!(menu[0].name, "Books");
		assert_eq!(menu[0].url, "/admin/library/book/");
		assert_eq!(menu[0].icon, "fas fa-book");
		assert_eq!(menu[1].name, "library.Missing");
		assert_eq!(menu[1].url, PLACEHOLDER_URL);
	}

	#[rstest]
	fn app_links_expand_to_visible_models(sample_registry: StaticRegistry) {
		// Arrange
		let settings = settings_with_top(vec![LinkConfig::app("library")]);
		let user = FakeUser::new("ann").with_perms(["library.view_book", "library.view_loan"]);
		let builder = MenuBuilder::new(&settings, &sample_registry);

		// Act
		let top = builder.top_menu(&user);
		let user_menu = builder.make_menu(&user, &settings.topmenu_links, false);

		// Assert
		assert_eq!(top.len(), 1);
		assert_eq!(top[0].name, "Library");
		assert_eq!(top[0].url, PLACEHOLDER_URL);
		let children = top[0].children.as_ref().unwrap();
		let names: Vec<&str> = children.iter().map(|child| child.name.as_str()).collect();
		assert_eq!(names, vec!["Books"], "loans are hidden and authors not permitted");
		assert!(user_menu.is_empty());
	}

	#[rstest]
	#[case(LinkConfig::app("library"))]
	#[case(LinkConfig::app("warehouse"))]
	fn app_links_without_children_are_dropped(sample_registry: StaticRegistry, #[case] link: LinkConfig) {
		// Arrange
		let settings = settings_with_top(vec![link]);
		let user = FakeUser::new("nobody");

		// Act & Assert
		assert!(MenuBuilder::new(&settings, &sample_registry).top_menu(&user).is_empty());
	}

	#[rstest]
	fn links_without_target_are_skipped(sample_registry: StaticRegistry) {
		// Arrange
		let settings = settings_with_top(vec![LinkConfig::default()]);

		// Act & Assert
		assert!(
			MenuBuilder::new(&settings, &sample_registry)
				.top_menu(&FakeUser::superuser("root"))
				.is_empty()
		);
	}
}
