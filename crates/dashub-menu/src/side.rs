//! Side menu construction

use crate::builder::MenuBuilder;
use crate::ordering::{order_menu_priorities, order_menus_with_order};
use crate::types::{MenuLink, MenuModel, SideMenuApp, SideMenuItem, SubmenuLink};
use dashub_conf::SubmenuEntry;
use dashub_core::text::slugify;
use dashub_core::urls::{PLACEHOLDER_URL, admin_url};
use dashub_core::{AdminUser, AppEntry, ModelEntry};
use indexmap::IndexMap;

/// Name of the leading submenu entry that opens the add form
pub const ADD_NEW_LABEL: &str = "Add New";

impl MenuBuilder<'_> {
	/// Build the side menu from the host's `available_apps`
	///
	/// Hidden apps and models are dropped, custom links are appended to their
	/// app (creating a placeholder group for apps that are not installed),
	/// configured models get a submenu, and apps left without items are
	/// omitted. The result is ordered by [`order_menus_with_order`].
	pub fn side_menu(&self, user: Option<&dyn AdminUser>, available_apps: &[AppEntry]) -> Vec<SideMenuApp> {
		let Some(user) = user else {
			return Vec::new();
		};
		let settings = self.settings;

		let mut apps = available_apps.to_vec();
		for app_label in settings.custom_links.keys() {
			let listed = apps
				.iter()
				.any(|app| app.app_label.eq_ignore_ascii_case(app_label));
			if !listed && !self.registry.is_installed(app_label) {
				apps.push(AppEntry::placeholder(app_label.clone()));
			}
		}

		let mut custom_links: IndexMap<String, Vec<MenuLink>> = settings
			.custom_links
			.iter()
			.map(|(app_label, links)| (app_label.to_lowercase(), self.make_menu(user, links, false)))
			.collect();

		let priorities = order_menu_priorities(&settings.order_menus);
		let mut menu = Vec::with_capacity(apps.len());

		for app in apps {
			let label = app.app_label.to_lowercase();
			if settings.hide_apps.contains(&label) {
				continue;
			}

			let mut items: Vec<SideMenuItem> = app
				.models
				.iter()
				.filter_map(|model| self.side_model(&app.app_label, model))
				.map(SideMenuItem::Model)
				.collect();
			if let Some(links) = custom_links.shift_remove(&label) {
				items.extend(links.into_iter().map(SideMenuItem::Link));
			}

			if items.is_empty() {
				tracing::debug!("Omitting app '{}' with nothing to show", app.app_label);
				continue;
			}

			menu.push(SideMenuApp {
				icon: settings
					.icon_for(&label, &settings.default_icon_parents)
					.to_string(),
				order: priorities
					.get(&label)
					.copied()
					.unwrap_or_else(|| settings.default_order(&label)),
				name: app.name,
				app_label: app.app_label,
				app_url: app.app_url,
				items,
			});
		}

		order_menus_with_order(menu, &settings.order_menus)
	}

	fn side_model(&self, app_label: &str, model: &ModelEntry) -> Option<MenuModel> {
		let settings = self.settings;
		let model_str = format!("{}.{}", app_label, model.object_name).to_lowercase();
		if settings.hide_models.contains(&model_str) {
			return None;
		}

		let url = model
			.admin_url
			.clone()
			.unwrap_or_else(|| PLACEHOLDER_URL.to_string());
		let submenu = settings
			.submenus_models
			.contains(&model_str)
			.then(|| self.submenu(&model_str, model, &url));

		Some(MenuModel {
			name: model.name.clone(),
			object_name: model.object_name.clone(),
			icon: settings
				.icon_for(&model_str, &settings.default_icon_children)
				.to_string(),
			order: settings.default_order(&model_str),
			count: model.count.unwrap_or(0),
			add_url: model.add_url.clone(),
			url,
			submenu,
			model_str,
		})
	}

	fn submenu(&self, model_str: &str, model: &ModelEntry, url: &str) -> Vec<SubmenuLink> {
		let add_url = model.add_url.as_deref().unwrap_or(PLACEHOLDER_URL);
		let mut submenu = vec![
			SubmenuLink::new(ADD_NEW_LABEL, add_url, 0),
			SubmenuLink::new(model.name.clone(), url, 0),
		];

		if let Some(entries) = self.settings.model_submenus.get(model_str) {
			submenu.extend(entries.iter().map(|entry| self.submenu_entry(entry)));
		}
		submenu.sort_by(|a, b| b.order.cmp(&a.order));
		submenu
	}

	fn submenu_entry(&self, entry: &SubmenuEntry) -> SubmenuLink {
		let Some(path) = &entry.model else {
			let url = entry.url.clone().unwrap_or_else(|| PLACEHOLDER_URL.to_string());
			return SubmenuLink {
				name: entry.name.clone().unwrap_or_else(|| url.clone()),
				url,
				order: entry.order.unwrap_or(0),
				submenu_str: None,
			};
		};

		let (name, url) = match self.registry.resolve_model(path) {
			Ok(info) => (info.verbose_name_plural, admin_url(self.registry, path, self.site)),
			Err(err) => {
				tracing::debug!("Submenu entry degrades to its path: {}", err);
				(path.clone(), PLACEHOLDER_URL.to_string())
			}
		};
		let submenu_str = slugify(&name).replace('-', "");

		SubmenuLink {
			order: entry
				.order
				.unwrap_or_else(|| self.settings.default_order(&submenu_str)),
			name,
			url,
			submenu_str: Some(submenu_str),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use dashub_conf::{DashubSettings, LinkConfig, OneOrMany, SettingsOverrides, resolve};
	use dashub_core::StaticRegistry;
	use dashub_test::{FakeUser, sample_apps, sample_registry};
	use rstest::rstest;

	fn labels(menu: &[SideMenuApp]) -> Vec<&str> {
		menu.iter().map(|app| app.app_label.as_str()).collect()
	}

	#[rstest]
	fn no_user_means_no_menu(sample_registry: StaticRegistry, sample_apps: Vec<AppEntry>) {
		// Arrange
		let settings = DashubSettings::default();

		// Act
		let menu = MenuBuilder::new(&settings, &sample_registry).side_menu(None, &sample_apps);

		// Assert
		assert!(menu.is_empty());
	}

	#[rstest]
	fn models_carry_icon_order_and_count(sample_registry: StaticRegistry, sample_apps: Vec<AppEntry>) {
		// Arrange
		let settings = resolve(SettingsOverrides {
			default_orders: Some([("library.author".to_string(), 7)].into_iter().collect()),
			..SettingsOverrides::default()
		})
		.unwrap();
		let user = FakeUser::superuser("root");

		// Act
		let menu = MenuBuilder::new(&settings, &sample_registry).side_menu(Some(&user), &sample_apps);

		// Assert
		let library = menu.iter().find(|app| app.app_label == "library").unwrap();
		assert_eq!(library.icon, settings.default_icon_parents);
		let SideMenuItem::Model(first) = &library.items[0] else {
			panic!("expected a model row");
		};
		assert_eq!(first.model_str, "library.author");
		assert_eq!(first.order, 7);
		let book = library
			.items
			.iter()
			.find(|item| item.model_str() == Some("library.book"))
			.unwrap();
		let SideMenuItem::Model(book) = book else {
			panic!("expected a model row");
		};
		assert_eq!(book.count, 42);
		assert_eq!(book.icon, settings.default_icon_children);
		let auth = menu.iter().find(|app| app.app_label == "auth").unwrap();
		assert_eq!(auth.icon, "fas fa-users-cog");
	}

	#[rstest]
	fn custom_links_join_their_app_or_a_placeholder(sample_registry: StaticRegistry, sample_apps: Vec<AppEntry>) {
		// Arrange
		let settings = resolve(SettingsOverrides {
			custom_links: Some(
				[
					(
						"library".to_string(),
						vec![LinkConfig::url("Import", "/library/import/").with_permission("library.add_book")],
					),
					("reports".to_string(), vec![LinkConfig::url("Sales", "/reports/sales/")]),
				]
				.into_iter()
				.collect(),
			),
			..SettingsOverrides::default()
		})
		.unwrap();
		let user = FakeUser::new("ann").with_perms(["library.view_book"]);

		// Act
		let menu = MenuBuilder::new(&settings, &sample_registry).side_menu(Some(&user), &sample_apps);

		// Assert
		let reports = menu.iter().find(|app| app.app_label == "reports").unwrap();
		assert_eq!(reports.app_url, PLACEHOLDER_URL);
		assert_eq!(reports.items.len(), 1);
		let library = menu.iter().find(|app| app.app_label == "library").unwrap();
		assert!(
			library.items.iter().all(|item| item.name() != "Import"),
			"link needs library.add_book"
		);
	}

	#[rstest]
	fn hidden_apps_models_and_empty_apps_are_dropped(sample_registry: StaticRegistry, sample_apps: Vec<AppEntry>) {
		// Arrange
		let settings = resolve(SettingsOverrides {
			hide_apps: Some(OneOrMany::One("AUTH".into())),
			hide_models: Some(OneOrMany::Many(vec!["Library.Book".into(), "library.Author".into(), "library.loan".into()])),
			..SettingsOverrides::default()
		})
		.unwrap();
		let user = FakeUser::superuser("root");

		// Act
		let menu = MenuBuilder::new(&settings, &sample_registry).side_menu(Some(&user), &sample_apps);

		// Assert
		assert!(!labels(&menu).contains(&"auth"));
		assert!(!labels(&menu).contains(&"library"), "library has no visible models left");
	}

	#[rstest]
	fn submenu_lists_add_list_and_configured_entries(sample_registry: StaticRegistry, sample_apps: Vec<AppEntry>) {
		// Arrange
		let settings = resolve(SettingsOverrides {
			submenus_models: Some(vec!["Library.Book".into()]),
			model_submenus: Some(
				[(
					"library.book".to_string(),
					vec![
						SubmenuEntry::model("library.Author"),
						SubmenuEntry::model("library.Ghost").with_order(-1),
						SubmenuEntry::link("Stats", "/stats/").with_order(3),
					],
				)]
				.into_iter()
				.collect(),
			),
			default_orders: Some([("authors".to_string(), 2)].into_iter().collect()),
			..SettingsOverrides::default()
		})
		.unwrap();
		let user = FakeUser::superuser("root");

		// Act
		let menu = MenuBuilder::new(&settings, &sample_registry).side_menu(Some(&user), &sample_apps);

		// Assert
		let library = menu.iter().find(|app| app.app_label == "library").unwrap();
		let book = library
			.items
			.iter()
			.find_map(|item| match item {
				SideMenuItem::Model(model) if model.model_str == "library.book" => Some(model),
				_ => None,
			})
			.unwrap();
		let submenu = book.submenu.as_ref().unwrap();
		let entries: Vec<(&str, &str)> = submenu
			.iter()
			.map(|entry| (entry.name.as_str(), entry.url.as_str()))
			.collect();
		assert_eq!(
			entries,
			vec![
				("Stats", "/stats/"),
				("authors", "/admin/library/author/"),
				(ADD_NEW_LABEL, "/admin/library/book/add/"),
				("books", "/admin/library/book/"),
				("library.Ghost", PLACEHOLDER_URL),
			]
		);
		assert_eq!(submenu[1].submenu_str.as_deref(), Some("authors"));
	}
}
