//! Ordering passes over built menus

use crate::types::{SideMenuApp, SideMenuItem};
use indexmap::IndexMap;

/// Priority of each app named in `order_menus`
///
/// The first name gets the highest priority (`len`), the last gets `1`, so
/// every listed app sorts ahead of unlisted apps with the default order `0`.
pub fn order_menu_priorities(order_menus: &[String]) -> IndexMap<String, i64> {
	let len = order_menus.len() as i64;
	let mut priorities = IndexMap::with_capacity(order_menus.len());
	for (index, label) in order_menus.iter().enumerate() {
		priorities
			.entry(label.to_lowercase())
			.or_insert(len - index as i64);
	}
	priorities
}

/// Final ordering pass: submenus, then items inside each app, then apps
///
/// All sorts are stable and descending by order. Apps named in `order_menus`
/// use their list priority, the rest keep their assigned order.
pub fn order_menus_with_order(mut menu: Vec<SideMenuApp>, order_menus: &[String]) -> Vec<SideMenuApp> {
	let priorities = order_menu_priorities(order_menus);

	for app in &mut menu {
		for item in &mut app.items {
			if let SideMenuItem::Model(model) = item
				&& let Some(submenu) = &mut model.submenu
			{
				submenu.sort_by(|a, b| b.order.cmp(&a.order));
			}
		}
		app.items.sort_by(|a, b| b.order().cmp(&a.order()));
	}

	let app_priority = |app: &SideMenuApp| {
		priorities
			.get(&app.app_label.to_lowercase())
			.copied()
			.unwrap_or(app.order)
	};
	menu.sort_by(|a, b| app_priority(b).cmp(&app_priority(a)));
	menu
}

/// Reorder `items` so those whose key appears in `reference` come first, in
/// `reference` order; the rest follow in their original order
///
/// # Examples
///
/// ```
/// use dashub_menu::order_with_respect_to;
///
/// let sections = vec!["General", "Pricing", "Images", "SEO"];
/// let ordered = order_with_respect_to(sections, &["Images", "General"], |s| *s);
/// assert_eq!(ordered, vec!["Images", "General", "Pricing", "SEO"]);
/// ```
pub fn order_with_respect_to<T, S, F>(items: Vec<T>, reference: &[S], key: F) -> Vec<T>
where
	S: AsRef<str>,
	F: Fn(&T) -> &str,
{
	let max = reference.len();
	let mut ranked: Vec<(usize, T)> = items
		.into_iter()
		.map(|item| {
			let rank = reference
				.iter()
				.position(|name| name.as_ref() == key(&item))
				.unwrap_or(max);
			(rank, item)
		})
		.collect();
	ranked.sort_by_key(|(rank, _)| *rank);
	ranked.into_iter().map(|(_, item)| item).collect()
}
