//! Display structures produced by the menu builders
//!
//! Every type is `Serialize` so it can be handed straight to a template
//! context.

use serde::Serialize;

/// A resolved link of the top menu, user menu or a `custom_links` group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuLink {
	pub name: String,
	pub url: String,
	pub icon: String,
	pub new_window: bool,
	pub order: i64,
	/// Models of an app dropdown; `None` for plain links
	#[serde(skip_serializing_if = "Option::is_none")]
	pub children: Option<Vec<MenuLink>>,
}

impl MenuLink {
	/// Whether the link expands into a dropdown
	pub fn is_dropdown(&self) -> bool {
		self.children.is_some()
	}
}

/// One entry of a model's submenu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmenuLink {
	pub name: String,
	pub url: String,
	pub order: i64,
	/// Slug of the resolved model name, used as a `default_orders` key
	#[serde(skip_serializing_if = "Option::is_none")]
	pub submenu_str: Option<String>,
}

impl SubmenuLink {
	pub(crate) fn new(name: impl Into<String>, url: impl Into<String>, order: i64) -> Self {
		Self {
			name: name.into(),
			url: url.into(),
			order,
			submenu_str: None,
		}
	}
}

/// A model row of the side menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuModel {
	pub name: String,
	pub object_name: String,
	/// Lower-cased `app_label.model_name`
	pub model_str: String,
	pub url: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub add_url: Option<String>,
	pub count: u64,
	pub icon: String,
	pub order: i64,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub submenu: Option<Vec<SubmenuLink>>,
}

/// An entry under an app in the side menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SideMenuItem {
	Model(MenuModel),
	Link(MenuLink),
}

impl SideMenuItem {
	/// Display name
	pub fn name(&self) -> &str {
		match self {
			SideMenuItem::Model(model) => &model.name,
			SideMenuItem::Link(link) => &link.name,
		}
	}

	/// Sort order
	pub fn order(&self) -> i64 {
		match self {
			SideMenuItem::Model(model) => model.order,
			SideMenuItem::Link(link) => link.order,
		}
	}

	/// Model key for model rows
	pub fn model_str(&self) -> Option<&str> {
		match self {
			SideMenuItem::Model(model) => Some(&model.model_str),
			SideMenuItem::Link(_) => None,
		}
	}
}

/// An app group of the side menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SideMenuApp {
	pub name: String,
	pub app_label: String,
	pub app_url: String,
	pub icon: String,
	pub order: i64,
	pub items: Vec<SideMenuItem>,
}
