//! CSS classes for bound form fields

use crate::widgets::Attrs;
use serde::Serialize;

/// Kind of widget a field renders with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
	Select,
	SelectMultiple,
	Checkbox,
	CheckboxMultiple,
	Radio,
	Other,
}

impl WidgetKind {
	fn default_class(self) -> Option<&'static str> {
		match self {
			WidgetKind::Select | WidgetKind::SelectMultiple => Some("form-select"),
			WidgetKind::Checkbox | WidgetKind::CheckboxMultiple | WidgetKind::Radio => None,
			WidgetKind::Other => Some("form-control"),
		}
	}
}

/// A form field as seen by the change-form template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
	pub name: String,
	pub widget: WidgetKind,
	/// Whether the field holds JSON, edited with a JSON editor
	pub is_json: bool,
	pub attrs: Attrs,
	pub errors: Vec<String>,
}

impl FormField {
	pub fn new(name: impl Into<String>, widget: WidgetKind) -> Self {
		Self {
			name: name.into(),
			widget,
			is_json: false,
			attrs: Attrs::new(),
			errors: Vec::new(),
		}
	}

	/// Mark as a JSON field
	pub fn json(mut self) -> Self {
		self.is_json = true;
		self
	}

	pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.attrs.insert(key.into(), value.into());
		self
	}

	pub fn with_error(mut self, error: impl Into<String>) -> Self {
		self.errors.push(error.into());
		self
	}

	pub fn has_errors(&self) -> bool {
		!self.errors.is_empty()
	}

	/// Current `class` attribute
	pub fn class(&self) -> &str {
		self.attrs.get("class").map(String::as_str).unwrap_or_default()
	}
}

/// Add the theme's CSS classes to a field's widget
///
/// Without `css_class` the class follows the widget: `form-control jsoneditor`
/// for JSON fields, `form-select` for selects, nothing for checkboxes and
/// radios, `form-control` otherwise. `is-invalid` is added when the field has
/// errors. Classes already present are kept and never repeated.
///
/// # Examples
///
/// ```
/// use dashub_forms::{FormField, WidgetKind, render_form_field_class};
///
/// let mut field = FormField::new("title", WidgetKind::Other)
/// 	.with_attr("class", "wide")
/// 	.with_error("This field is required.");
/// render_form_field_class(&mut field, None);
/// assert_eq!(field.class(), "wide form-control is-invalid");
/// ```
pub fn render_form_field_class<'f>(field: &'f mut FormField, css_class: Option<&str>) -> &'f mut FormField {
	let mut classes: Vec<String> = field.class().split_whitespace().map(str::to_string).collect();

	let default_class = if field.is_json {
		Some("form-control jsoneditor")
	} else {
		field.widget.default_class()
	};
	let wanted = css_class.or(default_class).unwrap_or_default();
	let invalid = if field.has_errors() { "is-invalid" } else { "" };

	for class in wanted.split_whitespace().chain(invalid.split_whitespace()) {
		if !classes.iter().any(|existing| existing == class) {
			classes.push(class.to_string());
		}
	}

	field.attrs.insert("class".to_string(), classes.join(" "));
	field
}
