//! Change-form layout selection and section helpers

use dashub_conf::{ChangeformFormat, DashubSettings};
use dashub_core::text::capfirst;
use dashub_menu::order_with_respect_to;
use serde::Serialize;

/// A named group of form fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldsetInfo {
	pub name: Option<String>,
	pub fields: Vec<String>,
}

impl FieldsetInfo {
	/// Named fieldset
	pub fn named(name: impl Into<String>, fields: &[&str]) -> Self {
		Self {
			name: Some(name.into()),
			fields: fields.iter().map(|field| field.to_string()).collect(),
		}
	}

	/// Fieldset without a heading
	pub fn unnamed(fields: &[&str]) -> Self {
		Self {
			name: None,
			fields: fields.iter().map(|field| field.to_string()).collect(),
		}
	}
}

/// An inline formset shown inside the change form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineInfo {
	pub verbose_name_plural: String,
}

/// What the template selector needs to know about a model admin
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminFormInfo {
	pub app_label: String,
	pub model_name: String,
	pub fieldsets: Vec<FieldsetInfo>,
	pub inlines: Vec<InlineInfo>,
	/// Section names that should render first, in this order
	pub section_order: Vec<String>,
}

impl AdminFormInfo {
	/// Lower-cased `app_label.model_name`
	pub fn model_key(&self) -> String {
		format!("{}.{}", self.app_label, self.model_name).to_lowercase()
	}

	/// Whether the form has real fieldsets
	pub fn has_fieldsets(&self) -> bool {
		has_fieldsets(&self.fieldsets)
	}

	/// Whether the form has inline formsets
	pub fn has_inlines(&self) -> bool {
		!self.inlines.is_empty()
	}
}

/// False when there are no fieldsets, or a single fieldset without a name
pub fn has_fieldsets(fieldsets: &[FieldsetInfo]) -> bool {
	match fieldsets {
		[] => false,
		[only] => only.name.is_some(),
		_ => true,
	}
}

/// Pick the change-form layout for a model
///
/// A per-model override wins over the global `changeform_format`. Forms with
/// neither fieldsets nor inlines always use [`ChangeformFormat::Single`], and
/// unknown layout ids fall back to [`ChangeformFormat::HorizontalTabs`].
///
/// # Examples
///
/// ```
/// use dashub_conf::{ChangeformFormat, DashubSettings};
/// use dashub_templatetags::select_changeform_template;
///
/// let settings = DashubSettings::default();
/// assert_eq!(
///     select_changeform_template("shop.order", true, false, &settings),
///     ChangeformFormat::HorizontalTabs
/// );
/// assert_eq!(
///     select_changeform_template("shop.order", false, false, &settings),
///     ChangeformFormat::Single
/// );
/// ```
pub fn select_changeform_template(
	model_key: &str,
	has_fieldsets: bool,
	has_inlines: bool,
	settings: &DashubSettings,
) -> ChangeformFormat {
	if !has_fieldsets && !has_inlines {
		return ChangeformFormat::Single;
	}

	let configured = settings
		.changeform_format_overrides
		.get(&model_key.to_lowercase())
		.unwrap_or(&settings.changeform_format);

	configured.parse().unwrap_or_else(|err| {
		tracing::warn!("{}; using {}", err, ChangeformFormat::HorizontalTabs);
		ChangeformFormat::HorizontalTabs
	})
}

/// Template path for a model admin's change form
pub fn changeform_template(form: &AdminFormInfo, settings: &DashubSettings) -> &'static str {
	select_changeform_template(&form.model_key(), form.has_fieldsets(), form.has_inlines(), settings).template()
}

/// Layout id used as a CSS class on the change form
pub fn changeform_template_class(form: &AdminFormInfo, settings: &DashubSettings) -> &'static str {
	select_changeform_template(&form.model_key(), form.has_fieldsets(), form.has_inlines(), settings).as_str()
}

/// One renderable block of a change form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
	pub name: Option<String>,
	pub is_inline: bool,
	pub fields: Vec<String>,
}

/// Fieldsets followed by inlines, with `section_order` names moved first
///
/// Inlines are named after their capitalised plural verbose name.
pub fn sections(form: &AdminFormInfo) -> Vec<Section> {
	let fieldsets = form.fieldsets.iter().map(|fieldset| Section {
		name: fieldset.name.clone(),
		is_inline: false,
		fields: fieldset.fields.clone(),
	});
	let inlines = form.inlines.iter().map(|inline| Section {
		name: Some(capfirst(&inline.verbose_name_plural)),
		is_inline: true,
		fields: Vec::new(),
	});
	let all: Vec<Section> = fieldsets.chain(inlines).collect();

	if form.section_order.is_empty() {
		return all;
	}
	order_with_respect_to(all, &form.section_order, |section| {
		section.name.as_deref().unwrap_or_default()
	})
}

/// A changelist column header
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnHeader {
	pub sortable: bool,
	pub sorted: bool,
	pub ascending: bool,
	pub descending: bool,
	pub class_attrib: String,
}

const ACTION_CHECKBOX_CLASS: &str = " class=\"action-checkbox-column\"";

/// CSS classes for a changelist header cell
///
/// `counter0` is the zero-based column index.
pub fn header_class(header: &ColumnHeader, counter0: usize) -> String {
	let mut classes = Vec::new();
	if counter0 == 0 && header.class_attrib == ACTION_CHECKBOX_CLASS {
		classes.push("djn-checkbox-select-all");
	}
	if header.sortable {
		classes.push(match (header.sorted, header.ascending, header.descending) {
			(true, true, _) => "sorting_asc",
			(true, false, true) => "sorting_desc",
			_ => "sorting",
		});
	}
	classes.join(" ")
}
