//! List filters rendered as dropdowns
//!
//! The host's filter choices carry a full query string per option. The
//! dropdown needs a flat `name=value` pair instead, so each choice's query
//! string is parsed back and the parameter belonging to the filter is picked
//! out.

use crate::error::TemplateTagResult;
use crate::pagination::PaginatedList;
use serde::Serialize;
use std::sync::Arc;
use tera::Tera;

/// Name of the built-in dropdown template
pub const FILTER_TEMPLATE: &str = "dashub/filter.html";

const BUILTIN_FILTER_TEMPLATE: &str = r#"<div class="form-group dashub-filter">
  <select class="form-select search-filter" data-name="{{ field_name }}" id="filter-{{ field_name }}">
    <option value="">{{ title }}</option>
    {%- for choice in choices %}
    <option data-name="{{ choice.name | default(value="") }}" value="{{ choice.value | default(value="") }}"{% if choice.selected %} selected{% endif %}>{{ choice.display }}</option>
    {%- endfor %}
  </select>
</div>
"#;

/// One option of a list filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterChoice {
	pub display: String,
	pub selected: bool,
	/// Query string (with leading `?`) that activates this option
	pub query_string: String,
	/// Query parameter set by this option
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Value of [`FilterChoice::name`]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub value: Option<String>,
}

impl FilterChoice {
	/// Option with a display label and query string
	pub fn new(display: impl Into<String>, query_string: impl Into<String>) -> Self {
		Self {
			display: display.into(),
			query_string: query_string.into(),
			..Self::default()
		}
	}

	/// Mark as the active option
	pub fn selected(mut self) -> Self {
		self.selected = true;
		self
	}
}

/// A list filter of the changelist
pub trait FilterSpec: Send + Sync {
	/// Heading shown above the filter
	fn title(&self) -> &str;

	/// Field path of field-based filters, e.g. `author`
	fn field_path(&self) -> Option<&str> {
		None
	}

	/// Parameter name of simple filters
	fn parameter_name(&self) -> Option<&str> {
		None
	}

	/// Lookup keyword, e.g. `author__id__exact`
	fn lookup_kwarg(&self) -> Option<&str> {
		None
	}

	/// Options for the current changelist
	fn choices(&self, list: &dyn PaginatedList) -> Vec<FilterChoice>;

	/// Query parameters this filter consumes
	fn used_parameters(&self) -> Vec<String>;
}

/// Key identifying a filter: field path, else parameter name, else lookup
/// keyword
pub fn filter_id(spec: &dyn FilterSpec) -> String {
	spec.field_path()
		.or_else(|| spec.parameter_name())
		.or_else(|| spec.lookup_kwarg())
		.unwrap_or_default()
		.to_string()
}

fn matches_field(key: &str, field_key: &str) -> bool {
	key == field_key
		|| key.starts_with(&format!("{}__", field_key))
		|| key.contains(&format!("__{}__", field_key))
}

/// Choices of `spec` with `name`/`value` set from their query strings
///
/// Blank values are ignored; for each choice the first remaining query
/// parameter that belongs to the filter is used. Choices without a matching parameter (such
/// as "All") keep `name` and `value` unset.
pub fn list_filter_choices(list: &dyn PaginatedList, spec: &dyn FilterSpec) -> Vec<FilterChoice> {
	let field_key = filter_id(spec);

	spec.choices(list)
		.into_iter()
		.map(|mut choice| {
			let query = choice.query_string.trim_start_matches('?');
			if query.is_empty() {
				return choice;
			}
			let pairs: Vec<(String, String)> = match serde_urlencoded::from_str(query) {
				Ok(pairs) => pairs,
				Err(err) => {
					tracing::debug!("Unparsable filter query '{}': {}", choice.query_string, err);
					return choice;
				}
			};

			let matched = pairs
				.iter()
				.find(|(key, value)| !value.is_empty() && matches_field(key, &field_key));
			if let Some((key, value)) = matched {
				choice.name = Some(key.clone());
				choice.value = Some(value.clone());
			}
			choice
		})
		.collect()
}

/// Renders list filters with Tera
#[derive(Clone)]
pub struct FilterRenderer {
	tera: Arc<Tera>,
	template: String,
}

impl FilterRenderer {
	/// Renderer using the built-in dropdown template
	pub fn new() -> TemplateTagResult<Self> {
		let mut tera = Tera::default();
		tera.add_raw_template(FILTER_TEMPLATE, BUILTIN_FILTER_TEMPLATE)?;
		Ok(Self {
			tera: Arc::new(tera),
			template: FILTER_TEMPLATE.to_string(),
		})
	}

	/// Renderer using a configured Tera instance and template name
	pub fn with_tera(tera: Tera, template: impl Into<String>) -> Self {
		Self {
			tera: Arc::new(tera),
			template: template.into(),
		}
	}

	/// Render `spec` as a dropdown
	///
	/// The template receives `field_name`, `title` and `choices`.
	pub fn render(&self, list: &dyn PaginatedList, spec: &dyn FilterSpec) -> TemplateTagResult<String> {
		let mut context = tera::Context::new();
		context.insert("field_name", &filter_id(spec));
		context.insert("title", spec.title());
		context.insert("choices", &list_filter_choices(list, spec));
		Ok(self.tera.render(&self.template, &context)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use indexmap::IndexMap;
	use rstest::{fixture, rstest};

	struct Listing(IndexMap<String, String>);

	impl PaginatedList for Listing {
		fn page_num(&self) -> usize {
			1
		}

		fn num_pages(&self) -> usize {
			1
		}

		fn query_string(&self, _new_params: &[(&str, String)]) -> String {
			"?".to_string()
		}

		fn params(&self) -> &IndexMap<String, String> {
			&self.0
		}

		fn filter_specs(&self) -> Vec<&dyn FilterSpec> {
			Vec::new()
		}
	}

	struct AuthorFilter;

	impl FilterSpec for AuthorFilter {
		fn title(&self) -> &str {
			"author"
		}

		fn field_path(&self) -> Option<&str> {
			Some("author")
		}

		fn lookup_kwarg(&self) -> Option<&str> {
			Some("author__id__exact")
		}

		fn choices(&self, _list: &dyn PaginatedList) -> Vec<FilterChoice> {
			vec![
				FilterChoice::new("All", "?q=x"),
				FilterChoice::new("Tolkien", "?q=x&author__id__exact=1").selected(),
				FilterChoice::new("<Anon>", "?book__author__name__=anon&author__id__exact="),
				FilterChoice::new("Broken", ""),
			]
		}

		fn used_parameters(&self) -> Vec<String> {
			vec!["author__id__exact".to_string()]
		}
	}

	struct StatusFilter;

	impl FilterSpec for StatusFilter {
		fn title(&self) -> &str {
			"status"
		}

		fn parameter_name(&self) -> Option<&str> {
			Some("status")
		}

		fn choices(&self, _list: &dyn PaginatedList) -> Vec<FilterChoice> {
			vec![
				FilterChoice::new("Open", "?status=open&status=closed"),
				FilterChoice::new("Closed", "?status=&status=closed"),
			]
		}

		fn used_parameters(&self) -> Vec<String> {
			vec!["status".to_string()]
		}
	}

	#[fixture]
	fn listing() -> Listing {
		Listing(IndexMap::new())
	}

	#[rstest]
	fn filter_id_precedence() {
		assert_eq!(filter_id(&AuthorFilter), "author");
		assert_eq!(filter_id(&StatusFilter), "status");
	}

	#[rstest]
	fn choices_get_their_query_pair(listing: Listing) {
		// Act
		let choices = list_filter_choices(&listing, &AuthorFilter);

		// Assert
		let pairs: Vec<(Option<&str>, Option<&str>)> = choices
			.iter()
			.map(|choice| (choice.name.as_deref(), choice.value.as_deref()))
			.collect();
		assert_eq!(
			pairs,
			vec![
				(None, None),
				(Some("author__id__exact"), Some("1")),
				(Some("book__author__name__"), Some("anon")),
				(None, None),
			]
		);
	}

	#[rstest]
	fn repeated_keys_use_first_value(listing: Listing) {
		// Act
		let choices = list_filter_choices(&listing, &StatusFilter);

		// Assert
		assert_eq!(choices[0].value.as_deref(), Some("open"));
	}

	#[rstest]
	fn blank_values_are_skipped_for_later_ones(listing: Listing) {
		// Act
		let choices = list_filter_choices(&listing, &StatusFilter);

		// Assert
		assert_eq!(choices[1].name.as_deref(), Some("status"));
		assert_eq!(choices[1].value.as_deref(), Some("closed"));
	}

	#[rstest]
	fn built_in_template_renders_escaped_dropdown(listing: Listing) {
		// Arrange
		let renderer = FilterRenderer::new().unwrap();

		// Act
		let html = renderer.render(&listing, &AuthorFilter).unwrap();

		// Assert
		assert!(html.contains("data-name=\"author\""));
		assert!(html.contains("value=\"1\" selected>Tolkien</option>"));
		assert!(html.contains("&lt;Anon&gt;"));
	}

	#[rstest]
	fn custom_template(listing: Listing) {
		// Arrange
		let mut tera = Tera::default();
		tera.add_raw_template("filter.txt", "{{ title }}:{% for c in choices %}{{ c.display }};{% endfor %}")
			.unwrap();
		let renderer = FilterRenderer::with_tera(tera, "filter.txt");

		// Act
		let text = renderer.render(&listing, &StatusFilter).unwrap();

		// Assert
		assert_eq!(text, "status:Open;Closed;");
	}
}
