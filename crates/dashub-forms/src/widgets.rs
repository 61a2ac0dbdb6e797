//! select2-backed select widgets

use indexmap::IndexMap;
use serde::Serialize;

/// HTML attributes of a widget, in insertion order
pub type Attrs = IndexMap<String, String>;

/// Template both select widgets render with
pub const SELECT_TEMPLATE: &str = "practet_dashboard/widgets/select.html";

/// select2 stylesheet
pub const SELECT2_CSS: &str = "https://cdn.jsdelivr.net/npm/select2@4.1.0-rc.0/dist/css/select2.min.css";

/// select2 script
pub const SELECT2_JS: &str = "https://cdn.jsdelivr.net/npm/select2@4.1.0-rc.0/dist/js/select2.min.js";

/// Static assets a widget needs on the page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Media {
	/// Stylesheets keyed by media type, e.g. `all`
	pub css: IndexMap<String, Vec<String>>,
	pub js: Vec<String>,
}

impl Media {
	/// Assets of the select2 widgets
	pub fn select2() -> Self {
		let mut css = IndexMap::new();
		css.insert("all".to_string(), vec![SELECT2_CSS.to_string()]);
		Self {
			css,
			js: vec![SELECT2_JS.to_string()],
		}
	}

	/// `<link>` and `<script>` tags for the page head
	pub fn render(&self) -> String {
		let links = self.css.iter().flat_map(|(medium, paths)| {
			paths.iter().map(move |path| {
				format!("<link href=\"{}\" media=\"{}\" rel=\"stylesheet\">", path, medium)
			})
		});
		let scripts = self
			.js
			.iter()
			.map(|path| format!("<script src=\"{}\"></script>", path));
		links.chain(scripts).collect::<Vec<_>>().join("\n")
	}
}

/// A form widget rendered by the admin templates
pub trait Widget {
	fn template_name(&self) -> &'static str;

	/// Attributes for rendering, `extra` taking precedence over `base`
	fn build_attrs(&self, base: &Attrs, extra: Option<&Attrs>) -> Attrs;

	fn media(&self) -> Media;
}

fn merge_attrs(base: &Attrs, extra: Option<&Attrs>) -> Attrs {
	let mut attrs = base.clone();
	if let Some(extra) = extra {
		attrs.extend(extra.iter().map(|(key, value)| (key.clone(), value.clone())));
	}
	attrs
}

/// Single-choice select enhanced by select2
#[derive(Debug, Clone, Default)]
pub struct DashubSelect {
	pub attrs: Attrs,
}

impl Widget for DashubSelect {
	fn template_name(&self) -> &'static str {
		SELECT_TEMPLATE
	}

	fn build_attrs(&self, base: &Attrs, extra: Option<&Attrs>) -> Attrs {
		merge_attrs(base, extra)
	}

	fn media(&self) -> Media {
		Media::select2()
	}
}

/// Multiple-choice select enhanced by select2
#[derive(Debug, Clone, Default)]
pub struct DashubSelectMultiple {
	pub attrs: Attrs,
}

impl Widget for DashubSelectMultiple {
	fn template_name(&self) -> &'static str {
		SELECT_TEMPLATE
	}

	fn build_attrs(&self, base: &Attrs, extra: Option<&Attrs>) -> Attrs {
		let mut attrs = merge_attrs(base, extra);
		attrs.insert("multiple".to_string(), "multiple".to_string());
		attrs
	}

	fn media(&self) -> Media {
		Media::select2()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn attrs(pairs: &[(&str, &str)]) -> Attrs {
		pairs
			.iter()
			.map(|(key, value)| (key.to_string(), value.to_string()))
			.collect()
	}

	#[rstest]
	fn extra_attrs_win() {
		// Arrange
		let base = attrs(&[("id", "id_author"), ("class", "form-select")]);
		let extra = attrs(&[("class", "wide")]);

		// Act
		let merged = DashubSelect::default().build_attrs(&base, Some(&extra));

		// Assert
		assert_eq!(merged, attrs(&[("id", "id_author"), ("class", "wide")]));
	}

	#[rstest]
	#[case(None)]
	#[case(Some(attrs(&[("multiple", "no")])))]
	fn multiple_is_forced(#[case] extra: Option<Attrs>) {
		// Act
		let merged = DashubSelectMultiple::default().build_attrs(&attrs(&[("id", "id_tags")]), extra.as_ref());

		// Assert
		assert_eq!(merged.get("multiple").map(String::as_str), Some("multiple"));
		assert_eq!(merged.get("id").map(String::as_str), Some("id_tags"));
	}

	#[rstest]
	fn both_widgets_share_template_and_assets() {
		// Arrange
		let single = DashubSelect::default();
		let multiple = DashubSelectMultiple::default();

		// Assert
		assert_eq!(single.template_name(), SELECT_TEMPLATE);
		assert_eq!(multiple.template_name(), SELECT_TEMPLATE);
		assert_eq!(single.media(), multiple.media());
		assert_eq!(single.media().js, vec![SELECT2_JS.to_string()]);
		assert_eq!(single.media().css["all"], vec![SELECT2_CSS.to_string()]);
	}

	#[rstest]
	fn media_tags() {
		// Act
		let html = Media::select2().render();

		// Assert
		assert_eq!(
			html,
			format!(
				"<link href=\"{}\" media=\"all\" rel=\"stylesheet\">\n<script src=\"{}\"></script>",
				SELECT2_CSS, SELECT2_JS
			)
		);
	}
}
