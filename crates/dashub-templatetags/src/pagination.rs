//! Changelist pagination controls

use crate::filters::FilterSpec;
use dashub_core::text::escape;
use indexmap::IndexMap;

/// Query parameter holding the page number
pub const PAGE_VAR: &str = "p";

/// The paginated changelist a page is rendered from
pub trait PaginatedList {
	/// Current page, starting at 1
	fn page_num(&self) -> usize;

	/// Number of pages
	fn num_pages(&self) -> usize;

	/// Query string (with leading `?`) of the current view with `new_params`
	/// replaced
	fn query_string(&self, new_params: &[(&str, String)]) -> String;

	/// Current query parameters
	fn params(&self) -> &IndexMap<String, String>;

	/// Active list filters
	fn filter_specs(&self) -> Vec<&dyn FilterSpec>;

	/// Query string pointing at `page`
	fn page_query_string(&self, page: usize) -> String {
		self.query_string(&[(PAGE_VAR, page.to_string())])
	}
}

/// One slot of the pager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageIndicator {
	Number(usize),
	Ellipsis,
}

impl From<usize> for PageIndicator {
	fn from(page: usize) -> Self {
		PageIndicator::Number(page)
	}
}

fn nav_item(kind: &str, label: &str, link: &str, idx: u8) -> String {
	let disabled = if link == "#" { " disabled" } else { "" };
	format!(
		"<li class=\"page-item {kind}{disabled}\"><a class=\"page-link\" href=\"{link}\" data-dt-idx=\"{idx}\" tabindex=\"0\">{label}</a></li>",
		link = escape(link),
	)
}

fn static_item(class: &str, label: &str) -> String {
	format!(
		"<li class=\"{class}\"><a class=\"page-link\" href=\"javascript:void(0);\" data-dt-idx=\"3\" tabindex=\"0\">{label}</a></li>"
	)
}

/// Markup for one pager slot
///
/// The first page is preceded by a "Previous" control and the last page is
/// followed by a "Next" control; both are disabled at the boundaries.
///
/// # Examples
///
/// ```
/// use dashub_templatetags::pagination::{paginator_number, PageIndicator};
/// # use dashub_templatetags::{FilterSpec, PaginatedList};
/// # use indexmap::IndexMap;
/// # struct Pages(IndexMap<String, String>);
/// # impl PaginatedList for Pages {
/// #     fn page_num(&self) -> usize { 2 }
/// #     fn num_pages(&self) -> usize { 5 }
/// #     fn query_string(&self, new_params: &[(&str, String)]) -> String {
/// #         format!("?p={}", new_params[0].1)
/// #     }
/// #     fn params(&self) -> &IndexMap<String, String> { &self.0 }
/// #     fn filter_specs(&self) -> Vec<&dyn FilterSpec> { Vec::new() }
/// # }
/// let pages = Pages(IndexMap::new());
///
/// let current = paginator_number(&pages, PageIndicator::Number(2));
/// assert!(current.contains("page-item active"));
///
/// let gap = paginator_number(&pages, PageIndicator::Ellipsis);
/// assert!(gap.contains('…'));
/// ```
pub fn paginator_number(list: &dyn PaginatedList, indicator: PageIndicator) -> String {
	let page_num = list.page_num();
	let mut html = Vec::with_capacity(3);

	let page = match indicator {
		PageIndicator::Number(page) => Some(page),
		PageIndicator::Ellipsis => None,
	};
	let is_first = page == Some(1);
	let is_last = page.is_some_and(|page| page == list.num_pages());

	if is_first {
		let link = if page_num > 1 {
			list.page_query_string(page_num - 1)
		} else {
			"#".to_string()
		};
		html.push(nav_item("previous", "Previous", &link, 0));
	}

	match page {
		Some(page) if page == page_num => html.push(static_item("page-item active", &page.to_string())),
		None => html.push(static_item("page-item", "…")),
		Some(page) => {
			let end = if is_last { " end" } else { "" };
			html.push(format!(
				"<li class=\"page-item\"><a href=\"{href}\" class=\"page-link{end}\" data-dt-idx=\"3\" tabindex=\"0\">{page}</a></li>",
				href = escape(&list.page_query_string(page)),
			));
		}
	}

	if let Some(page) = page
		&& is_last
	{
		let link = if page_num < page {
			list.page_query_string(page_num + 1)
		} else {
			"#".to_string()
		};
		html.push(nav_item("next", "Next", &link, 7));
	}

	html.join("\n")
}

/// Current query parameters that no list filter consumes
///
/// These are carried as hidden inputs so filtering keeps e.g. search terms.
pub fn admin_extra_filters(list: &dyn PaginatedList) -> IndexMap<String, String> {
	let used: Vec<String> = list
		.filter_specs()
		.iter()
		.flat_map(|spec| spec.used_parameters())
		.collect();
	list.params()
		.iter()
		.filter(|(key, _)| !used.contains(key))
		.map(|(key, value)| (key.clone(), value.clone()))
		.collect()
}
