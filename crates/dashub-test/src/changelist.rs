//! Fake paginated changelist and list filters

use dashub_templatetags::{FilterChoice, FilterSpec, PaginatedList};
use indexmap::IndexMap;
use rstest::*;

/// Field filter over a foreign key, like an admin `RelatedFieldListFilter`
#[derive(Clone, Debug)]
pub struct FakeFieldFilter {
	pub title: String,
	pub field_path: String,
	/// `(display, id)` of each related object
	pub options: Vec<(String, String)>,
}

impl FakeFieldFilter {
	fn lookup_kwarg(&self) -> String {
		format!("{}__id__exact", self.field_path)
	}
}

impl FilterSpec for FakeFieldFilter {
	fn title(&self) -> &str {
		&self.title
	}

	fn field_path(&self) -> Option<&str> {
		Some(&self.field_path)
	}

	fn choices(&self, list: &dyn PaginatedList) -> Vec<FilterChoice> {
		let lookup = self.lookup_kwarg();
		let active = list.params().get(&lookup);

		let mut all = FilterChoice::new("All", query_without(list.params(), &lookup));
		all.selected = active.is_none();
		std::iter::once(all)
			.chain(self.options.iter().map(|(display, id)| {
				let mut choice = FilterChoice::new(display.clone(), list.query_string(&[(lookup.as_str(), id.clone())]));
				choice.selected = active == Some(id);
				choice
			}))
			.collect()
	}

	fn used_parameters(&self) -> Vec<String> {
		vec![self.lookup_kwarg()]
	}
}

fn query_without(params: &IndexMap<String, String>, removed: &str) -> String {
	let pairs: Vec<(&String, &String)> = params.iter().filter(|(key, _)| key.as_str() != removed).collect();
	match serde_urlencoded::to_string(pairs) {
		Ok(query) => format!("?{}", query),
		Err(_) => "?".to_string(),
	}
}

/// Changelist holding query parameters and filters in memory
#[derive(Clone, Debug)]
pub struct FakeChangeList {
	pub page_num: usize,
	pub num_pages: usize,
	pub params: IndexMap<String, String>,
	pub filters: Vec<FakeFieldFilter>,
}

impl FakeChangeList {
	/// Changelist on `page_num` of `num_pages` without parameters
	pub fn new(page_num: usize, num_pages: usize) -> Self {
		Self {
			page_num,
			num_pages,
			params: IndexMap::new(),
			filters: Vec::new(),
		}
	}

	/// Set a query parameter
	pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.params.insert(key.into(), value.into());
		self
	}

	/// Add a list filter
	pub fn with_filter(mut self, filter: FakeFieldFilter) -> Self {
		self.filters.push(filter);
		self
	}
}

impl PaginatedList for FakeChangeList {
	fn page_num(&self) -> usize {
		self.page_num
	}

	fn num_pages(&self) -> usize {
		self.num_pages
	}

	fn query_string(&self, new_params: &[(&str, String)]) -> String {
		let mut params = self.params.clone();
		for (key, value) in new_params {
			params.insert(key.to_string(), value.clone());
		}
		let pairs: Vec<(&String, &String)> = params.iter().collect();
		match serde_urlencoded::to_string(pairs) {
			Ok(query) => format!("?{}", query),
			Err(_) => "?".to_string(),
		}
	}

	fn params(&self) -> &IndexMap<String, String> {
		&self.params
	}

	fn filter_specs(&self) -> Vec<&dyn FilterSpec> {
		self.filters.iter().map(|filter| filter as &dyn FilterSpec).collect()
	}
}

/// Author filter with two authors
#[fixture]
pub fn author_filter() -> FakeFieldFilter {
	FakeFieldFilter {
		title: "author".to_string(),
		field_path: "author".to_string(),
		options: vec![
			("Tolkien".to_string(), "1".to_string()),
			("Le Guin".to_string(), "2".to_string()),
		],
	}
}

/// Page 2 of 5 of a book list searched for "ring" and filtered by author 1
#[fixture]
pub fn book_change_list(author_filter: FakeFieldFilter) -> FakeChangeList {
	FakeChangeList::new(2, 5)
		.with_param("q", "ring")
		.with_param("author__id__exact", "1")
		.with_filter(author_filter)
}
