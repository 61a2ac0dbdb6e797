//! Pagination and list-filter helpers against a fake changelist

use dashub_templatetags::{
	FilterRenderer, PageIndicator, admin_extra_filters, list_filter_choices, paginator_number,
};
use dashub_test::{FakeChangeList, FakeFieldFilter, author_filter, book_change_list};
use rstest::*;

#[rstest]
fn filter_choices_expose_flat_pairs(book_change_list: FakeChangeList) {
	// Arrange
	let spec = &book_change_list.filters[0];

	// Act
	let choices = list_filter_choices(&book_change_list, spec);

	// Assert
	assert_eq!(choices.len(), 3);
	assert_eq!(choices[0].name, None, "All only carries the search term");
	assert_eq!(choices[1].name.as_deref(), Some("author__id__exact"));
	assert_eq!(choices[1].value.as_deref(), Some("1"));
	assert!(choices[1].selected);
	assert_eq!(choices[2].value.as_deref(), Some("2"));
}

#[rstest]
fn extra_filters_keep_the_search_term(book_change_list: FakeChangeList) {
	// Act
	let extra = admin_extra_filters(&book_change_list);

	// Assert
	assert_eq!(extra.keys().collect::<Vec<_>>(), vec!["q"]);
}

#[rstest]
fn pager_slots_link_with_current_params(book_change_list: FakeChangeList) {
	// Act
	let first = paginator_number(&book_change_list, PageIndicator::Number(1));
	let current = paginator_number(&book_change_list, PageIndicator::Number(2));
	let last = paginator_number(&book_change_list, PageIndicator::Number(5));

	// Assert
	assert!(first.contains("href=\"?q=ring&amp;author__id__exact=1&amp;p=1\""));
	assert!(first.contains("Previous"));
	assert!(current.contains("page-item active"));
	assert!(last.contains("page-item next\""));
	assert!(last.contains("p=3"));
}

#[rstest]
fn dropdown_marks_selected_author(author_filter: FakeFieldFilter) {
	// Arrange
	let list = FakeChangeList::new(1, 1)
		.with_param("author__id__exact", "2")
		.with_filter(author_filter.clone());
	let renderer = FilterRenderer::new().unwrap();

	// Act
	let html = renderer.render(&list, &author_filter).unwrap();

	// Assert
	assert!(html.contains("value=\"2\" selected>Le Guin</option>"));
	assert!(html.contains("<option value=\"\">author</option>"));
}
