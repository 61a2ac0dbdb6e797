//! # dashub-templatetags
//!
//! Helpers the dashub admin templates call while rendering a page.
//!
//! - **changeform**: pick one of the five change-form layouts per model
//! - **actions**: turn audit-log change messages into display records
//! - **pagination**: pager markup and leftover query parameters
//! - **filters**: list-filter dropdowns rendered with Tera
//! - **avatar**: user-menu avatar URL
//! - **display**: small string helpers
//!
//! Every helper degrades instead of failing: unknown layouts fall back to
//! horizontal tabs, unparsable change messages are shown verbatim and a
//! missing avatar becomes the stock image.

pub mod actions;
pub mod avatar;
pub mod changeform;
pub mod display;
pub mod error;
pub mod filters;
pub mod pagination;

pub use actions::{ActionMessages, ActionRecord, format_log_entry};
pub use avatar::{NO_AVATAR_IMAGE, user_avatar};
pub use changeform::{
	AdminFormInfo, ColumnHeader, FieldsetInfo, InlineInfo, Section, changeform_template,
	changeform_template_class, has_fieldsets, header_class, sections, select_changeform_template,
};
pub use display::{
	app_is_installed, as_json, can_view_self, has_dashub_setting, style_bold_first_word,
	unicode_slugify, version,
};
pub use error::{TemplateTagError, TemplateTagResult};
pub use filters::{FilterChoice, FilterRenderer, FilterSpec, filter_id, list_filter_choices};
pub use pagination::{PAGE_VAR, PageIndicator, PaginatedList, admin_extra_filters, paginator_number};
