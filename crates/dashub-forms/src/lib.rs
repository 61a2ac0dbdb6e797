//! # dashub-forms
//!
//! Form widgets and field styling for the dashub admin theme.
//!
//! ```
//! use dashub_forms::{DashubSelectMultiple, FormField, Widget, WidgetKind, render_form_field_class};
//!
//! let widget = DashubSelectMultiple::default();
//! let attrs = widget.build_attrs(&Default::default(), None);
//! assert_eq!(attrs.get("multiple").map(String::as_str), Some("multiple"));
//!
//! let mut field = FormField::new("tags", WidgetKind::SelectMultiple);
//! render_form_field_class(&mut field, None);
//! assert_eq!(field.class(), "form-select");
//! ```

pub mod fields;
pub mod widgets;

pub use fields::{FormField, WidgetKind, render_form_field_class};
pub use widgets::{
	Attrs, DashubSelect, DashubSelectMultiple, Media, SELECT2_CSS, SELECT2_JS, SELECT_TEMPLATE,
	Widget,
};
