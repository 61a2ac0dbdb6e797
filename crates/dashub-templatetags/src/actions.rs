//! Audit-log change messages for display
//!
//! Admin log entries store their change message either as free text or as a
//! JSON list such as
//! `[{"changed": {"fields": ["title"]}}, {"added": {"name": "note", "object": "N1"}}]`.
//! [`format_log_entry`] turns both into display records.

use dashub_core::Translator;
use dashub_core::text::get_text_list;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

static PLACEHOLDER: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"\{(\w+)\}").expect("static placeholder pattern"));

/// One line of a formatted change message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionRecord {
	pub msg: String,
	pub icon: String,
	pub colour: String,
}

impl ActionRecord {
	/// Something was added
	pub fn added(msg: impl Into<String>) -> Self {
		Self::styled(msg, "plus-circle", "success")
	}

	/// Something was changed
	pub fn changed(msg: impl Into<String>) -> Self {
		Self::styled(msg, "edit", "blue")
	}

	/// Something was deleted
	pub fn deleted(msg: impl Into<String>) -> Self {
		Self::styled(msg, "trash", "danger")
	}

	fn styled(msg: impl Into<String>, icon: &str, colour: &str) -> Self {
		Self {
			msg: msg.into(),
			icon: icon.to_string(),
			colour: colour.to_string(),
		}
	}
}

/// Formatted change message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ActionMessages {
	/// Message looked like JSON but did not parse; shown verbatim
	Raw(String),
	/// Display records
	Records(Vec<ActionRecord>),
}

impl ActionMessages {
	/// Number of display lines
	pub fn len(&self) -> usize {
		match self {
			ActionMessages::Raw(_) => 1,
			ActionMessages::Records(records) => records.len(),
		}
	}

	/// Whether there is nothing to show
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Records, empty for raw messages
	pub fn records(&self) -> &[ActionRecord] {
		match self {
			ActionMessages::Raw(_) => &[],
			ActionMessages::Records(records) => records,
		}
	}
}

#[derive(Debug, Default, Deserialize)]
struct ChangedDetail {
	#[serde(default)]
	fields: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct SubMessage {
	/// `Some(None)` when the key is present with a `null` value
	#[serde(default, deserialize_with = "present")]
	added: Option<Option<Map<String, Value>>>,
	changed: Option<ChangedDetail>,
	deleted: Option<Map<String, Value>>,
}

fn detail<'a>(map: &'a Map<String, Value>, key: &str) -> &'a str {
	map.get(key).and_then(Value::as_str).unwrap_or_default()
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
	D: Deserializer<'de>,
	T: Deserialize<'de>,
{
	Option::<T>::deserialize(deserializer).map(Some)
}

/// Substitute `{key}` placeholders in one pass; unknown keys stay as written
fn fill(template: &str, pairs: &[(&str, &str)]) -> String {
	PLACEHOLDER
		.replace_all(template, |caps: &Captures<'_>| {
			pairs
				.iter()
				.find(|(key, _)| *key == &caps[1])
				.map(|(_, value)| value.to_string())
				.unwrap_or_else(|| caps[0].to_string())
		})
		.into_owned()
}

fn describe(sub: SubMessage, translator: &dyn Translator) -> Option<ActionRecord> {
	if let Some(added) = sub.added {
		let Some(added) = added.filter(|detail| !detail.is_empty()) else {
			return Some(ActionRecord::added(translator.gettext("Added.")));
		};
		let name = translator.gettext(detail(&added, "name"));
		let msg = fill(
			&translator.gettext("Added {name} “{object}”."),
			&[("name", name.as_str()), ("object", detail(&added, "object"))],
		);
		return Some(ActionRecord::added(msg));
	}

	if let Some(changed) = sub.changed {
		let fields: Vec<String> = changed
			.fields
			.iter()
			.map(|field| translator.gettext(field))
			.collect();
		let fields = get_text_list(fields.as_slice(), &translator.gettext("and"));
		let msg = fill(&translator.gettext("Changed {fields}."), &[("fields", fields.as_str())]);
		return Some(ActionRecord::changed(msg));
	}

	sub.deleted.map(|deleted| {
		ActionRecord::deleted(fill(
			&translator.gettext("Deleted “{object}”."),
			&[("object", detail(&deleted, "object"))],
		))
	})
}

/// Format a log entry's change message
///
/// - free text (not starting with `[`) becomes one generic "changed" record
/// - a JSON list becomes one record per `added`/`changed`/`deleted` entry
/// - text that starts with `[` but is not valid JSON is returned as
///   [`ActionMessages::Raw`]
/// - a JSON list without usable entries falls back to the generic record
///
/// # Examples
///
/// ```
/// use dashub_core::NullTranslator;
/// use dashub_templatetags::{format_log_entry, ActionRecord};
///
/// let messages = format_log_entry(r#"[{"changed": {"fields": ["name", "email"]}}]"#, &NullTranslator);
/// assert_eq!(messages.records(), &[ActionRecord::changed("Changed name and email.")]);
/// ```
pub fn format_log_entry(change_message: &str, translator: &dyn Translator) -> ActionMessages {
	let fallback = || ActionMessages::Records(vec![ActionRecord::changed(translator.gettext(change_message))]);

	if !change_message.starts_with('[') {
		return fallback();
	}

	let entries: Vec<Value> = match serde_json::from_str(change_message) {
		Ok(entries) => entries,
		Err(err) => {
			tracing::debug!("Change message is not valid JSON: {}", err);
			return ActionMessages::Raw(change_message.to_string());
		}
	};

	let records: Vec<ActionRecord> = entries
		.into_iter()
		.filter_map(|entry| match serde_json::from_value::<SubMessage>(entry) {
			Ok(sub) => describe(sub, translator),
			Err(err) => {
				tracing::debug!("Skipping change message entry: {}", err);
				None
			}
		})
		.collect();

	if records.is_empty() {
		fallback()
	} else {
		ActionMessages::Records(records)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use dashub_core::{MessageCatalog, NullTranslator};
	use rstest::rstest;

	#[rstest]
	#[case(r#"[{"added": {}}]"#, ActionRecord::added("Added."))]
	#[case(r#"[{"added": null}]"#, ActionRecord::added("Added."))]
	#[case(
		r#"[{"added": {"name": "tag {object}", "object": "X"}}]"#,
		ActionRecord::added("Added tag {object} “X”.")
	)]
	#[case(
		r#"[{"added": {"name": "note", "object": "N1"}}]"#,
		ActionRecord::added("Added note “N1”.")
	)]
	#[case(
		r#"[{"changed": {"fields": ["name", "email"]}}]"#,
		ActionRecord::changed("Changed name and email.")
	)]
	#[case(
		r#"[{"deleted": {"name": "note", "object": "N1"}}]"#,
		ActionRecord::deleted("Deleted “N1”.")
	)]
	fn single_entries(#[case] message: &str, #[case] expected: ActionRecord) {
		// Act
		let messages = format_log_entry(message, &NullTranslator);

		// Assert
		assert_eq!(messages, ActionMessages::Records(vec![expected]));
	}

	#[rstest]
	fn styling_per_kind() {
		// Act
		let messages = format_log_entry(
			r#"[{"added": {}}, {"changed": {"fields": ["a", "b", "c"]}}, {"deleted": {"object": "x"}}]"#,
			&NullTranslator,
		);

		// Assert
		let styles: Vec<(&str, &str)> = messages
			.records()
			.iter()
			.map(|record| (record.icon.as_str(), record.colour.as_str()))
			.collect();
		assert_eq!(
			styles,
			vec![("plus-circle", "success"), ("edit", "blue"), ("trash", "danger")]
		);
		assert_eq!(messages.records()[1].msg, "Changed a, b and c.");
	}

	#[rstest]
	#[case("Free text")]
	#[case("")]
	fn free_text_is_one_generic_record(#[case] message: &str) {
		// Act
		let messages = format_log_entry(message, &NullTranslator);

		// Assert
		assert_eq!(messages, ActionMessages::Records(vec![ActionRecord::changed(message)]));
	}

	#[rstest]
	#[case("[]")]
	#[case("[1, \"two\"]")]
	#[case(r#"[{"moved": {}}]"#)]
	fn nothing_usable_falls_back(#[case] message: &str) {
		// Act
		let messages = format_log_entry(message, &NullTranslator);

		// Assert
		assert_eq!(messages, ActionMessages::Records(vec![ActionRecord::changed(message)]));
	}

	#[rstest]
	fn invalid_json_is_returned_raw() {
		// Act
		let messages = format_log_entry("[not json", &NullTranslator);

		// Assert
		assert_eq!(messages, ActionMessages::Raw("[not json".to_string()));
		assert_eq!(messages.len(), 1);
		assert!(messages.records().is_empty());
	}

	#[rstest]
	fn fragments_are_translated() {
		// Arrange
		let catalog = MessageCatalog::new("de")
			.with_translation("Changed {fields}.", "{fields} geändert.")
			.with_translation("and", "und")
			.with_translation("title", "Titel");

		// Act
		let messages = format_log_entry(r#"[{"changed": {"fields": ["title", "price"]}}]"#, &catalog);

		// Assert
		assert_eq!(messages.records()[0].msg, "Titel und price geändert.");
	}
}
