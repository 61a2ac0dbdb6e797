//! Message translation
//!
//! Audit-log fragments and field names pass through a [`Translator`] before
//! display. Hosts with real gettext catalogs implement the trait themselves;
//! [`MessageCatalog`] covers simple in-memory catalogs.

use std::collections::HashMap;

/// Translate a message id into the active language
pub trait Translator: Send + Sync {
	/// Translated text, or the message id itself when no translation exists
	fn gettext(&self, message: &str) -> String;
}

/// Translator that returns every message unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTranslator;

impl Translator for NullTranslator {
	fn gettext(&self, message: &str) -> String {
		message.to_string()
	}
}

/// A message catalog containing translations for a specific locale
///
/// # Example
/// ```
/// use dashub_core::{MessageCatalog, Translator};
///
/// let mut catalog = MessageCatalog::new("fr");
/// catalog.add_translation("Added.", "Ajouté.");
///
/// assert_eq!(catalog.gettext("Added."), "Ajouté.");
/// assert_eq!(catalog.gettext("Deleted."), "Deleted.");
/// ```
#[derive(Debug, Clone)]
pub struct MessageCatalog {
	locale: String,
	messages: HashMap<String, String>,
}

impl MessageCatalog {
	/// Create a new message catalog for the given locale
	pub fn new(locale: &str) -> Self {
		Self {
			locale: locale.to_string(),
			messages: HashMap::new(),
		}
	}

	/// Get the locale for this catalog
	pub fn locale(&self) -> &str {
		&self.locale
	}

	/// Add a simple translation
	pub fn add_translation(&mut self, message: impl Into<String>, translation: impl Into<String>) {
		self.messages.insert(message.into(), translation.into());
	}

	/// Builder-style [`MessageCatalog::add_translation`]
	pub fn with_translation(
		mut self,
		message: impl Into<String>,
		translation: impl Into<String>,
	) -> Self {
		self.add_translation(message, translation);
		self
	}

	/// Get a translation
	pub fn get(&self, message: &str) -> Option<&String> {
		self.messages.get(message)
	}
}

impl Translator for MessageCatalog {
	fn gettext(&self, message: &str) -> String {
		self.get(message)
			.cloned()
			.unwrap_or_else(|| message.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn null_translator_is_identity() {
		assert_eq!(NullTranslator.gettext("Changed {fields}."), "Changed {fields}.");
	}

	#[rstest]
	fn catalog_falls_back_to_message_id() {
		// Arrange
		let catalog = MessageCatalog::new("de")
			.with_translation("and", "und")
			.with_translation("name", "Name");

		// Act & Assert
		assert_eq!(catalog.locale(), "de");
		assert_eq!(catalog.gettext("and"), "und");
		assert_eq!(catalog.gettext("email"), "email");
	}
}
