//! Text helpers for display strings

use once_cell::sync::Lazy;
use regex::Regex;

static NON_SLUG_CHARS: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"[^\w\s-]").expect("static slug pattern"));
static SLUG_SEPARATORS: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"[-\s]+").expect("static separator pattern"));

/// Escape HTML special characters
///
/// # Examples
///
/// ```
/// use dashub_core::text::escape;
///
/// assert_eq!(escape("<b>\"Tom\" & 'Jerry'</b>"),
///            "&lt;b&gt;&quot;Tom&quot; &amp; &#x27;Jerry&#x27;&lt;/b&gt;");
/// ```
pub fn escape(text: &str) -> String {
	let mut result = String::with_capacity(text.len() + 10);
	for ch in text.chars() {
		match ch {
			'&' => result.push_str("&amp;"),
			'<' => result.push_str("&lt;"),
			'>' => result.push_str("&gt;"),
			'"' => result.push_str("&quot;"),
			'\'' => result.push_str("&#x27;"),
			_ => result.push(ch),
		}
	}
	result
}

fn slug_from(text: &str) -> String {
	let lowered = text.to_lowercase();
	let cleaned = NON_SLUG_CHARS.replace_all(&lowered, "");
	SLUG_SEPARATORS
		.replace_all(cleaned.trim(), "-")
		.trim_matches(|c| c == '-' || c == '_')
		.to_string()
}

/// Convert to an ASCII slug; non-ASCII characters are dropped
///
/// # Examples
///
/// ```
/// use dashub_core::text::slugify;
///
/// assert_eq!(slugify("Order Lines"), "order-lines");
/// assert_eq!(slugify("  Café -- Menu!  "), "caf-menu");
/// ```
pub fn slugify(text: &str) -> String {
	let ascii: String = text.chars().filter(char::is_ascii).collect();
	slug_from(&ascii)
}

/// Convert to a slug keeping unicode letters
///
/// # Examples
///
/// ```
/// use dashub_core::text::unicode_slugify;
///
/// assert_eq!(unicode_slugify("Café Menü"), "café-menü");
/// assert_eq!(unicode_slugify("Hello, World!"), "hello-world");
/// ```
pub fn unicode_slugify(text: &str) -> String {
	slug_from(text)
}

/// Upper-case the first character
pub fn capfirst(text: &str) -> String {
	let mut chars = text.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

/// Title-case every word
///
/// # Examples
///
/// ```
/// use dashub_core::text::title;
///
/// assert_eq!(title("order lines"), "Order Lines");
/// assert_eq!(title("USER groups"), "User Groups");
/// ```
pub fn title(text: &str) -> String {
	let mut result = String::with_capacity(text.len());
	let mut in_word = false;
	for ch in text.chars() {
		if ch.is_alphabetic() {
			if in_word {
				result.extend(ch.to_lowercase());
			} else {
				result.extend(ch.to_uppercase());
			}
			in_word = true;
		} else {
			result.push(ch);
			in_word = false;
		}
	}
	result
}

/// Join items as a human list: `a, b and c`
///
/// # Examples
///
/// ```
/// use dashub_core::text::get_text_list;
///
/// assert_eq!(get_text_list(&["a", "b", "c"], "and"), "a, b and c");
/// assert_eq!(get_text_list(&["name", "email"], "or"), "name or email");
/// assert_eq!(get_text_list(&["name"], "and"), "name");
/// assert_eq!(get_text_list::<&str>(&[], "and"), "");
/// ```
pub fn get_text_list<S: AsRef<str>>(items: &[S], last_word: &str) -> String {
	match items {
		[] => String::new(),
		[only] => only.as_ref().to_string(),
		[head @ .., last] => format!(
			"{} {} {}",
			head.iter().map(|item| -> &str { item.as_ref() }).collect::<Vec<_>>().join(", "),
			last_word,
			last.as_ref()
		),
	}
}

/// Split a class-style name into lower-case words: `OrderLine` -> `order line`
pub fn camel_case_to_spaces(name: &str) -> String {
	let chars: Vec<char> = name.chars().collect();
	let mut result = String::with_capacity(name.len() + 4);
	for (i, ch) in chars.iter().enumerate() {
		if ch.is_uppercase() && i > 0 {
			let after_lower = chars[i - 1].is_lowercase();
			let starts_word = chars.get(i + 1).is_some_and(|next| !next.is_uppercase());
			if after_lower || starts_word {
				result.push(' ');
			}
		}
		result.push(*ch);
	}
	result.trim().to_lowercase()
}
