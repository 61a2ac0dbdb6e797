//! Theme colour parsing

use crate::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};

/// An RGB triple, serialized as `[r, g, b]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
	/// The channels as a tuple
	pub fn as_tuple(self) -> (u8, u8, u8) {
		(self.0, self.1, self.2)
	}
}

/// Parse a `#RRGGBB` (or `RRGGBB`) colour
///
/// # Examples
///
/// ```
/// use dashub_conf::color::{hex_to_rgb, Rgb};
///
/// assert_eq!(hex_to_rgb("#e31837").unwrap(), Rgb(227, 24, 55));
/// assert_eq!(hex_to_rgb("30AA99").unwrap(), Rgb(48, 170, 153));
/// assert!(hex_to_rgb("#fff").is_err());
/// assert!(hex_to_rgb("#gg0000").is_err());
/// ```
pub fn hex_to_rgb(value: &str) -> SettingsResult<Rgb> {
	let digits = value.strip_prefix('#').unwrap_or(value);
	let invalid = || SettingsError::InvalidColor(value.to_string());

	if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
		return Err(invalid());
	}

	let channel = |range: std::ops::Range<usize>| {
		u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
	};
	Ok(Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
