//! Change-form layouts

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a change form arranges its fieldsets and inlines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeformFormat {
	/// Everything in one block
	Single,
	/// One tab per section, tabs across the top
	#[default]
	HorizontalTabs,
	/// One tab per section, tabs down the side
	VerticalTabs,
	/// Accordion of sections
	Collapsible,
	/// One section per slide
	Carousel,
}

impl ChangeformFormat {
	/// All known layouts
	pub const ALL: [ChangeformFormat; 5] = [
		ChangeformFormat::Single,
		ChangeformFormat::HorizontalTabs,
		ChangeformFormat::VerticalTabs,
		ChangeformFormat::Collapsible,
		ChangeformFormat::Carousel,
	];

	/// Layout id as used in settings
	pub fn as_str(&self) -> &'static str {
		match self {
			ChangeformFormat::Single => "single",
			ChangeformFormat::HorizontalTabs => "horizontal_tabs",
			ChangeformFormat::VerticalTabs => "vertical_tabs",
			ChangeformFormat::Collapsible => "collapsible",
			ChangeformFormat::Carousel => "carousel",
		}
	}

	/// Template rendering this layout
	///
	/// # Examples
	///
	/// ```
	/// use dashub_conf::ChangeformFormat;
	///
	/// assert_eq!(
	///     ChangeformFormat::VerticalTabs.template(),
	///     "dashub/includes/vertical_tabs.html"
	/// );
	/// ```
	pub fn template(&self) -> &'static str {
		match self {
			ChangeformFormat::Single => "dashub/includes/single.html",
			ChangeformFormat::HorizontalTabs => "dashub/includes/horizontal_tabs.html",
			ChangeformFormat::VerticalTabs => "dashub/includes/vertical_tabs.html",
			ChangeformFormat::Collapsible => "dashub/includes/collapsible.html",
			ChangeformFormat::Carousel => "dashub/includes/carousel.html",
		}
	}
}

impl fmt::Display for ChangeformFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Unknown layout id
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown change form layout '{0}'")]
pub struct UnknownLayout(pub String);

impl FromStr for ChangeformFormat {
	type Err = UnknownLayout;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|format| format.as_str() == s)
			.ok_or_else(|| UnknownLayout(s.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn ids_round_trip_through_from_str() {
		for format in ChangeformFormat::ALL {
			assert_eq!(format.as_str().parse::<ChangeformFormat>(), Ok(format));
		}
	}

	#[rstest]
	#[case("")]
	#[case("tabs")]
	#[case("Horizontal_Tabs")]
	fn unknown_ids_are_rejected(#[case] id: &str) {
		assert_eq!(id.parse::<ChangeformFormat>(), Err(UnknownLayout(id.to_string())));
	}
}
