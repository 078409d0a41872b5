//! Caller-owned menu descriptions.
//!
//! These types are only read by [`Menu::create`](crate::Menu::create), which deep-copies
//! everything it needs. With the `serde` feature they can be deserialized straight from
//! configuration, borrowing text from the input where possible.

use std::borrow::Cow;

use marquee_tui::style::Style;

use crate::shortcut::Shortcut;

/// Where the bar sits on the canvas.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Placement {
	/// Bar on the first row, popups open downwards.
	#[default]
	Top,
	/// Bar on the last row, popups open upwards.
	Bottom,
}

/// A whole menu: its sections, placement and styles.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MenuSpec<'a> {
	/// Sections in bar order.
	#[cfg_attr(feature = "serde", serde(borrow))]
	pub sections: Vec<SectionSpec<'a>>,
	/// Bar placement.
	pub placement: Placement,
	/// Style of the bar and of popup borders.
	pub header_style: Style,
	/// Style of popup entries.
	pub body_style: Style,
}

impl<'a> MenuSpec<'a> {
	/// A top-placed menu with default styles.
	pub fn new(sections: Vec<SectionSpec<'a>>) -> Self {
		Self {
			sections,
			..Self::default()
		}
	}

	#[must_use]
	pub fn placement(mut self, placement: Placement) -> Self {
		self.placement = placement;
		self
	}

	#[must_use]
	pub fn header_style(mut self, style: Style) -> Self {
		self.header_style = style;
		self
	}

	#[must_use]
	pub fn body_style(mut self, style: Style) -> Self {
		self.body_style = style;
		self
	}
}

/// One named section of the bar.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionSpec<'a> {
	/// Name shown in the bar.
	#[cfg_attr(feature = "serde", serde(borrow))]
	pub name: Cow<'a, str>,
	/// Key that unrolls the section.
	#[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
	pub shortcut: Option<Shortcut>,
	/// Popup contents, top to bottom.
	#[cfg_attr(feature = "serde", serde(borrow))]
	pub items: Vec<ItemSpec<'a>>,
}

impl<'a> SectionSpec<'a> {
	pub fn new(name: impl Into<Cow<'a, str>>, items: Vec<ItemSpec<'a>>) -> Self {
		Self {
			name: name.into(),
			shortcut: None,
			items,
		}
	}

	#[must_use]
	pub fn shortcut(mut self, shortcut: Shortcut) -> Self {
		self.shortcut = Some(shortcut);
		self
	}
}

/// One popup row. A missing description makes the row a separator.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemSpec<'a> {
	/// Text of the entry.
	#[cfg_attr(feature = "serde", serde(borrow, skip_serializing_if = "Option::is_none"))]
	pub description: Option<Cow<'a, str>>,
	/// Key that selects the entry. Ignored on separators.
	#[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
	pub shortcut: Option<Shortcut>,
}

impl<'a> ItemSpec<'a> {
	/// A selectable entry.
	pub fn entry(description: impl Into<Cow<'a, str>>) -> Self {
		Self {
			description: Some(description.into()),
			shortcut: None,
		}
	}

	/// A horizontal rule.
	pub const fn separator() -> Self {
		Self {
			description: None,
			shortcut: None,
		}
	}

	#[must_use]
	pub fn shortcut(mut self, shortcut: Shortcut) -> Self {
		self.shortcut = Some(shortcut);
		self
	}

	pub const fn is_separator(&self) -> bool {
		self.description.is_none()
	}
}
