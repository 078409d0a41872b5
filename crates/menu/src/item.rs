//! Engine-owned popup rows.

use marquee_tui::display_width;

use crate::error::Result;
use crate::layout::{SHORTCUT_GAP, columns};
use crate::shortcut::{Shortcut, ShortcutLabel};
use crate::spec::ItemSpec;

/// A popup row owned by a menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
	/// A horizontal rule; never selectable.
	Separator,
	/// A selectable row.
	Entry(Entry),
}

/// A selectable row with its measured text and shortcut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
	description: String,
	width: u16,
	shortcut: Shortcut,
	label: Option<ShortcutLabel>,
	shortcut_column: Option<u16>,
}

impl Item {
	/// Deep-copies `spec`.
	///
	/// Rows without a description become separators whatever their shortcut says.
	pub fn duplicate(spec: &ItemSpec<'_>) -> Result<Self> {
		let Some(description) = spec.description.as_deref() else {
			return Ok(Self::Separator);
		};
		let shortcut = spec.shortcut.unwrap_or_default();
		let description = duplicate_text(description)?;
		let width = columns(display_width(&description)?);
		let label = ShortcutLabel::render(shortcut)?;
		let shortcut_column = shortcut.column_in(&description);
		Ok(Self::Entry(Entry {
			description,
			width,
			shortcut,
			label,
			shortcut_column,
		}))
	}

	pub const fn is_separator(&self) -> bool {
		matches!(self, Self::Separator)
	}

	/// The entry behind this row, if it is selectable.
	pub const fn as_entry(&self) -> Option<&Entry> {
		match self {
			Self::Separator => None,
			Self::Entry(entry) => Some(entry),
		}
	}
}

impl Entry {
	pub fn description(&self) -> &str {
		&self.description
	}

	/// Display width of the description.
	pub const fn width(&self) -> u16 {
		self.width
	}

	pub const fn shortcut(&self) -> Shortcut {
		self.shortcut
	}

	/// Rendered shortcut label, drawn right-aligned in the popup.
	pub const fn label(&self) -> Option<&ShortcutLabel> {
		self.label.as_ref()
	}

	/// Display column of the shortcut character inside the description.
	pub const fn shortcut_column(&self) -> Option<u16> {
		self.shortcut_column
	}

	/// Columns this row needs inside the popup border.
	pub fn body_width(&self) -> u16 {
		match &self.label {
			Some(label) => self
				.width
				.saturating_add(SHORTCUT_GAP)
				.saturating_add(label.width()),
			None => self.width,
		}
	}
}

/// Copies `text` into storage reserved up front, reporting allocation failure instead of
/// aborting.
pub(crate) fn duplicate_text(text: &str) -> Result<String> {
	let mut owned = String::new();
	owned.try_reserve_exact(text.len())?;
	owned.push_str(text);
	Ok(owned)
}
