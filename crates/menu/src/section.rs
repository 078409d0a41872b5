//! Engine-owned bar sections.

use marquee_tui::display_width;

use crate::error::{InvalidSpec, Result};
use crate::item::{Entry, Item, duplicate_text};
use crate::layout::columns;
use crate::shortcut::Shortcut;
use crate::spec::SectionSpec;

/// A named section of the bar and the popup it unrolls into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
	name: String,
	name_width: u16,
	x: u16,
	shortcut: Shortcut,
	shortcut_column: Option<u16>,
	items: Vec<Item>,
	body_width: u16,
	selected: usize,
}

impl Section {
	/// Deep-copies `spec` and every item in it.
	///
	/// The section must hold at least one entry. Selection starts on the first entry. The bar
	/// offset is zero until the section is laid out.
	pub fn duplicate(spec: &SectionSpec<'_>) -> Result<Self> {
		if spec.items.is_empty() {
			return Err(InvalidSpec::EmptySection {
				name: spec.name.to_string(),
			}
			.into());
		}
		let shortcut = spec.shortcut.unwrap_or_default();
		let name = duplicate_text(&spec.name)?;
		let name_width = columns(display_width(&name)?);
		let shortcut_column = shortcut.column_in(&name);

		let mut items = Vec::new();
		items.try_reserve_exact(spec.items.len())?;
		for item in &spec.items {
			items.push(Item::duplicate(item)?);
		}

		let Some(selected) = items.iter().position(|item| !item.is_separator()) else {
			return Err(InvalidSpec::OnlySeparators { name }.into());
		};
		let body_width = items
			.iter()
			.filter_map(Item::as_entry)
			.map(Entry::body_width)
			.max()
			.unwrap_or_default();

		Ok(Self {
			name,
			name_width,
			x: 0,
			shortcut,
			shortcut_column,
			items,
			body_width,
			selected,
		})
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Display width of the name.
	pub const fn name_width(&self) -> u16 {
		self.name_width
	}

	/// Column of the name in the bar.
	pub const fn x(&self) -> u16 {
		self.x
	}

	pub(crate) const fn set_x(&mut self, x: u16) {
		self.x = x;
	}

	pub const fn shortcut(&self) -> Shortcut {
		self.shortcut
	}

	/// Display column of the shortcut character inside the name.
	pub const fn shortcut_column(&self) -> Option<u16> {
		self.shortcut_column
	}

	pub fn items(&self) -> &[Item] {
		&self.items
	}

	/// Widest entry, label included, not counting the popup border.
	pub const fn body_width(&self) -> u16 {
		self.body_width
	}

	/// Index of the selected item; always an entry.
	pub const fn selected(&self) -> usize {
		self.selected
	}

	pub fn selected_entry(&self) -> Option<&Entry> {
		self.items.get(self.selected).and_then(Item::as_entry)
	}

	pub(crate) fn entries(&self) -> impl Iterator<Item = (usize, &Entry)> {
		self.items
			.iter()
			.enumerate()
			.filter_map(|(index, item)| Some((index, item.as_entry()?)))
	}

	/// Moves the selection to `index` if that row is an entry. Returns the previous selection.
	pub(crate) fn select(&mut self, index: usize) -> Option<usize> {
		self.items.get(index)?.as_entry()?;
		Some(core::mem::replace(&mut self.selected, index))
	}

	/// The entry after (or before) the selected one, wrapping around and skipping separators.
	pub(crate) fn neighbour(&self, forward: bool) -> usize {
		let count = self.items.len();
		let mut index = self.selected;
		for _ in 0..count {
			index = if forward {
				(index + 1) % count
			} else {
				(index + count - 1) % count
			};
			if !self.items[index].is_separator() {
				return index;
			}
		}
		self.selected
	}
}
