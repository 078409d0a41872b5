use compact_str::CompactString;

use crate::style::{Color, Modifier, Style};

/// One grid cell: a grapheme plus its colors and modifiers.
///
/// A wide grapheme occupies its own cell; the cells it covers to the right are reset to
/// [`Cell::EMPTY`] by the writer.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
	symbol: CompactString,
	/// Foreground color.
	pub fg: Color,
	/// Background color.
	pub bg: Color,
	/// Active text attributes.
	pub modifier: Modifier,
}

impl Cell {
	/// A blank cell with default colors and no modifiers.
	pub const EMPTY: Self = Self {
		symbol: CompactString::const_new(" "),
		fg: Color::Reset,
		bg: Color::Reset,
		modifier: Modifier::empty(),
	};

	/// A default-styled cell holding `symbol`.
	pub fn new(symbol: &str) -> Self {
		let mut cell = Self::EMPTY;
		cell.set_symbol(symbol);
		cell
	}

	/// The grapheme drawn in this cell.
	pub fn symbol(&self) -> &str {
		&self.symbol
	}

	/// Replaces the grapheme.
	pub fn set_symbol(&mut self, symbol: &str) -> &mut Self {
		self.symbol = CompactString::new(symbol);
		self
	}

	/// Layers `style` onto the cell.
	pub fn set_style<S: Into<Style>>(&mut self, style: S) -> &mut Self {
		let style = style.into();
		if let Some(fg) = style.fg {
			self.fg = fg;
		}
		if let Some(bg) = style.bg {
			self.bg = bg;
		}
		self.modifier.remove(style.sub_modifier);
		self.modifier.insert(style.add_modifier);
		self
	}

	/// The cell's effective style, expressed as a patch that reproduces it on a blank cell.
	pub fn style(&self) -> Style {
		Style {
			fg: Some(self.fg),
			bg: Some(self.bg),
			add_modifier: self.modifier,
			sub_modifier: Modifier::empty(),
		}
	}

	/// Returns true if the cell is indistinguishable from [`Cell::EMPTY`].
	pub fn is_blank(&self) -> bool {
		*self == Self::EMPTY
	}

	/// Restores [`Cell::EMPTY`].
	pub fn reset(&mut self) {
		*self = Self::EMPTY;
	}
}

impl Default for Cell {
	fn default() -> Self {
		Self::EMPTY
	}
}
