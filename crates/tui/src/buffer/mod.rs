//! The [`Buffer`] grid and its [`Cell`]s.

use core::ops::{Index, IndexMut};
use core::{cmp, fmt};

use unicode_width::UnicodeWidthStr;

use crate::layout::{Position, Rect, Size};
use crate::style::Style;
use crate::width::drawn_graphemes;

mod cell;
pub use cell::Cell;

/// A grid of [`Cell`]s addressed in local coordinates.
///
/// The grid always starts at `(0, 0)`; placement on a screen belongs to whoever owns the buffer.
/// Index with `buf[(x, y)]` (panics outside the grid) or use [`cell`](Self::cell) /
/// [`cell_mut`](Self::cell_mut) for checked access.
#[derive(Default, Clone, Eq, PartialEq, Hash)]
pub struct Buffer {
	size: Size,
	content: Vec<Cell>,
}

impl Buffer {
	/// A buffer of blank cells.
	#[must_use]
	pub fn empty(size: Size) -> Self {
		Self::filled(size, Cell::EMPTY)
	}

	/// A buffer where every cell is a copy of `cell`.
	#[must_use]
	pub fn filled(size: Size, cell: Cell) -> Self {
		let content = vec![cell; Rect::from(size).area() as usize];
		Self { size, content }
	}

	/// Grid dimensions.
	pub const fn size(&self) -> Size {
		self.size
	}

	/// The grid as a rectangle anchored at the origin.
	pub const fn area(&self) -> Rect {
		Rect::from_parts(Position::ORIGIN, self.size)
	}

	/// All cells in row-major order.
	pub fn content(&self) -> &[Cell] {
		&self.content
	}

	/// The cell at `position`, or `None` outside the grid.
	#[must_use]
	pub fn cell<P: Into<Position>>(&self, position: P) -> Option<&Cell> {
		let index = self.index_of(position.into())?;
		self.content.get(index)
	}

	/// Mutable access to the cell at `position`, or `None` outside the grid.
	#[must_use]
	pub fn cell_mut<P: Into<Position>>(&mut self, position: P) -> Option<&mut Cell> {
		let index = self.index_of(position.into())?;
		self.content.get_mut(index)
	}

	const fn index_of(&self, position: Position) -> Option<usize> {
		if !self.area().contains(position) {
			return None;
		}
		Some(position.y as usize * self.size.width as usize + position.x as usize)
	}

	/// Writes `text` starting at `(x, y)`, stopping after `max_width` columns or at the right
	/// edge, whichever comes first. Returns the number of columns written.
	///
	/// Control characters and zero-width graphemes are skipped. A grapheme that does not fit
	/// whole is not written. Cells hidden behind a wide grapheme are reset so stale content
	/// cannot bleed through.
	pub fn set_stringn<S: Into<Style>>(
		&mut self,
		x: u16,
		y: u16,
		text: &str,
		max_width: usize,
		style: S,
	) -> u16 {
		if y >= self.size.height {
			return 0;
		}
		let max_width = u16::try_from(max_width).unwrap_or(u16::MAX);
		let mut remaining = self.size.width.saturating_sub(x).min(max_width);
		let style = style.into();
		let mut cursor = x;
		let graphemes = drawn_graphemes(text).map_while(|(symbol, width)| {
			let width = u16::try_from(width).ok()?;
			remaining = remaining.checked_sub(width)?;
			Some((symbol, width))
		});
		for (symbol, width) in graphemes {
			self[(cursor, y)].set_symbol(symbol).set_style(style);
			let next = cursor + width;
			cursor += 1;
			while cursor < next {
				self[(cursor, y)].reset();
				cursor += 1;
			}
		}
		cursor - x
	}

	/// Writes `text` starting at `(x, y)` with no width limit besides the right edge.
	pub fn set_string<S: Into<Style>>(&mut self, x: u16, y: u16, text: &str, style: S) -> u16 {
		self.set_stringn(x, y, text, usize::MAX, style)
	}

	/// Layers `style` onto every cell of `area` that lies inside the grid.
	pub fn set_style<S: Into<Style>>(&mut self, area: Rect, style: S) {
		let style = style.into();
		for position in self.area().intersection(area).positions() {
			self[position].set_style(style);
		}
	}

	/// Resets every cell to [`Cell::EMPTY`].
	pub fn reset(&mut self) {
		for cell in &mut self.content {
			cell.reset();
		}
	}

	/// Renders row `y` as text, skipping cells hidden behind wide graphemes.
	///
	/// Returns an empty string for rows outside the grid.
	pub fn row_text(&self, y: u16) -> String {
		let mut text = String::new();
		let mut skip = 0usize;
		for cell in self.row(y) {
			if skip == 0 {
				text.push_str(cell.symbol());
			}
			skip = cmp::max(skip, cell.symbol().width()).saturating_sub(1);
		}
		text
	}

	fn row(&self, y: u16) -> &[Cell] {
		if y >= self.size.height {
			return &[];
		}
		let width = self.size.width as usize;
		let start = y as usize * width;
		&self.content[start..start + width]
	}
}

impl<P: Into<Position>> Index<P> for Buffer {
	type Output = Cell;

	/// # Panics
	///
	/// Panics if the position is outside the grid.
	#[track_caller]
	fn index(&self, position: P) -> &Self::Output {
		let position = position.into();
		let size = self.size;
		self.cell(position).unwrap_or_else(|| {
			panic!("index outside of buffer: size is {size:?} but index is {position:?}")
		})
	}
}

impl<P: Into<Position>> IndexMut<P> for Buffer {
	/// # Panics
	///
	/// Panics if the position is outside the grid.
	#[track_caller]
	fn index_mut(&mut self, position: P) -> &mut Self::Output {
		let position = position.into();
		let size = self.size;
		self.cell_mut(position).unwrap_or_else(|| {
			panic!("index outside of buffer: size is {size:?} but index is {position:?}")
		})
	}
}

impl fmt::Debug for Buffer {
	/// Pretty-prints the rows as strings followed by the style runs, one entry per change.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Buffer {{\n    size: {:?}", self.size)?;
		if self.size.width == 0 || self.size.height == 0 {
			return f.write_str("\n}");
		}
		f.write_str(",\n    content: [\n")?;
		for y in 0..self.size.height {
			writeln!(f, "        {:?},", self.row_text(y))?;
		}
		f.write_str("    ],\n    styles: [\n")?;
		let mut last = None;
		for y in 0..self.size.height {
			for (x, cell) in self.row(y).iter().enumerate() {
				let style = (cell.fg, cell.bg, cell.modifier);
				if last != Some(style) {
					last = Some(style);
					writeln!(
						f,
						"        x: {x}, y: {y}, fg: {:?}, bg: {:?}, modifier: {:?},",
						cell.fg, cell.bg, cell.modifier
					)?;
				}
			}
		}
		f.write_str("    ]\n}")
	}
}
