//! Cell-space geometry: positions, sizes, and rectangles.

mod rect;

pub use rect::Rect;

/// A cell coordinate. `x` grows to the right, `y` grows downward.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
	/// Column.
	pub x: u16,
	/// Row.
	pub y: u16,
}

impl Position {
	/// The origin.
	pub const ORIGIN: Self = Self { x: 0, y: 0 };

	/// Creates a position from a column and a row.
	pub const fn new(x: u16, y: u16) -> Self {
		Self { x, y }
	}

	/// Returns this position moved right by `columns`, saturating at the edge of `u16`.
	#[must_use]
	pub const fn right_by(self, columns: u16) -> Self {
		Self {
			x: self.x.saturating_add(columns),
			y: self.y,
		}
	}
}

impl From<(u16, u16)> for Position {
	fn from((x, y): (u16, u16)) -> Self {
		Self { x, y }
	}
}

/// Dimensions of a grid, in cells.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
	/// Number of columns.
	pub width: u16,
	/// Number of rows.
	pub height: u16,
}

impl Size {
	/// A zero-sized grid.
	pub const ZERO: Self = Self { width: 0, height: 0 };

	/// Creates a size from a width and a height.
	pub const fn new(width: u16, height: u16) -> Self {
		Self { width, height }
	}
}

impl From<(u16, u16)> for Size {
	fn from((width, height): (u16, u16)) -> Self {
		Self { width, height }
	}
}
