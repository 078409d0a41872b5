use core::cmp::{max, min};

use super::{Position, Size};

/// A rectangular region of cells.
///
/// Edges follow the half-open convention: [`right`](Self::right) and
/// [`bottom`](Self::bottom) are the first coordinates outside the rectangle.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
	/// Left column.
	pub x: u16,
	/// Top row.
	pub y: u16,
	/// Width in columns.
	pub width: u16,
	/// Height in rows.
	pub height: u16,
}

impl Rect {
	/// A zero-sized rectangle at the origin.
	pub const ZERO: Self = Self {
		x: 0,
		y: 0,
		width: 0,
		height: 0,
	};

	/// Creates a rectangle, shrinking the dimensions so that the far edges fit in `u16`.
	pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
		let width = x.saturating_add(width) - x;
		let height = y.saturating_add(height) - y;
		Self {
			x,
			y,
			width,
			height,
		}
	}

	/// Creates a rectangle anchored at `position` with the given `size`.
	pub const fn from_parts(position: Position, size: Size) -> Self {
		Self::new(position.x, position.y, size.width, size.height)
	}

	/// Number of cells covered.
	pub const fn area(self) -> u32 {
		(self.width as u32) * (self.height as u32)
	}

	/// Returns true if the rectangle covers no cells.
	pub const fn is_empty(self) -> bool {
		self.width == 0 || self.height == 0
	}

	/// Left column.
	pub const fn left(self) -> u16 {
		self.x
	}

	/// First column to the right of the rectangle.
	pub const fn right(self) -> u16 {
		self.x.saturating_add(self.width)
	}

	/// Top row.
	pub const fn top(self) -> u16 {
		self.y
	}

	/// First row below the rectangle.
	pub const fn bottom(self) -> u16 {
		self.y.saturating_add(self.height)
	}

	/// Top-left corner.
	pub const fn as_position(self) -> Position {
		Position {
			x: self.x,
			y: self.y,
		}
	}

	/// Dimensions without the origin.
	pub const fn as_size(self) -> Size {
		Size {
			width: self.width,
			height: self.height,
		}
	}

	/// Returns true if `position` lies inside the rectangle.
	pub const fn contains(self, position: Position) -> bool {
		position.x >= self.x
			&& position.x < self.right()
			&& position.y >= self.y
			&& position.y < self.bottom()
	}

	/// Overlap of two rectangles; empty when they are disjoint.
	#[must_use]
	pub fn intersection(self, other: Self) -> Self {
		let x1 = max(self.x, other.x);
		let y1 = max(self.y, other.y);
		let x2 = min(self.right(), other.right());
		let y2 = min(self.bottom(), other.bottom());
		Self {
			x: x1,
			y: y1,
			width: x2.saturating_sub(x1),
			height: y2.saturating_sub(y1),
		}
	}

	/// Iterates every position in row-major order.
	pub fn positions(self) -> impl Iterator<Item = Position> {
		(self.top()..self.bottom())
			.flat_map(move |y| (self.left()..self.right()).map(move |x| Position { x, y }))
	}
}

impl From<Size> for Rect {
	fn from(size: Size) -> Self {
		Self::from_parts(Position::ORIGIN, size)
	}
}
