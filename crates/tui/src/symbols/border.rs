use crate::symbols::line;

/// Glyphs for every part of a box, including the junctions of a horizontal divider.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Set<'a> {
	/// Top left corner.
	pub top_left: &'a str,
	/// Top right corner.
	pub top_right: &'a str,
	/// Bottom left corner.
	pub bottom_left: &'a str,
	/// Bottom right corner.
	pub bottom_right: &'a str,
	/// Left and right edges.
	pub vertical: &'a str,
	/// Top and bottom edges, and divider rows.
	pub horizontal: &'a str,
	/// Where a divider meets the left edge.
	pub divider_left: &'a str,
	/// Where a divider meets the right edge.
	pub divider_right: &'a str,
}

impl Default for Set<'_> {
	fn default() -> Self {
		PLAIN
	}
}

/// Square corners.
///
/// ```text
/// ┌─────┐
/// │xxxxx│
/// ├─────┤
/// └─────┘
/// ```
pub const PLAIN: Set = Set {
	top_left: line::TOP_LEFT,
	top_right: line::TOP_RIGHT,
	bottom_left: line::BOTTOM_LEFT,
	bottom_right: line::BOTTOM_RIGHT,
	vertical: line::VERTICAL,
	horizontal: line::HORIZONTAL,
	divider_left: line::VERTICAL_RIGHT,
	divider_right: line::VERTICAL_LEFT,
};

/// Rounded corners.
///
/// ```text
/// ╭─────╮
/// │xxxxx│
/// ├─────┤
/// ╰─────╯
/// ```
pub const ROUNDED: Set = Set {
	top_left: line::ROUNDED_TOP_LEFT,
	top_right: line::ROUNDED_TOP_RIGHT,
	bottom_left: line::ROUNDED_BOTTOM_LEFT,
	bottom_right: line::ROUNDED_BOTTOM_RIGHT,
	..PLAIN
};
