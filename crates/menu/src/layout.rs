//! Bar and popup geometry.
//!
//! The bar is one row: a two-column margin, then each section name followed by a two-column
//! gap. Popups hang off the bar under (or, at the bottom of the canvas, above) their section's
//! name and always fit inside the menu surface, which is at least as wide as the canvas.

use marquee_tui::layout::{Position, Rect, Size};

use crate::section::Section;
use crate::spec::Placement;

/// Blank columns before the first section name.
pub(crate) const MARGIN: u16 = 2;
/// Blank columns after each section name.
pub(crate) const SECTION_GAP: u16 = 2;
/// Blank columns between an entry's description and its shortcut label.
pub(crate) const SHORTCUT_GAP: u16 = 2;
/// Columns (or rows) taken by the two sides of a popup border.
pub(crate) const BORDER: u16 = 2;

/// Where a menu's surface goes and where its bar is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeaderLayout {
	/// Columns needed by the bar and by every popup.
	pub header_width: u16,
	/// Surface rectangle in canvas coordinates.
	pub area: Rect,
	/// Surface row holding the bar.
	pub bar_row: u16,
}

/// Assigns each section its bar offset and sizes the menu surface against `canvas`.
pub fn layout_header(sections: &mut [Section], canvas: Size, placement: Placement) -> HeaderLayout {
	let mut x = MARGIN;
	let mut popup_extent = 0u16;
	let mut tallest = 0u16;
	for section in sections.iter_mut() {
		section.set_x(x);
		popup_extent = popup_extent.max(
			x.saturating_add(section.body_width())
				.saturating_add(BORDER),
		);
		tallest = tallest.max(columns(section.items().len()));
		x = x
			.saturating_add(section.name_width())
			.saturating_add(SECTION_GAP);
	}
	let header_width = x.max(popup_extent);

	let height = tallest.saturating_add(BORDER).saturating_add(1);
	let width = header_width.max(canvas.width);
	let (y, bar_row) = match placement {
		Placement::Top => (0, 0),
		Placement::Bottom => (canvas.height.saturating_sub(height), height - 1),
	};
	HeaderLayout {
		header_width,
		area: Rect::new(0, y, width, height),
		bar_row,
	}
}

/// Size of `section`'s popup, border included.
pub fn popup_size(section: &Section) -> Size {
	Size::new(
		section.body_width().saturating_add(BORDER),
		columns(section.items().len()).saturating_add(BORDER),
	)
}

/// Top-left corner of `section`'s popup in surface coordinates.
pub fn popup_origin(section: &Section, surface_height: u16, placement: Placement) -> Position {
	let y = match placement {
		Placement::Top => 1,
		Placement::Bottom => surface_height
			.saturating_sub(popup_size(section).height)
			.saturating_sub(1),
	};
	Position::new(section.x(), y)
}

/// Clamps a column count to the grid's coordinate range.
pub(crate) fn columns(count: usize) -> u16 {
	u16::try_from(count).unwrap_or(u16::MAX)
}
