//! Painting the bar and popups, and the rolled-up/unrolled state.

use marquee_tui::Surface;
use marquee_tui::layout::Position;
use marquee_tui::style::{Modifier, Style};
use marquee_tui::symbols::border;

use crate::error::Result;
use crate::item::Item;
use crate::layout::{MARGIN, SECTION_GAP, popup_origin, popup_size};
use crate::section::Section;
use crate::spec::Placement;

/// Marks shortcut characters in the bar and in popups.
const EMPHASIS: Style = Style::new().add_modifier(Modifier::BOLD.union(Modifier::UNDERLINED));
/// Marks the selected entry.
const SELECTED: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Whether a popup is showing, and which.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderState {
	/// Only the bar is drawn.
	#[default]
	RolledUp,
	/// The popup of the section at this index is drawn below (or above) the bar.
	Unrolled(usize),
}

impl RenderState {
	/// Index of the unrolled section.
	pub const fn unrolled(self) -> Option<usize> {
		match self {
			Self::RolledUp => None,
			Self::Unrolled(index) => Some(index),
		}
	}

	pub const fn is_rolled_up(self) -> bool {
		matches!(self, Self::RolledUp)
	}
}

/// Fully resolved styles; every cell drawn starts from a reset so nothing underneath leaks in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Theme {
	pub header: Style,
	pub body: Style,
}

impl Theme {
	pub(crate) const fn new(header: Style, body: Style) -> Self {
		Self {
			header: Style::reset().patch(header),
			body: Style::reset().patch(body),
		}
	}
}

/// Paints the bar on row `row`, out to the surface's right edge.
pub(crate) fn draw_header<S: Surface>(
	surface: &mut S,
	sections: &[Section],
	row: u16,
	style: Style,
) -> Result<()> {
	blanks(surface, Position::new(0, row), MARGIN, style)?;
	let mut end = MARGIN;
	for section in sections {
		let at = Position::new(section.x(), row);
		surface.put_str(at, section.name(), style)?;
		end = section.x().saturating_add(section.name_width());
		blanks(surface, Position::new(end, row), SECTION_GAP, style)?;
		end = end.saturating_add(SECTION_GAP);
		if let Some(column) = section.shortcut_column() {
			surface.patch_style(at.right_by(column), EMPHASIS)?;
		}
	}
	let width = surface.size().width;
	blanks(surface, Position::new(end, row), width.saturating_sub(end), style)
}

/// Paints `section`'s popup: a rounded box in the header style holding one row per item.
pub(crate) fn draw_popup<S: Surface>(
	surface: &mut S,
	section: &Section,
	placement: Placement,
	theme: Theme,
) -> Result<()> {
	let origin = popup_origin(section, surface.size().height, placement);
	let size = popup_size(section);
	let symbols = border::ROUNDED;
	let inner = size.width.saturating_sub(2);
	let rule = symbols.horizontal.repeat(usize::from(inner));
	let right = origin.x.saturating_add(size.width - 1);

	let edge = |first: &str, last: &str| [first, rule.as_str(), last].concat();
	surface.put_str(
		origin,
		&edge(symbols.top_left, symbols.top_right),
		theme.header,
	)?;
	let mut y = origin.y;
	for (index, item) in section.items().iter().enumerate() {
		y += 1;
		let left = Position::new(origin.x, y);
		let entry = match item {
			Item::Separator => {
				surface.put_str(
					left,
					&edge(symbols.divider_left, symbols.divider_right),
					theme.header,
				)?;
				continue;
			}
			Item::Entry(entry) => entry,
		};
		surface.put_str(left, symbols.vertical, theme.header)?;
		surface.put_str(Position::new(right, y), symbols.vertical, theme.header)?;

		let style = if index == section.selected() {
			theme.body.patch(SELECTED)
		} else {
			theme.body
		};
		let start = left.right_by(1);
		let written = surface.put_str(start, entry.description(), style)?;
		let label_width = entry.label().map_or(0, |label| label.width());
		let label_start = inner.saturating_sub(label_width);
		blanks(
			surface,
			start.right_by(written),
			label_start.saturating_sub(written),
			style,
		)?;
		if let Some(label) = entry.label() {
			surface.put_str(start.right_by(label_start), label.as_str(), style)?;
		}
		if let Some(column) = entry.shortcut_column() {
			surface.patch_style(start.right_by(column), EMPHASIS)?;
		}
	}
	surface.put_str(
		Position::new(origin.x, y + 1),
		&edge(symbols.bottom_left, symbols.bottom_right),
		theme.header,
	)?;
	Ok(())
}

fn blanks<S: Surface>(surface: &mut S, from: Position, count: u16, style: Style) -> Result<()> {
	for offset in 0..count {
		surface.put_char(from.right_by(offset), ' ', style)?;
	}
	Ok(())
}
