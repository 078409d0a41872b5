//! The menu itself: construction, the unroll/rollup transitions and navigation.

use marquee_tui::{Canvas, Plane, Surface};
use tracing::{debug, trace};

use crate::error::{InvalidSpec, MenuError, Result};
use crate::layout::{HeaderLayout, layout_header};
use crate::registry::{Attachment, MenuHost, MenuId};
use crate::render::{RenderState, Theme, draw_header, draw_popup};
use crate::section::Section;
use crate::shortcut::Shortcut;
use crate::spec::{MenuSpec, Placement};

/// A decoded key event offered to [`Menu::offer_input`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyInput {
	/// A character key with its modifiers.
	Char(Shortcut),
	Left,
	Right,
	Up,
	Down,
	Escape,
}

/// The selected entry of the unrolled section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedItem<'a> {
	pub description: &'a str,
	/// [`Shortcut::NONE`] if the entry has none.
	pub shortcut: Shortcut,
	/// Index of the unrolled section.
	pub section: usize,
	/// Index of the entry within the section, separators included.
	pub item: usize,
}

/// A menu bar drawn on a surface it owns.
///
/// At most one section is unrolled at a time. Dropping the menu (or calling
/// [`destroy`](Self::destroy)) detaches it from its context and then releases the surface.
#[derive(Debug)]
pub struct Menu<S = Plane> {
	// Dropped first: the slot is freed before anything else is torn down.
	attachment: Attachment,
	sections: Vec<Section>,
	layout: HeaderLayout,
	placement: Placement,
	theme: Theme,
	state: RenderState,
	/// The surface may not show what `state` describes and must be repainted.
	stale: bool,
	surface: S,
}

impl<S: Surface> Menu<S> {
	/// Builds a menu from `spec` on `host`'s canvas and attaches it to `host`.
	///
	/// Everything in `spec` is copied. The bar is drawn before the menu is attached, so a menu
	/// refused with [`MenuError::AlreadyAttached`] never touched the context's slot; its surface
	/// is released on the way out.
	pub fn create<C>(host: &MenuHost<C>, spec: &MenuSpec<'_>) -> Result<Self>
	where
		C: Canvas<Surface = S>,
	{
		if spec.sections.is_empty() {
			return Err(InvalidSpec::NoSections.into());
		}
		let mut sections = Vec::new();
		sections.try_reserve_exact(spec.sections.len())?;
		for section in &spec.sections {
			sections.push(Section::duplicate(section)?);
		}

		let canvas = host.canvas();
		let layout = layout_header(&mut sections, canvas.size(), spec.placement);
		let theme = Theme::new(spec.header_style, spec.body_style);
		let mut surface = canvas.create_surface(layout.area)?;
		debug!(area = ?layout.area, "menu surface created");
		draw_header(&mut surface, &sections, layout.bar_row, theme.header)?;

		let attachment = host.registry().attach(MenuId::next())?;
		debug!(
			menu = attachment.id().get(),
			sections = sections.len(),
			header_width = layout.header_width,
			"menu created"
		);
		Ok(Self {
			attachment,
			sections,
			layout,
			placement: spec.placement,
			theme,
			state: RenderState::RolledUp,
			stale: false,
			surface,
		})
	}

	/// Detaches the menu from its context and releases its surface and storage.
	pub fn destroy(self) {
		debug!(menu = self.id().get(), "menu destroyed");
	}

	/// Draws the popup of section `index`, rolling up whichever popup was showing.
	///
	/// Fails with [`MenuError::OutOfRange`] without touching anything if there is no such
	/// section. If drawing fails the state is left as it was and the next transition repaints
	/// the whole surface.
	pub fn unroll(&mut self, index: usize) -> Result<()> {
		let count = self.sections.len();
		if index >= count {
			return Err(MenuError::OutOfRange { index, count });
		}
		let previous = self.state;
		self.rollup()?;
		trace!(menu = self.id().get(), section = index, "unroll");
		if let Err(err) = draw_popup(
			&mut self.surface,
			&self.sections[index],
			self.placement,
			self.theme,
		) {
			self.state = previous;
			self.stale = true;
			return Err(err);
		}
		self.state = RenderState::Unrolled(index);
		Ok(())
	}

	/// Removes any popup and redraws the bar. Does nothing when already rolled up.
	pub fn rollup(&mut self) -> Result<()> {
		if self.state.is_rolled_up() && !self.stale {
			return Ok(());
		}
		trace!(menu = self.id().get(), "rollup");
		self.surface.erase();
		self.stale = true;
		draw_header(
			&mut self.surface,
			&self.sections,
			self.layout.bar_row,
			self.theme.header,
		)?;
		self.stale = false;
		self.state = RenderState::RolledUp;
		Ok(())
	}

	/// Unrolls the section right of the current one, wrapping around; the first one if rolled
	/// up.
	pub fn next_section(&mut self) -> Result<()> {
		let count = self.sections.len();
		let target = self.state.unrolled().map_or(0, |current| (current + 1) % count);
		trace!(menu = self.id().get(), section = target, "next section");
		self.unroll(target)
	}

	/// Unrolls the section left of the current one, wrapping around; the last one if rolled up.
	pub fn prev_section(&mut self) -> Result<()> {
		let count = self.sections.len();
		let target = self
			.state
			.unrolled()
			.map_or(count - 1, |current| (current + count - 1) % count);
		trace!(menu = self.id().get(), section = target, "previous section");
		self.unroll(target)
	}

	/// Selects the next entry of the unrolled section, unrolling the first section if needed.
	pub fn next_item(&mut self) -> Result<()> {
		self.step_item(true)
	}

	/// Selects the previous entry of the unrolled section, unrolling the first section if
	/// needed.
	pub fn prev_item(&mut self) -> Result<()> {
		self.step_item(false)
	}

	fn step_item(&mut self, forward: bool) -> Result<()> {
		let current = match self.state.unrolled() {
			Some(current) => current,
			None => {
				self.unroll(0)?;
				0
			}
		};
		let target = self.sections[current].neighbour(forward);
		trace!(menu = self.id().get(), section = current, item = target, "select");
		self.select_and_redraw(current, target)
	}

	fn select_and_redraw(&mut self, section: usize, item: usize) -> Result<()> {
		let Some(previous) = self.sections[section].select(item) else {
			return Ok(());
		};
		if let Err(err) = self.unroll(section) {
			self.sections[section].select(previous);
			return Err(err);
		}
		Ok(())
	}

	/// Description of the selected entry, or `None` while rolled up.
	pub fn selected(&self) -> Option<&str> {
		self.selected_item().map(|item| item.description)
	}

	/// The selected entry with its shortcut and position, or `None` while rolled up.
	pub fn selected_item(&self) -> Option<SelectedItem<'_>> {
		let section = self.state.unrolled()?;
		let current = &self.sections[section];
		let entry = current.selected_entry()?;
		Some(SelectedItem {
			description: entry.description(),
			shortcut: entry.shortcut(),
			section,
			item: current.selected(),
		})
	}

	/// Offers a key event to the menu. Returns whether the menu acted on it.
	///
	/// Arrow keys navigate and Escape rolls up. A character matching a section's shortcut
	/// unrolls that section; otherwise, while a section is unrolled, one matching an entry's
	/// shortcut selects that entry. Modifiers must match exactly.
	pub fn offer_input(&mut self, input: KeyInput) -> Result<bool> {
		match input {
			KeyInput::Right => self.next_section()?,
			KeyInput::Left => self.prev_section()?,
			KeyInput::Down => self.next_item()?,
			KeyInput::Up => self.prev_item()?,
			KeyInput::Escape if self.state.is_rolled_up() => return Ok(false),
			KeyInput::Escape => self.rollup()?,
			KeyInput::Char(key) => return self.offer_shortcut(key),
		}
		Ok(true)
	}

	fn offer_shortcut(&mut self, key: Shortcut) -> Result<bool> {
		if key.is_none() {
			return Ok(false);
		}
		if let Some(index) = self.sections.iter().position(|section| section.shortcut() == key) {
			trace!(menu = self.id().get(), section = index, "section shortcut");
			self.unroll(index)?;
			return Ok(true);
		}
		let Some(current) = self.state.unrolled() else {
			return Ok(false);
		};
		let Some(item) = self.sections[current]
			.entries()
			.find(|(_, entry)| entry.shortcut() == key)
			.map(|(index, _)| index)
		else {
			return Ok(false);
		};
		trace!(menu = self.id().get(), section = current, item, "item shortcut");
		self.select_and_redraw(current, item)?;
		Ok(true)
	}

	pub fn id(&self) -> MenuId {
		self.attachment.id()
	}

	pub fn section_count(&self) -> usize {
		self.sections.len()
	}

	pub fn sections(&self) -> &[Section] {
		&self.sections
	}

	pub const fn state(&self) -> RenderState {
		self.state
	}

	/// Index of the unrolled section.
	pub const fn unrolled_section(&self) -> Option<usize> {
		self.state.unrolled()
	}

	/// Columns needed by the bar and every popup; the surface may be wider.
	pub const fn header_width(&self) -> u16 {
		self.layout.header_width
	}

	pub const fn layout(&self) -> HeaderLayout {
		self.layout
	}

	pub const fn placement(&self) -> Placement {
		self.placement
	}

	/// The surface the menu draws on.
	pub const fn surface(&self) -> &S {
		&self.surface
	}
}
