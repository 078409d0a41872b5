//! A canvas whose surfaces start failing after a set number of drawing calls.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use marquee_tui::layout::{Position, Rect, Size};
use marquee_tui::style::Style;
use marquee_tui::{Canvas, Plane, Screen, Surface, SurfaceError};

#[derive(Debug, Clone)]
pub(crate) struct FlakyCanvas {
	screen: Screen,
	budget: Arc<AtomicUsize>,
}

impl FlakyCanvas {
	pub(crate) fn new(size: Size) -> Self {
		Self {
			screen: Screen::new(size),
			budget: Arc::new(AtomicUsize::new(usize::MAX)),
		}
	}

	pub(crate) fn screen(&self) -> &Screen {
		&self.screen
	}

	/// Lets `calls` more drawing calls succeed, across every surface of this canvas.
	pub(crate) fn fail_after(&self, calls: usize) {
		self.budget.store(calls, Ordering::SeqCst);
	}

	pub(crate) fn remaining(&self) -> usize {
		self.budget.load(Ordering::SeqCst)
	}

	pub(crate) fn heal(&self) {
		self.fail_after(usize::MAX);
	}
}

impl Canvas for FlakyCanvas {
	type Surface = FlakySurface;

	fn size(&self) -> Size {
		self.screen.size()
	}

	fn create_surface(&self, area: Rect) -> Result<FlakySurface, SurfaceError> {
		Ok(FlakySurface {
			plane: self.screen.create_surface(area)?,
			budget: Arc::clone(&self.budget),
		})
	}
}

#[derive(Debug)]
pub(crate) struct FlakySurface {
	plane: Plane,
	budget: Arc<AtomicUsize>,
}

impl FlakySurface {
	pub(crate) fn plane(&self) -> &Plane {
		&self.plane
	}

	fn spend(&self, position: Position) -> Result<(), SurfaceError> {
		self.budget
			.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
			.map(drop)
			.map_err(|_| SurfaceError::OutOfBounds {
				position,
				size: Size::ZERO,
			})
	}
}

impl Surface for FlakySurface {
	fn size(&self) -> Size {
		self.plane.size()
	}

	fn erase(&mut self) {
		self.plane.erase();
	}

	fn put_str(&mut self, position: Position, text: &str, style: Style) -> Result<u16, SurfaceError> {
		self.spend(position)?;
		self.plane.put_str(position, text, style)
	}

	fn put_char(&mut self, position: Position, ch: char, style: Style) -> Result<(), SurfaceError> {
		self.spend(position)?;
		self.plane.put_char(position, ch, style)
	}

	fn patch_style(&mut self, position: Position, style: Style) -> Result<(), SurfaceError> {
		self.spend(position)?;
		self.plane.patch_style(position, style)
	}
}
