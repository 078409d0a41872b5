//! The in-memory [`Screen`] and the [`Plane`]s it hands out.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Weak};

use super::{Canvas, Surface, SurfaceError};
use crate::buffer::Buffer;
use crate::layout::{Position, Rect, Size};
use crate::style::Style;
use crate::width::{char_width, display_width};

/// An in-memory screen that hands out [`Plane`]s.
///
/// Cloning is cheap and every clone refers to the same screen. Planes hold only a weak link
/// back, so a plane may outlive its screen; dropping it afterwards touches nothing.
#[derive(Debug, Clone)]
pub struct Screen {
	inner: Arc<ScreenState>,
}

#[derive(Debug)]
struct ScreenState {
	size: Size,
	live_planes: AtomicUsize,
}

impl Screen {
	/// Creates a screen of the given dimensions.
	pub fn new(size: Size) -> Self {
		Self {
			inner: Arc::new(ScreenState {
				size,
				live_planes: AtomicUsize::new(0),
			}),
		}
	}

	/// Number of planes created on this screen that have not been dropped yet.
	pub fn live_planes(&self) -> usize {
		self.inner.live_planes.load(Ordering::Acquire)
	}
}

impl Canvas for Screen {
	type Surface = Plane;

	fn size(&self) -> Size {
		self.inner.size
	}

	fn create_surface(&self, area: Rect) -> Result<Plane, SurfaceError> {
		if area.is_empty() {
			return Err(SurfaceError::EmptyArea(area));
		}
		self.inner.live_planes.fetch_add(1, Ordering::AcqRel);
		Ok(Plane {
			area,
			buffer: Buffer::empty(area.as_size()),
			screen: Arc::downgrade(&self.inner),
		})
	}
}

/// A surface backed by a [`Buffer`], positioned somewhere on a [`Screen`].
#[derive(Debug)]
pub struct Plane {
	area: Rect,
	buffer: Buffer,
	screen: Weak<ScreenState>,
}

impl Plane {
	/// Where the plane sits in screen coordinates.
	pub const fn area(&self) -> Rect {
		self.area
	}

	/// The plane's cells.
	pub const fn buffer(&self) -> &Buffer {
		&self.buffer
	}

	/// Returns true while the screen that created this plane is still alive.
	pub fn is_attached(&self) -> bool {
		self.screen.strong_count() > 0
	}

	fn check(&self, position: Position) -> Result<(), SurfaceError> {
		if self.buffer.area().contains(position) {
			Ok(())
		} else {
			Err(SurfaceError::OutOfBounds {
				position,
				size: self.buffer.size(),
			})
		}
	}
}

impl Surface for Plane {
	fn size(&self) -> Size {
		self.buffer.size()
	}

	fn erase(&mut self) {
		self.buffer.reset();
	}

	fn put_str(&mut self, position: Position, text: &str, style: Style) -> Result<u16, SurfaceError> {
		self.check(position)?;
		display_width(text)?;
		Ok(self.buffer.set_string(position.x, position.y, text, style))
	}

	fn put_char(&mut self, position: Position, ch: char, style: Style) -> Result<(), SurfaceError> {
		self.check(position)?;
		char_width(ch)?;
		let mut utf8 = [0; 4];
		self.buffer
			.set_string(position.x, position.y, ch.encode_utf8(&mut utf8), style);
		Ok(())
	}

	fn patch_style(&mut self, position: Position, style: Style) -> Result<(), SurfaceError> {
		self.check(position)?;
		self.buffer[position].set_style(style);
		Ok(())
	}
}

impl Drop for Plane {
	fn drop(&mut self) {
		if let Some(screen) = self.screen.upgrade() {
			screen.live_planes.fetch_sub(1, Ordering::AcqRel);
		}
	}
}
