//! Drawing surfaces and the canvases that create them.
//!
//! [`Surface`] is the full set of drawing primitives the menu engine relies on; [`Canvas`] is
//! the factory side. [`Screen`] and [`Plane`] are the in-memory implementations shipped with
//! this crate.

mod screen;

pub use screen::{Plane, Screen};

use crate::layout::{Position, Rect, Size};
use crate::style::Style;
use crate::width::WidthError;

/// Failure of a drawing primitive.
#[derive(Debug, Clone, Copy, Eq, PartialEq, thiserror::Error)]
pub enum SurfaceError {
	/// Drawing started outside the surface.
	#[error("position {position:?} is outside a {size:?} surface")]
	OutOfBounds {
		/// Requested position.
		position: Position,
		/// Surface dimensions.
		size: Size,
	},
	/// A surface with no cells was requested.
	#[error("cannot create a surface with an empty area {0:?}")]
	EmptyArea(Rect),
	/// Text handed to the surface has no display width.
	#[error(transparent)]
	Width(#[from] WidthError),
}

/// A rectangular grid of styled cells that can be drawn on.
///
/// Coordinates are local to the surface. Destroying a surface is dropping it.
pub trait Surface {
	/// Dimensions of the surface.
	fn size(&self) -> Size;

	/// Resets every cell to blank.
	fn erase(&mut self);

	/// Writes `text` at `position`, clipped at the right edge. Returns the columns written.
	fn put_str(&mut self, position: Position, text: &str, style: Style) -> Result<u16, SurfaceError>;

	/// Writes a single character at `position`.
	fn put_char(&mut self, position: Position, ch: char, style: Style) -> Result<(), SurfaceError>;

	/// Layers `style` onto the cell at `position` without touching its contents.
	fn patch_style(&mut self, position: Position, style: Style) -> Result<(), SurfaceError>;
}

/// Something that hands out drawing surfaces, usually a screen.
pub trait Canvas {
	/// The surface type this canvas creates.
	type Surface: Surface;

	/// Dimensions of the canvas.
	fn size(&self) -> Size;

	/// Creates a surface covering `area` in canvas coordinates.
	fn create_surface(&self, area: Rect) -> Result<Self::Surface, SurfaceError>;
}
