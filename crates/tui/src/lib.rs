//! Cell-grid drawing surfaces for terminal overlays.
//!
//! This crate is the rendering side of the menu engine: a [`Buffer`] of styled
//! [`Cell`]s, the [`Surface`] and [`Canvas`] traits the engine draws through, and
//! an in-memory [`Screen`] that hands out [`Plane`]s. Display widths are always
//! computed with Unicode East-Asian-width rules via [`display_width`].
//!
//! [`Buffer`]: buffer::Buffer
//! [`Cell`]: buffer::Cell
//! [`Surface`]: surface::Surface
//! [`Canvas`]: surface::Canvas
//! [`Screen`]: surface::Screen
//! [`Plane`]: surface::Plane

pub mod buffer;
pub mod layout;
pub mod style;
pub mod surface;
pub mod symbols;
pub mod width;

pub use surface::{Canvas, Plane, Screen, Surface, SurfaceError};
pub use width::{WidthError, char_width, display_width, grapheme_column};
