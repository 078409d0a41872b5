//! Error types for menu construction and drawing.

use std::collections::TryReserveError;

use marquee_tui::{SurfaceError, WidthError};
use thiserror::Error;

/// Ways a [`MenuSpec`](crate::MenuSpec) can describe a menu that cannot exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSpec {
	/// The menu has no sections.
	#[error("menu has no sections")]
	NoSections,
	/// A section has no items.
	#[error("section {name:?} has no items")]
	EmptySection {
		/// Section name.
		name: String,
	},
	/// A section has items but every one of them is a separator.
	#[error("section {name:?} contains only separators")]
	OnlySeparators {
		/// Section name.
		name: String,
	},
}

/// Errors produced by menu operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
	/// The description was rejected before anything was drawn.
	#[error("invalid menu: {0}")]
	InvalidSpec(#[from] InvalidSpec),

	/// Copying caller text into menu storage could not allocate.
	#[error("out of memory copying menu text: {0}")]
	Allocation(#[from] TryReserveError),

	/// A shortcut codepoint is not a Unicode scalar value.
	#[error("shortcut codepoint {codepoint:#x} cannot be encoded")]
	Encoding {
		/// The rejected codepoint.
		codepoint: u32,
	},

	/// Text has no display width.
	#[error(transparent)]
	Width(#[from] WidthError),

	/// A section index past the end of the menu.
	#[error("section {index} out of range ({count} sections)")]
	OutOfRange {
		/// Requested index.
		index: usize,
		/// Number of sections in the menu.
		count: usize,
	},

	/// Another menu already occupies the context's slot.
	#[error("a menu is already attached to this context")]
	AlreadyAttached,

	/// A drawing primitive failed.
	#[error("drawing failed: {0}")]
	Surface(#[from] SurfaceError),
}

/// Result type for menu operations.
pub type Result<T> = std::result::Result<T, MenuError>;
