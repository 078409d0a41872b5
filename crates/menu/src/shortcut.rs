//! Shortcut descriptors and their rendered labels.

use core::fmt;

use compact_str::CompactString;
use marquee_tui::{display_width, grapheme_column};

use crate::error::{MenuError, Result};
use crate::layout::columns;

const ALT_MODIFIER: &str = "Alt+";
const CTRL_MODIFIER: &str = "Ctrl+";

/// A single codepoint plus Alt/Ctrl modifiers.
///
/// Codepoint `0` means "no shortcut". The codepoint is kept raw so that descriptors coming from
/// configuration can be validated when a menu is built rather than when they are parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shortcut {
	/// Unicode codepoint of the key.
	pub codepoint: u32,
	/// Alt must be held.
	#[cfg_attr(feature = "serde", serde(default))]
	pub alt: bool,
	/// Ctrl must be held.
	#[cfg_attr(feature = "serde", serde(default))]
	pub ctrl: bool,
}

impl Shortcut {
	/// No shortcut.
	pub const NONE: Self = Self::new(0);

	/// A shortcut on `codepoint` with no modifiers.
	pub const fn new(codepoint: u32) -> Self {
		Self {
			codepoint,
			alt: false,
			ctrl: false,
		}
	}

	/// A shortcut on `ch` with no modifiers.
	pub const fn from_char(ch: char) -> Self {
		Self::new(ch as u32)
	}

	/// Returns a copy that also requires Alt.
	#[must_use]
	pub const fn with_alt(self) -> Self {
		Self { alt: true, ..self }
	}

	/// Returns a copy that also requires Ctrl.
	#[must_use]
	pub const fn with_ctrl(self) -> Self {
		Self { ctrl: true, ..self }
	}

	/// Returns true for the "no shortcut" descriptor.
	pub const fn is_none(self) -> bool {
		self.codepoint == 0
	}

	/// The key as a character, or `None` for "no shortcut" and invalid codepoints.
	pub const fn char(self) -> Option<char> {
		if self.is_none() {
			return None;
		}
		char::from_u32(self.codepoint)
	}

	/// Display column of the first grapheme cluster in `text` holding the shortcut's character.
	///
	/// A combining mark locates the cluster it belongs to. `text` must already have a defined
	/// display width.
	pub fn column_in(self, text: &str) -> Option<u16> {
		grapheme_column(text, self.char()?).map(columns)
	}
}

impl fmt::Display for Shortcut {
	/// Writes the label text; codepoints that are not characters print as `U+XXXX`.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.alt {
			f.write_str(ALT_MODIFIER)?;
		}
		if self.ctrl {
			f.write_str(CTRL_MODIFIER)?;
		}
		match char::from_u32(self.codepoint) {
			Some(ch) => write!(f, "{ch}"),
			None => write!(f, "U+{:04X}", self.codepoint),
		}
	}
}

/// The rendered form of a [`Shortcut`], e.g. `Alt+Ctrl+q`, with its display width.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShortcutLabel {
	text: CompactString,
	width: u16,
}

impl ShortcutLabel {
	/// Renders `shortcut`.
	///
	/// Returns `Ok(None)` for the "no shortcut" descriptor. Fails with
	/// [`MenuError::Encoding`] when the codepoint is not a character and with
	/// [`MenuError::Width`] when the label has no display width.
	pub fn render(shortcut: Shortcut) -> Result<Option<Self>> {
		if shortcut.is_none() {
			return Ok(None);
		}
		let ch = char::from_u32(shortcut.codepoint).ok_or(MenuError::Encoding {
			codepoint: shortcut.codepoint,
		})?;
		let mut text = CompactString::default();
		if shortcut.alt {
			text.push_str(ALT_MODIFIER);
		}
		if shortcut.ctrl {
			text.push_str(CTRL_MODIFIER);
		}
		text.push(ch);
		let width = columns(display_width(&text)?);
		Ok(Some(Self { text, width }))
	}

	/// Label text.
	pub fn as_str(&self) -> &str {
		&self.text
	}

	/// Display width of the label.
	pub const fn width(&self) -> u16 {
		self.width
	}
}

impl fmt::Display for ShortcutLabel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.text)
	}
}
