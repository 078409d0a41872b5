//! Unicode display widths.
//!
//! Wide East-Asian glyphs count as two columns, combining marks and other zero-width codepoints
//! as zero. Control characters have no printable width at all and are rejected.
//!
//! Text is measured one grapheme cluster at a time, the same way [`Buffer`] draws it, so a
//! column computed here names the cell the cluster lands in.
//!
//! [`Buffer`]: crate::buffer::Buffer

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// A string or character has no defined display width.
#[derive(Debug, Clone, Copy, Eq, PartialEq, thiserror::Error)]
pub enum WidthError {
	/// A control character was found.
	#[error("unprintable codepoint {ch:?}")]
	Unprintable {
		/// The offending character.
		ch: char,
	},
}

/// Number of terminal columns `text` occupies.
pub fn display_width(text: &str) -> Result<usize, WidthError> {
	if let Some(ch) = text.chars().find(|ch| ch.is_control()) {
		return Err(WidthError::Unprintable { ch });
	}
	Ok(drawn_graphemes(text).map(|(_, width)| width).sum())
}

/// Display column of the first drawn grapheme cluster of `text` that contains `target`.
///
/// Zero-width clusters occupy no cell and are never located.
pub fn grapheme_column(text: &str, target: char) -> Option<usize> {
	let mut column = 0;
	for (cluster, width) in drawn_graphemes(text) {
		if cluster.contains(target) {
			return Some(column);
		}
		column += width;
	}
	None
}

/// Grapheme clusters that occupy at least one cell, with their widths.
pub(crate) fn drawn_graphemes(text: &str) -> impl Iterator<Item = (&str, usize)> {
	text.graphemes(true)
		.filter(|cluster| !cluster.contains(char::is_control))
		.map(|cluster| (cluster, cluster.width()))
		.filter(|(_, width)| *width > 0)
}

/// Number of terminal columns a single character occupies.
pub fn char_width(ch: char) -> Result<usize, WidthError> {
	if ch.is_control() {
		return Err(WidthError::Unprintable { ch });
	}
	Ok(ch.width().unwrap_or(0))
}
