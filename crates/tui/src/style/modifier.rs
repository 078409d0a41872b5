use core::fmt;

use bitflags::bitflags;

bitflags! {
	/// Text attributes applied to a cell.
	///
	/// Flags compose with `|`; `From<Modifier> for Style` lets a bare modifier stand in for a
	/// style wherever one is accepted.
	///
	/// ```rust
	/// use marquee_tui::style::Modifier;
	///
	/// let emphasis = Modifier::BOLD | Modifier::UNDERLINED;
	/// assert!(emphasis.contains(Modifier::BOLD));
	/// ```
	#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
	#[derive(Default, Clone, Copy, Eq, PartialEq, Hash)]
	pub struct Modifier: u16 {
		/// Bold text.
		const BOLD       = 0b0000_0001;
		/// Dim text.
		const DIM        = 0b0000_0010;
		/// Italic text.
		const ITALIC     = 0b0000_0100;
		/// Underlined text.
		const UNDERLINED = 0b0000_1000;
		/// Blinking text.
		const BLINK      = 0b0001_0000;
		/// Foreground and background swapped.
		const REVERSED   = 0b0010_0000;
		/// Struck-through text.
		const CROSSED_OUT = 0b0100_0000;
	}
}

/// Prints `NONE` for the empty set and `BOLD | UNDERLINED` style lists otherwise.
impl fmt::Debug for Modifier {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		if self.is_empty() {
			return write!(f, "NONE");
		}
		bitflags::parser::to_writer(self, f)
	}
}
