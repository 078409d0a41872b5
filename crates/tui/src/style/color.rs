use core::fmt;

/// A terminal color.
///
/// `Reset` restores the terminal default. The sixteen named colors map onto the ANSI palette,
/// `Indexed` addresses the 256-color palette, and `Rgb` is 24-bit true color.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
	/// Terminal default.
	#[default]
	Reset,
	Black,
	Red,
	Green,
	Yellow,
	Blue,
	Magenta,
	Cyan,
	Gray,
	DarkGray,
	LightRed,
	LightGreen,
	LightYellow,
	LightBlue,
	LightMagenta,
	LightCyan,
	White,
	/// Palette index (0..=255).
	Indexed(u8),
	/// 24-bit color.
	Rgb(u8, u8, u8),
}

impl Color {
	/// Builds an [`Rgb`](Self::Rgb) color from a packed `0xRRGGBB` value.
	pub const fn from_u32(packed: u32) -> Self {
		let [_, r, g, b] = packed.to_be_bytes();
		Self::Rgb(r, g, b)
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Indexed(i) => write!(f, "{i}"),
			Self::Rgb(r, g, b) => write!(f, "#{r:02X}{g:02X}{b:02X}"),
			named => fmt::Debug::fmt(named, f),
		}
	}
}
