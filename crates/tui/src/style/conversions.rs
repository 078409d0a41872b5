//! Shorthand conversions into [`Style`].

use super::{Color, Modifier, Style};

impl From<Color> for Style {
	/// A style with only the foreground color set.
	fn from(color: Color) -> Self {
		Self::new().fg(color)
	}
}

impl From<(Color, Color)> for Style {
	/// A style with foreground and background colors set.
	fn from((fg, bg): (Color, Color)) -> Self {
		Self::new().fg(fg).bg(bg)
	}
}

impl From<Modifier> for Style {
	/// A style that switches `modifier` on.
	fn from(modifier: Modifier) -> Self {
		Self::new().add_modifier(modifier)
	}
}

impl From<(Color, Color, Modifier)> for Style {
	fn from((fg, bg, modifier): (Color, Color, Modifier)) -> Self {
		Self::new().fg(fg).bg(bg).add_modifier(modifier)
	}
}
