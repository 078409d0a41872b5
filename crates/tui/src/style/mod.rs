//! Cell styling: colors, text modifiers, and the [`Style`] patch type.

mod color;
mod conversions;
mod modifier;

pub use color::Color;
pub use modifier::Modifier;

/// A style patch applied to cells.
///
/// Unset colors leave the target cell's color alone. `add_modifier` and `sub_modifier` are
/// applied in that order, so a modifier present in both ends up removed only if it was added by
/// an earlier patch.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Style {
	/// Foreground color.
	pub fg: Option<Color>,
	/// Background color.
	pub bg: Option<Color>,
	/// Modifiers to switch on.
	pub add_modifier: Modifier,
	/// Modifiers to switch off.
	pub sub_modifier: Modifier,
}

impl Style {
	/// A style that changes nothing.
	pub const fn new() -> Self {
		Self {
			fg: None,
			bg: None,
			add_modifier: Modifier::empty(),
			sub_modifier: Modifier::empty(),
		}
	}

	/// A style that resets colors and clears every modifier.
	pub const fn reset() -> Self {
		Self {
			fg: Some(Color::Reset),
			bg: Some(Color::Reset),
			add_modifier: Modifier::empty(),
			sub_modifier: Modifier::all(),
		}
	}

	/// Sets the foreground color.
	#[must_use]
	pub const fn fg(mut self, color: Color) -> Self {
		self.fg = Some(color);
		self
	}

	/// Sets the background color.
	#[must_use]
	pub const fn bg(mut self, color: Color) -> Self {
		self.bg = Some(color);
		self
	}

	/// Switches `modifier` on, cancelling any pending removal of it.
	#[must_use]
	pub const fn add_modifier(mut self, modifier: Modifier) -> Self {
		self.sub_modifier = self.sub_modifier.difference(modifier);
		self.add_modifier = self.add_modifier.union(modifier);
		self
	}

	/// Switches `modifier` off, cancelling any pending addition of it.
	#[must_use]
	pub const fn remove_modifier(mut self, modifier: Modifier) -> Self {
		self.add_modifier = self.add_modifier.difference(modifier);
		self.sub_modifier = self.sub_modifier.union(modifier);
		self
	}

	/// Layers `other` on top of `self`.
	#[must_use]
	pub const fn patch(mut self, other: Self) -> Self {
		if let Some(fg) = other.fg {
			self.fg = Some(fg);
		}
		if let Some(bg) = other.bg {
			self.bg = Some(bg);
		}
		self.add_modifier = self.add_modifier.difference(other.sub_modifier);
		self.add_modifier = self.add_modifier.union(other.add_modifier);
		self.sub_modifier = self.sub_modifier.difference(other.add_modifier);
		self.sub_modifier = self.sub_modifier.union(other.sub_modifier);
		self
	}
}
