//! Single box-drawing glyphs.

/// Vertical line.
pub const VERTICAL: &str = "│";
/// Horizontal line.
pub const HORIZONTAL: &str = "─";

/// Top left corner.
pub const TOP_LEFT: &str = "┌";
/// Top right corner.
pub const TOP_RIGHT: &str = "┐";
/// Bottom left corner.
pub const BOTTOM_LEFT: &str = "└";
/// Bottom right corner.
pub const BOTTOM_RIGHT: &str = "┘";

/// Rounded top left corner.
pub const ROUNDED_TOP_LEFT: &str = "╭";
/// Rounded top right corner.
pub const ROUNDED_TOP_RIGHT: &str = "╮";
/// Rounded bottom left corner.
pub const ROUNDED_BOTTOM_LEFT: &str = "╰";
/// Rounded bottom right corner.
pub const ROUNDED_BOTTOM_RIGHT: &str = "╯";

/// Vertical line with a branch to the right; joins a divider to a left border.
pub const VERTICAL_RIGHT: &str = "├";
/// Vertical line with a branch to the left; joins a divider to a right border.
pub const VERTICAL_LEFT: &str = "┤";
