//! A menu bar for cell-grid terminal surfaces.
//!
//! A [`Menu`] is built from a caller-owned [`MenuSpec`]: a row of named sections, each of
//! which unrolls into a bordered popup of items with optional keyboard shortcuts. The menu
//! deep-copies everything it is given, lays the bar out against its canvas, and draws onto a
//! surface it owns exclusively. At most one menu may be attached to a [`MenuHost`] at a time.
//!
//! ```rust
//! use marquee_menu::{ItemSpec, Menu, MenuHost, MenuSpec, SectionSpec, Shortcut};
//! use marquee_tui::Screen;
//! use marquee_tui::layout::Size;
//!
//! let host = MenuHost::new(Screen::new(Size::new(80, 24)));
//! let spec = MenuSpec::new(vec![SectionSpec::new(
//! 	"File",
//! 	vec![
//! 		ItemSpec::entry("New"),
//! 		ItemSpec::separator(),
//! 		ItemSpec::entry("Quit").shortcut(Shortcut::from_char('Q').with_ctrl()),
//! 	],
//! )]);
//! let mut menu = Menu::create(&host, &spec)?;
//! menu.next_item()?;
//! assert_eq!(menu.selected(), Some("Quit"));
//! # Ok::<(), marquee_menu::MenuError>(())
//! ```

mod error;
mod item;
mod layout;
mod menu;
mod registry;
mod render;
mod section;
mod shortcut;
mod spec;
#[cfg(test)]
mod testing;

pub use error::{InvalidSpec, MenuError, Result};
pub use item::{Entry, Item};
pub use layout::{HeaderLayout, layout_header, popup_origin, popup_size};
pub use menu::{KeyInput, Menu, SelectedItem};
pub use registry::{Attachment, MenuHost, MenuId, MenuRegistry};
pub use render::RenderState;
pub use section::Section;
pub use shortcut::{Shortcut, ShortcutLabel};
pub use spec::{ItemSpec, MenuSpec, Placement, SectionSpec};
