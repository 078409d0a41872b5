use marquee_menu::{KeyInput, Menu, MenuSpec, Placement, Shortcut};
use marquee_tui::style::{Color, Modifier};
use pretty_assertions::assert_eq;

use crate::common::host;

const MENU: &str = r#"{
	"placement": "bottom",
	"header_style": { "fg": "Yellow", "add_modifier": "BOLD" },
	"sections": [
		{
			"name": "File",
			"shortcut": { "codepoint": 102, "alt": true },
			"items": [
				{ "description": "Open", "shortcut": { "codepoint": 111, "ctrl": true } },
				{},
				{ "description": "Quit" }
			]
		},
		{
			"name": "Help",
			"items": [{ "description": "About" }]
		}
	]
}"#;

#[test]
fn menu_loads_from_json() {
	let spec: MenuSpec<'_> = serde_json::from_str(MENU).unwrap();
	assert_eq!(spec.placement, Placement::Bottom);
	assert_eq!(spec.header_style.fg, Some(Color::Yellow));
	assert_eq!(spec.header_style.add_modifier, Modifier::BOLD);

	let host = host();
	let mut menu = Menu::create(&host, &spec).unwrap();
	assert_eq!(menu.section_count(), 2);
	assert_eq!(
		menu.offer_input(KeyInput::Char(Shortcut::from_char('f').with_alt())),
		Ok(true)
	);
	assert_eq!(menu.selected(), Some("Open"));
	let bar = menu.layout().bar_row;
	assert_eq!(menu.surface().buffer()[(2, bar)].fg, Color::Yellow);
	menu.next_item().unwrap();
	assert_eq!(menu.selected(), Some("Quit"));
}

#[test]
fn description_round_trips_through_json() {
	let spec: MenuSpec<'_> = serde_json::from_str(MENU).unwrap();
	let json = serde_json::to_string(&spec).unwrap();
	let back: MenuSpec<'_> = serde_json::from_str(&json).unwrap();
	assert_eq!(back, spec);
}
