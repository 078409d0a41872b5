use std::collections::BTreeSet;

use marquee_menu::{Item, Menu, RenderState, popup_size};
use marquee_tui::Surface;
use marquee_tui::style::Modifier;
use proptest::prelude::*;
use proptest::sample::Index;

use crate::common::{arb_menu, file_edit, host};

#[test]
fn sections_wrap_in_both_directions() {
	let host = host();
	let mut menu = Menu::create(&host, &file_edit()).unwrap();
	menu.prev_section().unwrap();
	assert_eq!(menu.unrolled_section(), Some(1));
	menu.next_section().unwrap();
	assert_eq!(menu.unrolled_section(), Some(0));
	menu.prev_section().unwrap();
	assert_eq!(menu.unrolled_section(), Some(1));

	menu.rollup().unwrap();
	menu.next_section().unwrap();
	assert_eq!(menu.unrolled_section(), Some(0));
}

#[test]
fn selection_survives_switching_sections() {
	let host = host();
	let mut menu = Menu::create(&host, &file_edit()).unwrap();
	menu.unroll(0).unwrap();
	menu.prev_item().unwrap();
	assert_eq!(menu.selected(), Some("Quit"));
	menu.next_section().unwrap();
	assert_eq!(menu.selected(), Some("Copy"));
	menu.prev_section().unwrap();
	assert_eq!(menu.selected(), Some("Quit"));
}

#[test]
fn item_navigation_unrolls_the_first_section() {
	let host = host();
	let mut menu = Menu::create(&host, &file_edit()).unwrap();
	menu.prev_item().unwrap();
	assert_eq!(menu.state(), RenderState::Unrolled(0));
	assert_eq!(menu.selected(), Some("Quit"));
}

proptest! {
	#[test]
	fn next_item_cycles_through_every_entry(spec in arb_menu(), pick in any::<Index>()) {
		let host = host();
		let mut menu = Menu::create(&host, &spec).unwrap();
		let section = pick.index(menu.section_count());
		menu.unroll(section).unwrap();
		let start = menu.selected_item().unwrap().item;
		let items = &spec.sections[section].items;
		let entries = items.iter().filter(|item| !item.is_separator()).count();

		let mut visited = BTreeSet::new();
		for _ in 0..entries {
			menu.next_item().unwrap();
			let selected = menu.selected_item().unwrap();
			prop_assert!(!items[selected.item].is_separator());
			visited.insert(selected.item);
		}
		prop_assert_eq!(visited.len(), entries);
		prop_assert_eq!(menu.selected_item().unwrap().item, start);
	}

	#[test]
	fn prev_item_undoes_next_item(spec in arb_menu(), pick in any::<Index>()) {
		let host = host();
		let mut menu = Menu::create(&host, &spec).unwrap();
		let section = pick.index(menu.section_count());
		menu.unroll(section).unwrap();
		let start = menu.selected_item().unwrap().item;
		menu.next_item().unwrap();
		menu.prev_item().unwrap();
		prop_assert_eq!(menu.selected_item().unwrap().item, start);
	}

	#[test]
	fn next_then_prev_section_restores(spec in arb_menu(), pick in any::<Index>()) {
		let host = host();
		let mut menu = Menu::create(&host, &spec).unwrap();
		let section = pick.index(menu.section_count());
		menu.unroll(section).unwrap();
		menu.next_section().unwrap();
		menu.prev_section().unwrap();
		prop_assert_eq!(menu.unrolled_section(), Some(section));
	}

	#[test]
	fn rollup_restores_the_bar(spec in arb_menu(), pick in any::<Index>()) {
		let host = host();
		let mut menu = Menu::create(&host, &spec).unwrap();
		let created = menu.surface().buffer().clone();
		menu.unroll(pick.index(menu.section_count())).unwrap();
		menu.rollup().unwrap();
		prop_assert_eq!(menu.surface().buffer(), &created);
	}

	#[test]
	fn popups_fit_inside_the_surface(spec in arb_menu()) {
		let host = host();
		let menu = Menu::create(&host, &spec).unwrap();
		let width = menu.surface().size().width;
		prop_assert!(width >= 80);
		prop_assert!(menu.header_width() <= width);
		for section in menu.sections() {
			let popup = popup_size(section);
			prop_assert!(section.x() + popup.width <= menu.header_width());
			prop_assert!(popup.height < menu.surface().size().height);
		}
	}

	#[test]
	fn shortcut_columns_stay_inside_their_text(spec in arb_menu()) {
		let host = host();
		let menu = Menu::create(&host, &spec).unwrap();
		for section in menu.sections() {
			if let Some(column) = section.shortcut_column() {
				prop_assert!(column < section.name_width());
			}
			for entry in section.items().iter().filter_map(Item::as_entry) {
				if let Some(column) = entry.shortcut_column() {
					prop_assert!(column < entry.width());
				}
				if entry.shortcut().is_none() {
					prop_assert_eq!(entry.shortcut_column(), None);
				}
			}
		}
	}

	#[test]
	fn only_shortcut_columns_are_emphasized(spec in arb_menu()) {
		let host = host();
		let menu = Menu::create(&host, &spec).unwrap();
		let expected: BTreeSet<u16> = menu
			.sections()
			.iter()
			.filter_map(|section| Some(section.x() + section.shortcut_column()?))
			.collect();
		let buffer = menu.surface().buffer();
		let row = menu.layout().bar_row;
		let emphasized: BTreeSet<u16> = (0..buffer.size().width)
			.filter(|&x| buffer[(x, row)].modifier.contains(Modifier::UNDERLINED))
			.collect();
		for &x in &emphasized {
			prop_assert_ne!(buffer[(x, row)].symbol(), " ");
		}
		prop_assert_eq!(emphasized, expected);
	}
}
