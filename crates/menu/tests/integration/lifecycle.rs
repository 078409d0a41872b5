use marquee_menu::{
	InvalidSpec, ItemSpec, Menu, MenuError, MenuSpec, Placement, RenderState, SectionSpec, Shortcut,
};
use marquee_tui::WidthError;
use marquee_tui::layout::Rect;
use marquee_tui::style::Modifier;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::{file_edit, host, rows};

fn trimmed(rows: Vec<String>) -> Vec<String> {
	rows.into_iter()
		.map(|row| row.trim_end().to_owned())
		.collect()
}

#[test]
fn create_then_unroll_selects_the_first_entry() {
	let host = host();
	let mut menu = Menu::create(&host, &file_edit()).unwrap();
	assert_eq!(menu.state(), RenderState::RolledUp);
	assert_eq!(menu.selected(), None);
	menu.unroll(0).unwrap();
	assert_eq!(menu.selected(), Some("New"));
	menu.unroll(1).unwrap();
	assert_eq!(menu.selected(), Some("Copy"));
}

#[test]
fn file_edit_example() {
	let host = host();
	let mut menu = Menu::create(&host, &file_edit()).unwrap();
	// The bar needs 2 + (4 + 2) + (4 + 2); Edit's popup reaches one column further.
	assert_eq!(menu.header_width(), 15);
	assert_eq!(menu.layout().area, Rect::new(0, 0, 80, 7));
	assert_eq!(trimmed(rows(menu.surface()))[0], "  File  Edit");

	menu.unroll(0).unwrap();
	assert_eq!(
		trimmed(rows(menu.surface())),
		vec![
			"  File  Edit",
			"  ╭───────╮",
			"  │New    │",
			"  │Open   │",
			"  ├───────┤",
			"  │Quit  q│",
			"  ╰───────╯",
		]
	);

	let mut seen = Vec::new();
	for _ in 0..3 {
		menu.next_item().unwrap();
		seen.push(menu.selected().unwrap().to_owned());
	}
	assert_eq!(seen, ["Open", "Quit", "New"]);
}

#[test]
fn bottom_placement_opens_upwards() {
	let host = host();
	let spec = file_edit().placement(Placement::Bottom);
	let mut menu = Menu::create(&host, &spec).unwrap();
	assert_eq!(menu.layout().area, Rect::new(0, 17, 80, 7));
	assert_eq!(menu.layout().bar_row, 6);

	menu.unroll(1).unwrap();
	assert_eq!(
		trimmed(rows(menu.surface())),
		vec![
			"",
			"",
			"        ╭─────╮",
			"        │Copy │",
			"        │Paste│",
			"        ╰─────╯",
			"  File  Edit",
		]
	);
}

#[rstest]
#[case(0)]
#[case(1)]
fn rollup_restores_the_created_surface(#[case] section: usize) {
	let host = host();
	let mut menu = Menu::create(&host, &file_edit()).unwrap();
	let created = menu.surface().buffer().clone();

	menu.unroll(section).unwrap();
	assert_ne!(menu.surface().buffer(), &created);
	menu.rollup().unwrap();
	assert_eq!(menu.surface().buffer(), &created);
	assert_eq!(menu.state(), RenderState::RolledUp);

	// Rolling up twice is harmless.
	menu.rollup().unwrap();
	assert_eq!(menu.surface().buffer(), &created);
}

#[rstest]
#[case::no_sections(MenuSpec::new(Vec::new()), InvalidSpec::NoSections)]
#[case::empty_section(
	MenuSpec::new(vec![
		SectionSpec::new("File", vec![ItemSpec::entry("New")]),
		SectionSpec::new("Edit", Vec::new()),
	]),
	InvalidSpec::EmptySection { name: "Edit".into() }
)]
#[case::only_separators(
	MenuSpec::new(vec![SectionSpec::new("Edit", vec![ItemSpec::separator()])]),
	InvalidSpec::OnlySeparators { name: "Edit".into() }
)]
fn invalid_descriptions_leave_nothing_behind(
	#[case] spec: MenuSpec<'static>,
	#[case] expected: InvalidSpec,
) {
	let host = host();
	assert_eq!(
		Menu::create(&host, &spec).unwrap_err(),
		MenuError::InvalidSpec(expected)
	);
	assert_eq!(host.canvas().live_planes(), 0);
	assert_eq!(host.active_menu(), None);
}

#[test]
fn unencodable_shortcut_is_rejected() {
	let host = host();
	let spec = MenuSpec::new(vec![SectionSpec::new(
		"File",
		vec![ItemSpec::entry("New").shortcut(Shortcut::new(0xD800).with_ctrl())],
	)]);
	assert_eq!(
		Menu::create(&host, &spec).unwrap_err(),
		MenuError::Encoding { codepoint: 0xD800 }
	);
	assert_eq!(host.canvas().live_planes(), 0);
}

#[test]
fn unprintable_name_is_rejected() {
	let host = host();
	let spec = MenuSpec::new(vec![SectionSpec::new("Fi\tle", vec![ItemSpec::entry("New")])]);
	assert_eq!(
		Menu::create(&host, &spec).unwrap_err(),
		MenuError::Width(WidthError::Unprintable { ch: '\t' })
	);
	assert_eq!(host.canvas().live_planes(), 0);
}

#[test]
fn second_menu_is_refused_and_released() {
	let host = host();
	let first = Menu::create(&host, &file_edit()).unwrap();
	assert_eq!(
		Menu::create(&host, &file_edit()).unwrap_err(),
		MenuError::AlreadyAttached
	);
	assert_eq!(host.canvas().live_planes(), 1);
	assert_eq!(host.active_menu(), Some(first.id()));

	let first_id = first.id();
	first.destroy();
	assert_eq!(host.canvas().live_planes(), 0);
	assert_eq!(host.active_menu(), None);

	let second = Menu::create(&host, &file_edit()).unwrap();
	assert_ne!(second.id(), first_id);
	assert_eq!(host.active_menu(), Some(second.id()));
}

#[test]
fn menu_outliving_its_host_drops_quietly() {
	let host = host();
	let menu = Menu::create(&host, &file_edit()).unwrap();
	drop(host);
	assert!(!menu.surface().is_attached());
	drop(menu);
}

#[test]
fn caller_text_is_copied() {
	let host = host();
	let name = String::from("File");
	let description = String::from("Open");
	let spec = MenuSpec::new(vec![SectionSpec::new(
		name.as_str(),
		vec![ItemSpec::entry(description.as_str())],
	)]);
	let mut menu = Menu::create(&host, &spec).unwrap();
	drop(spec);
	drop(name);
	drop(description);
	menu.next_item().unwrap();
	assert_eq!(menu.selected(), Some("Open"));
	assert_eq!(menu.sections()[0].name(), "File");
}

#[test]
fn wide_names_are_laid_out_by_display_width() {
	let host = host();
	let spec = MenuSpec::new(vec![
		SectionSpec::new("ファイル", vec![ItemSpec::entry("新規")])
			.shortcut(Shortcut::from_char('イ').with_alt()),
		SectionSpec::new("Edit", vec![ItemSpec::entry("Copy")]),
	]);
	let menu = Menu::create(&host, &spec).unwrap();
	assert_eq!(menu.sections()[1].x(), 12);
	let buffer = menu.surface().buffer();
	assert_eq!(buffer.row_text(0).trim_end(), "  ファイル  Edit");
	assert!(buffer[(6, 0)].modifier.contains(Modifier::BOLD | Modifier::UNDERLINED));
	assert!(!buffer[(2, 0)].modifier.contains(Modifier::BOLD));
}
