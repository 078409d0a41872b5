use std::sync::Barrier;
use std::thread;

use marquee_menu::{Menu, MenuError};

use crate::common::{file_edit, host};

const THREADS: usize = 6;

#[test]
fn racing_creates_attach_exactly_one_menu() {
	for _ in 0..16 {
		let host = host();
		let spec = file_edit();
		let barrier = Barrier::new(THREADS);
		let results = thread::scope(|scope| {
			let handles: Vec<_> = (0..THREADS)
				.map(|_| {
					scope.spawn(|| {
						barrier.wait();
						Menu::create(&host, &spec)
					})
				})
				.collect();
			handles
				.into_iter()
				.map(|handle| handle.join().unwrap())
				.collect::<Vec<_>>()
		});

		let (attached, refused): (Vec<_>, Vec<_>) = results.into_iter().partition(Result::is_ok);
		assert_eq!(attached.len(), 1);
		for result in refused {
			assert_eq!(result.unwrap_err(), MenuError::AlreadyAttached);
		}
		assert_eq!(host.canvas().live_planes(), 1);

		let winner = attached.into_iter().next().unwrap().unwrap();
		assert_eq!(host.active_menu(), Some(winner.id()));
		winner.destroy();
		assert_eq!(host.active_menu(), None);
		assert_eq!(host.canvas().live_planes(), 0);
	}
}

#[test]
fn menus_move_between_threads() {
	let host = host();
	let menu = Menu::create(&host, &file_edit()).unwrap();
	let menu = thread::spawn(move || {
		let mut menu = menu;
		menu.next_item().unwrap();
		menu
	})
	.join()
	.unwrap();
	assert_eq!(menu.selected(), Some("Open"));
	assert_eq!(host.active_menu(), Some(menu.id()));
}
