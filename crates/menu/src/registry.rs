//! The per-context slot that admits one live menu at a time.

use core::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tracing::warn;

use crate::error::{MenuError, Result};

/// Identity of a menu, unique within the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MenuId(NonZeroU64);

impl MenuId {
	pub(crate) fn next() -> Self {
		static NEXT: AtomicU64 = AtomicU64::new(1);
		let raw = NEXT.fetch_add(1, Ordering::Relaxed);
		Self(NonZeroU64::new(raw).unwrap_or(NonZeroU64::MIN))
	}

	pub const fn get(self) -> u64 {
		self.0.get()
	}
}

/// Records which menu, if any, is attached to a rendering context.
///
/// Cloning shares the slot. The lock is held only for the check-and-set itself.
#[derive(Debug, Clone, Default)]
pub struct MenuRegistry {
	slot: Arc<Mutex<Option<MenuId>>>,
}

impl MenuRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Claims the slot for `id`.
	///
	/// Fails with [`MenuError::AlreadyAttached`] if any menu, `id` included, holds it.
	pub fn attach(&self, id: MenuId) -> Result<Attachment> {
		let holder = {
			let mut slot = self.slot.lock();
			match *slot {
				Some(holder) => Some(holder),
				None => {
					*slot = Some(id);
					None
				}
			}
		};
		if let Some(holder) = holder {
			warn!(
				menu = id.get(),
				attached = holder.get(),
				"menu refused: context already has one"
			);
			return Err(MenuError::AlreadyAttached);
		}
		Ok(Attachment {
			slot: Arc::downgrade(&self.slot),
			id,
		})
	}

	/// Empties the slot if `id` holds it. Returns whether it did.
	pub fn detach(&self, id: MenuId) -> bool {
		release(&self.slot, id)
	}

	/// The menu currently holding the slot.
	pub fn attached(&self) -> Option<MenuId> {
		*self.slot.lock()
	}
}

fn release(slot: &Mutex<Option<MenuId>>, id: MenuId) -> bool {
	let mut slot = slot.lock();
	if *slot == Some(id) {
		*slot = None;
		true
	} else {
		false
	}
}

/// Proof that a menu holds a registry slot. Dropping it gives the slot back.
///
/// Only a weak handle to the registry is kept; once the registry is gone, dropping does
/// nothing.
#[derive(Debug)]
pub struct Attachment {
	slot: Weak<Mutex<Option<MenuId>>>,
	id: MenuId,
}

impl Attachment {
	pub const fn id(&self) -> MenuId {
		self.id
	}

	/// Returns true while the registry this attachment came from still exists.
	pub fn is_live(&self) -> bool {
		self.slot.strong_count() > 0
	}
}

impl Drop for Attachment {
	fn drop(&mut self) {
		if let Some(slot) = self.slot.upgrade() {
			release(&slot, self.id);
		}
	}
}

/// A canvas together with the registry of the menu attached to it.
///
/// This is the rendering context handed to [`Menu::create`](crate::Menu::create).
#[derive(Debug, Clone)]
pub struct MenuHost<C> {
	canvas: C,
	registry: MenuRegistry,
}

impl<C> MenuHost<C> {
	pub fn new(canvas: C) -> Self {
		Self {
			canvas,
			registry: MenuRegistry::new(),
		}
	}

	pub const fn canvas(&self) -> &C {
		&self.canvas
	}

	pub const fn registry(&self) -> &MenuRegistry {
		&self.registry
	}

	/// The menu currently attached to this context.
	pub fn active_menu(&self) -> Option<MenuId> {
		self.registry.attached()
	}
}
