//! [`RuntimeSlot`] — a write-once process runtime that can also be filled
//! lazily with defaults.
//!
//! Hosts keep one in a `static`. Explicit initialization must win over the
//! defaults only until the first real use, and inspection must not count
//! as a use.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use crate::errors::{HcError, HcResult};

pub struct RuntimeSlot<T> {
    cell: OnceLock<Arc<T>>,
    explicit: AtomicBool,
}

impl<T> RuntimeSlot<T> {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
            explicit: AtomicBool::new(false),
        }
    }

    /// Fill the slot with `value`. Fails if it is already filled, explicitly
    /// or by [`RuntimeSlot::get_or_init`].
    pub fn initialize(&self, value: T) -> HcResult<()> {
        self.cell
            .set(Arc::new(value))
            .map_err(|_| HcError::AlreadyInitialized)?;
        self.explicit.store(true, Ordering::Release);
        Ok(())
    }

    /// The runtime, filling the slot with `default()` on first use.
    pub fn get_or_init(&self, default: impl FnOnce() -> T) -> Arc<T> {
        Arc::clone(self.cell.get_or_init(|| Arc::new(default())))
    }

    /// The runtime if the slot is filled. Never fills it.
    pub fn peek(&self) -> Option<Arc<T>> {
        self.cell.get().cloned()
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    /// True only when the slot was filled through [`RuntimeSlot::initialize`].
    pub fn is_explicitly_initialized(&self) -> bool {
        self.explicit.load(Ordering::Acquire)
    }
}

impl<T> Default for RuntimeSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}
