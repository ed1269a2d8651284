//! Mount/unmount guard for async work started by a page.
//!
//! A page creates a guard, hands clones to its spawned tasks, and releases it
//! in `on_cleanup`. Tasks check [`MountGuard::is_mounted`] before writing to
//! signals that may already be disposed.

#[cfg(test)]
#[path = "mount_guard_test.rs"]
mod mount_guard_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct MountGuard(Arc<AtomicBool>);

impl Default for MountGuard {
    fn default() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }
}

impl MountGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn release(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    /// Create a guard released when the current reactive owner is cleaned up.
    pub fn for_current_owner() -> Self {
        let guard = Self::new();
        let released = guard.clone();
        leptos::prelude::on_cleanup(move || released.release());
        guard
    }
}
