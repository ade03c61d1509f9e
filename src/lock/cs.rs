// SPDX-License-Identifier: MPL-2.0

//! Scheduler critical-section backend, built on the ecosystem-standard
//! `critical-section` crate instead of a hand-rolled interrupt-mask toggle.
//!
//! Acquisition disables preemption (and, depending on the embedder's
//! `critical-section` implementation, interrupts); the "lock word" holds the
//! *restore state* captured at `lock`, not an ownership flag, exactly as
//! spec.md §3 describes for the Scheduler-CS backend. This is not a queue:
//! nesting correctness is the caller's responsibility, matching the
//! `_context_id`-agnostic nature of disabling preemption system-wide.

use core::cell::RefCell;

use critical_section::RestoreState;

use super::LockProvider;
use crate::error::{Error, Result};

/// A lock backend appropriate when exactly one context can ever hold it at
/// a time because entering disables preemption (and possibly interrupts)
/// globally — i.e. when true parallel contention is impossible by
/// construction (spec.md §5).
pub struct CriticalSectionLock {
    // `None` means "not currently held by this handle". By the time this is
    // touched, the embedder's `critical_section` implementation already
    // guarantees exclusivity, so a `RefCell` borrow never actually contends.
    saved: RefCell<Option<RestoreState>>,
}

impl CriticalSectionLock {
    /// Creates a new, unheld critical-section lock.
    pub const fn new() -> Self {
        Self {
            saved: RefCell::new(None),
        }
    }
}

impl Default for CriticalSectionLock {
    fn default() -> Self {
        Self::new()
    }
}

impl LockProvider for CriticalSectionLock {
    fn init(&self) -> Result<()> {
        *self.saved.borrow_mut() = None;
        Ok(())
    }

    fn lock(&self, _ctx_id: u32) -> Result<()> {
        if self.saved.borrow().is_some() {
            // Re-entering a held critical section is undefined per spec.md
            // §4.1; report it as a fault rather than silently nesting.
            return Err(Error::InternalFault);
        }
        // Safety: `critical_section::acquire` is the crate-standard way to
        // enter a critical section; the matching `release` below is always
        // reached because `unlock` is the only path that clears `saved`.
        let state = unsafe { critical_section::acquire() };
        *self.saved.borrow_mut() = Some(state);
        Ok(())
    }

    fn unlock(&self, _ctx_id: u32) -> Result<()> {
        match self.saved.borrow_mut().take() {
            Some(state) => {
                // Safety: `state` was produced by the matching `acquire`
                // call above and has not been released since.
                unsafe { critical_section::release(state) };
                Ok(())
            }
            None => Err(Error::InternalFault),
        }
    }

    fn try_lock(&self, ctx_id: u32) -> Result<bool> {
        // Entering never blocks (it only disables preemption/interrupts),
        // so `try_lock` and `lock` coincide except for the already-held case.
        if self.saved.borrow().is_some() {
            return Ok(false);
        }
        self.lock(ctx_id)?;
        Ok(true)
    }
}

unsafe impl Sync for CriticalSectionLock {}
