// SPDX-License-Identifier: MPL-2.0

//! Compare-and-swap spinlock backend.
//!
//! A single word toggled by an atomic compare-and-set, patterned on
//! `aster_frame::sync::spin::SpinLock`'s `try_acquire_lock`/`release_lock`
//! pair, generalized with the bounded-spin-then-yield discipline the
//! original C `spinlock__lock` used (spin ~10000 iterations, then
//! `sched_yield`) so a waiter never starves a same-priority contender
//! without also never fully giving up the CPU to an unrelated task.

use core::sync::atomic::{AtomicU32, Ordering};

use super::{LockProvider, YieldFn};
use crate::error::Result;

const UNLOCKED: u32 = 0;
const LOCKED: u32 = 1;

/// Default number of `compare_exchange` attempts per spin burst before
/// yielding to the scheduler, matching the original implementation's
/// bounded retry count (design intent: "a few thousand iterations").
pub const DEFAULT_SPIN_BUDGET: u32 = 4096;

/// A CAS-based spinlock. `_context_id` is accepted but ignored (spec.md §4.1,
/// §9 Open Question 3: CAS has no notion of identity, only of "held/free").
pub struct CasLock {
    word: AtomicU32,
    spin_budget: u32,
    yield_fn: YieldFn,
}

impl CasLock {
    /// Creates a new, unlocked lock that yields via `yield_fn` after every
    /// `spin_budget` failed acquire attempts.
    pub const fn with_yield(spin_budget: u32, yield_fn: YieldFn) -> Self {
        Self {
            word: AtomicU32::new(UNLOCKED),
            spin_budget,
            yield_fn,
        }
    }

    /// Creates a new, unlocked lock using [`DEFAULT_SPIN_BUDGET`] and a
    /// no-op yield hook. Use [`Self::with_yield`] to plug a real scheduler
    /// yield on hosted targets.
    pub const fn new() -> Self {
        Self::with_yield(DEFAULT_SPIN_BUDGET, || {})
    }

    fn try_acquire(&self) -> bool {
        self.word
            .compare_exchange(UNLOCKED, LOCKED, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
    }
}

impl Default for CasLock {
    fn default() -> Self {
        Self::new()
    }
}

impl LockProvider for CasLock {
    fn init(&self) -> Result<()> {
        self.word.store(UNLOCKED, Ordering::Release);
        Ok(())
    }

    fn lock(&self, _ctx_id: u32) -> Result<()> {
        loop {
            for _ in 0..self.spin_budget {
                if self.try_acquire() {
                    return Ok(());
                }
                core::hint::spin_loop();
            }
            (self.yield_fn)();
        }
    }

    fn unlock(&self, _ctx_id: u32) -> Result<()> {
        self.word.store(UNLOCKED, Ordering::Release);
        Ok(())
    }

    fn try_lock(&self, _ctx_id: u32) -> Result<bool> {
        Ok(self.try_acquire())
    }
}

// Safety: the lock word is the only shared mutable state and all access to
// it goes through atomic compare-exchange / store.
unsafe impl Sync for CasLock {}
