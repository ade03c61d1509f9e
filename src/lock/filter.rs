// SPDX-License-Identifier: MPL-2.0

//! Filter (generalized Peterson) lock: starvation-free N-way mutual
//! exclusion with no hardware CAS required.
//!
//! Ported from `original_source/include/mem/lock_mem.h`'s `memlock__lock` /
//! `memlock__unlock`, which implement the algorithm over two arrays,
//! `interested_context[ctx]` and `victim[level]`, declared `volatile` so the
//! busy-wait cannot be hoisted by the optimizer. The Rust port models that
//! volatility as relaxed atomics with an explicit sequentially consistent
//! fence between the write of `victim[level]` and the reads of
//! `interested[k]`, as spec.md §5 requires.

use core::sync::atomic::{fence, AtomicU32, Ordering};

use super::LockProvider;
use crate::error::{Error, Result};

const FREE: u32 = 0;

/// A Filter/Peterson lock for exactly `N` participating contexts.
///
/// `N` must be at least 2 (spec.md §9, Open Question 2: with `N < 2` the
/// outer level loop never runs and the lock degenerates into a no-op). This
/// is enforced at monomorphization time via [`Self::CHECK_N`].
pub struct FilterLock<const N: usize> {
    interested: [AtomicU32; N],
    victim: [AtomicU32; N],
}

impl<const N: usize> FilterLock<N> {
    /// Forces a compile-time failure if this type is ever monomorphized with
    /// `N < 2`. Referenced from every constructor so the check cannot be
    /// skipped by constructing the struct some other way within this crate.
    const CHECK_N: () = assert!(N >= 2, "FilterLock requires NUM_CTX >= 2");

    /// Creates a new Filter lock with every context initially uninterested.
    pub fn new() -> Self {
        let () = Self::CHECK_N;
        Self {
            interested: core::array::from_fn(|_| AtomicU32::new(0)),
            victim: core::array::from_fn(|_| AtomicU32::new(0)),
        }
    }

    fn check_ctx(ctx_id: u32) -> Result<usize> {
        let idx = ctx_id as usize;
        if idx >= N {
            Err(Error::BadCtx)
        } else {
            Ok(idx)
        }
    }
}

impl<const N: usize> Default for FilterLock<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> LockProvider for FilterLock<N> {
    fn init(&self) -> Result<()> {
        for slot in &self.interested {
            slot.store(0, Ordering::Relaxed);
        }
        for slot in &self.victim {
            slot.store(0, Ordering::Relaxed);
        }
        Ok(())
    }

    fn lock(&self, ctx_id: u32) -> Result<()> {
        let me = Self::check_ctx(ctx_id)?;

        for level in 1..N {
            self.interested[me].store(level as u32, Ordering::Relaxed);
            self.victim[level].store(me as u32, Ordering::Relaxed);

            // Required sequentially consistent fence between the write of
            // victim[level] and the reads of interested[k] below (spec.md §5).
            fence(Ordering::SeqCst);

            for (k, interested_k) in self.interested.iter().enumerate() {
                if k == me {
                    continue;
                }
                while interested_k.load(Ordering::Relaxed) >= level as u32
                    && self.victim[level].load(Ordering::Relaxed) == me as u32
                {
                    core::hint::spin_loop();
                }
            }
        }

        fence(Ordering::Acquire);
        Ok(())
    }

    fn unlock(&self, ctx_id: u32) -> Result<()> {
        let me = Self::check_ctx(ctx_id)?;
        fence(Ordering::Release);
        self.interested[me].store(FREE, Ordering::Relaxed);
        Ok(())
    }

    fn try_lock(&self, ctx_id: u32) -> Result<bool> {
        // The Filter algorithm has no non-blocking entry path by
        // construction (every level's wait condition can only be resolved
        // by progress from another context); report busy if the final level
        // is already contested by someone else, otherwise mirror `lock`.
        let me = Self::check_ctx(ctx_id)?;
        for (k, interested_k) in self.interested.iter().enumerate() {
            if k != me && interested_k.load(Ordering::Relaxed) != 0 {
                return Ok(false);
            }
        }
        self.lock(ctx_id)?;
        Ok(true)
    }
}

unsafe impl<const N: usize> Sync for FilterLock<N> {}
