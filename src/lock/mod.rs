// SPDX-License-Identifier: MPL-2.0

//! Pluggable mutual-exclusion primitives.
//!
//! Four interchangeable implementations of the same capability are provided
//! ([`cas::CasLock`], [`filter::FilterLock`], [`host_mutex::HostMutexLock`],
//! [`cs::CriticalSectionLock`]); [`IntrusiveList`](crate::list::IntrusiveList)
//! and [`SlabAllocator`](crate::slab::SlabAllocator) are coded against the
//! [`LockProvider`] trait only, exactly once, and never against a concrete
//! backend.

pub mod cas;
pub mod cs;
pub mod filter;
pub mod host_mutex;

use crate::error::{Error, Result};

/// Common contract shared by every lock backend (spec.md §4.1).
///
/// * `init` must be called before any other operation; re-initializing a
///   held lock is undefined behavior and not guarded against here.
/// * `lock` blocks until exclusion is granted and never returns partial
///   success.
/// * `unlock` is only valid for the context that currently holds the lock.
/// * `try_lock` never blocks; it reports success or [`Error::Busy`].
pub trait LockProvider {
    /// Prepares the lock for use. Must run exactly once before any other
    /// operation observes the lock.
    fn init(&self) -> Result<()>;

    /// Blocks until `ctx_id` holds the lock.
    fn lock(&self, ctx_id: u32) -> Result<()>;

    /// Releases the lock on behalf of `ctx_id`.
    ///
    /// # Safety contract
    /// The caller must currently hold the lock as `ctx_id`; calling this
    /// without a matching prior `lock` is a logic error in the caller, not
    /// something this trait can detect in general (the `FilterLock` backend
    /// is the only one able to partially validate it via `ctx_id` range
    /// checks).
    fn unlock(&self, ctx_id: u32) -> Result<()>;

    /// Attempts to acquire the lock without blocking.
    ///
    /// Returns `Ok(true)` on success, `Ok(false)` if the lock is busy.
    /// Implementations must not return `Ok(true)` without actually holding
    /// the lock afterwards.
    fn try_lock(&self, ctx_id: u32) -> Result<bool>;

    /// Blocking-acquire convenience returning a [`LockGuard`] instead of a
    /// bare `Result<()>`, patterned on
    /// `aster_frame::sync::spin::SpinLock::lock` returning a `SpinLockGuard`.
    /// Every backend gets this for free; only [`Self::init`]/[`Self::lock`]/
    /// [`Self::unlock`]/[`Self::try_lock`] are ever implemented per backend.
    fn guard(&self, ctx_id: u32) -> Result<LockGuard<'_, Self>>
    where
        Self: Sized,
    {
        LockGuard::acquire(self, ctx_id)
    }
}

/// An RAII guard released automatically when dropped, layered over any
/// [`LockProvider`] the same way `aster_frame::sync::spin::SpinLockGuard` is
/// layered over the raw CAS loop: early returns (`EMPTY`, `NO_SPACE`, ...)
/// can never forget to unlock because `Drop` always runs.
pub struct LockGuard<'a, L: LockProvider + ?Sized> {
    lock: &'a L,
    ctx_id: u32,
}

impl<'a, L: LockProvider + ?Sized> LockGuard<'a, L> {
    /// Acquires `lock` for `ctx_id`, blocking as `lock.lock` does.
    pub fn acquire(lock: &'a L, ctx_id: u32) -> Result<Self> {
        lock.lock(ctx_id)?;
        Ok(Self { lock, ctx_id })
    }

    /// Attempts to acquire `lock` for `ctx_id` without blocking.
    pub fn try_acquire(lock: &'a L, ctx_id: u32) -> Result<Option<Self>> {
        if lock.try_lock(ctx_id)? {
            Ok(Some(Self { lock, ctx_id }))
        } else {
            Ok(None)
        }
    }
}

impl<'a, L: LockProvider + ?Sized> Drop for LockGuard<'a, L> {
    fn drop(&mut self) {
        // A backend's `unlock` is only expected to fail on a misused
        // `ctx_id`, which would mean the guard itself was constructed
        // incorrectly; there is nothing actionable to do from `Drop`.
        let _ = self.lock.unlock(self.ctx_id);
    }
}

/// A function used by [`cas::CasLock`] to yield the CPU/scheduler between
/// bounded spin bursts. `no_std` targets without a scheduler hook can supply
/// a no-op; hosted targets should supply something like
/// `std::thread::yield_now`.
pub type YieldFn = fn();
