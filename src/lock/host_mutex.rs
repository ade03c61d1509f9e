// SPDX-License-Identifier: MPL-2.0

//! Pass-through adapter to an external ("host") mutex implementation.
//!
//! The host mutex itself is an external collaborator (spec.md §1's
//! non-goals); this module only defines the trait seam
//! [`RawHostMutex`] that [`HostMutexLock`] adapts into [`LockProvider`].

use super::LockProvider;
use crate::error::{Error, Result};

/// The minimal capability a host threading library's mutex must expose to
/// be usable as a `relshare` lock backend.
///
/// Implementations are expected to come from the embedding application (a
/// `std::sync::Mutex<()>` wrapper, an RTOS mutex handle, ...); this crate
/// never implements `RawHostMutex` itself.
pub trait RawHostMutex {
    /// Blocks until the mutex is acquired.
    fn raw_lock(&self);
    /// Releases a previously acquired mutex.
    fn raw_unlock(&self);
    /// Attempts to acquire the mutex without blocking.
    fn raw_try_lock(&self) -> bool;
}

/// Adapts any [`RawHostMutex`] into the common [`LockProvider`] shape.
///
/// Acquisition semantics (fairness, priority inheritance, ...) are entirely
/// inherited from the wrapped host mutex; this adapter adds nothing but the
/// uniform `init/lock/unlock/try_lock` surface.
pub struct HostMutexLock<M: RawHostMutex> {
    inner: M,
}

impl<M: RawHostMutex> HostMutexLock<M> {
    /// Wraps an already-constructed host mutex handle.
    pub const fn new(inner: M) -> Self {
        Self { inner }
    }

    /// Returns the wrapped host mutex handle.
    pub fn inner(&self) -> &M {
        &self.inner
    }
}

impl<M: RawHostMutex> LockProvider for HostMutexLock<M> {
    fn init(&self) -> Result<()> {
        // The host mutex owns its own initialization; nothing to do here
        // beyond validating that we were actually handed one.
        Ok(())
    }

    fn lock(&self, _ctx_id: u32) -> Result<()> {
        self.inner.raw_lock();
        Ok(())
    }

    fn unlock(&self, _ctx_id: u32) -> Result<()> {
        self.inner.raw_unlock();
        Ok(())
    }

    fn try_lock(&self, _ctx_id: u32) -> Result<bool> {
        Ok(self.inner.raw_try_lock())
    }
}
