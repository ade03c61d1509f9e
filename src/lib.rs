// SPDX-License-Identifier: MPL-2.0

//! Portable concurrency primitives, an intrusive doubly-linked list, and a
//! slab allocator over a region of memory shared by more than one execution
//! context.
//!
//! "Context" here is deliberately broad: two processes mapping the same
//! region, a CPU and a peripheral, or an application task and the interrupt
//! handler that preempts it. The three subsystems are layered so each can be
//! used alone or together:
//!
//! - [`lock`] — four interchangeable [`lock::LockProvider`] backends (CAS
//!   spinlock, Filter/Peterson, host-mutex adapter, scheduler critical
//!   section).
//! - [`addr`] — [`addr::RelPtr`], the base-relative pointer representation
//!   that lets node links stay valid no matter where a given mapping of the
//!   backing region happens to live.
//! - [`list`] — [`list::IntrusiveList`], a circular, head-sentinel,
//!   doubly-linked FIFO built on top of the previous two.
//! - [`slab`] — [`slab::SlabAllocator`], a block-oriented allocator over the
//!   same kind of shared region, with a per-entry ownership table that
//!   survives arbitrary free orderings.
//! - [`region`] — the master/slave attach-and-publish vocabulary
//!   ([`region::AttachMode`], the three `MAGIC_*` constants) that
//!   [`list::IntrusiveList`] and [`slab::SlabAllocator`] both speak.
//!
//! This crate never selects a lock backend for you and never owns node or
//! allocation storage; callers wire a concrete [`lock::LockProvider`] into
//! [`list::IntrusiveList`]/[`slab::SlabAllocator`] and keep their own struct
//! or region alive for as long as anything stays linked or allocated.
#![cfg_attr(not(test), no_std)]

pub mod addr;
pub mod error;
pub mod list;
pub mod lock;
pub mod region;
pub mod slab;

pub use error::{Error, Result};

cfg_if::cfg_if! {
    if #[cfg(feature = "filter")] {
        /// Width of the default [`DefaultLock`] alias's Filter backend.
        ///
        /// Callers needing a different `NUM_CTX` should name
        /// [`lock::filter::FilterLock`] directly instead of going through
        /// this alias (spec.md §6's `NUM_CTX` knob is a per-instantiation
        /// const generic, not a single crate-wide value).
        pub const NUM_CTX: usize = 4;

        /// The lock backend bound at build time by this crate's feature
        /// selection (spec.md §4.1: "a build-time selection binds exactly
        /// one variant"). Downstream crates that need a specific backend
        /// regardless of this crate's own feature flags should still name
        /// the concrete type in [`lock`] instead of this alias.
        pub type DefaultLock = lock::filter::FilterLock<NUM_CTX>;
    } else if #[cfg(feature = "critical-section-backend")] {
        /// See the `filter` branch of this `cfg_if!` for what this alias is for.
        pub type DefaultLock = lock::cs::CriticalSectionLock;
    } else {
        /// See the `filter` branch of this `cfg_if!` for what this alias is for.
        ///
        /// This is also the fallback when no backend feature is selected,
        /// matching this crate's `default = ["cas"]`.
        pub type DefaultLock = lock::cas::CasLock;
    }
}
