// SPDX-License-Identifier: MPL-2.0

//! Master/slave attach-and-detach semantics shared by every structure this
//! crate places inside a region mapped by more than one context.
//!
//! Exactly one context publishes a region (the master); any number of other
//! contexts (slaves) may attach afterwards, each independently validating
//! that what it finds matches what it expects (spec.md §4.5). The three
//! magic values below are the on-region/on-handle markers that make the
//! three lifecycle states a handle can be in — sized but not yet backed,
//! live and attached, or calculated but never attached — distinguishable by
//! any process that later reads the same bytes, the same way `mem_info_attr`
//! in `original_source/include/mem/lock_mem_types.h` stamps a status word
//! instead of relying on zero-initialization happening to look "empty".

/// Published by the master once a region has been formatted and is ready
/// for slaves to attach to (spec.md §6). The sole publication edge: a slave
/// that observes anything else must not trust the region's contents.
pub const MAGIC_INIT: u32 = 0xABBA_8778;

/// Stamped on a process-local handle once a sizing call (`calc_size`) has
/// recorded a geometry, before any region has been attached (spec.md §3
/// `AllocatorHandle`, `init_state == CALCULATED`).
pub const MAGIC_CALCULATED: u32 = 0xAEEA_4334;

/// Stamped on a process-local handle once `setup`/`attach` has validated and
/// cached pointers into an attached region (spec.md §3 `AllocatorHandle`,
/// `init_state == REGISTERED`).
pub const MAGIC_REGISTERED: u32 = 0xBEEB_3223;

/// Which role a process takes when attaching to a region shared with other
/// contexts (spec.md §4.5).
///
/// Exactly one attacher may ever be [`AttachMode::Master`] for a given
/// region's lifetime; any number may be [`AttachMode::Slave`]. Both
/// [`crate::slab::SlabAllocator::setup`] and
/// [`crate::list::IntrusiveList::attach`] take this same enum so the two
/// otherwise-unrelated structures describe one shared publish/validate
/// contract instead of each inventing its own vocabulary.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AttachMode {
    /// Formats the region (or, for the list, the sentinel) and publishes
    /// [`MAGIC_INIT`] once ready for slaves to observe.
    Master,
    /// Waits for [`MAGIC_INIT`] to already be published and validates that
    /// the published parameters match this process's own expectations,
    /// without reformatting anything.
    Slave,
}
