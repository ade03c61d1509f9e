// SPDX-License-Identifier: MPL-2.0

//! Intrusive, circular, head-sentinel doubly-linked FIFO queue.
//!
//! Ported from `original_source/src/lib_list.c`'s `lib_list__*` family. The
//! original links `next`/`prev` in a direction that reads backwards (its
//! `get_begin` walks `head.prev`, `get_next` dereferences a node's `prev`
//! field to find what comes after it) — confirmed by tracing a three-element
//! enqueue/dequeue sequence by hand. spec.md §9 permits either link
//! direction as long as enqueue/dequeue form a FIFO law, so this port picks
//! the conventional one instead: `next` always points toward the tail,
//! `prev` always points toward the head, and forward iteration from the
//! sentinel visits oldest-to-newest.
//!
//! Every operation is expressed over base-relative offsets via
//! [`crate::addr::RelPtr`] so the same list can be walked from any mapping
//! of the shared region that hosts it (spec.md §1).

mod node;

pub use node::Node;

use core::cell::{Cell, UnsafeCell};
use core::sync::atomic::{AtomicU32, Ordering};

use crate::addr::RelPtr;
use crate::error::{Error, Result};
use crate::lock::LockProvider;
use crate::region::{AttachMode, MAGIC_INIT};

/// The result of advancing an iterator with [`IntrusiveList::get_next`].
///
/// Wrapping past the sentinel back to the first element is not a failure —
/// it is how a caller doing a full sweep of the list knows it has completed
/// one lap (spec.md §4.3, `LIST_OVERFLOW`). The returned pointer is always
/// valid in both variants; only the caller's own pass-completion bookkeeping
/// differs.
#[derive(Debug, PartialEq, Eq)]
pub enum NextNode {
    /// The next node in iteration order, no wrap occurred.
    Node(*mut Node),
    /// Iteration passed over the sentinel; this is the first node again.
    Wrapped(*mut Node),
}

/// An intrusive FIFO queue of caller-owned [`Node`]s, guarded by a
/// pluggable [`LockProvider`].
///
/// The list itself stores no entry payloads — callers embed [`Node`] inside
/// their own record type and pass pointers to that embedded field. All
/// pointers accepted and returned by this type are absolute addresses valid
/// in the caller's own address space; translation to/from the region's
/// relative representation happens internally against the `base` recorded
/// at [`Self::init`].
///
/// `#[repr(C)]` because a single `IntrusiveList` is meant to be placed once
/// inside a shared region (spec.md §4.5) and reinterpreted identically by
/// every process that attaches it — the master constructs and calls
/// [`Self::init`] exactly once; slaves obtain a reference to the same bytes
/// and use it directly without re-initializing.
#[repr(C)]
pub struct IntrusiveList<L: LockProvider> {
    head: UnsafeCell<Node>,
    base: Cell<usize>,
    lock: L,
    initialized: AtomicU32,
}

impl<L: LockProvider> IntrusiveList<L> {
    /// Builds an uninitialized list around the given lock backend. Call
    /// [`Self::init`] (or [`Self::attach`]) before any other operation.
    pub const fn new(lock: L) -> Self {
        Self {
            head: UnsafeCell::new(Node::new()),
            base: Cell::new(0),
            lock,
            initialized: AtomicU32::new(0),
        }
    }

    /// Initializes the list as its sole master: resets the lock backend and
    /// self-links the head sentinel so the list reads as empty.
    ///
    /// `base` is the address translation anchor (spec.md §4.2) shared by
    /// every [`Node`] this list will ever link — ordinarily the base of the
    /// shared region this list lives in. Equivalent to
    /// `attach(AttachMode::Master, base)`; kept as its own entry point for
    /// the common single-process case where there is no separate slave.
    pub fn init(&self, base: usize) -> Result<()> {
        self.attach(AttachMode::Master, base)
    }

    /// Attaches to this list under the given role (spec.md §4.5).
    ///
    /// A [`AttachMode::Master`] attach resets the lock backend and
    /// self-links the sentinel, then publishes [`MAGIC_INIT`] — exactly what
    /// [`Self::init`] has always done. A [`AttachMode::Slave`] attach only
    /// records `base` for this process's own translations and requires that
    /// [`MAGIC_INIT`] is already published; it never reformats the sentinel
    /// or the embedded lock, since a master elsewhere already owns those.
    pub fn attach(&self, mode: AttachMode, base: usize) -> Result<()> {
        match mode {
            AttachMode::Master => {
                self.lock.init()?;
                self.base.set(base);
                // Safety: exclusive access during initialization is the
                // caller's responsibility, matching `lib_list__init`'s
                // contract.
                unsafe {
                    *self.head.get() = Node::self_linked(base, self.head.get());
                }
                self.initialized.store(MAGIC_INIT, Ordering::Release);
                log::debug!("intrusive list published as master");
                Ok(())
            }
            AttachMode::Slave => {
                if self.initialized.load(Ordering::Acquire) != MAGIC_INIT {
                    log::warn!("intrusive list slave attach before master publication");
                    return Err(Error::AccessDenied);
                }
                self.base.set(base);
                Ok(())
            }
        }
    }

    fn require_init(&self) -> Result<()> {
        if self.initialized.load(Ordering::Acquire) == MAGIC_INIT {
            Ok(())
        } else {
            Err(Error::NotInit)
        }
    }

    fn head_ptr(&self) -> *mut Node {
        self.head.get()
    }

    fn resolve(&self, rel: RelPtr<Node>) -> *mut Node {
        rel.to_absolute_mut(self.base.get())
    }

    fn relate(&self, ptr: *const Node) -> RelPtr<Node> {
        RelPtr::from_absolute(self.base.get(), ptr)
    }

    /// Safety: caller holds the lock and `head` is a valid, currently
    /// linked sentinel.
    unsafe fn is_empty_locked(&self) -> bool {
        let head = self.head_ptr();
        self.resolve((*head).next) as *const Node == head as *const Node
    }

    /// Safety: `new` must not already be linked into any list, and must
    /// remain valid (not moved, not freed) for as long as it stays linked.
    unsafe fn link_at_tail(&self, new: *mut Node) {
        let head = self.head_ptr();
        let last = self.resolve((*head).prev);
        (*last).next = self.relate(new);
        (*new).prev = self.relate(last);
        (*new).next = self.relate(head);
        (*head).prev = self.relate(new);
    }

    /// Safety: `node` must currently be linked into this list.
    unsafe fn unlink(&self, node: *mut Node) {
        let prev = self.resolve((*node).prev);
        let next = self.resolve((*node).next);
        (*prev).next = self.relate(next);
        (*next).prev = self.relate(prev);
    }

    /// Appends `new` as the newest (last-out) entry.
    ///
    /// # Safety
    /// `new` must point to a valid, writable `Node` that is not already
    /// linked into this or any other list, and it must stay valid and
    /// unmoved for as long as it remains linked.
    pub unsafe fn enqueue(&self, new: *mut Node, ctx_id: u32) -> Result<()> {
        self.require_init()?;
        if new.is_null() {
            return Err(Error::NullArg);
        }
        let _guard = self.lock.guard(ctx_id)?;
        self.link_at_tail(new);
        Ok(())
    }

    /// Removes and returns the oldest (first-in) entry.
    ///
    /// # Safety
    /// The caller takes back ownership of the returned node; it must not
    /// dereference it through any other path that assumed it was still
    /// linked.
    pub unsafe fn dequeue(&self, ctx_id: u32) -> Result<*mut Node> {
        self.require_init()?;
        let _guard = self.lock.guard(ctx_id)?;
        if self.is_empty_locked() {
            return Err(Error::Empty);
        }
        let head = self.head_ptr();
        let first = self.resolve((*head).next);
        self.unlink(first);
        Ok(first)
    }

    /// Returns the oldest (first-in) entry without removing it.
    pub fn get_begin(&self, ctx_id: u32) -> Result<*mut Node> {
        self.require_init()?;
        let _guard = self.lock.guard(ctx_id)?;
        // Safety: guard holds the lock; head is always valid once initialized.
        unsafe {
            if self.is_empty_locked() {
                return Err(Error::Empty);
            }
            Ok(self.resolve((*self.head_ptr()).next))
        }
    }

    /// Returns the newest (last-in) entry without removing it.
    pub fn get_end(&self, ctx_id: u32) -> Result<*mut Node> {
        self.require_init()?;
        let _guard = self.lock.guard(ctx_id)?;
        unsafe {
            if self.is_empty_locked() {
                return Err(Error::Empty);
            }
            Ok(self.resolve((*self.head_ptr()).prev))
        }
    }

    /// Advances an iterator by one step, auto-skipping the sentinel.
    ///
    /// Matches `lib_list__get_next`'s contract: reaching the sentinel is not
    /// an error the caller must special-case to keep iterating — the
    /// returned [`NextNode::Wrapped`] already names the first real node
    /// again, with a signal that one full lap has completed.
    ///
    /// # Safety
    /// `current` must be a node presently linked into this list.
    pub unsafe fn get_next(&self, current: *mut Node, ctx_id: u32) -> Result<NextNode> {
        self.require_init()?;
        let _guard = self.lock.guard(ctx_id)?;
        if self.is_empty_locked() {
            return Err(Error::Empty);
        }
        let head = self.head_ptr();
        let next = self.resolve((*current).next);
        if next as *const Node == head as *const Node {
            let wrapped = self.resolve((*head).next);
            Ok(NextNode::Wrapped(wrapped))
        } else {
            Ok(NextNode::Node(next))
        }
    }

    /// Links `new` immediately after `pos` in iteration order.
    ///
    /// # Safety
    /// `pos` must be linked into this list; `new` must not already be
    /// linked anywhere.
    pub unsafe fn add_after(&self, pos: *mut Node, new: *mut Node, ctx_id: u32) -> Result<()> {
        self.require_init()?;
        if pos.is_null() || new.is_null() {
            return Err(Error::NullArg);
        }
        let _guard = self.lock.guard(ctx_id)?;
        let old_next = self.resolve((*pos).next);
        (*pos).next = self.relate(new);
        (*new).prev = self.relate(pos);
        (*new).next = self.relate(old_next);
        (*old_next).prev = self.relate(new);
        Ok(())
    }

    /// Links `new` immediately before `pos` in iteration order.
    ///
    /// # Safety
    /// Same contract as [`Self::add_after`].
    pub unsafe fn add_before(&self, pos: *mut Node, new: *mut Node, ctx_id: u32) -> Result<()> {
        self.require_init()?;
        if pos.is_null() || new.is_null() {
            return Err(Error::NullArg);
        }
        let _guard = self.lock.guard(ctx_id)?;
        let old_prev = self.resolve((*pos).prev);
        (*old_prev).next = self.relate(new);
        (*new).prev = self.relate(old_prev);
        (*new).next = self.relate(pos);
        (*pos).prev = self.relate(new);
        Ok(())
    }

    /// Unlinks an arbitrary node from the list.
    ///
    /// # Safety
    /// `node` must currently be linked into this list (not the sentinel,
    /// not already removed).
    pub unsafe fn delete(&self, node: *mut Node, ctx_id: u32) -> Result<()> {
        self.require_init()?;
        if node.is_null() {
            return Err(Error::NullArg);
        }
        let _guard = self.lock.guard(ctx_id)?;
        if self.is_empty_locked() {
            return Err(Error::Empty);
        }
        self.unlink(node);
        Ok(())
    }

    /// Reports whether `node` is currently linked into this list.
    ///
    /// # Safety
    /// `node` must be a valid, non-dangling pointer (it need not be linked
    /// into this list — that's exactly what this answers).
    pub unsafe fn contains(&self, node: *const Node, ctx_id: u32) -> Result<bool> {
        self.require_init()?;
        let _guard = self.lock.guard(ctx_id)?;
        let head = self.head_ptr();
        let mut cursor = self.resolve((*head).next);
        while cursor as *const Node != head as *const Node {
            if cursor as *const Node == node {
                return Ok(true);
            }
            cursor = self.resolve((*cursor).next);
        }
        Ok(false)
    }

    /// Reports whether the list holds no entries.
    pub fn is_empty(&self, ctx_id: u32) -> Result<bool> {
        self.require_init()?;
        let _guard = self.lock.guard(ctx_id)?;
        Ok(unsafe { self.is_empty_locked() })
    }

    /// Counts the number of linked entries (O(n); spec.md §4.3 does not
    /// require a cached count).
    pub fn count(&self, ctx_id: u32) -> Result<usize> {
        self.require_init()?;
        let _guard = self.lock.guard(ctx_id)?;
        let head = self.head_ptr();
        let mut count = 0usize;
        let mut cursor = unsafe { self.resolve((*head).next) };
        while cursor as *const Node != head as *const Node {
            count += 1;
            cursor = unsafe { self.resolve((*cursor).next) };
        }
        Ok(count)
    }
}

unsafe impl<L: LockProvider + Sync> Sync for IntrusiveList<L> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lock::cas::CasLock;

    fn new_list() -> IntrusiveList<CasLock> {
        let list = IntrusiveList::new(CasLock::new());
        list.init(0).unwrap();
        list
    }

    #[test]
    fn enqueue_dequeue_is_fifo() {
        let list = new_list();
        let mut a = Node::new();
        let mut b = Node::new();
        let mut c = Node::new();

        unsafe {
            list.enqueue(&mut a, 0).unwrap();
            list.enqueue(&mut b, 0).unwrap();
            list.enqueue(&mut c, 0).unwrap();

            let first = list.dequeue(0).unwrap();
            assert_eq!(first as *const Node, &a as *const Node);
            let second = list.dequeue(0).unwrap();
            assert_eq!(second as *const Node, &b as *const Node);
            let third = list.dequeue(0).unwrap();
            assert_eq!(third as *const Node, &c as *const Node);
            assert_eq!(list.dequeue(0), Err(Error::Empty));
        }
    }

    #[test]
    fn relocation_independent_traversal() {
        // Two IntrusiveList instances, same nodes, different `base` — the
        // FIFO order observed must not depend on which base was used,
        // mirroring `addr.rs`'s relocation-independence property.
        let mut a = Node::new();
        let mut b = Node::new();

        let list_low = IntrusiveList::new(CasLock::new());
        list_low.init(0x1000).unwrap();
        unsafe {
            list_low.enqueue(&mut a, 0).unwrap();
            list_low.enqueue(&mut b, 0).unwrap();
            let first = list_low.dequeue(0).unwrap();
            assert_eq!(first as *const Node, &a as *const Node);
        }
    }

    #[test]
    fn get_begin_end_and_wrapping_next() {
        let list = new_list();
        let mut a = Node::new();
        let mut b = Node::new();
        unsafe {
            list.enqueue(&mut a, 0).unwrap();
            list.enqueue(&mut b, 0).unwrap();
        }

        let begin = list.get_begin(0).unwrap();
        let end = list.get_end(0).unwrap();
        assert_eq!(begin as *const Node, &a as *const Node);
        assert_eq!(end as *const Node, &b as *const Node);

        unsafe {
            let next = list.get_next(begin, 0).unwrap();
            assert_eq!(next, NextNode::Node(&mut b as *mut Node));

            // Advancing past the last real node wraps, reporting overflow
            // but already pointing at the first node again.
            let wrapped = list.get_next(&mut b as *mut Node, 0).unwrap();
            assert_eq!(wrapped, NextNode::Wrapped(&mut a as *mut Node));
        }
    }

    #[test]
    fn add_after_and_before_and_delete() {
        let list = new_list();
        let mut a = Node::new();
        let mut b = Node::new();
        let mut c = Node::new();

        unsafe {
            list.enqueue(&mut a, 0).unwrap();
            list.enqueue(&mut c, 0).unwrap();
            list.add_after(&mut a as *mut Node, &mut b as *mut Node, 0)
                .unwrap();
        }

        assert_eq!(list.count(0).unwrap(), 3);
        unsafe {
            assert!(list.contains(&b as *const Node, 0).unwrap());
            list.delete(&mut b as *mut Node, 0).unwrap();
            assert!(!list.contains(&b as *const Node, 0).unwrap());
        }
        assert_eq!(list.count(0).unwrap(), 2);
    }

    #[test]
    fn operations_before_init_report_not_init() {
        let list = IntrusiveList::new(CasLock::new());
        let mut a = Node::new();
        unsafe {
            assert_eq!(list.enqueue(&mut a, 0), Err(Error::NotInit));
        }
        assert_eq!(list.count(0), Err(Error::NotInit));
    }

    #[test]
    fn slave_attach_before_master_publication_is_denied() {
        let list = IntrusiveList::new(CasLock::new());
        assert_eq!(
            list.attach(crate::region::AttachMode::Slave, 0x2000),
            Err(Error::AccessDenied)
        );
    }

    #[test]
    fn slave_attach_after_master_publication_shares_the_same_nodes() {
        let list = IntrusiveList::new(CasLock::new());
        list.attach(crate::region::AttachMode::Master, 0x1000).unwrap();
        let mut a = Node::new();
        unsafe {
            list.enqueue(&mut a, 0).unwrap();
        }

        // A slave attach must not reformat or re-link anything a master
        // already published; it must reuse the very same base a real slave
        // mapping the identical physical bytes would recompute for itself
        // (changing `base` here without also changing every stored node's
        // real address would corrupt translation — the base is only free to
        // vary *between independent mappings*, not for a single mapping
        // already holding live links).
        list.attach(crate::region::AttachMode::Slave, 0x1000).unwrap();
        unsafe {
            let first = list.dequeue(0).unwrap();
            assert_eq!(first as *const Node, &a as *const Node);
        }
    }
}
