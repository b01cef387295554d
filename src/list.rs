use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::mem;
use std::fmt;

use crate::cursor::{Cursor, CursorMut};
use crate::error::EmptyError;
use crate::node::NodeRef;

/// A doubly linked list on an index arena, closed into a ring by a sentinel.
///
/// # Overview
/// Nodes are rows of a growable struct-of-arrays arena and links are compact
/// [`NodeRef`] indices instead of pointers. Slot 0 is a **sentinel** that
/// holds no value and closes the chain into a ring: its `next` is the first
/// element, its `prev` the last, and both are itself when the list is empty.
/// Every splice and unlink runs through the same four index writes with no
/// null or emptiness special cases. Removed slots are recycled through a free
/// list, so long-lived lists do not leak arena rows.
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `push_front` / `push_back` | O(1) amortized |
/// | `pop_front` / `pop_back` / `remove` | O(1) |
/// | `front` / `back` / `get` / `len` | O(1) |
/// | `swap` | O(1) |
/// | `reverse` / `clear` / iteration | O(n) |
///
/// # Invariants
/// * The ring is bidirectionally consistent: `next[a] == b` iff
///   `prev[b] == a`, sentinel included.
/// * `len` equals the number of slots reachable from the sentinel before the
///   sentinel recurs, and exactly those slots hold a value.
/// * A slot outside the ring (fresh or freed) links to itself, so it can
///   never be mistaken for a live member.
///
/// Positions ([`NodeRef`]) issued by pushes and cursors stay valid until the
/// node they name is removed; removing a node never disturbs the positions of
/// other nodes. Operations that need at least one element return
/// [`EmptyError`] on an empty list and leave it untouched.
pub struct RingList<T> {
    /// `values[i]` holds slot `i`'s element; the sentinel (slot 0) is
    /// permanently `None`.
    pub(crate) values: Vec<Option<T>>,
    /// `next[i]` is the slot after `i` in the ring.
    pub(crate) next: Vec<NodeRef>,
    /// `prev[i]` is the slot before `i` in the ring.
    pub(crate) prev: Vec<NodeRef>,
    /// Recycled slots, most recently freed on top.
    free: Vec<NodeRef>,
    /// Live element count.
    len: usize,
}

impl<T> RingList<T> {
    /// Creates an empty list: a degenerate ring holding only the sentinel.
    pub fn new() -> Self {
        Self {
            values: vec![None],
            next: vec![NodeRef::SENTINEL],
            prev: vec![NodeRef::SENTINEL],
            free: Vec::new(),
            len: 0,
        }
    }

    /// Creates an empty list with arena room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut values = Vec::with_capacity(capacity + 1);
        let mut next = Vec::with_capacity(capacity + 1);
        let mut prev = Vec::with_capacity(capacity + 1);
        values.push(None);
        next.push(NodeRef::SENTINEL);
        prev.push(NodeRef::SENTINEL);
        Self {
            values,
            next,
            prev,
            free: Vec::new(),
            len: 0,
        }
    }

    // --- Inspection ---

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // --- Access ---

    /// Returns a reference to the first element's value.
    ///
    /// The sentinel of an empty ring is its own neighbor and holds no value,
    /// so the lookup reports [`EmptyError`] without a separate length check.
    pub fn front(&self) -> Result<&T, EmptyError> {
        let first = self.next[NodeRef::SENTINEL.as_usize()];
        self.values[first.as_usize()].as_ref().ok_or(EmptyError)
    }

    /// Returns a mutable reference to the first element's value.
    pub fn front_mut(&mut self) -> Result<&mut T, EmptyError> {
        let first = self.next[NodeRef::SENTINEL.as_usize()];
        self.values[first.as_usize()].as_mut().ok_or(EmptyError)
    }

    /// Returns a reference to the last element's value.
    pub fn back(&self) -> Result<&T, EmptyError> {
        let last = self.prev[NodeRef::SENTINEL.as_usize()];
        self.values[last.as_usize()].as_ref().ok_or(EmptyError)
    }

    /// Returns a mutable reference to the last element's value.
    pub fn back_mut(&mut self) -> Result<&mut T, EmptyError> {
        let last = self.prev[NodeRef::SENTINEL.as_usize()];
        self.values[last.as_usize()].as_mut().ok_or(EmptyError)
    }

    /// Returns a reference to the value at `at`, or `None` if `at` is the
    /// end position or its node has been removed.
    pub fn get(&self, at: NodeRef) -> Option<&T> {
        self.values.get(at.as_usize()).and_then(Option::as_ref)
    }

    /// Returns a mutable reference to the value at `at`.
    pub fn get_mut(&mut self, at: NodeRef) -> Option<&mut T> {
        self.values.get_mut(at.as_usize()).and_then(Option::as_mut)
    }

    // --- Modification ---

    /// Appends `value` as the new last element and returns its position.
    pub fn push_back(&mut self, value: T) -> NodeRef {
        let node = self.alloc(value);
        self.attach_before(NodeRef::SENTINEL, node);
        self.len += 1;
        node
    }

    /// Prepends `value` as the new first element and returns its position.
    pub fn push_front(&mut self, value: T) -> NodeRef {
        let node = self.alloc(value);
        let first = self.next[NodeRef::SENTINEL.as_usize()];
        self.attach_before(first, node);
        self.len += 1;
        node
    }

    /// Removes and returns the first element.
    pub fn pop_front(&mut self) -> Result<T, EmptyError> {
        let first = self.next[NodeRef::SENTINEL.as_usize()];
        self.remove(first)
    }

    /// Removes and returns the last element.
    pub fn pop_back(&mut self) -> Result<T, EmptyError> {
        let last = self.prev[NodeRef::SENTINEL.as_usize()];
        self.remove(last)
    }

    /// Removes the node at `at` and returns its value.
    ///
    /// Its neighbors are re-linked to each other and the slot is recycled;
    /// positions naming other nodes stay valid.
    ///
    /// # Errors
    /// [`EmptyError`] if the list is empty. The list is left untouched.
    ///
    /// # Panics
    /// If `at` is the end position of a non-empty list, or names a node that
    /// has already been removed.
    pub fn remove(&mut self, at: NodeRef) -> Result<T, EmptyError> {
        if self.is_empty() {
            return Err(EmptyError);
        }
        // A failed take mutates nothing, so the contract panic leaves the
        // list unchanged.
        let value = match self.values.get_mut(at.as_usize()).and_then(Option::take) {
            Some(value) => value,
            None => panic!("remove: position does not name a live node"),
        };
        self.detach(at);
        self.free.push(at);
        self.len -= 1;
        Ok(value)
    }

    /// Removes every element, front to back. Arena capacity is retained,
    /// like [`Vec::clear`].
    pub fn clear(&mut self) {
        while self.pop_front().is_ok() {}
    }

    /// Exchanges the entire contents of two lists in O(1).
    ///
    /// Only the arena headers move: no element is copied or re-linked, and a
    /// position issued before the swap still names its node in the list that
    /// received it. Empty operands are handled like any other.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Reverses the order of elements in place.
    ///
    /// Walks inward from both ends, swapping the **values** of mirrored
    /// slots until the walkers meet or cross. Links are untouched, so
    /// positions keep their place in the sequence while values move past
    /// them. Empty and single-element lists are no-ops.
    pub fn reverse(&mut self) {
        let mut left = self.next[NodeRef::SENTINEL.as_usize()];
        let mut right = self.prev[NodeRef::SENTINEL.as_usize()];
        while left != right {
            self.values.swap(left.as_usize(), right.as_usize());
            right = self.prev[right.as_usize()];
            if left == right {
                break;
            }
            left = self.next[left.as_usize()];
        }
    }

    // --- Cursors ---

    /// Returns a cursor at the first element, or at the end position if the
    /// list is empty.
    pub fn cursor_front(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.next[NodeRef::SENTINEL.as_usize()])
    }

    /// Returns a cursor at the last element, or at the end position if the
    /// list is empty.
    pub fn cursor_back(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.prev[NodeRef::SENTINEL.as_usize()])
    }

    /// Returns a mutable cursor at the first element.
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        let first = self.next[NodeRef::SENTINEL.as_usize()];
        CursorMut::new(self, first)
    }

    /// Returns a mutable cursor at the last element.
    pub fn cursor_back_mut(&mut self) -> CursorMut<'_, T> {
        let last = self.prev[NodeRef::SENTINEL.as_usize()];
        CursorMut::new(self, last)
    }

    // --- Internals ---

    /// Takes a slot for `value`, recycling the free list before growing the
    /// arena. A fresh slot starts self-linked, like a detached node.
    fn alloc(&mut self, value: T) -> NodeRef {
        if let Some(node) = self.free.pop() {
            self.values[node.as_usize()] = Some(value);
            return node;
        }
        assert!(
            self.values.len() < u32::MAX as usize,
            "RingList arena exceeded u32 slot indices"
        );
        let node = NodeRef::from_usize(self.values.len());
        self.values.push(Some(value));
        self.next.push(node);
        self.prev.push(node);
        node
    }

    /// Splices the detached `node` immediately before `anchor` in the ring.
    ///
    /// The write order also covers the empty ring, where `anchor` is the
    /// sentinel and its own predecessor.
    #[inline(always)]
    fn attach_before(&mut self, anchor: NodeRef, node: NodeRef) {
        let before = self.prev[anchor.as_usize()];
        self.next[node.as_usize()] = anchor;
        self.prev[node.as_usize()] = before;
        self.next[before.as_usize()] = node;
        self.prev[anchor.as_usize()] = node;
    }

    /// Unlinks `node` from the ring: its neighbors become adjacent and the
    /// slot is re-pointed at itself, so a detached slot can never pass for a
    /// live ring member.
    #[inline(always)]
    fn detach(&mut self, node: NodeRef) {
        let next = self.next[node.as_usize()];
        let prev = self.prev[node.as_usize()];
        self.prev[next.as_usize()] = prev;
        self.next[prev.as_usize()] = next;
        self.next[node.as_usize()] = node;
        self.prev[node.as_usize()] = node;
    }
}

// --- Iterators ---

/// A double-ended iterator over shared references, created by
/// [`RingList::iter`].
pub struct Iter<'a, T> {
    values: &'a [Option<T>],
    next: &'a [NodeRef],
    prev: &'a [NodeRef],
    head: NodeRef,
    tail: NodeRef,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let values = self.values;
        let slot = self.head.as_usize();
        self.head = self.next[slot];
        self.remaining -= 1;
        values[slot].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let values = self.values;
        let slot = self.tail.as_usize();
        self.tail = self.prev[slot];
        self.remaining -= 1;
        values[slot].as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// A double-ended iterator over mutable references, created by
/// [`RingList::iter_mut`].
pub struct IterMut<'a, T> {
    values: *mut Option<T>,
    next: &'a [NodeRef],
    prev: &'a [NodeRef],
    head: NodeRef,
    tail: NodeRef,
    remaining: usize,
    marker: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.head.as_usize();
        self.head = self.next[slot];
        self.remaining -= 1;
        // SAFETY: `slot` is a live ring member, and the `remaining` guard
        // stops the two ends before they revisit a slot, so each yielded
        // reference is unique. The arena cannot move or shrink while `'a`
        // borrows the list.
        unsafe { (*self.values.add(slot)).as_mut() }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.tail.as_usize();
        self.tail = self.prev[slot];
        self.remaining -= 1;
        // SAFETY: as in `next`; the front and back walks share `remaining`.
        unsafe { (*self.values.add(slot)).as_mut() }
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> RingList<T> {
    /// Returns a forward iterator over the element values.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            values: &self.values,
            next: &self.next,
            prev: &self.prev,
            head: self.next[NodeRef::SENTINEL.as_usize()],
            tail: self.prev[NodeRef::SENTINEL.as_usize()],
            remaining: self.len,
        }
    }

    /// Returns a forward iterator yielding mutable references.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let head = self.next[NodeRef::SENTINEL.as_usize()];
        let tail = self.prev[NodeRef::SENTINEL.as_usize()];
        IterMut {
            values: self.values.as_mut_ptr(),
            next: &self.next,
            prev: &self.prev,
            head,
            tail,
            remaining: self.len,
            marker: PhantomData,
        }
    }
}

/// An owning iterator created by [`RingList::into_iter`]; drains front to
/// back, or back to front through [`rev`](Iterator::rev).
pub struct IntoIter<T> {
    list: RingList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for RingList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a RingList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut RingList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

// --- Traits ---

impl<T> Default for RingList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for RingList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone> Clone for RingList<T> {
    /// Rebuilds the clone on a fresh, compact arena; element order is
    /// preserved, slot numbering is not.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for RingList<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for RingList<T> {}

impl<T> Extend<T> for RingList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.values.reserve(lower);
        self.next.reserve(lower);
        self.prev.reserve(lower);
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for RingList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

// --- Tests ---
