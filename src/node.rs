//! Compact slot index used as the link type between list nodes.

/// A position in a [`RingList`](crate::RingList): the compact index of one
/// arena slot.
///
/// Instead of pointer-based links, the list stores `NodeRef` indices into its
/// slot arrays. This keeps every link operation in safe code and halves the
/// link size versus a machine pointer on 64-bit platforms.
///
/// A `NodeRef` is an opaque token: it is issued by the list (`push_back`,
/// `push_front`, cursors) and can only be resolved by methods of the list
/// that issued it ([`get`](crate::RingList::get), [`remove`](crate::RingList::remove), ...).
/// It stays valid until the node it names is removed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeRef(u32);

impl NodeRef {
    /// The sentinel slot that closes the ring. Slot 0 of every arena.
    pub(crate) const SENTINEL: NodeRef = NodeRef(0);

    /// Converts a `usize` slot index to the compact type.
    ///
    /// Callers check that the arena stays below `u32::MAX` slots before
    /// growing it.
    #[inline(always)]
    pub(crate) fn from_usize(i: usize) -> Self {
        NodeRef(i as u32)
    }

    /// Converts this index to a `usize` for array access.
    #[inline(always)]
    pub(crate) fn as_usize(self) -> usize {
        self.0 as usize
    }
}
