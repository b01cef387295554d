//! Cursors: movable positions over a [`RingList`].

use core::ptr;
use std::fmt;

use crate::error::EmptyError;
use crate::list::RingList;
use crate::node::NodeRef;

/// A shared-access cursor over a [`RingList`].
///
/// A cursor always sits either on an element or on the **end position** (the
/// sentinel), where [`current`](Cursor::current) yields `None`. Movement
/// follows the ring: stepping forward from the last element reaches the end
/// position, one more step wraps to the first; stepping backward from the
/// end position reaches the last element.
pub struct Cursor<'a, T> {
    list: &'a RingList<T>,
    at: NodeRef,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(list: &'a RingList<T>, at: NodeRef) -> Self {
        Cursor { list, at }
    }

    /// Returns the value under the cursor, or `None` at the end position.
    pub fn current(&self) -> Option<&'a T> {
        self.list.get(self.at)
    }

    /// Steps to the next position in the ring.
    pub fn move_next(&mut self) {
        self.at = self.list.next[self.at.as_usize()];
    }

    /// Steps to the previous position in the ring.
    pub fn move_prev(&mut self) {
        self.at = self.list.prev[self.at.as_usize()];
    }

    /// Returns the position token for the current node.
    ///
    /// The token outlives the cursor; resolve it later with
    /// [`RingList::get`] or consume it with [`RingList::remove`].
    pub fn node(&self) -> NodeRef {
        self.at
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        Cursor {
            list: self.list,
            at: self.at,
        }
    }
}

/// Cursors compare equal when they sit on the same node of the same list.
impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.list, other.list) && self.at == other.at
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor").field("at", &self.at).finish()
    }
}

/// An exclusive-access cursor: [`Cursor`] movement plus mutation and removal
/// of the current node.
pub struct CursorMut<'a, T> {
    list: &'a mut RingList<T>,
    at: NodeRef,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut RingList<T>, at: NodeRef) -> Self {
        CursorMut { list, at }
    }

    /// Returns the value under the cursor, or `None` at the end position.
    ///
    /// The borrow is tied to the cursor, so the position cannot move while
    /// the reference is alive.
    pub fn current(&mut self) -> Option<&mut T> {
        self.list.get_mut(self.at)
    }

    /// Steps to the next position in the ring.
    pub fn move_next(&mut self) {
        self.at = self.list.next[self.at.as_usize()];
    }

    /// Steps to the previous position in the ring.
    pub fn move_prev(&mut self) {
        self.at = self.list.prev[self.at.as_usize()];
    }

    /// Returns the position token for the current node.
    pub fn node(&self) -> NodeRef {
        self.at
    }

    /// Removes the current node, returning its value, and advances to the
    /// following position.
    ///
    /// # Errors
    /// [`EmptyError`] if the list is empty; the cursor stays at the end
    /// position.
    ///
    /// # Panics
    /// If the cursor sits at the end position of a non-empty list.
    pub fn remove_current(&mut self) -> Result<T, EmptyError> {
        let after = self.list.next[self.at.as_usize()];
        let value = self.list.remove(self.at)?;
        self.at = after;
        Ok(value)
    }

    /// Reborrows this cursor as a shared [`Cursor`] at the same position.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.list, self.at)
    }

    /// Converts this cursor into a shared [`Cursor`], keeping the position
    /// and giving up only the write capability.
    pub fn into_cursor(self) -> Cursor<'a, T> {
        Cursor::new(self.list, self.at)
    }
}

impl<'a, T> From<CursorMut<'a, T>> for Cursor<'a, T> {
    fn from(cursor: CursorMut<'a, T>) -> Self {
        cursor.into_cursor()
    }
}

impl<T> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut").field("at", &self.at).finish()
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RingList<i32> {
        let mut list = RingList::new();
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);
        list
    }

    #[test]
    fn test_cursor_walk_forward_wraps() {
        let list = sample();
        let mut cursor = list.cursor_front();
        assert_eq!(cursor.current(), Some(&1));
        cursor.move_next();
        assert_eq!(cursor.current(), Some(&2));
        cursor.move_next();
        assert_eq!(cursor.current(), Some(&3));
        cursor.move_next();
        assert_eq!(cursor.current(), None);
        cursor.move_next();
        assert_eq!(cursor.current(), Some(&1));
    }

    #[test]
    fn test_cursor_walk_backward_from_end() {
        let list = sample();
        let mut cursor = list.cursor_front();
        cursor.move_prev();
        assert_eq!(cursor.current(), None);
        // Stepping back off the end position lands on the last element.
        cursor.move_prev();
        assert_eq!(cursor.current(), Some(&3));

        let mut back = list.cursor_back();
        assert_eq!(back.current(), Some(&3));
        back.move_prev();
        assert_eq!(back.current(), Some(&2));
    }

    #[test]
    fn test_cursor_equality_is_node_identity() {
        let list = sample();
        let a = list.cursor_front();
        let mut b = list.cursor_back();
        assert_ne!(a, b);
        b.move_prev();
        b.move_prev();
        assert_eq!(a, b);

        // A clone starts at the same position and moves independently.
        let mut c = b.clone();
        assert_eq!(c, b);
        c.move_next();
        assert_ne!(c, b);

        // On an empty list every cursor sits at the end position.
        let empty: RingList<i32> = RingList::new();
        assert_eq!(empty.cursor_front(), empty.cursor_back());
        assert!(empty.cursor_front().current().is_none());

        // Cursors of different lists never compare equal.
        let other = sample();
        assert_ne!(list.cursor_front(), other.cursor_front());
    }

    #[test]
    fn test_cursor_mut_mutates_current() {
        let mut list = sample();
        let mut cursor = list.cursor_front_mut();
        cursor.move_next();
        if let Some(value) = cursor.current() {
            *value = 20;
        }
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 20, 3]);
    }

    #[test]
    fn test_cursor_mut_remove_current_advances() {
        let mut list = sample();
        let mut cursor = list.cursor_front_mut();
        cursor.move_next();
        assert_eq!(cursor.remove_current(), Ok(2));
        assert_eq!(cursor.current(), Some(&mut 3));
        assert_eq!(cursor.remove_current(), Ok(3));
        // Removing the last element leaves the cursor at the end position.
        assert_eq!(cursor.current(), None);
        drop(cursor);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1]);

        let mut empty: RingList<i32> = RingList::new();
        let mut cursor = empty.cursor_front_mut();
        assert_eq!(cursor.remove_current(), Err(EmptyError));
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn test_cursor_mut_back_starts_at_last() {
        let mut list = sample();
        let mut cursor = list.cursor_back_mut();
        assert_eq!(cursor.current(), Some(&mut 3));
        assert_eq!(cursor.remove_current(), Ok(3));
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn test_cursor_narrowing_keeps_position() {
        let mut list = sample();
        let mut cursor = list.cursor_front_mut();
        cursor.move_next();

        let shared = cursor.as_cursor();
        assert_eq!(shared.current(), Some(&2));
        let node = shared.node();

        let shared: Cursor<'_, i32> = cursor.into();
        assert_eq!(shared.current(), Some(&2));
        assert_eq!(shared.node(), node);
    }
}
