//! # Ring List
//!
//! A doubly linked list built on an **index arena**: nodes live in a growable
//! slot table, links are compact indices instead of pointers, and a valueless
//! **sentinel** slot closes the chain into a ring.
//!
//! This crate provides `RingList`, a sequence with O(1) pushes, pops and
//! removals at any held position. The sentinel doubles as the fixed end
//! position of iteration, so splicing, unlinking and the empty case all run
//! through the same link-rewiring code with no null checks.
//!
//! ## Key Features
//!
//! * **O(1) Ends:** `push_front`/`push_back`/`pop_front`/`pop_back`, plus O(1)
//!   removal at any position returned by a push or a cursor.
//! * **Stable Positions:** Removing a node never invalidates positions naming
//!   other nodes, the classic linked-list advantage over array-backed
//!   sequences.
//! * **O(1) Swap:** Two lists trade their entire contents by swapping arena
//!   headers; no element is moved, copied or re-linked.
//! * **Bidirectional Traversal:** Cursors that step either way and wrap
//!   through the end position, and double-ended iterators for `for` loops.
//! * **Safe Core:** All link manipulation is index rewiring in safe code; the
//!   only `unsafe` in the crate is the mutable iterator's slot walk.
//!
//! ## Examples
//!
//! ### Pushing, popping and iterating
//!
//! ```rust
//! use ring_list::RingList;
//!
//! let mut list = RingList::new();
//! list.push_back(1);
//! list.push_back(2);
//! list.push_front(0);
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
//!
//! assert_eq!(list.pop_front(), Ok(0));
//! assert_eq!(list.pop_back(), Ok(2));
//! ```
//!
//! ### Removing at a held position
//!
//! ```rust
//! use ring_list::RingList;
//!
//! let mut list = RingList::new();
//! list.push_back("a");
//! let b = list.push_back("b");
//! list.push_back("c");
//!
//! // "a" and "c" keep their positions; only b's node is gone.
//! assert_eq!(list.remove(b), Ok("b"));
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec!["a", "c"]);
//! ```
//!
//! ### Swapping and reversing
//!
//! ```rust
//! use ring_list::RingList;
//!
//! let mut a: RingList<i32> = (1..=3).collect();
//! let mut b = RingList::new();
//!
//! a.swap(&mut b);
//! assert!(a.is_empty());
//!
//! b.reverse();
//! assert_eq!(b.into_iter().collect::<Vec<_>>(), vec![3, 2, 1]);
//! ```

// --- Module Declarations ---

pub mod cursor;
pub mod error;
pub mod list;
pub mod node;

// --- Re-exports ---

pub use cursor::{Cursor, CursorMut};
pub use error::EmptyError;
pub use list::{IntoIter, Iter, IterMut, RingList};
pub use node::NodeRef;
