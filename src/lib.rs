//! Arena-backed singly-linked list with cursor-based editing.
//!
//! A [`ForwardList`] stores its nodes in an internal growable slot arena
//! and links them by index. The key insight: node identity is a small
//! copyable key, not a pointer, so positions ([`Cursor`]) can be held,
//! copied, and compared freely without borrowing the list.
//!
//! # Design
//!
//! ```text
//! Box-per-node list  - one allocation per element, pointer links
//! ForwardList        - nodes in one growable table, index links,
//!                      erased slots recycled through a free list
//! ```
//!
//! Properties:
//! - **Single ownership**: every node is owned by the list's arena;
//!   cursors are positions, never owners
//! - **Eager release**: an erased node's value is dropped immediately and
//!   its slot goes on the free list
//! - **O(1) editing**: `push_front`, `pop_front`, `insert_after`,
//!   `erase_after`, `len`, and `swap` are all constant time
//! - **Uniform front handling**: the reserved before-first anchor gives
//!   insert/erase-after a predecessor even at the head, with no
//!   special-cased front path
//!
//! # Quick Start
//!
//! ```
//! use slotlist::ForwardList;
//!
//! let mut list: ForwardList<u64> = [1, 2, 3].into();
//!
//! // Cursor-based editing
//! let first = list.begin();
//! let second = list.insert_after(first, 10);
//! assert_eq!(list.get(second), Some(&10));
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 10, 2, 3]);
//!
//! // Front operations
//! list.push_front(0);
//! assert_eq!(list.pop_front(), Some(0));
//!
//! // Deep copies and lexicographic comparison
//! let copy = list.clone();
//! assert_eq!(copy, list);
//! assert!(list < [1, 10, 2, 3, 0].into());
//! ```
//!
//! # Operations
//!
//! | Operation | Cost | Notes |
//! |-----------|------|-------|
//! | `push_front` / `pop_front` | O(1) | |
//! | `insert_after` / `erase_after` | O(1) | given the anchor cursor |
//! | `len` / `is_empty` | O(1) | count tracked incrementally |
//! | `swap` | O(1) | exchanges whole arenas, never touches nodes |
//! | `clear` / drop | O(n) | values dropped front to back |
//! | `iter` / `iter_mut` | O(n) | forward only |
//! | `==`, `<`, ... | O(n) | length check first, then element-wise |
//!
//! # Not Provided
//!
//! No random access, no backward traversal, no thread safety: a list is a
//! single-threaded value, shared across threads only behind external
//! synchronization like any other `Send` container.

#![warn(missing_docs)]

mod arena;
pub mod key;
pub mod list;

pub use arena::OutOfMemory;
pub use key::Key;
pub use list::{Cursor, Cursors, ForwardList, IntoIter, Iter, IterMut};
