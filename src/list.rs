//! Singly-linked list over an internal slot arena.
//!
//! Nodes live in a growable arena and link to their successor by key, so
//! the list is a strictly linear ownership chain with no pointer chasing
//! into separate allocations. Cursors are plain copyable keys into the
//! arena: positions plus lookup, never ownership.
//!
//! # The before-first anchor
//!
//! `insert_after`/`erase_after` need a predecessor even at the front of
//! the list. Instead of a dedicated zero-payload node, the reserved key
//! [`Key::SENTINEL`] marks the position immediately before the first
//! element; a cursor holding it resolves to the list's own head link.
//! This keeps front insertion/removal on the same code path as every
//! other position.
//!
//! # Cursor invariant
//!
//! A cursor must only be used with the list that produced it, and becomes
//! dangling once its node is erased (same discipline as the `slab` crate's
//! keys). Using a dangling cursor whose slot is still vacant panics; once
//! the slot has been recycled by a later insertion the cursor silently
//! references the new element, which is the caller's responsibility to
//! avoid.
//!
//! # Example
//!
//! ```
//! use slotlist::ForwardList;
//!
//! let mut list: ForwardList<u64> = [1, 2, 3].into();
//!
//! let pos = list.before_begin();
//! list.insert_after(pos, 0);
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
//!
//! list.erase_after(list.before_begin());
//! assert_eq!(list.pop_front(), Some(1));
//! assert_eq!(list.len(), 2);
//! ```

use core::fmt;
use core::hash::{Hash, Hasher};

use crate::arena::{Arena, OutOfMemory};
use crate::key::Key;

/// A node in the list: one element plus the key of its successor.
struct Node<T, K: Key> {
    value: T,
    next: K,
}

/// A position in a [`ForwardList`].
///
/// Cursors are copyable handles, not borrows: read or write the element
/// they reference through [`ForwardList::get`] / [`ForwardList::get_mut`],
/// and advance them with [`ForwardList::next`].
///
/// Three kinds of position exist:
///
/// - a real element
/// - the before-first anchor ([`ForwardList::before_begin`]), valid only
///   for insert/erase-after
/// - past-the-last ([`ForwardList::end`]), valid only as a traversal stop
///
/// Two cursors compare equal iff they reference the same node, or are
/// both the end marker, or both the before-first anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor<K: Key = u32>(K);

impl<K: Key> Cursor<K> {
    /// Returns `true` if this is the past-the-last position.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.0.is_none()
    }

    /// Returns `true` if this is the before-first anchor.
    #[inline]
    pub fn is_before_begin(&self) -> bool {
        self.0 == K::SENTINEL
    }
}

/// A singly-linked list with arena-backed nodes and cursor-based editing.
///
/// Supports forward iteration, O(1) front insertion/removal, O(1)
/// insertion/removal after any cursor, deep copies, and lexicographic
/// comparison. Element count is tracked incrementally, so [`len`] is O(1).
///
/// # Type Parameters
///
/// - `T`: Element type
/// - `K`: Key type for node links (default `u32`)
///
/// # Example
///
/// ```
/// use slotlist::ForwardList;
///
/// let mut list: ForwardList<String> = ForwardList::new();
/// list.push_front("world".into());
/// let first = list.push_front("hello".into());
///
/// assert_eq!(list.get(first), Some(&"hello".to_string()));
/// assert_eq!(list.len(), 2);
/// ```
///
/// [`len`]: ForwardList::len
pub struct ForwardList<T, K: Key = u32> {
    arena: Arena<Node<T, K>, K>,
    /// Successor of the before-first anchor: the first real element.
    head: K,
}

impl<T, K: Key> ForwardList<T, K> {
    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self {
            arena: Arena::new(),
            head: K::NONE,
        }
    }

    /// Creates an empty list with room for `capacity` elements before
    /// the arena reallocates.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` exceeds the key type's addressable range.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            head: K::NONE,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    // ========================================================================
    // Cursors
    // ========================================================================

    /// Returns a cursor at the first element.
    ///
    /// Equal to [`end`](Self::end) when the list is empty. Each call
    /// starts a fresh traversal.
    #[inline]
    pub fn begin(&self) -> Cursor<K> {
        Cursor(self.head)
    }

    /// Returns the past-the-last cursor.
    #[inline]
    pub fn end(&self) -> Cursor<K> {
        Cursor(K::NONE)
    }

    /// Returns the before-first anchor.
    ///
    /// The only valid position for inserting or erasing the first real
    /// element. Never a current element: [`get`](Self::get) on it returns
    /// `None`.
    #[inline]
    pub fn before_begin(&self) -> Cursor<K> {
        Cursor(K::SENTINEL)
    }

    /// Returns the cursor after `pos`.
    ///
    /// The before-first anchor advances to [`begin`](Self::begin); the
    /// last element and the end cursor advance to [`end`](Self::end).
    ///
    /// # Panics
    ///
    /// Panics if `pos` references an erased node whose slot is still
    /// vacant.
    #[inline]
    pub fn next(&self, pos: Cursor<K>) -> Cursor<K> {
        if pos.0.is_none() {
            return pos;
        }
        Cursor(self.successor(pos.0))
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Returns a reference to the element at `pos`.
    ///
    /// Returns `None` for the end cursor, the before-first anchor, and
    /// cursors whose node has been erased.
    #[inline]
    pub fn get(&self, pos: Cursor<K>) -> Option<&T> {
        self.arena.get(pos.0).map(|node| &node.value)
    }

    /// Returns a mutable reference to the element at `pos`.
    ///
    /// Returns `None` for the end cursor, the before-first anchor, and
    /// cursors whose node has been erased.
    #[inline]
    pub fn get_mut(&mut self, pos: Cursor<K>) -> Option<&mut T> {
        self.arena.get_mut(pos.0).map(|node| &mut node.value)
    }

    /// Returns a reference to the first element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        if self.head.is_none() {
            None
        } else {
            // Safety: head is valid when is_some()
            Some(unsafe { &self.arena.get_unchecked(self.head).value })
        }
    }

    /// Returns a mutable reference to the first element.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.head.is_none() {
            None
        } else {
            // Safety: head is valid when is_some()
            Some(unsafe { &mut self.arena.get_unchecked_mut(self.head).value })
        }
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Inserts a value at the front of the list.
    ///
    /// The former first element becomes second. Returns a cursor to the
    /// new element.
    #[inline]
    pub fn push_front(&mut self, value: T) -> Cursor<K> {
        let key = self.arena.insert(Node {
            value,
            next: self.head,
        });
        self.head = key;
        Cursor(key)
    }

    /// Inserts a value at the front, reporting allocation failure.
    ///
    /// The list is unchanged on failure.
    ///
    /// # Errors
    ///
    /// Returns `Err(OutOfMemory(value))` if the arena cannot grow.
    #[inline]
    pub fn try_push_front(&mut self, value: T) -> Result<Cursor<K>, OutOfMemory<T>> {
        let key = self
            .arena
            .try_insert(Node {
                value,
                next: self.head,
            })
            .map_err(|e| OutOfMemory(e.0.value))?;
        self.head = key;
        Ok(Cursor(key))
    }

    /// Removes and returns the first element.
    ///
    /// Returns `None` if the list is empty.
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        if self.head.is_none() {
            return None;
        }

        let key = self.head;
        let node = self.arena.remove(key).expect("invalid head link");
        self.head = node.next;
        Some(node.value)
    }

    /// Inserts a value immediately after `pos`.
    ///
    /// `pos` must be the before-first anchor or a live element of this
    /// list. Returns a cursor to the new element; `pos` itself remains
    /// valid and now has the new element as its immediate successor.
    /// Other cursors are unaffected.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is the end cursor or references an erased node
    /// whose slot is still vacant.
    #[inline]
    pub fn insert_after(&mut self, pos: Cursor<K>, value: T) -> Cursor<K> {
        assert!(pos.0.is_some(), "insert_after on the past-the-last cursor");
        let next = self.successor(pos.0);
        let key = self.arena.insert(Node { value, next });
        self.set_successor(pos.0, key);
        Cursor(key)
    }

    /// Inserts a value immediately after `pos`, reporting allocation
    /// failure.
    ///
    /// The list is unchanged on failure: the node is fully built before
    /// it is linked.
    ///
    /// # Errors
    ///
    /// Returns `Err(OutOfMemory(value))` if the arena cannot grow.
    ///
    /// # Panics
    ///
    /// Same contract as [`insert_after`](Self::insert_after).
    #[inline]
    pub fn try_insert_after(
        &mut self,
        pos: Cursor<K>,
        value: T,
    ) -> Result<Cursor<K>, OutOfMemory<T>> {
        assert!(pos.0.is_some(), "insert_after on the past-the-last cursor");
        let next = self.successor(pos.0);
        let key = self
            .arena
            .try_insert(Node { value, next })
            .map_err(|e| OutOfMemory(e.0.value))?;
        self.set_successor(pos.0, key);
        Ok(Cursor(key))
    }

    /// Removes the element immediately after `pos`.
    ///
    /// `pos` must be the before-first anchor or a live element with a
    /// successor. The removed value is dropped immediately and its slot
    /// recycled; any other cursor that referenced it is dangling from
    /// here on. Returns the cursor now immediately after `pos`, possibly
    /// the end cursor.
    ///
    /// # Panics
    ///
    /// Panics if there is no element after `pos`, if `pos` is the end
    /// cursor, or if `pos` references an erased node whose slot is still
    /// vacant.
    #[inline]
    pub fn erase_after(&mut self, pos: Cursor<K>) -> Cursor<K> {
        assert!(pos.0.is_some(), "erase_after on the past-the-last cursor");
        let victim = self.successor(pos.0);
        assert!(victim.is_some(), "erase_after with no element after cursor");

        let node = self.arena.remove(victim).expect("invalid link");
        self.set_successor(pos.0, node.next);
        Cursor(node.next)
    }

    /// Removes every element, front to back.
    ///
    /// Each value is dropped as its node is unlinked. The arena's
    /// allocation is kept for reuse. Never fails.
    pub fn clear(&mut self) {
        let mut key = self.head;
        while key.is_some() {
            let node = self.arena.remove(key).expect("invalid link");
            key = node.next;
        }
        self.head = K::NONE;
        debug_assert!(self.arena.is_empty());
    }

    /// Exchanges the contents of two lists in O(1).
    ///
    /// Swaps the whole arenas and head links; individual nodes are never
    /// touched. Never fails.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Returns an iterator over references to elements, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, K> {
        Iter {
            arena: &self.arena,
            current: self.head,
        }
    }

    /// Returns an iterator over mutable references to elements, front to
    /// back.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T, K> {
        IterMut {
            arena: &mut self.arena,
            current: self.head,
        }
    }

    /// Returns an iterator over cursors, front to back.
    ///
    /// Useful when you need both the position and the value, or when you
    /// plan to edit the list afterwards (collect cursors first).
    #[inline]
    pub fn cursors(&self) -> Cursors<'_, T, K> {
        Cursors {
            arena: &self.arena,
            current: self.head,
        }
    }

    // ========================================================================
    // Internal link plumbing
    // ========================================================================

    /// Resolves the link out of `key`, treating the before-first anchor
    /// as the list's own head link.
    #[inline]
    fn successor(&self, key: K) -> K {
        if key == K::SENTINEL {
            self.head
        } else {
            self.arena.get(key).expect("invalid cursor").next
        }
    }

    /// Redirects the link out of `key`, treating the before-first anchor
    /// as the list's own head link.
    #[inline]
    fn set_successor(&mut self, key: K, next: K) {
        if key == K::SENTINEL {
            self.head = next;
        } else {
            self.arena.get_mut(key).expect("invalid cursor").next = next;
        }
    }

    /// Returns the anchor to append after: the last element, or the
    /// before-first anchor when the list is empty.
    fn last_anchor(&self) -> Cursor<K> {
        let mut anchor = K::SENTINEL;
        let mut next = self.head;
        while next.is_some() {
            anchor = next;
            // Safety: next came from a live link
            next = unsafe { self.arena.get_unchecked(next) }.next;
        }
        Cursor(anchor)
    }
}

impl<T, K: Key> Default for ForwardList<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K: Key> Drop for ForwardList<T, K> {
    fn drop(&mut self) {
        // Drop values in traversal order rather than slot order
        self.clear();
    }
}

// =============================================================================
// Construction from sequences
// =============================================================================

impl<T, K: Key> FromIterator<T> for ForwardList<T, K> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        let mut tail = list.before_begin();
        for value in iter {
            tail = list.insert_after(tail, value);
        }
        list
    }
}

impl<T, K: Key, const N: usize> From<[T; N]> for ForwardList<T, K> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T, K: Key> Extend<T> for ForwardList<T, K> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = self.last_anchor();
        for value in iter {
            tail = self.insert_after(tail, value);
        }
    }
}

// =============================================================================
// Copy semantics
// =============================================================================

impl<T: Clone, K: Key> Clone for ForwardList<T, K> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Builds the copy completely before replacing `self`, so a panic
    /// while cloning an element leaves `self` in its original state.
    fn clone_from(&mut self, source: &Self) {
        let mut fresh = source.clone();
        self.swap(&mut fresh);
    }
}

// =============================================================================
// Comparison
// =============================================================================

impl<T: PartialEq, K: Key> PartialEq for ForwardList<T, K> {
    fn eq(&self, other: &Self) -> bool {
        if core::ptr::eq(self, other) {
            return true;
        }
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, K: Key> Eq for ForwardList<T, K> {}

impl<T: PartialOrd, K: Key> PartialOrd for ForwardList<T, K> {
    /// Lexicographic: prefix-then-first-difference over traversal order.
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord, K: Key> Ord for ForwardList<T, K> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash, K: Key> Hash for ForwardList<T, K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for value in self {
            value.hash(state);
        }
    }
}

impl<T: fmt::Debug, K: Key> fmt::Debug for ForwardList<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to list elements.
pub struct Iter<'a, T, K: Key> {
    arena: &'a Arena<Node<T, K>, K>,
    current: K,
}

impl<'a, T: 'a, K: Key + 'a> Iterator for Iter<'a, T, K> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_none() {
            return None;
        }

        // Safety: list invariants guarantee current is valid
        let node = unsafe { self.arena.get_unchecked(self.current) };
        self.current = node.next;
        Some(&node.value)
    }
}

/// Iterator over mutable references to list elements.
pub struct IterMut<'a, T, K: Key> {
    arena: &'a mut Arena<Node<T, K>, K>,
    current: K,
}

impl<'a, T: 'a, K: Key + 'a> Iterator for IterMut<'a, T, K> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_none() {
            return None;
        }

        // Safety: list invariants guarantee current is valid
        let node = unsafe { self.arena.get_unchecked_mut(self.current) };
        self.current = node.next;

        // Extend lifetime - safe because we visit each node exactly once
        Some(unsafe { &mut *((&mut node.value) as *mut T) })
    }
}

/// Iterator over cursors in the list.
pub struct Cursors<'a, T, K: Key> {
    arena: &'a Arena<Node<T, K>, K>,
    current: K,
}

impl<'a, T, K: Key> Iterator for Cursors<'a, T, K> {
    type Item = Cursor<K>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_none() {
            return None;
        }

        let key = self.current;
        // Safety: list invariants guarantee current is valid
        self.current = unsafe { self.arena.get_unchecked(key) }.next;
        Some(Cursor(key))
    }
}

/// Owning iterator over list elements.
pub struct IntoIter<T, K: Key = u32> {
    list: ForwardList<T, K>,
}

impl<T, K: Key> Iterator for IntoIter<T, K> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len();
        (len, Some(len))
    }
}

impl<T, K: Key> ExactSizeIterator for IntoIter<T, K> {}

impl<T, K: Key> IntoIterator for ForwardList<T, K> {
    type Item = T;
    type IntoIter = IntoIter<T, K>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T, K: Key> IntoIterator for &'a ForwardList<T, K> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, K: Key> IntoIterator for &'a mut ForwardList<T, K> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
