//! Growable slot arena with free-list recycling.
//!
//! The arena owns every node in a list. Slots are stored in a `Vec`; a
//! LIFO free list threads through vacant slots so erased slots are reused
//! by later insertions. Keys are stable: a key remains valid until its
//! slot is explicitly removed.

use crate::key::Key;

/// Error returned when the allocator cannot grow the slot table.
///
/// Carries the value that could not be inserted back to the caller, so
/// the failed operation consumes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfMemory<T>(pub T);

impl<T> OutOfMemory<T> {
    /// Returns the value that could not be inserted.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> core::fmt::Display for OutOfMemory<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "allocation failed")
    }
}

impl<T: core::fmt::Debug> std::error::Error for OutOfMemory<T> {}

enum Slot<T, K> {
    /// Vacant slot holding the next entry of the free list.
    Vacant(K),
    Occupied(T),
}

/// Growable slot table with stable keys and O(1) insert/remove/get.
///
/// Removed slots go on a LIFO free list and are handed out again by
/// future insertions. A value is dropped the instant its slot is removed.
pub(crate) struct Arena<T, K: Key> {
    slots: Vec<Slot<T, K>>,
    /// Head of the free list, `K::NONE` when every slot is occupied.
    free: K,
    len: usize,
}

impl<T, K: Key> Arena<T, K> {
    /// Creates an empty arena.
    #[inline]
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: K::NONE,
            len: 0,
        }
    }

    /// Creates an arena with room for `capacity` slots before reallocating.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        assert!(
            capacity < K::SENTINEL.as_usize(),
            "capacity exceeds key type maximum"
        );
        Self {
            slots: Vec::with_capacity(capacity),
            free: K::NONE,
            len: 0,
        }
    }

    /// Returns the number of occupied slots.
    #[inline]
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no slots are occupied.
    #[inline]
    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts a value, returning its stable key.
    ///
    /// Reuses the most recently freed slot when one exists, otherwise
    /// appends a new slot.
    ///
    /// # Panics
    ///
    /// Panics if the slot table would exceed the key type's addressable
    /// range.
    #[inline]
    pub(crate) fn insert(&mut self, value: T) -> K {
        if self.free.is_some() {
            return self.fill_free_slot(value);
        }

        assert!(
            self.slots.len() < K::SENTINEL.as_usize(),
            "slot table exceeds key type maximum"
        );
        let key = K::from_usize(self.slots.len());
        self.slots.push(Slot::Occupied(value));
        self.len += 1;
        key
    }

    /// Inserts a value, reporting allocation failure instead of aborting.
    ///
    /// # Errors
    ///
    /// Returns `Err(OutOfMemory(value))` if the slot table cannot grow.
    #[inline]
    pub(crate) fn try_insert(&mut self, value: T) -> Result<K, OutOfMemory<T>> {
        if self.free.is_some() {
            return Ok(self.fill_free_slot(value));
        }

        if self.slots.len() >= K::SENTINEL.as_usize() {
            return Err(OutOfMemory(value));
        }
        if self.slots.try_reserve(1).is_err() {
            return Err(OutOfMemory(value));
        }

        let key = K::from_usize(self.slots.len());
        self.slots.push(Slot::Occupied(value));
        self.len += 1;
        Ok(key)
    }

    #[inline]
    fn fill_free_slot(&mut self, value: T) -> K {
        let key = self.free;
        let slot = &mut self.slots[key.as_usize()];
        match core::mem::replace(slot, Slot::Occupied(value)) {
            Slot::Vacant(next_free) => self.free = next_free,
            Slot::Occupied(_) => unreachable!("free list points at occupied slot"),
        }
        self.len += 1;
        key
    }

    /// Removes and returns the value at `key`, if present.
    ///
    /// The slot joins the free list and the value is dropped (or returned)
    /// immediately.
    #[inline]
    pub(crate) fn remove(&mut self, key: K) -> Option<T> {
        let i = key.as_usize();
        match self.slots.get_mut(i) {
            Some(slot @ Slot::Occupied(_)) => {
                let prev = core::mem::replace(slot, Slot::Vacant(self.free));
                self.free = key;
                self.len -= 1;
                match prev {
                    Slot::Occupied(value) => Some(value),
                    Slot::Vacant(_) => unreachable!(),
                }
            }
            _ => None,
        }
    }

    /// Returns a reference to the value at `key`, if present.
    #[inline]
    pub(crate) fn get(&self, key: K) -> Option<&T> {
        match self.slots.get(key.as_usize()) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to the value at `key`, if present.
    #[inline]
    pub(crate) fn get_mut(&mut self, key: K) -> Option<&mut T> {
        match self.slots.get_mut(key.as_usize()) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns a reference without checking occupancy.
    ///
    /// # Safety
    ///
    /// `key` must be valid and occupied.
    #[inline]
    pub(crate) unsafe fn get_unchecked(&self, key: K) -> &T {
        debug_assert!(self.get(key).is_some(), "key must be occupied");
        match unsafe { self.slots.get_unchecked(key.as_usize()) } {
            Slot::Occupied(value) => value,
            // Safety: caller guarantees the slot is occupied
            Slot::Vacant(_) => unsafe { core::hint::unreachable_unchecked() },
        }
    }

    /// Returns a mutable reference without checking occupancy.
    ///
    /// # Safety
    ///
    /// `key` must be valid and occupied.
    #[inline]
    pub(crate) unsafe fn get_unchecked_mut(&mut self, key: K) -> &mut T {
        debug_assert!(self.get(key).is_some(), "key must be occupied");
        match unsafe { self.slots.get_unchecked_mut(key.as_usize()) } {
            Slot::Occupied(value) => value,
            // Safety: caller guarantees the slot is occupied
            Slot::Vacant(_) => unsafe { core::hint::unreachable_unchecked() },
        }
    }

}
