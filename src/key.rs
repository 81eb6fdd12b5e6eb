//! Key trait for arena indices.
//!
//! The [`Key`] trait abstracts over the index types that link list nodes
//! together. It reserves two values: `NONE` (the past-the-last marker) and
//! `SENTINEL` (the before-first anchor that stands in for a dedicated
//! sentinel node).

/// Trait for key/index types used by the arena and the list links.
///
/// Two values are reserved and never assigned to a node:
///
/// - [`Key::NONE`] - "no node", the past-the-last position
/// - [`Key::SENTINEL`] - the before-first anchor, valid only as an
///   insertion/removal position
///
/// For integer types these are `MAX` and `MAX - 1`, so a `u32`-keyed list
/// can address `u32::MAX - 1` nodes.
///
/// # Example
///
/// ```
/// use slotlist::Key;
///
/// let key: u32 = 42;
/// assert!(!key.is_none());
/// assert!(u32::NONE.is_none());
/// assert_ne!(u32::NONE, u32::SENTINEL);
/// ```
pub trait Key: Copy + Eq + core::fmt::Debug {
    /// Sentinel value representing "no node".
    ///
    /// Used for empty links and for the past-the-last cursor position.
    /// For integer types this is `MAX`.
    const NONE: Self;

    /// Reserved value representing the before-first anchor.
    ///
    /// A cursor holding this value references the list header itself and
    /// is a valid position for insert/erase-after, never a current element.
    /// For integer types this is `MAX - 1`.
    const SENTINEL: Self;

    /// Creates a key from a `usize` value.
    ///
    /// Used when the arena assigns sequential slot indices.
    fn from_usize(val: usize) -> Self;

    /// Returns the key as a `usize`.
    ///
    /// Used for indexing into the slot table and bounds checking.
    fn as_usize(&self) -> usize;

    /// Returns `true` if this is the "no node" value.
    #[inline]
    fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// Returns `true` if this is NOT the "no node" value.
    #[inline]
    fn is_some(&self) -> bool {
        !self.is_none()
    }
}

// =============================================================================
// Implementations for integer types
// =============================================================================

impl Key for u16 {
    const NONE: Self = u16::MAX;
    const SENTINEL: Self = u16::MAX - 1;

    #[inline]
    fn from_usize(val: usize) -> Self {
        val as u16
    }

    #[inline]
    fn as_usize(&self) -> usize {
        *self as usize
    }
}

impl Key for u32 {
    const NONE: Self = u32::MAX;
    const SENTINEL: Self = u32::MAX - 1;

    #[inline]
    fn from_usize(val: usize) -> Self {
        val as u32
    }

    #[inline]
    fn as_usize(&self) -> usize {
        *self as usize
    }
}

impl Key for u64 {
    const NONE: Self = u64::MAX;
    const SENTINEL: Self = u64::MAX - 1;

    #[inline]
    fn from_usize(val: usize) -> Self {
        val as u64
    }

    #[inline]
    fn as_usize(&self) -> usize {
        *self as usize
    }
}

impl Key for usize {
    const NONE: Self = usize::MAX;
    const SENTINEL: Self = usize::MAX - 1;

    #[inline]
    fn from_usize(val: usize) -> Self {
        val
    }

    #[inline]
    fn as_usize(&self) -> usize {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u32_key_basics() {
        let key: u32 = 42;
        assert!(!key.is_none());
        assert!(key.is_some());
        assert_eq!(key.as_usize(), 42);

        assert!(u32::NONE.is_none());
        assert!(!u32::NONE.is_some());
    }

    #[test]
    fn sentinel_is_not_none() {
        assert!(u16::SENTINEL.is_some());
        assert!(u32::SENTINEL.is_some());
        assert!(u64::SENTINEL.is_some());
        assert!(usize::SENTINEL.is_some());
    }

    #[test]
    fn from_usize_roundtrip() {
        for i in [0usize, 1, 100, 1000, u16::MAX as usize] {
            let key = u32::from_usize(i);
            assert_eq!(key.as_usize(), i);
        }
    }

    #[test]
    fn reserved_values() {
        assert_eq!(u16::NONE, u16::MAX);
        assert_eq!(u16::SENTINEL, u16::MAX - 1);
        assert_eq!(u32::NONE, u32::MAX);
        assert_eq!(u32::SENTINEL, u32::MAX - 1);
        assert_eq!(u64::NONE, u64::MAX);
        assert_eq!(usize::NONE, usize::MAX);
    }
}
