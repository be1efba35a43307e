//! The `Enumerable` vocabulary.
//!
//! `Enumerable` names the same immutable sequence as [`Stream`] and adds the
//! method names used by that vocabulary: `find`, `every`, `some`, `sort` and
//! `as_list`. `filter` never mutates the receiver under either name.

use std::cmp::Ordering;

use super::Stream;

/// An alias of [`Stream`] for code written against the Enumerable naming.
///
/// # Examples
///
/// ```rust
/// use minifunk::Enumerable;
///
/// let numbers = Enumerable::from(vec![1, 2, 3, 4]);
/// let evens = numbers.filter(|value| value % 2 == 0);
///
/// assert!(evens.every(|value| value % 2 == 0));
/// assert!(numbers.some(|value| *value == 3));
/// assert_eq!(numbers.count(), 4);
/// ```
pub type Enumerable<T> = Stream<T>;

impl<T> Stream<T> {
    /// Returns the first element satisfying `predicate`, or `None`.
    ///
    /// Same as [`Stream::find_first`].
    pub fn find<P>(&self, predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.find_first(predicate)
    }

    /// Same as [`Stream::all_match`].
    pub fn every<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.all_match(predicate)
    }

    /// Same as [`Stream::any_match`].
    pub fn some<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.any_match(predicate)
    }

    /// Returns a read-only view of the elements.
    #[inline]
    #[must_use]
    pub fn as_list(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: Clone> Stream<T> {
    /// Returns a sorted copy. Same as [`Stream::sorted`].
    #[must_use]
    pub fn sort<C>(&self, comparator: C) -> Self
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        self.sorted(comparator)
    }
}
