//! Immutable, chainable sequence of elements.
//!
//! This module provides [`Stream`], an ordered collection supporting
//! aggregate operations such as `filter`, `map`, `reduce`, `sorted`,
//! `distinct` and `limit`.
//!
//! # Overview
//!
//! A `Stream` is a value. Every transformation returns a new stream and the
//! receiver is never modified, so a stream held elsewhere can never change
//! underfoot. Cloning is O(1): clones share the same reference-counted
//! storage.
//!
//! | Operation       | Result                     | Complexity |
//! |-----------------|----------------------------|------------|
//! | `filter`        | new stream                 | O(N)       |
//! | `map`           | new stream                 | O(N)       |
//! | `flat_map`      | new stream                 | O(N + M)   |
//! | `sorted`        | new stream                 | O(N log N) |
//! | `distinct`      | new stream                 | O(N)       |
//! | `limit`/`take`  | new stream                 | O(min(N, k)) |
//! | `reduce`        | accumulated value          | O(N)       |
//! | `find_first`    | `Option<&T>`               | O(N)       |
//! | `all_match`     | `bool` (short-circuiting)  | O(N)       |
//! | `any_match`     | `bool` (short-circuiting)  | O(N)       |
//! | `count`         | `usize`                    | O(1)       |
//!
//! # Examples
//!
//! ```rust
//! use minifunk::Stream;
//!
//! let words = Stream::from(vec!["apple", "pear", "lemon"]);
//!
//! let lengths = words
//!     .filter(|word| word.len() > 4)
//!     .map(|word| word.len());
//! assert_eq!(lengths.to_list(), vec![5, 5]);
//!
//! // The original stream is preserved
//! assert_eq!(words.count(), 3);
//! ```

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

mod enumerable;
mod error;
mod fallible;
mod iterator;

pub use enumerable::Enumerable;
pub use error::{InvalidArgumentError, StreamError, require};
pub use iterator::StreamIntoIterator;

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted storage pointer.
///
/// `std::sync::Arc` when the `arc` feature is enabled, `std::rc::Rc`
/// otherwise.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Stream<i32>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Stream<String>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(Stream<i32>: Send, Sync);

// =============================================================================
// Stream Definition
// =============================================================================

/// An immutable ordered sequence supporting chainable aggregate operations.
///
/// Elements keep their relative order through every operation except the
/// sorting ones. Operations that build a new stream out of existing elements
/// (`filter`, `sorted`, `distinct`, `limit`) require `T: Clone`. `map` and
/// `flat_map` do not.
///
/// # Examples
///
/// ```rust
/// use minifunk::Stream;
///
/// let total = Stream::from([1, 2, 3, 4]).reduce(0, |accumulator, value| accumulator + value);
/// assert_eq!(total, 10);
/// ```
pub struct Stream<T> {
    elements: ReferenceCounter<[T]>,
}

impl<T> Stream<T> {
    /// Creates an empty stream.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use minifunk::Stream;
    ///
    /// let stream: Stream<i32> = Stream::new();
    /// assert!(stream.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    /// Creates a stream that takes ownership of `elements`, keeping their order.
    #[must_use]
    pub fn from_vec(elements: Vec<T>) -> Self {
        Self {
            elements: ReferenceCounter::from(elements),
        }
    }

    /// Creates a stream from a source that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::InvalidArgument`] when `source` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use minifunk::Stream;
    ///
    /// let stream: Stream<i32> = Stream::from_optional(Some(vec![1, 2, 3])).unwrap();
    /// assert_eq!(stream.count(), 3);
    ///
    /// let missing: Option<Vec<i32>> = None;
    /// assert!(Stream::<i32>::from_optional(missing).is_err());
    /// ```
    pub fn from_optional<S>(source: Option<S>) -> Result<Self, StreamError>
    where
        S: Into<Vec<T>>,
    {
        require(source, "Stream::from_optional", "source")
            .map(|source| Self::from_vec(source.into()))
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns the number of elements.
    ///
    /// Same as [`Stream::len`].
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.len()
    }

    /// Returns `true` if the stream holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the element at `index`, or `None` if out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Returns the first element, or `None` if the stream is empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns an iterator over references to the elements, in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns a read-only view of the elements.
    ///
    /// The backing storage is shared between clones and is never handed out
    /// mutably.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Performs `action` on every element, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use minifunk::Stream;
    ///
    /// let mut seen = Vec::new();
    /// Stream::from(vec!["apple", "pear"]).for_each(|fruit| seen.push(*fruit));
    /// assert_eq!(seen, vec!["apple", "pear"]);
    /// ```
    pub fn for_each<F>(&self, action: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(action);
    }

    /// Returns a stream of the results of applying `mapper` to every element.
    ///
    /// The resulting stream has the same length as this one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use minifunk::Stream;
    ///
    /// let lengths = Stream::from(vec!["apple", "pear", "lemon"]).map(|fruit| fruit.len());
    /// assert_eq!(lengths.to_list(), vec![5, 4, 5]);
    /// ```
    #[must_use]
    pub fn map<R, F>(&self, mapper: F) -> Stream<R>
    where
        F: FnMut(&T) -> R,
    {
        self.iter().map(mapper).collect()
    }

    /// Applies `mapper` to every element and concatenates the produced
    /// sequences in encounter order.
    ///
    /// `mapper` may return anything iterable, including another [`Stream`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use minifunk::Stream;
    ///
    /// let titles = Stream::from(vec![vec![2011], vec![2012, 2013]])
    ///     .flat_map(|titles| Stream::from_slice(titles.as_slice()));
    /// assert_eq!(titles.to_list(), vec![2011, 2012, 2013]);
    /// ```
    #[must_use]
    pub fn flat_map<R, I, F>(&self, mapper: F) -> Stream<R>
    where
        F: FnMut(&T) -> I,
        I: IntoIterator<Item = R>,
    {
        self.iter().flat_map(mapper).collect()
    }

    /// Folds the elements left to right, starting from `initial`.
    ///
    /// An empty stream returns `initial` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use minifunk::Stream;
    ///
    /// let letters = Stream::from(vec!['a', 'b', 'c']);
    /// let word = letters.reduce(String::new(), |mut accumulator, character| {
    ///     accumulator.push(*character);
    ///     accumulator
    /// });
    /// assert_eq!(word, "abc");
    /// ```
    pub fn reduce<R, F>(&self, initial: R, combinator: F) -> R
    where
        F: FnMut(R, &T) -> R,
    {
        self.iter().fold(initial, combinator)
    }

    /// Returns the first element satisfying `predicate`, or `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use minifunk::Stream;
    ///
    /// let clubs = Stream::from(vec!["Inter", "Milan", "Juventus"]);
    /// assert_eq!(clubs.find_first(|club| club.starts_with('J')), Some(&"Juventus"));
    /// assert_eq!(clubs.find_first(|club| club.starts_with('R')), None);
    /// ```
    pub fn find_first<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|element| predicate(*element))
    }

    /// Returns `true` if every element satisfies `predicate`.
    ///
    /// Stops at the first element that does not. An empty stream returns
    /// `true`.
    pub fn all_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().all(predicate)
    }

    /// Returns `true` if at least one element satisfies `predicate`.
    ///
    /// Stops at the first element that does. An empty stream returns `false`.
    pub fn any_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(predicate)
    }
}

impl<T: Clone> Stream<T> {
    /// Creates a stream holding a copy of `slice`.
    #[must_use]
    pub fn from_slice(slice: &[T]) -> Self {
        Self {
            elements: ReferenceCounter::from(slice),
        }
    }

    /// Returns an owned copy of the elements, in order.
    ///
    /// Mutating the returned vector does not affect the stream.
    #[must_use]
    pub fn to_list(&self) -> Vec<T> {
        self.elements.to_vec()
    }

    /// Returns a stream of the elements satisfying `predicate`, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use minifunk::Stream;
    ///
    /// let fruits = Stream::from(vec!["apple", "pear", "lemon"]);
    /// let long = fruits.filter(|fruit| fruit.len() > 4);
    ///
    /// assert_eq!(long.to_list(), vec!["apple", "lemon"]);
    /// assert_eq!(fruits.count(), 3);
    /// ```
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.iter()
            .filter(|element| predicate(*element))
            .cloned()
            .collect()
    }

    /// Returns a sorted copy of this stream.
    ///
    /// The sort is stable: elements comparing equal keep their relative order.
    /// This stream is left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use minifunk::Stream;
    ///
    /// let clubs = Stream::from(vec!["Real Madrid", "Inter", "Milan", "Juventus"]);
    /// let sorted = clubs.sorted(|left, right| left.cmp(right));
    ///
    /// assert_eq!(sorted.to_list(), vec!["Inter", "Juventus", "Milan", "Real Madrid"]);
    /// assert_eq!(clubs.first(), Some(&"Real Madrid"));
    /// ```
    #[must_use]
    pub fn sorted<C>(&self, comparator: C) -> Self
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        let mut copy = self.to_list();
        copy.sort_by(comparator);
        tracing::trace!(length = copy.len(), "sorted stream");
        Self::from_vec(copy)
    }

    /// Returns a copy of this stream stably sorted by the key `key` extracts.
    #[must_use]
    pub fn sorted_by_key<K, F>(&self, key: F) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        let mut copy = self.to_list();
        copy.sort_by_key(key);
        tracing::trace!(length = copy.len(), "sorted stream by key");
        Self::from_vec(copy)
    }

    /// Returns a stream of at most the first `count` elements.
    ///
    /// When `count` covers the whole stream the storage is shared rather than
    /// copied.
    #[must_use]
    pub fn take(&self, count: usize) -> Self {
        if count >= self.len() {
            return self.clone();
        }
        Self::from_slice(&self.elements[..count])
    }

    /// Returns a stream of at most the first `max_size` elements.
    ///
    /// A `max_size` larger than the stream yields the whole stream. There is
    /// no padding and no error.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::InvalidArgument`] when `max_size` is negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use minifunk::Stream;
    ///
    /// let stream = Stream::from(vec![1, 2, 3]);
    /// assert_eq!(stream.limit(2).unwrap().to_list(), vec![1, 2]);
    /// assert_eq!(stream.limit(4).unwrap().to_list(), vec![1, 2, 3]);
    /// assert!(stream.limit(-1).is_err());
    /// ```
    pub fn limit(&self, max_size: i64) -> Result<Self, StreamError> {
        if max_size < 0 {
            return Err(StreamError::invalid_argument(
                "Stream::limit",
                "max_size",
                "must not be negative",
            ));
        }
        let count = usize::try_from(max_size).unwrap_or(usize::MAX);
        let limited = self.take(count);
        tracing::trace!(
            max_size,
            input = self.len(),
            output = limited.len(),
            "limited stream"
        );
        Ok(limited)
    }
}

impl<T: Clone + PartialEq> Stream<T> {
    /// Returns a stream without duplicate elements, comparing with `PartialEq`
    /// only.
    ///
    /// Use this for element types that are not `Eq + Hash`, such as floats.
    /// The first occurrence of each element is kept. A value that is not equal
    /// to itself (`f64::NAN`) is never a duplicate, so every such value stays.
    ///
    /// # Complexity
    ///
    /// O(N^2) comparisons
    ///
    /// # Examples
    ///
    /// ```rust
    /// use minifunk::Stream;
    ///
    /// let readings = Stream::from(vec![1.5, 2.0, 1.5, 0.5]);
    /// assert_eq!(readings.distinct_by_eq().to_list(), vec![1.5, 2.0, 0.5]);
    /// ```
    #[must_use]
    pub fn distinct_by_eq(&self) -> Self {
        let mut kept: Vec<T> = Vec::with_capacity(self.len());
        for element in self {
            if !kept.contains(element) {
                kept.push(element.clone());
            }
        }
        let distinct = Self::from_vec(kept);
        tracing::trace!(
            input = self.len(),
            output = distinct.len(),
            "distinct stream by equality"
        );
        distinct
    }
}

impl<T: Clone + Eq + Hash> Stream<T> {
    /// Returns a stream without duplicate elements.
    ///
    /// The first occurrence of each element is kept, in its original
    /// position relative to the other kept elements. Elements must be
    /// `Eq + Hash`; [`Stream::distinct_by_eq`] covers types that only
    /// implement `PartialEq`.
    ///
    /// # Complexity
    ///
    /// O(N) expected, using a hash set of references
    ///
    /// # Examples
    ///
    /// ```rust
    /// use minifunk::Stream;
    ///
    /// let clubs = Stream::from(vec!["Inter", "Juventus", "Milan", "Juventus"]);
    /// assert_eq!(clubs.distinct().to_list(), vec!["Inter", "Juventus", "Milan"]);
    /// ```
    #[must_use]
    pub fn distinct(&self) -> Self {
        let mut seen: HashSet<&T> = HashSet::with_capacity(self.len());
        let distinct: Self = self
            .iter()
            .filter(|element| seen.insert(*element))
            .cloned()
            .collect();
        tracing::trace!(
            input = self.len(),
            output = distinct.len(),
            "distinct stream"
        );
        distinct
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for Stream<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            elements: ReferenceCounter::clone(&self.elements),
        }
    }
}

impl<T> Default for Stream<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Stream<T> {
    #[inline]
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T, const N: usize> From<[T; N]> for Stream<T> {
    #[inline]
    fn from(array: [T; N]) -> Self {
        Self::from_vec(Vec::from(array))
    }
}

impl<T> FromIterator<T> for Stream<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: Clone> IntoIterator for Stream<T> {
    type Item = T;
    type IntoIter = StreamIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        StreamIntoIterator::new(self)
    }
}

impl<'a, T> IntoIterator for &'a Stream<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> AsRef<[T]> for Stream<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: PartialEq> PartialEq for Stream<T> {
    fn eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.elements, &other.elements) || self.elements == other.elements
    }
}

impl<T: Eq> Eq for Stream<T> {}

impl<T: Hash> Hash for Stream<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Stream<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the elements as a bracketed, comma-separated list.
///
/// ```rust
/// use minifunk::Stream;
///
/// let clubs = Stream::from(vec!["Real Madrid", "Inter", "Milan", "Juventus"]);
/// assert_eq!(clubs.to_string(), "[Real Madrid, Inter, Milan, Juventus]");
/// ```
impl<T: fmt::Display> fmt::Display for Stream<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Stream<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Stream<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Vec<T> as serde::Deserialize<'de>>::deserialize(deserializer).map(Self::from_vec)
    }
}

// =============================================================================
// Tests
// =============================================================================
