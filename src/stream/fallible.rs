//! Operations whose capabilities can fail.
//!
//! Each `try_*` operation stops at the first `Err` returned by the
//! capability and hands that error back unchanged. No partial result is
//! produced, and since streams are immutable the receiver is never left
//! half-updated.

use super::Stream;

impl<T> Stream<T> {
    /// Performs `action` on every element until it fails.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `action`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use minifunk::Stream;
    ///
    /// let mut seen = Vec::new();
    /// let result = Stream::from(vec![1, 2, 3]).try_for_each(|value| {
    ///     if *value == 2 {
    ///         return Err("two");
    ///     }
    ///     seen.push(*value);
    ///     Ok(())
    /// });
    ///
    /// assert_eq!(result, Err("two"));
    /// assert_eq!(seen, vec![1]);
    /// ```
    pub fn try_for_each<E, F>(&self, action: F) -> Result<(), E>
    where
        F: FnMut(&T) -> Result<(), E>,
    {
        self.iter().try_for_each(action)
    }

    /// Maps every element with a fallible `mapper`.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `mapper`.
    pub fn try_map<R, E, F>(&self, mapper: F) -> Result<Stream<R>, E>
    where
        F: FnMut(&T) -> Result<R, E>,
    {
        self.iter().map(mapper).collect()
    }

    /// Flattens the sequences produced by a fallible `mapper`.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `mapper`.
    pub fn try_flat_map<R, I, E, F>(&self, mut mapper: F) -> Result<Stream<R>, E>
    where
        F: FnMut(&T) -> Result<I, E>,
        I: IntoIterator<Item = R>,
    {
        let mut flattened = Vec::with_capacity(self.len());
        for element in self {
            flattened.extend(mapper(element)?);
        }
        Ok(Stream::from_vec(flattened))
    }

    /// Folds the elements left to right with a fallible `combinator`.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `combinator`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use minifunk::Stream;
    ///
    /// let stream = Stream::from(vec![i32::MAX, 1]);
    /// let sum = stream.try_reduce(0_i32, |accumulator, value| {
    ///     accumulator.checked_add(*value).ok_or("overflow")
    /// });
    /// assert_eq!(sum, Err("overflow"));
    /// ```
    pub fn try_reduce<R, E, F>(&self, initial: R, combinator: F) -> Result<R, E>
    where
        F: FnMut(R, &T) -> Result<R, E>,
    {
        self.iter().try_fold(initial, combinator)
    }

    /// Returns the first element satisfying a fallible `predicate`.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `predicate`.
    pub fn try_find_first<E, P>(&self, mut predicate: P) -> Result<Option<&T>, E>
    where
        P: FnMut(&T) -> Result<bool, E>,
    {
        for element in self {
            if predicate(element)? {
                return Ok(Some(element));
            }
        }
        Ok(None)
    }

    /// Returns `true` if every element satisfies a fallible `predicate`.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `predicate`.
    pub fn try_all_match<E, P>(&self, mut predicate: P) -> Result<bool, E>
    where
        P: FnMut(&T) -> Result<bool, E>,
    {
        for element in self {
            if !predicate(element)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Returns `true` if some element satisfies a fallible `predicate`.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `predicate`.
    pub fn try_any_match<E, P>(&self, mut predicate: P) -> Result<bool, E>
    where
        P: FnMut(&T) -> Result<bool, E>,
    {
        for element in self {
            if predicate(element)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl<T: Clone> Stream<T> {
    /// Keeps the elements satisfying a fallible `predicate`.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `predicate`.
    pub fn try_filter<E, P>(&self, mut predicate: P) -> Result<Self, E>
    where
        P: FnMut(&T) -> Result<bool, E>,
    {
        let mut kept = Vec::new();
        for element in self {
            if predicate(element)? {
                kept.push(element.clone());
            }
        }
        Ok(Self::from_vec(kept))
    }
}
