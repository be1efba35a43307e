//! Owning iterator over the elements of a [`Stream`].

use std::iter::FusedIterator;

use super::{ReferenceCounter, Stream};

/// An owning iterator over the elements of a [`Stream`].
///
/// The storage may be shared with other streams, so elements are cloned as
/// they are yielded.
pub struct StreamIntoIterator<T> {
    /// Shared storage of the consumed stream
    elements: ReferenceCounter<[T]>,
    /// Index of the next element yielded from the front
    front: usize,
    /// One past the index of the next element yielded from the back
    back: usize,
}

impl<T> StreamIntoIterator<T> {
    pub(super) fn new(stream: Stream<T>) -> Self {
        let back = stream.elements.len();
        Self {
            elements: stream.elements,
            front: 0,
            back,
        }
    }
}

impl<T: Clone> Iterator for StreamIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let element = self.elements[self.front].clone();
        self.front += 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T: Clone> DoubleEndedIterator for StreamIntoIterator<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.elements[self.back].clone())
    }
}

impl<T: Clone> ExactSizeIterator for StreamIntoIterator<T> {}

impl<T: Clone> FusedIterator for StreamIntoIterator<T> {}
