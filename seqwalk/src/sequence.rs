/// seqwalk v1: Sequence
///
/// Pure data. An ordered, fixed-length, homogeneous collection.
/// Storage is a boxed slice: once built, the length cannot change,
/// and every traversal borrows it immutably.

use std::ops::Index;

use serde::{Deserialize, Serialize};

/// An ordered, fixed-length collection indexable by zero-based position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence<T> {
    elements: Box<[T]>,
}

impl<T> Sequence<T> {
    /// Wrap an already-built list of values.
    pub fn new(elements: Vec<T>) -> Self {
        Self {
            elements: elements.into_boxed_slice(),
        }
    }

    /// Number of elements. Fixed for the lifetime of the sequence.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Element at `position`, or `None` when `position >= len()`.
    pub fn get(&self, position: usize) -> Option<&T> {
        self.elements.get(position)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Give back the owned storage.
    pub fn into_vec(self) -> Vec<T> {
        self.elements.into_vec()
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::new(elements)
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(elements: &[T]) -> Self {
        Self::new(elements.to_vec())
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(elements: [T; N]) -> Self {
        Self::new(Vec::from(elements))
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> Index<usize> for Sequence<T> {
    type Output = T;

    fn index(&self, position: usize) -> &T {
        &self.elements[position]
    }
}
