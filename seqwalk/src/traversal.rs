/// seqwalk v1: Traversal
///
/// One canonical primitive, three thin callers.
///
/// `Cursor` is the only code that walks a sequence. It keeps an explicit
/// counter starting at 0, yields the element at the counter, increments
/// by 1, and stops once the counter reaches the length. The three
/// traversal modes differ only in what they expose to the visit action.

use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::sequence::Sequence;
use crate::visit::VisitAction;

// ---------------------------------------------------------------------------
// Canonical primitive
// ---------------------------------------------------------------------------

/// Restartable, finite, forward-only producer of `(position, &element)`.
#[derive(Debug)]
pub struct Cursor<'a, T> {
    elements: &'a [T],
    counter: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub fn new(sequence: &'a Sequence<T>) -> Self {
        Self {
            elements: sequence.as_slice(),
            counter: 0,
        }
    }

    /// Rewind to position 0. The next pass yields the same elements again.
    pub fn restart(&mut self) {
        self.counter = 0;
    }

    /// Position of the next element to be produced.
    pub fn position(&self) -> usize {
        self.counter
    }

    pub fn remaining(&self) -> usize {
        self.elements.len() - self.counter
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements,
            counter: self.counter,
        }
    }
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.counter < self.elements.len() {
            let position = self.counter;
            self.counter += 1;
            Some((position, &self.elements[position]))
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for Cursor<'_, T> {}

impl<T> FusedIterator for Cursor<'_, T> {}

/// Element-only view over a `Cursor`. Position is not observable.
#[derive(Debug)]
pub struct Elements<'a, T> {
    cursor: Cursor<'a, T>,
}

impl<T> Clone for Elements<'_, T> {
    fn clone(&self) -> Self {
        Self {
            cursor: self.cursor.clone(),
        }
    }
}

impl<'a, T> Iterator for Elements<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.cursor.next().map(|(_, element)| element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.size_hint()
    }
}

impl<T> ExactSizeIterator for Elements<'_, T> {}

impl<T> FusedIterator for Elements<'_, T> {}

impl<T> Sequence<T> {
    /// Canonical traversal primitive over this sequence.
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self)
    }

    /// Element-enumerated traversal as an iterator.
    pub fn iter(&self) -> Elements<'_, T> {
        Elements {
            cursor: self.cursor(),
        }
    }

    /// Callback-enumerated traversal: the sequence drives iteration and
    /// calls `action` once per element, in ascending order.
    pub fn for_each<F>(&self, mut action: F)
    where
        F: FnMut(&T),
    {
        for (_, element) in self.cursor() {
            action(element);
        }
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = Elements<'a, T>;

    fn into_iter(self) -> Elements<'a, T> {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// Traversal modes
// ---------------------------------------------------------------------------

/// The three equivalent ways to walk a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalMode {
    /// Explicit counter; the action sees each position.
    Indexed,
    /// Direct element enumeration; no position.
    Elements,
    /// The sequence invokes the action itself.
    Callback,
}

impl TraversalMode {
    /// All modes, in canonical order.
    pub const ALL: [TraversalMode; 3] = [
        TraversalMode::Indexed,
        TraversalMode::Elements,
        TraversalMode::Callback,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TraversalMode::Indexed => "indexed",
            TraversalMode::Elements => "elements",
            TraversalMode::Callback => "callback",
        }
    }
}

impl fmt::Display for TraversalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognised traversal mode name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown traversal mode {0:?} (expected indexed, elements or callback)")]
pub struct ParseModeError(pub String);

impl FromStr for TraversalMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TraversalMode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseModeError(s.to_string()))
    }
}

/// Index-counted traversal. The action receives `Some(position)` for
/// positions `0, 1, …, len-1` in that order.
pub fn visit_indexed<T, A>(sequence: &Sequence<T>, action: &mut A)
where
    A: VisitAction<T> + ?Sized,
{
    for (position, element) in sequence.cursor() {
        action.visit(Some(position), element);
    }
}

/// Element-enumerated traversal. Same order as `visit_indexed`, position hidden.
pub fn visit_elements<T, A>(sequence: &Sequence<T>, action: &mut A)
where
    A: VisitAction<T> + ?Sized,
{
    for element in sequence {
        action.visit(None, element);
    }
}

/// Callback-enumerated traversal, driven by `Sequence::for_each`.
pub fn visit_callback<T, A>(sequence: &Sequence<T>, action: &mut A)
where
    A: VisitAction<T> + ?Sized,
{
    sequence.for_each(|element| action.visit(None, element));
}

/// Run one traversal in the given mode. Never fails.
pub fn traverse<T, A>(sequence: &Sequence<T>, mode: TraversalMode, action: &mut A)
where
    A: VisitAction<T> + ?Sized,
{
    tracing::debug!(mode = mode.name(), len = sequence.len(), "traversal");
    match mode {
        TraversalMode::Indexed => visit_indexed(sequence, action),
        TraversalMode::Elements => visit_elements(sequence, action),
        TraversalMode::Callback => visit_callback(sequence, action),
    }
}
