/// seqwalk v1: Visit Actions
///
/// A visit action is the only side effect a traversal is allowed to
/// have. It receives each element once, in ascending position order.
/// Its return value is never consumed by the traversal.

use serde::Serialize;

/// Side-effecting operation applied once per visited element.
///
/// `position` is `Some(i)` only for index-counted traversal; the
/// element-enumerated and callback-enumerated modes do not expose it.
pub trait VisitAction<T> {
    fn visit(&mut self, position: Option<usize>, element: &T);
}

/// Any `FnMut(&T)` closure is a visit action that ignores position.
impl<T, F> VisitAction<T> for F
where
    F: FnMut(&T),
{
    fn visit(&mut self, _position: Option<usize>, element: &T) {
        self(element)
    }
}

/// A single recorded visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Visit<T> {
    pub position: Option<usize>,
    pub value: T,
}

/// Ordered record of every visit made during one traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisitLog<T> {
    visits: Vec<Visit<T>>,
}

impl<T> VisitLog<T> {
    pub fn new() -> Self {
        Self { visits: Vec::new() }
    }

    /// Number of visit action invocations recorded.
    pub fn len(&self) -> usize {
        self.visits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    pub fn visits(&self) -> &[Visit<T>] {
        &self.visits
    }

    /// Visited values in visitation order, positions dropped.
    pub fn values(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        self.visits.iter().map(|v| &v.value)
    }

    /// Positions reported to the action, in visitation order.
    pub fn positions(&self) -> impl ExactSizeIterator<Item = Option<usize>> + '_ {
        self.visits.iter().map(|v| v.position)
    }
}

impl<T: Clone> VisitLog<T> {
    pub fn to_values(&self) -> Vec<T> {
        self.values().cloned().collect()
    }
}

impl<T> Default for VisitLog<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> VisitAction<T> for VisitLog<T> {
    fn visit(&mut self, position: Option<usize>, element: &T) {
        self.visits.push(Visit {
            position,
            value: element.clone(),
        });
    }
}
