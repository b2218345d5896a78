#![forbid(unsafe_code)]

//! seqwalk: sequence traversal kernel.
//!
//! Walks an ordered, fixed-length sequence three equivalent ways
//! (index-counted, element-enumerated, callback-enumerated), all built
//! on one canonical `Cursor`, and checks that they agree.

/// Traversal v1. Part of every canonical serialization.
pub const TRAVERSAL_VERSION: u32 = 1;

pub mod sequence;
pub mod visit;
pub mod traversal;
pub mod hashing;
pub mod equivalence;
pub mod error;

pub use equivalence::{try_validate_equivalence, validate_equivalence};
pub use error::EquivalenceError;
pub use sequence::Sequence;
pub use traversal::{traverse, Cursor, Elements, TraversalMode};
pub use visit::{Visit, VisitAction, VisitLog};
