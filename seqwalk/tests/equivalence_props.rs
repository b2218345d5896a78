//! Property tests for the traversal contract over arbitrary sequences.

use proptest::prelude::*;

use seqwalk::equivalence::record;
use seqwalk::hashing::canonical_hash;
use seqwalk::{try_validate_equivalence, Sequence, TraversalMode};

proptest! {
    #[test]
    fn all_modes_visit_the_same_values(values in prop::collection::vec(any::<i64>(), 0..64)) {
        let seq = Sequence::new(values.clone());
        for mode in TraversalMode::ALL {
            prop_assert_eq!(record(&seq, mode).to_values(), values.clone());
        }
    }

    #[test]
    fn equivalence_checks_pass(values in prop::collection::vec(-1000i64..1000, 0..64)) {
        let seq = Sequence::new(values);
        prop_assert!(try_validate_equivalence(&seq).is_ok());
    }

    #[test]
    fn traversal_leaves_sequence_unchanged(values in prop::collection::vec(any::<i64>(), 0..32)) {
        let seq = Sequence::new(values.clone());
        let before = canonical_hash(&seq);
        for mode in TraversalMode::ALL {
            let _ = record(&seq, mode);
        }
        prop_assert_eq!(canonical_hash(&seq), before);
        prop_assert_eq!(seq.as_slice(), values.as_slice());
    }

    #[test]
    fn repeated_traversal_is_identical(
        values in prop::collection::vec(any::<i64>(), 0..32),
        mode_index in 0usize..3,
    ) {
        let seq = Sequence::new(values);
        let mode = TraversalMode::ALL[mode_index];
        prop_assert_eq!(record(&seq, mode), record(&seq, mode));
    }
}
