/// seqwalk v1: Canonical Hashing
///
/// Deterministic canonical serialization + SHA-256 hashing.
/// Produces byte-identical output across platforms.
///
/// Rules:
///   - traversal_version is always the first field
///   - elements / visits keep sequence order, never sorted
///   - positions are not part of a visit log hash, so every
///     traversal mode hashes the same for the same visit order
///   - UTF-8 JSON, no whitespace
///   - element types must be `Eq`: floats are excluded because JSON
///     maps NaN and both infinities to the same `null`

use serde::Serialize;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::sequence::Sequence;
use crate::visit::VisitLog;
use crate::TRAVERSAL_VERSION;

/// Canonical serialization of a Sequence to UTF-8 JSON bytes.
///
/// `{"traversal_version":1,"elements":[...]}`
pub fn canonical_serialize<T: Serialize + Eq>(sequence: &Sequence<T>) -> Vec<u8> {
    let elements = sequence.as_slice().iter().map(to_value).collect();
    encode("elements", elements)
}

/// SHA-256 of the canonical serialization. Lowercase hex string.
pub fn canonical_hash<T: Serialize + Eq>(sequence: &Sequence<T>) -> String {
    hex_digest(&canonical_serialize(sequence))
}

/// Canonical serialization of the values in a visit log, in visit order.
///
/// `{"traversal_version":1,"visits":[...]}`
pub fn visit_log_serialize<T: Serialize + Eq>(log: &VisitLog<T>) -> Vec<u8> {
    let visits = log.values().map(to_value).collect();
    encode("visits", visits)
}

/// SHA-256 of the visit log serialization. Lowercase hex string.
pub fn visit_log_hash<T: Serialize + Eq>(log: &VisitLog<T>) -> String {
    hex_digest(&visit_log_serialize(log))
}

fn to_value<T: Serialize>(element: &T) -> Value {
    serde_json::to_value(element).expect("canonical_serialize: JSON serialization failed")
}

fn encode(key: &str, items: Vec<Value>) -> Vec<u8> {
    let mut root = Map::new();
    root.insert(
        "traversal_version".to_string(),
        Value::Number(TRAVERSAL_VERSION.into()),
    );
    root.insert(key.to_string(), Value::Array(items));
    Value::Object(root).to_string().into_bytes()
}

fn hex_digest(bytes: &[u8]) -> String {
    Sha256::digest(bytes)
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visit::VisitAction;

    #[test]
    fn canonical_form_is_compact_and_ordered() {
        let seq = Sequence::from([1i64, 2, 3, 4, 5]);
        let json = String::from_utf8(canonical_serialize(&seq)).unwrap();
        assert_eq!(json, r#"{"traversal_version":1,"elements":[1,2,3,4,5]}"#);
    }

    #[test]
    fn visit_log_ignores_positions() {
        let mut indexed: VisitLog<i64> = VisitLog::new();
        let mut plain: VisitLog<i64> = VisitLog::new();
        for (i, v) in [7i64, 8].iter().enumerate() {
            indexed.visit(Some(i), v);
            plain.visit(None, v);
        }
        assert_eq!(visit_log_hash(&indexed), visit_log_hash(&plain));
        assert_eq!(
            String::from_utf8(visit_log_serialize(&plain)).unwrap(),
            r#"{"traversal_version":1,"visits":[7,8]}"#
        );
    }

    #[test]
    fn distinct_float_bit_patterns_hash_differently() {
        let nan = Sequence::from([f64::NAN.to_bits()]);
        let inf = Sequence::from([f64::INFINITY.to_bits()]);
        let neg_inf = Sequence::from([f64::NEG_INFINITY.to_bits()]);
        assert_ne!(canonical_hash(&nan), canonical_hash(&inf));
        assert_ne!(canonical_hash(&inf), canonical_hash(&neg_inf));
    }

    #[test]
    #[should_panic(expected = "JSON serialization failed")]
    fn unserializable_element_panics() {
        // JSON object keys must be strings.
        let mut element = std::collections::BTreeMap::new();
        element.insert(vec![1u8, 2], 0i64);
        canonical_serialize(&Sequence::from([element]));
    }

    #[test]
    fn order_changes_hash() {
        let a = Sequence::from([1i64, 2]);
        let b = Sequence::from([2i64, 1]);
        assert_ne!(canonical_hash(&a), canonical_hash(&b));
        assert_eq!(canonical_hash(&a).len(), 64);
    }
}
