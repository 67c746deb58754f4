// ============================================================
// Layer 3 — Architecture Specification
// ============================================================
// The network description is owned by the Trainable Model.
// This layer never looks inside it: it only has to carry the
// tree from text to model and back without changing any value.
//
// serde_json::Value is already the tagged variant we need:
//
//   Null | Bool | Number | String | Array | Object
//
// Number keeps integers and floats apart (2 stays 2, 2.0
// stays 2.0), and the `preserve_order` feature keeps object
// keys in the order they were written, so the compact text
// we send back lists keys the way the caller sent them.
//
// Reference: serde_json::Value documentation

use serde_json::Value;

/// An opaque, collaborator-defined nested structure.
pub type ArchitectureSpec = Value;

/// Read a numeric sequence out of a spec value.
///
/// Accepts a sequence of numbers or a single bare number
/// (treated as a one-element vector). Returns None otherwise.
pub fn as_number_vec(value: &ArchitectureSpec) -> Option<Vec<f64>> {
    match value {
        Value::Number(n) => n.as_f64().map(|x| vec![x]),
        Value::Array(items) => items.iter().map(Value::as_f64).collect(),
        _ => None,
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_number_vec_from_array() {
        assert_eq!(as_number_vec(&json!([1, 2.5])), Some(vec![1.0, 2.5]));
    }

    #[test]
    fn test_number_vec_from_scalar() {
        assert_eq!(as_number_vec(&json!(3)), Some(vec![3.0]));
    }

    #[test]
    fn test_number_vec_rejects_mixed_values() {
        assert_eq!(as_number_vec(&json!([1, "x"])), None);
        assert_eq!(as_number_vec(&json!({"a": 1})), None);
    }
}
