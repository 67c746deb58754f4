// ============================================================
// Codec — Network Description Text <-> ArchitectureSpec
// ============================================================
// decode: text → cleaned text → parsed literal tree
//
//   raw text
//       │
//       ▼
//   Cleaner        → drops tab/newline escapes, `null` → `None`
//       │
//       ▼
//   literal::parse → strict nested-literal parser
//
// encode: tree → tab-indented JSON → folded compact text
//
// decode(encode(x)) == x for every tree whose strings hold no
// tab or newline characters. The text itself is not preserved:
// whitespace and quoting are normalised on the way through.

/// Ordered escape/placeholder cleaning
pub mod cleaner;

/// Strict nested-literal parser
pub mod literal;

/// Compact JSON rendering
pub mod compact;

use crate::domain::architecture::ArchitectureSpec;
use crate::domain::error::CoreResult;

use cleaner::Cleaner;

/// Parse a loosely escaped network description.
pub fn decode(text: &str) -> CoreResult<ArchitectureSpec> {
    let cleaned = Cleaner::new().clean(text);
    literal::parse(&cleaned)
}

/// Render a network description in compact form.
pub fn encode(spec: &ArchitectureSpec) -> String {
    compact::compact(spec)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::CoreError;
    use proptest::prelude::*;
    use serde_json::{json, Value};

    #[test]
    fn test_decode_escaped_page_text() {
        let text = "{\\n\\t\"inputs\": 2,\\n\\t\"weights\": null\\n}";
        assert_eq!(decode(text).unwrap(), json!({"inputs": 2, "weights": null}));
    }

    #[test]
    fn test_decode_single_quoted_text() {
        let text = "{'inputs': 2, 'layers': [{'neurons': [{'bias': null}]}]}";
        assert_eq!(
            decode(text).unwrap(),
            json!({"inputs": 2, "layers": [{"neurons": [{"bias": null}]}]})
        );
    }

    #[test]
    fn test_decode_failure_is_a_parse_error() {
        assert!(matches!(decode("{\"a\": }"), Err(CoreError::Parse(_))));
    }

    #[test]
    fn test_encoded_text_decodes_to_same_tree() {
        let spec = json!({
            "inputs": 2,
            "learningRate": 0.3,
            "layers": [
                {"neurons": [{"bias": 0.1, "weights": [0.5, -0.25]}, {"bias": null, "weights": null}]},
                {"neurons": [{"bias": -1.0, "weights": [1, 2]}]}
            ],
            "tags": ["a b", "null"],
            "trained": false
        });
        assert_eq!(decode(&encode(&spec)).unwrap(), spec);
    }

    fn arb_spec() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| json!(n)),
            (-1.0e6f64..1.0e6).prop_map(|f| json!(f)),
            "[a-zA-Z0-9 _]{0,8}".prop_map(Value::String),
        ];
        leaf.prop_recursive(4, 48, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
                prop::collection::vec(("[a-z]{1,6}", inner), 0..6)
                    .prop_map(|entries| Value::Object(entries.into_iter().collect())),
            ]
        })
    }

    proptest! {
        #[test]
        fn prop_structural_round_trip(spec in arb_spec()) {
            prop_assert_eq!(decode(&encode(&spec)).unwrap(), spec);
        }

        #[test]
        fn prop_encode_is_deterministic(spec in arb_spec()) {
            prop_assert_eq!(encode(&spec), encode(&spec));
        }
    }
}
