// ============================================================
// Codec — Compact Encoder
// ============================================================
// Renders an architecture as tab-indented JSON, then folds the
// deep levels back onto their parent line:
//
//   {                               {
//   	"layers": [                   	"layers": [
//   		{                              		{
//   			"neurons": [        →         			"neurons": [{	"bias": 0.5,"weights": [	1,	2]}
//   				{                          			]
//   					"bias": 0.5,           		}
//   					...                    	]
//
// Only whitespace between tokens is removed, so the output is
// still valid JSON and decodes back to the same tree.
//
// Reference: serde_json::ser::PrettyFormatter documentation

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::domain::architecture::ArchitectureSpec;

/// Indentation patterns and their folded replacements, applied in order.
const FOLDS: [(&str, &str); 5] = [
    ("\t\t\t{\n\t\t\t\t", "\t\t\t{"),
    ("\n\t\t\t}",         "}"),
    ("\n\t\t\t\t\t",      ""),
    ("\n\t\t\t\t}",       "}"),
    ("\n\t\t\t\t",        ""),
];

/// Tab-indented pretty JSON, keys in insertion order.
pub fn pretty(spec: &ArchitectureSpec) -> String {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    if spec.serialize(&mut ser).is_err() {
        // Writing a Value into memory cannot fail; keep the call total anyway
        return spec.to_string();
    }
    String::from_utf8(buf).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}

/// Pretty-print then fold deep indentation onto fewer lines.
pub fn compact(spec: &ArchitectureSpec) -> String {
    FOLDS
        .iter()
        .fold(pretty(spec), |acc, (pattern, replacement)| acc.replace(pattern, replacement))
}
