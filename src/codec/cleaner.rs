// ============================================================
// Codec — Escape Cleaner
// ============================================================
// Network descriptions arrive with whatever escaping the page
// or shell happened to apply. The same tab or newline can show
// up as a real control character or as a two-character escape
// ("\t" typed out). None of them carry meaning, so they are
// all removed before parsing.
//
// Cleaning steps (applied in order):
//   1. Remove escaped tabs      "\\t"
//   2. Remove real tabs         '\t'
//   3. Remove escaped newlines  "\\n"
//   4. Remove real newlines     '\n'
//   5. Replace the bare token `null` with `None`
//
// Step 5 only touches tokens outside quoted strings: a string
// value such as "nullable" is left alone.
//
// Reference: Rust Book §8 (Strings in Rust)

/// Escape sequences stripped from incoming text, in order.
const STRIPPED: [&str; 4] = ["\\t", "\t", "\\n", "\n"];

/// Placeholder the caller uses for "no value"
const NULL_PLACEHOLDER: &str = "null";

/// The absence marker understood by the literal parser
const ABSENCE_MARKER: &str = "None";

pub struct Cleaner;

impl Cleaner {
    pub fn new() -> Self {
        Self
    }

    /// Run the full ordered cleaning pass.
    pub fn clean(&self, text: &str) -> String {
        let stripped = STRIPPED
            .iter()
            .fold(text.to_string(), |acc, pat| acc.replace(pat, ""));
        substitute_placeholder(&stripped)
    }
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::new()
    }
}

/// Replace bare `null` words with `None`, skipping quoted strings.
fn substitute_placeholder(text: &str) -> String {
    let mut out   = String::with_capacity(text.len());
    let mut word  = String::new();
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for c in text.chars() {
        if let Some(q) = quote {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }

        if c.is_ascii_alphanumeric() || c == '_' {
            word.push(c);
            continue;
        }

        flush_word(&mut out, &mut word);
        if c == '"' || c == '\'' {
            quote = Some(c);
        }
        out.push(c);
    }

    flush_word(&mut out, &mut word);
    out
}

fn flush_word(out: &mut String, word: &mut String) {
    if word == NULL_PLACEHOLDER {
        out.push_str(ABSENCE_MARKER);
    } else {
        out.push_str(word);
    }
    word.clear();
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_real_and_escaped_whitespace() {
        let c = Cleaner::new();
        assert_eq!(c.clean("{\n\t\"a\":\\t1,\\n\"b\": 2}"), "{\"a\":1,\"b\": 2}");
    }

    #[test]
    fn test_replaces_bare_null() {
        let c = Cleaner::new();
        assert_eq!(c.clean("{\"w\": null}"), "{\"w\": None}");
        assert_eq!(c.clean("[null,null]"), "[None,None]");
    }

    #[test]
    fn test_leaves_null_inside_strings() {
        let c = Cleaner::new();
        assert_eq!(c.clean("{'null': \"nullable\"}"), "{'null': \"nullable\"}");
    }

    #[test]
    fn test_does_not_touch_longer_words() {
        let c = Cleaner::new();
        assert_eq!(c.clean("nullx"), "nullx");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(Cleaner::new().clean(""), "");
    }
}
