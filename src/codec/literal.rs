// ============================================================
// Codec — Literal Parser
// ============================================================
// Strict recursive-descent parser for the nested literal form
// network descriptions are written in. It accepts JSON and the
// Python-literal spellings callers commonly send:
//
//   absence   None  | null
//   booleans  True  | False | true | false
//   strings   "double" | 'single'   (backslash escapes allowed)
//   numbers   -3  2.5  .5  1e-3  +4
//   sequences [a, b]  (a, b)  with an optional trailing comma
//   maps      {"key": value}      keys must be strings
//
// Anything else is rejected with CoreError::Parse. There is no
// recovery: a half-understood description never reaches a model.
//
// Reference: Rust Book §6 (Enums and Pattern Matching)
//            serde_json::Value documentation

use serde_json::{Map, Number, Value};

use crate::domain::error::{CoreError, CoreResult};

/// Nesting limit; deeper input is rejected instead of recursing further
const MAX_DEPTH: usize = 128;

/// Parse a complete literal. Trailing non-whitespace is an error.
pub fn parse(text: &str) -> CoreResult<Value> {
    let mut parser = Parser { src: text, pos: 0 };
    let value = parser.value(0)?;
    parser.skip_ws();
    if parser.pos < parser.src.len() {
        return Err(parser.error("unexpected trailing characters"));
    }
    Ok(value)
}

struct Parser<'a> {
    src: &'a str,
    /// Byte offset of the next unread character
    pos: usize,
}

impl<'a> Parser<'a> {
    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        self.skip_ws();
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> CoreResult<()> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(self.error(&format!("expected '{expected}'")))
        }
    }

    fn error(&self, what: &str) -> CoreError {
        CoreError::parse(format!(
            "malformed network description at position {}: {what}",
            self.pos
        ))
    }

    fn value(&mut self, depth: usize) -> CoreResult<Value> {
        if depth > MAX_DEPTH {
            return Err(self.error("nesting too deep"));
        }
        self.skip_ws();
        match self.peek() {
            Some('{') => self.map(depth),
            Some('[') => self.sequence(depth, ']'),
            Some('(') => self.tuple(depth),
            Some('"') | Some('\'') => self.string().map(Value::String),
            Some(c) if c.is_ascii_digit() || matches!(c, '-' | '+' | '.') => self.number(),
            Some(c) if c.is_ascii_alphabetic() => self.keyword(),
            Some(_) => Err(self.error("unexpected character")),
            None => Err(self.error("unexpected end of input")),
        }
    }

    fn map(&mut self, depth: usize) -> CoreResult<Value> {
        self.expect('{')?;
        let mut entries = Map::new();
        loop {
            if self.eat('}') {
                return Ok(Value::Object(entries));
            }
            self.skip_ws();
            let key = match self.peek() {
                Some('"') | Some('\'') => self.string()?,
                _ => return Err(self.error("map keys must be strings")),
            };
            self.expect(':')?;
            let value = self.value(depth + 1)?;
            entries.insert(key, value);
            if !self.eat(',') {
                self.expect('}')?;
                return Ok(Value::Object(entries));
            }
        }
    }

    /// `[ ... ]`; the opening bracket is consumed here.
    fn sequence(&mut self, depth: usize, close: char) -> CoreResult<Value> {
        self.bump();
        self.items(depth, close, Vec::new())
    }

    /// Element loop shared by lists and tuples, continuing after `items`.
    fn items(&mut self, depth: usize, close: char, mut items: Vec<Value>) -> CoreResult<Value> {
        loop {
            if self.eat(close) {
                return Ok(Value::Array(items));
            }
            items.push(self.value(depth + 1)?);
            if !self.eat(',') {
                self.expect(close)?;
                return Ok(Value::Array(items));
            }
        }
    }

    /// `(x)` is just x; `(x,)` and `(x, y)` are sequences.
    fn tuple(&mut self, depth: usize) -> CoreResult<Value> {
        self.bump();
        if self.eat(')') {
            return Ok(Value::Array(Vec::new()));
        }
        let first = self.value(depth + 1)?;
        if self.eat(')') {
            return Ok(first);
        }
        self.expect(',')?;
        self.items(depth, ')', vec![first])
    }

    fn string(&mut self) -> CoreResult<String> {
        let quote = self.bump().ok_or_else(|| self.error("expected string"))?;
        let mut out = String::new();
        loop {
            match self.bump() {
                None => return Err(self.error("unterminated string")),
                Some(c) if c == quote => return Ok(out),
                Some('\\') => out.push(self.escape()?),
                Some(c) => out.push(c),
            }
        }
    }

    fn escape(&mut self) -> CoreResult<char> {
        match self.bump() {
            Some('n') => Ok('\n'),
            Some('t') => Ok('\t'),
            Some('r') => Ok('\r'),
            Some('b') => Ok('\u{0008}'),
            Some('f') => Ok('\u{000C}'),
            Some('0') => Ok('\0'),
            Some('u') => {
                let hex = self
                    .rest()
                    .get(..4)
                    .filter(|h| h.bytes().all(|b| b.is_ascii_hexdigit()))
                    .ok_or_else(|| self.error("invalid \\u escape"))?;
                let code = u32::from_str_radix(hex, 16)
                    .map_err(|_| self.error("invalid \\u escape"))?;
                self.pos += 4;
                char::from_u32(code).ok_or_else(|| self.error("invalid \\u escape"))
            }
            Some(c @ ('\\' | '\'' | '"' | '/')) => Ok(c),
            _ => Err(self.error("invalid escape sequence")),
        }
    }

    fn number(&mut self) -> CoreResult<Value> {
        let start = self.pos;
        if matches!(self.peek(), Some('-' | '+')) {
            self.bump();
        }
        let int_digits = self.digits();
        let mut is_float = false;
        let mut frac_digits = 0;
        if self.peek() == Some('.') {
            is_float = true;
            self.bump();
            frac_digits = self.digits();
        }
        if int_digits == 0 && frac_digits == 0 {
            return Err(self.error("expected a number"));
        }
        if matches!(self.peek(), Some('e' | 'E')) {
            is_float = true;
            self.bump();
            if matches!(self.peek(), Some('-' | '+')) {
                self.bump();
            }
            if self.digits() == 0 {
                return Err(self.error("missing exponent digits"));
            }
        }

        let text = self.src[start..self.pos].trim_start_matches('+');
        if !is_float {
            if let Ok(n) = text.parse::<i64>() {
                return Ok(Value::Number(n.into()));
            }
            if let Ok(n) = text.parse::<u64>() {
                return Ok(Value::Number(n.into()));
            }
        }
        text.parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| self.error("number out of range"))
    }

    fn digits(&mut self) -> usize {
        let mut count = 0;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.bump();
            count += 1;
        }
        count
    }

    fn keyword(&mut self) -> CoreResult<Value> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '_') {
            self.bump();
        }
        match &self.src[start..self.pos] {
            "None" | "null"  => Ok(Value::Null),
            "True" | "true"  => Ok(Value::Bool(true)),
            "False" | "false" => Ok(Value::Bool(false)),
            other => {
                let msg = format!("unknown name '{other}'");
                self.pos = start;
                Err(self.error(&msg))
            }
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_json() {
        let v = parse(r#"{"a": [1, 2.5, "x"], "b": {"c": null, "d": true}}"#).unwrap();
        assert_eq!(v, json!({"a": [1, 2.5, "x"], "b": {"c": null, "d": true}}));
    }

    #[test]
    fn test_parses_python_literals() {
        let v = parse("{'w': None, 'ok': True, 'off': False, 't': (1, 2,)}").unwrap();
        assert_eq!(v, json!({"w": null, "ok": true, "off": false, "t": [1, 2]}));
    }

    #[test]
    fn test_integers_and_floats_stay_distinct() {
        let v = parse("[2, 2.0, -3, 1e2, .5]").unwrap();
        assert!(v[0].is_i64());
        assert!(v[1].is_f64());
        assert_eq!(v[2], json!(-3));
        assert_eq!(v[3], json!(100.0));
        assert_eq!(v[4], json!(0.5));
    }

    #[test]
    fn test_parenthesised_value_is_not_a_tuple() {
        assert_eq!(parse("(4)").unwrap(), json!(4));
        assert_eq!(parse("(4,)").unwrap(), json!([4]));
        assert_eq!(parse("()").unwrap(), json!([]));
    }

    #[test]
    fn test_keeps_key_order() {
        let v = parse(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let keys: Vec<&String> = v.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(parse(r#""a\"bA""#).unwrap(), json!("a\"bA"));
        assert_eq!(parse(r"'it\'s'").unwrap(), json!("it's"));
    }

    #[test]
    fn test_rejects_malformed_input() {
        for bad in ["", "{", "[1, 2", "{'a' 1}", "{1: 2}", "[1,,2]", "foo", "1 2", "'open", "-", "1e"] {
            let err = parse(bad).unwrap_err();
            assert!(matches!(err, CoreError::Parse(_)), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_nested_tuples_parse_in_linear_time() {
        let text = "(".repeat(40) + "1" + &",)".repeat(40);
        let started = std::time::Instant::now();
        let mut v = parse(&text).unwrap();
        assert!(started.elapsed() < std::time::Duration::from_secs(1));
        for _ in 0..40 {
            v = v.as_array().unwrap()[0].clone();
        }
        assert_eq!(v, json!(1));
    }

    #[test]
    fn test_tuple_needs_commas_between_items() {
        assert!(parse("(1 2)").is_err());
        assert_eq!(parse("(1, (2, 3))").unwrap(), json!([1, [2, 3]]));
    }

    #[test]
    fn test_unicode_escape_takes_only_hex_digits() {
        assert_eq!(parse(r#""\u0041""#).unwrap(), json!("A"));
        for bad in [r#""\u+041""#, r#""\u-041""#, r#""\u00g1""#, r#""\u41""#] {
            assert!(matches!(parse(bad), Err(CoreError::Parse(_))), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_rejects_runaway_nesting() {
        let deep = "[".repeat(MAX_DEPTH + 10) + &"]".repeat(MAX_DEPTH + 10);
        assert!(parse(&deep).is_err());
    }
}
