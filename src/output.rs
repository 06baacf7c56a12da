//! Canonical text output for parsed query documents.
//!
//! Two layouts are supported: compact (no whitespace at all) for the text
//! handed to the search engine, and pretty (2-space indentation) for humans.
//! Object keys are always sorted so that the same document always prints the
//! same way regardless of the order its fragments were composed in.
//!
//! # Examples
//!
//! ```
//! use esq_dsl::Value;
//! use esq_dsl::output::{to_json, to_json_pretty};
//!
//! let value = Value::Integer(0);
//!
//! assert_eq!(to_json(&value), "0");
//! assert_eq!(to_json_pretty(&value), "0");
//! ```

use std::collections::HashMap;

use crate::value::Value;

pub struct JsonPrinter {
    pretty: bool,
}

impl JsonPrinter {
    pub fn new(pretty: bool) -> Self {
        JsonPrinter { pretty }
    }

    pub fn print(&self, value: &Value) -> String {
        let mut out = String::new();
        self.print_value(value, 0, &mut out);
        out
    }

    fn print_value(&self, value: &Value, indent: usize, out: &mut String) {
        match value {
            Value::Null => out.push_str("null"),
            Value::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
            Value::Integer(n) => out.push_str(&n.to_string()),
            // f64's Display is the shortest round-trip form: 50.0 prints as 50
            Value::Float(n) => out.push_str(&n.to_string()),
            Value::String(s) => self.print_string(s, out),
            Value::Array(arr) => self.print_array(arr, indent, out),
            Value::Object(obj) => self.print_object(obj, indent, out),
        }
    }

    fn print_array(&self, arr: &[Value], indent: usize, out: &mut String) {
        if arr.is_empty() {
            out.push_str("[]");
            return;
        }

        out.push('[');
        for (i, v) in arr.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            self.newline(indent + 1, out);
            self.print_value(v, indent + 1, out);
        }
        self.newline(indent, out);
        out.push(']');
    }

    fn print_object(&self, obj: &HashMap<String, Value>, indent: usize, out: &mut String) {
        if obj.is_empty() {
            out.push_str("{}");
            return;
        }

        // Sort keys for deterministic output
        let mut entries: Vec<_> = obj.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        out.push('{');
        for (i, (k, v)) in entries.into_iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            self.newline(indent + 1, out);
            self.print_string(k, out);
            out.push_str(if self.pretty { ": " } else { ":" });
            self.print_value(v, indent + 1, out);
        }
        self.newline(indent, out);
        out.push('}');
    }

    fn newline(&self, level: usize, out: &mut String) {
        if self.pretty {
            out.push('\n');
            out.push_str(&"  ".repeat(level));
        }
    }

    fn print_string(&self, s: &str, out: &mut String) {
        out.push('"');
        for c in s.chars() {
            match c {
                '"' => out.push_str("\\\""),
                '\\' => out.push_str("\\\\"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
                c => out.push(c),
            }
        }
        out.push('"');
    }
}

/// Converts a [`Value`] to compact JSON text.
///
/// No whitespace is emitted between tokens; object keys are sorted.
///
/// ```
/// use esq_dsl::Value;
/// use esq_dsl::output::to_json;
/// use std::collections::HashMap;
///
/// let mut obj = HashMap::new();
/// obj.insert("size".to_string(), Value::Integer(0));
/// obj.insert("aggs".to_string(), Value::Object(HashMap::new()));
///
/// assert_eq!(to_json(&Value::Object(obj)), r#"{"aggs":{},"size":0}"#);
/// ```
pub fn to_json(value: &Value) -> String {
    JsonPrinter::new(false).print(value)
}

/// Converts a [`Value`] to indented JSON text.
///
/// Two spaces per level, one member per line, `": "` between key and value.
///
/// ```
/// use esq_dsl::Value;
/// use esq_dsl::output::to_json_pretty;
/// use std::collections::HashMap;
///
/// let mut obj = HashMap::new();
/// obj.insert("size".to_string(), Value::Integer(0));
///
/// assert_eq!(to_json_pretty(&Value::Object(obj)), "{\n  \"size\": 0\n}");
/// ```
pub fn to_json_pretty(value: &Value) -> String {
    JsonPrinter::new(true).print(value)
}
