use std::collections::HashMap;

/// A node of a parsed query document.
///
/// Normalization parses assembled fragment text into this tree and prints it
/// back out. Numbers with an integral value are held as [`Value::Integer`],
/// so `50`, `50.0` and `5e1` all compare equal once parsed.
///
/// # Examples
///
/// ```
/// use esq_dsl::Value;
/// use std::collections::HashMap;
///
/// let mut sum = HashMap::new();
/// sum.insert("field".to_string(), Value::String("bytes".to_string()));
///
/// let mut agg = HashMap::new();
/// agg.insert("sum".to_string(), Value::Object(sum));
///
/// let total = Value::Object(agg);
/// assert_eq!(total.type_name(), "object");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// JSON null
    Null,

    /// JSON boolean (true/false)
    Boolean(bool),

    /// Floating-point number
    Float(f64),

    /// Integer number (preserved separately from floats)
    Integer(i64),

    /// UTF-8 string
    String(String),

    /// Array of values
    Array(Vec<Value>),

    /// Object with string keys. Printing sorts the keys.
    Object(HashMap<String, Value>),
}

impl Value {
    /// Human-readable name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// Looks up `key` when this value is an object.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(obj) => obj.get(key),
            _ => None,
        }
    }

    /// Get as array slice
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Get as object map
    pub fn as_object(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

