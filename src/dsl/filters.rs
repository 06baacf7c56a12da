use crate::fragment::{Fragment, quote};

/// Field equality: `{"term": {field: value}}`.
pub fn term(field: &str, value: &str) -> Fragment {
    format!(
        r#"{{
    "term": {{
        {}: {}
    }}
}}"#,
        quote(field),
        quote(value)
    )
    .into()
}

/// Inclusive range on `field`.
///
/// Bounds are emitted as string literals; the engine coerces them to the
/// field's type, so `"10"`, `"now-1h"` and `"2024-01-01"` all work.
pub fn range(field: &str, gte: &str, lte: &str) -> Fragment {
    format!(
        r#"{{
    "range": {{
        {}: {{
            "gte": {},
            "lte": {}
        }}
    }}
}}"#,
        quote(field),
        quote(gte),
        quote(lte)
    )
    .into()
}

/// Range on the conventional `timestamp` field.
pub fn timestamp_range(gte: &str, lte: &str) -> Fragment {
    range("timestamp", gte, lte)
}
