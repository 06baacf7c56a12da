use esq_dsl::convert::{from_json, to_json_value};
use esq_dsl::{NormalizeError, Value, compact, parse, pretty, try_compact, try_pretty};
use proptest::prelude::*;

const SAMPLES: &[&str] = &[
    r#"{"size": 0}"#,
    r#"{ "b": 1, "a": [1, 2.5, "x", null, true] }"#,
    r#"{"aggs": {"total": {"sum": {"field": "bytes"}}}, "size": 0}"#,
    r#"[{"a": {}}, [], "esc\"aped\n", -3, 1e3]"#,
    r#""just a string""#,
];

#[test]
fn test_compact_sorts_keys() {
    assert_eq!(compact(r#"{"b": 1, "a": 2}"#), r#"{"a":2,"b":1}"#);
}

#[test]
fn test_compact_nested() {
    let text = r#"{
        "size": 0,
        "aggs": { "total": { "sum": { "field": "bytes" } } }
    }"#;
    assert_eq!(compact(text), r#"{"aggs":{"total":{"sum":{"field":"bytes"}}},"size":0}"#);
}

#[test]
fn test_compact_whole_floats() {
    assert_eq!(compact("[50.00, 95.50, 99.00]"), "[50,95.5,99]");
}

#[test]
fn test_pretty_layout() {
    let expected = "{\n  \"a\": [\n    1,\n    2\n  ],\n  \"b\": {},\n  \"c\": []\n}";
    assert_eq!(pretty(r#"{"c": [], "b": {}, "a": [1, 2]}"#), expected);
}

#[test]
fn test_duplicate_keys_last_wins() {
    assert_eq!(compact(r#"{"x": 1, "x": 2}"#), r#"{"x":2}"#);
}

#[test]
fn test_compact_round_trip() {
    for text in SAMPLES {
        let direct = parse(text).unwrap();
        let normalized = parse(&compact(text)).unwrap();
        assert_eq!(direct, normalized, "compact changed meaning of {}", text);
    }
}

#[test]
fn test_pretty_round_trip() {
    for text in SAMPLES {
        let direct = parse(text).unwrap();
        let normalized = parse(&pretty(text)).unwrap();
        assert_eq!(direct, normalized, "pretty changed meaning of {}", text);
    }
}

#[test]
fn test_large_and_precise_floats_round_trip() {
    let text = "[-9.603912309902189e126, -2.0020800045581213e47, 0.1, 1.7976931348623157e308, 5e-324]";
    let direct = parse(text).unwrap();
    assert_eq!(parse(&compact(text)).unwrap(), direct);
    assert_eq!(parse(&pretty(text)).unwrap(), direct);
}

#[test]
fn test_compact_is_idempotent() {
    for text in SAMPLES {
        let once = compact(text);
        assert_eq!(compact(&once), once);
    }
}

#[test]
fn test_try_compact_reports_position() {
    let err = try_compact("{\n  \"a\": 1,\n}").unwrap_err();
    match err {
        NormalizeError::Malformed { line, .. } => assert!(line >= 2),
    }
}

#[test]
fn test_try_pretty_rejects_garbage() {
    assert!(try_pretty("not a document").is_err());
    assert!(try_pretty("").is_err());
}

#[test]
#[should_panic(expected = "malformed document")]
fn test_compact_panics_on_malformed() {
    compact(r#"{"a": 1,, "b": 2}"#);
}

#[test]
#[should_panic(expected = "malformed document")]
fn test_pretty_panics_on_malformed() {
    pretty(r#"{"a": "#);
}

#[test]
fn test_parse_integral_numbers() {
    let value = parse(r#"{"i": 3, "w": 3.00, "e": 3e2, "f": 3.5}"#).unwrap();
    assert_eq!(value.get("i"), Some(&Value::Integer(3)));
    assert_eq!(value.get("w"), Some(&Value::Integer(3)));
    assert_eq!(value.get("e"), Some(&Value::Integer(300)));
    assert_eq!(value.get("f"), Some(&Value::Float(3.5)));
}

#[test]
fn test_json_value_conversion() {
    let json: serde_json::Value =
        serde_json::from_str(r#"{"a": [1, 2.5, "s", null, false], "b": {}}"#).unwrap();
    assert_eq!(to_json_value(from_json(json.clone())), json);
}

// ============================================================================
// Round-trip property
// ============================================================================

fn document_strategy() -> impl Strategy<Value = serde_json::Value> {
    let leaf = prop_oneof![
        Just(serde_json::Value::Null),
        any::<bool>().prop_map(serde_json::Value::from),
        any::<i64>().prop_map(serde_json::Value::from),
        any::<u64>().prop_map(serde_json::Value::from),
        any::<f64>()
            .prop_filter("finite", |f| f.is_finite())
            .prop_map(serde_json::Value::from),
        any::<String>().prop_map(serde_json::Value::from),
        "[\\x00-\\x1f\"\\\\a-z]{0,8}".prop_map(serde_json::Value::from),
    ];

    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(serde_json::Value::Array),
            prop::collection::btree_map(any::<String>(), inner, 0..6)
                .prop_map(|m| serde_json::Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn normalization_preserves_meaning(doc in document_strategy()) {
        let text = serde_json::to_string(&doc).unwrap();
        let direct = parse(&text).unwrap();

        prop_assert_eq!(parse(&compact(&text)).unwrap(), direct.clone());
        prop_assert_eq!(parse(&pretty(&text)).unwrap(), direct);
    }
}
