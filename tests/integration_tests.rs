use esq_dsl::dsl::*;
use esq_dsl::{Fragment, Value, parse, pretty, when};

fn filter_entries(doc: &Value) -> &[Value] {
    doc.get("filter")
        .and_then(|f| f.get("bool"))
        .and_then(|b| b.get("filter"))
        .and_then(Value::as_array)
        .unwrap()
}

#[test]
fn test_range_term_and_sum() {
    let body = query([filter([range("timestamp", "now-1d", "now"), term("user", "tj")])(&[
        aggs([agg("total", [sum("bytes")])]),
    ])]);

    let doc = parse(&body).unwrap();
    assert_eq!(doc.get("size"), Some(&Value::Integer(0)));
    assert_eq!(filter_entries(&doc).len(), 2);

    let aggs = doc.get("aggs").and_then(Value::as_object).unwrap();
    assert_eq!(aggs.len(), 1);
    assert!(aggs.contains_key("total"));
    assert_eq!(body.matches("\"filter\":[").count(), 1);
    assert_eq!(body.matches("\"aggs\"").count(), 1);
}

#[test]
fn test_output_is_compact() {
    let body = query([aggs([agg("total", [sum("bytes")])])]);
    assert_eq!(body, r#"{"aggs":{"total":{"sum":{"field":"bytes"}}},"size":0}"#);
}

#[test]
fn test_empty_query() {
    assert_eq!(query(Vec::<Fragment>::new()), r#"{"size":0}"#);
    assert_eq!(query([Fragment::empty()]), r#"{"size":0}"#);
}

#[test]
fn test_filter_without_children() {
    let body = query([filter([term("user", "tj")])(&[])]);
    let doc = parse(&body).unwrap();
    assert_eq!(filter_entries(&doc).len(), 1);
    assert!(doc.get("aggs").is_none());
}

#[test]
fn test_filter_without_conditions() {
    let body = query([filter(Vec::<Fragment>::new())(&[])]);
    assert_eq!(body, r#"{"filter":{"bool":{"filter":[]}},"size":0}"#);
}

#[test]
fn test_filter_function_is_reusable() {
    let recent = filter([timestamp_range("now-1h", "now")]);

    let by_sum = query([recent(&[aggs([agg("total", [sum("bytes")])])])]);
    let by_avg = query([recent(&[aggs([agg("mean", [avg("bytes")])])])]);

    assert!(by_sum.contains(r#""total""#));
    assert!(by_avg.contains(r#""mean""#));
    assert_eq!(filter_entries(&parse(&by_sum).unwrap()).len(), 1);
    assert_eq!(filter_entries(&parse(&by_avg).unwrap()).len(), 1);
}

#[test]
fn test_nested_aggregations() {
    let body = query([aggs([agg(
        "by_user",
        [
            terms("user", 10),
            order("_count", Direction::Descending),
            aggs([agg("total", [sum("bytes")]), agg("p", [percentiles("duration", &[50.0, 99.0])])]),
        ],
    )])]);

    let doc = parse(&body).unwrap();
    let by_user = doc.get("aggs").and_then(|a| a.get("by_user")).unwrap();
    assert_eq!(by_user.get("terms").and_then(|t| t.get("size")), Some(&Value::Integer(10)));

    let inner = by_user.get("aggs").and_then(Value::as_object).unwrap();
    assert_eq!(inner.len(), 2);
    assert!(inner.contains_key("total"));
    assert!(inner.contains_key("p"));
}

#[test]
fn test_duplicate_agg_names_last_wins() {
    let body = query([aggs([agg("x", [sum("a")]), agg("x", [avg("b")])])]);
    assert_eq!(body, r#"{"aggs":{"x":{"avg":{"field":"b"}}},"size":0}"#);
}

#[test]
fn test_conditional_blocks() {
    let build = |with_histogram: bool| {
        query([aggs([
            agg("total", [sum("bytes")]),
            when(
                with_histogram,
                [agg(
                    "per_day",
                    [date_histogram("timestamp", [interval("1d"), time_zone("UTC")])],
                )],
            ),
        ])])
    };

    let without = parse(&build(false)).unwrap();
    let with = parse(&build(true)).unwrap();

    assert_eq!(without.get("aggs").and_then(Value::as_object).unwrap().len(), 1);
    let per_day = with.get("aggs").and_then(|a| a.get("per_day")).unwrap();
    assert_eq!(
        per_day.get("date_histogram").and_then(|h| h.get("time_zone")),
        Some(&Value::from("+00:00"))
    );
}

#[test]
fn test_try_query_reports_broken_fragment() {
    let broken = Fragment::from(r#""aggs": {"#);
    assert!(try_query([broken]).is_err());
}

#[test]
#[should_panic(expected = "malformed document")]
fn test_query_panics_on_broken_fragment() {
    query([Fragment::from(r#""size": 0, "#)]);
}

#[test]
fn test_pretty_query() {
    let body = query([aggs([agg("total", [sum("bytes")])])]);
    let expected = r#"{
  "aggs": {
    "total": {
      "sum": {
        "field": "bytes"
      }
    }
  },
  "size": 0
}"#;
    assert_eq!(pretty(&body), expected);
}
