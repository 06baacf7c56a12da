#![cfg(feature = "cli")]

use esq_dsl::cli::{
    CliError, DocCategory, NormalizeOptions, execute_normalize, execute_tz, get_doc_category,
    get_docs_overview,
};

fn normalize(input: &str, pretty: bool) -> Result<String, CliError> {
    execute_normalize(&NormalizeOptions {
        input: Some(input.to_string()),
        pretty,
    })
}

#[test]
fn test_normalize_compact() {
    assert_eq!(normalize(r#"{ "b": 1, "a": 2 }"#, false).unwrap(), r#"{"a":2,"b":1}"#);
}

#[test]
fn test_normalize_pretty() {
    assert_eq!(normalize(r#"{"size": 0}"#, true).unwrap(), "{\n  \"size\": 0\n}");
}

#[test]
fn test_normalize_malformed() {
    let err = normalize(r#"{"a": }"#, false).unwrap_err();
    assert!(matches!(err, CliError::Normalize(_)));
    assert!(err.to_string().starts_with("Invalid document:"));
}

#[test]
fn test_normalize_no_input() {
    let err = execute_normalize(&NormalizeOptions::default()).unwrap_err();
    assert!(matches!(err, CliError::NoInput));

    assert!(matches!(normalize("  \n", false), Err(CliError::NoInput)));
}

#[test]
fn test_tz_region() {
    assert_eq!(execute_tz(Some("Asia/Tokyo")), "+09:00 (region Asia/Tokyo)");
}

#[test]
fn test_tz_literal() {
    assert_eq!(execute_tz(Some("-03:00")), "-03:00 (literal)");
}

#[test]
fn test_tz_local() {
    assert!(execute_tz(None).ends_with("(local)"));
}

#[test]
fn test_doc_categories() {
    assert_eq!(DocCategory::from_str("aggs"), Some(DocCategory::Aggregations));
    assert_eq!(DocCategory::from_str("Filters"), Some(DocCategory::Filters));
    assert!(get_doc_category("options").unwrap().contains("time_zone"));
    assert!(get_docs_overview().contains("composition"));
}

#[test]
fn test_unknown_doc_category() {
    let err = get_doc_category("nope").unwrap_err();
    assert!(matches!(err, CliError::UnknownCategory(ref c) if c == "nope"));
}
