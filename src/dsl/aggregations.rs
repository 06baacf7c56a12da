//! Aggregation type definitions.
//!
//! Each function yields the `"type": {...}` member that goes inside a named
//! [`agg`](super::compose::agg).

use crate::fragment::{Fragment, join, quote};

/// Buckets by distinct value of `field`, keeping the `size` largest.
pub fn terms(field: &str, size: usize) -> Fragment {
    format!(
        r#""terms": {{
    "field": {},
    "size": {}
}}"#,
        quote(field),
        size
    )
    .into()
}

pub fn sum(field: &str) -> Fragment {
    metric("sum", field)
}

pub fn avg(field: &str) -> Fragment {
    metric("avg", field)
}

pub fn min(field: &str) -> Fragment {
    metric("min", field)
}

pub fn max(field: &str) -> Fragment {
    metric("max", field)
}

/// Count, min, max, avg and sum of `field` in one aggregation.
pub fn stats(field: &str) -> Fragment {
    metric("stats", field)
}

/// Percentiles of `field`.
///
/// With no break-points the engine's defaults apply and `"percents"` is left
/// out.
pub fn percentiles(field: &str, percents: &[f64]) -> Fragment {
    let percents = percents_member(percents);
    typed("percentiles", field, [percents])
}

/// Buckets `field` by a fixed numeric interval. `options` usually carries an
/// [`interval`](super::options::interval).
pub fn histogram<I>(field: &str, options: I) -> Fragment
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    typed("histogram", field, options)
}

/// Buckets `field` by date. `options` usually carries an
/// [`interval`](super::options::interval) and a
/// [`time_zone`](super::options::time_zone).
pub fn date_histogram<I>(field: &str, options: I) -> Fragment
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    typed("date_histogram", field, options)
}

/// Renders break-points with two decimals, comma-separated, in caller order.
///
/// ```
/// use esq_dsl::dsl::format_percents;
///
/// assert_eq!(format_percents(&[50.0, 95.5, 99.0]), "50.00, 95.50, 99.00");
/// ```
pub fn format_percents(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format!("{:.2}", v))
        .collect::<Vec<_>>()
        .join(", ")
}

fn percents_member(percents: &[f64]) -> Fragment {
    if percents.is_empty() {
        return Fragment::empty();
    }
    format!(r#""percents": [{}]"#, format_percents(percents)).into()
}

fn metric(kind: &str, field: &str) -> Fragment {
    typed(kind, field, std::iter::empty::<Fragment>())
}

// `"kind": { "field": field, options... }`
fn typed<I>(kind: &str, field: &str, options: I) -> Fragment
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    let field = Fragment::from(format!(r#""field": {}"#, quote(field)));
    let members = join(std::iter::once(field).chain(options.into_iter().map(Into::into)));
    format!(
        r#"{}: {{
    {}
}}"#,
        quote(kind),
        members
    )
    .into()
}
