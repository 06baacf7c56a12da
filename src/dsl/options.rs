//! Members spliced into aggregation definitions.

use std::fmt;

use thiserror::Error;

use crate::{
    Value,
    fragment::{Fragment, quote},
    timezone::{TimeZoneSpec, resolve},
};

/// `"time_zone"` set to the running process's current UTC offset.
pub fn time_zone_local() -> Fragment {
    time_zone_member(resolve(&TimeZoneSpec::Local).offset())
}

/// `"time_zone"` for a region name or a literal offset.
///
/// Region names resolve to the region's current offset. Anything the
/// time-zone database does not know is passed through as given.
///
/// ```
/// use esq_dsl::dsl::time_zone;
///
/// assert_eq!(time_zone("-08:00"), r#""time_zone": "-08:00""#);
/// assert_eq!(time_zone("Asia/Tokyo"), r#""time_zone": "+09:00""#);
/// assert_eq!(time_zone("Not/AZone"), r#""time_zone": "Not/AZone""#);
/// ```
pub fn time_zone(spec: &str) -> Fragment {
    time_zone_member(resolve(&TimeZoneSpec::Named(spec.to_string())).offset())
}

fn time_zone_member(offset: String) -> Fragment {
    format!(r#""time_zone": {}"#, quote(&offset)).into()
}

/// A histogram interval: a number for numeric histograms, or a calendar/fixed
/// expression such as `"1d"` or `"month"` for date histograms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interval {
    Fixed(i64),
    Named(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum IntervalError {
    #[error("invalid interval, must be an int or string (got {0})")]
    InvalidType(&'static str),
}

impl From<i64> for Interval {
    fn from(n: i64) -> Self {
        Interval::Fixed(n)
    }
}

impl From<i32> for Interval {
    fn from(n: i32) -> Self {
        Interval::Fixed(n.into())
    }
}

impl From<&str> for Interval {
    fn from(s: &str) -> Self {
        Interval::Named(s.to_string())
    }
}

impl From<String> for Interval {
    fn from(s: String) -> Self {
        Interval::Named(s)
    }
}

impl TryFrom<Value> for Interval {
    type Error = IntervalError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(n) => Ok(Interval::Fixed(n)),
            Value::String(s) => Ok(Interval::Named(s)),
            other => Err(IntervalError::InvalidType(other.type_name())),
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interval::Fixed(n) => write!(f, "{}", n),
            Interval::Named(s) => f.write_str(&quote(s)),
        }
    }
}

/// `"interval"` member.
pub fn interval(v: impl Into<Interval>) -> Fragment {
    format!(r#""interval": {}"#, v.into()).into()
}

/// `"interval"` member from a dynamically typed value.
///
/// # Panics
///
/// Panics unless `v` is an integer or a string; use
/// `Interval::try_from` to handle that case instead.
pub fn interval_from_value(v: Value) -> Fragment {
    match Interval::try_from(v) {
        Ok(i) => interval(i),
        Err(e) => panic!("{e}"),
    }
}

/// Buckets with fewer than `n` documents are dropped.
pub fn min_doc_count(n: i64) -> Fragment {
    format!(r#""min_doc_count": {}"#, n).into()
}

/// Value assumed for documents lacking the field.
pub fn missing(n: i64) -> Fragment {
    format!(r#""missing": {}"#, n).into()
}

/// Forces histogram buckets to span `min..=max` even when empty.
pub fn extended_bounds(min: i64, max: i64) -> Fragment {
    format!(
        r#""extended_bounds": {{
    "min": {},
    "max": {}
}}"#,
        min, max
    )
    .into()
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bucket ordering: `"order": {field: direction}`.
pub fn order(field: &str, dir: Direction) -> Fragment {
    format!(
        r#""order": {{
    {}: {}
}}"#,
        quote(field),
        quote(dir.as_str())
    )
    .into()
}
