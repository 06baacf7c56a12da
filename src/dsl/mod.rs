//! # Query fragment constructors
//!
//! Every function here returns a [`Fragment`](crate::Fragment) of document
//! text. Constructors are pure and never validate field names or bounds; the
//! search engine is the judge of what it accepts. Composition happens
//! bottom-up:
//!
//! ```
//! use esq_dsl::dsl::*;
//!
//! let body = query([filter([
//!     timestamp_range("now-7d", "now"),
//!     term("user", "tj"),
//! ])(&[aggs([agg("total", [sum("bytes")])])])]);
//!
//! assert!(body.starts_with(r#"{"aggs":{"total":{"sum":{"field":"bytes"}}}"#));
//! ```
//!
//! ## Submodules
//!
//! - **[filters]** - conditions placed in the boolean-AND filter list
//! - **[aggregations]** - aggregation type definitions
//! - **[options]** - members spliced into histogram and terms definitions
//! - **[compose]** - the root document, the filter block and aggregation trees

pub mod aggregations;
pub mod compose;
pub mod filters;
pub mod options;

pub use aggregations::{
    avg, date_histogram, format_percents, histogram, max, min, percentiles, stats, sum, terms,
};
pub use compose::{agg, aggs, filter, query, try_query};
pub use filters::{range, term, timestamp_range};
pub use options::{
    Direction, Interval, IntervalError, extended_bounds, interval, interval_from_value,
    min_doc_count, missing, order, time_zone, time_zone_local,
};
