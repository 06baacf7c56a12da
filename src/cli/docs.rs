//! Documentation content for esq CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Composition,
    Filters,
    Aggregations,
    Options,
    Normalization,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "composition" | "compose" | "combinators" => Some(Self::Composition),
            "filters" | "filter" => Some(Self::Filters),
            "aggregations" | "aggregation" | "aggs" => Some(Self::Aggregations),
            "options" | "option" => Some(Self::Options),
            "normalization" | "normalize" | "format" => Some(Self::Normalization),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"ESQ DOCUMENTATION

esq builds search-engine query documents out of small text fragments. Each
constructor returns one fragment; combinators join fragments, dropping empty
ones; the root constructor wraps everything and normalizes the result.

DOCUMENTATION CATEGORIES

  composition       query, filter, aggs, agg, join and when
  filters           term and range conditions
  aggregations      terms, metrics, percentiles and histograms
  options           interval, time_zone, order, min_doc_count and friends
  normalization     compact and pretty output, failure behavior

QUICK REFERENCE

  query([...])                  Root document, "size": 0 plus children
  filter([...])(&[...])         Boolean-AND filter block, then children
  aggs([agg("name", [...])])    Aggregation tree
  when(cond, [...])             Children only when cond holds

Run 'esq doc <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_str(name) {
        Some(DocCategory::Composition) => Ok(COMPOSITION_DOC),
        Some(DocCategory::Filters) => Ok(FILTERS_DOC),
        Some(DocCategory::Aggregations) => Ok(AGGREGATIONS_DOC),
        Some(DocCategory::Options) => Ok(OPTIONS_DOC),
        Some(DocCategory::Normalization) => Ok(NORMALIZATION_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const COMPOSITION_DOC: &str = r#"COMPOSITION - Joining Fragments

JOIN
  join([a, b, ...])
    Joins fragments with ",\n" in the order given. Empty fragments are
    dropped first, so no stray commas or blank entries are left behind.

    Example:
      join(["a", "", "b"])    =>  "a,\nb"
      join(["", ""])          =>  ""

WHEN
  when(cond, [a, b, ...])
    join([a, b, ...]) when cond is true, the empty fragment otherwise.

    Example:
      agg("by_day", [
          date_histogram("timestamp", [interval("1d")]),
          when(nested, [aggs([agg("total", [sum("bytes")])])]),
      ])

FILTER
  filter([conditions...])(&[children...])
    A "filter" block whose bool.filter array holds the conditions, followed
    by the children. The function returned by filter(...) can be reused.

AGGS / AGG
  aggs([named...])          "aggs": { named... }
  agg(name, [children...])  name: { children... }

    Sibling names are not checked. When a name repeats, the last
    definition wins once the document is normalized.

QUERY
  query([children...])
    {"size": 0, children...}, compacted. Panics if the assembled text is not
    a well-formed document; try_query returns the error instead.
"#;

const FILTERS_DOC: &str = r#"FILTERS - Conditions

TERM
  term(field, value)
    {"term": {field: value}}

RANGE
  range(field, gte, lte)
    {"range": {field: {"gte": gte, "lte": lte}}}

    Bounds are passed as strings and are not validated.

  timestamp_range(gte, lte)
    range("timestamp", gte, lte)

    Example:
      filter([timestamp_range("now-7d", "now"), term("user", "tj")])
"#;

const AGGREGATIONS_DOC: &str = r#"AGGREGATIONS - Type Definitions

BUCKETING
  terms(field, size)                    Top `size` distinct values
  histogram(field, [options...])        Fixed numeric interval
  date_histogram(field, [options...])   Date interval

METRICS
  sum(field)  avg(field)  min(field)  max(field)  stats(field)

PERCENTILES
  percentiles(field, &[break-points...])
    Break-points are rendered with two decimals in the given order:
      percentiles("duration", &[50.0, 95.5, 99.0])
      =>  "percentiles": {"field": "duration", "percents": [50.00, 95.50, 99.00]}

    With no break-points "percents" is left out.
"#;

const OPTIONS_DOC: &str = r#"OPTIONS - Aggregation Members

INTERVAL
  interval(5)          "interval": 5
  interval("1d")       "interval": "1d"

  interval_from_value(value) panics unless value is an integer or a string.

TIME ZONE
  time_zone_local()    Offset of this process, e.g. "+02:00"
  time_zone(name)      Region name resolved to its current offset, e.g.
                       "Asia/Tokyo" => "+09:00". Anything the time-zone
                       database does not know is passed through as given:
                       "-08:00" => "-08:00", "Not/AZone" => "Not/AZone".

  Try it: esq tz America/Los_Angeles

OTHER
  min_doc_count(n)           "min_doc_count": n
  missing(n)                 "missing": n
  extended_bounds(min, max)  "extended_bounds": {"min": min, "max": max}
  order(field, Direction::Descending)
                             "order": {field: "desc"}
"#;

const NORMALIZATION_DOC: &str = r#"NORMALIZATION - Canonical Output

  compact(text)    No whitespace, keys sorted
  pretty(text)     Two-space indentation, keys sorted

  Both parse the text first. Malformed text panics; try_compact and
  try_pretty return the error instead. Because fragments are only parsed at
  this point, an error usually points at a fragment built much earlier.

  From the shell:
    echo '{"b": 1, "a": [1, 2]}' | esq normalize
    =>  {"a":[1,2],"b":1}

    esq normalize --pretty --input '{"size": 0}'
"#;
