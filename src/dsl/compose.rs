//! Combinators that assemble fragments into larger ones, up to the root
//! document.

use tracing::trace;

use crate::{
    fragment::{Fragment, join, quote},
    normalize::{NormalizeError, compact, try_compact},
};

/// Member marking the document as aggregation-only (no hits returned).
const SIZE_ZERO: &str = r#""size": 0"#;

/// Root document: `{"size": 0, children...}`, compacted.
///
/// Normalization is the only check that the composition is well formed, so a
/// broken fragment anywhere in the tree fails here.
///
/// # Panics
///
/// Panics when the assembled text is not a well-formed document. Use
/// [`try_query`] to get the error instead.
pub fn query<I>(children: I) -> String
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    compact(&root(children))
}

/// Fallible variant of [`query`].
pub fn try_query<I>(children: I) -> Result<String, NormalizeError>
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    try_compact(&root(children))
}

fn root<I>(children: I) -> String
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    let members = join(
        std::iter::once(Fragment::from(SIZE_ZERO)).chain(children.into_iter().map(Into::into)),
    );
    trace!(len = members.as_str().len(), "assembling root document");
    format!("{{\n{}\n}}", members)
}

/// Boolean-AND filter block.
///
/// The returned function emits the filter block followed by whatever children
/// it is called with, and can be called any number of times.
///
/// ```
/// use esq_dsl::dsl::{filter, term};
/// use esq_dsl::Fragment;
///
/// let only_tj = filter([term("user", "tj")]);
/// let a = only_tj(&[]);
/// let b = only_tj(&[Fragment::from(r#""timeout": "1s""#)]);
/// assert!(b.as_str().starts_with(a.as_str()));
/// ```
pub fn filter<I>(filters: I) -> impl Fn(&[Fragment]) -> Fragment
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    let block = Fragment::from(format!(
        r#""filter": {{
    "bool": {{
        "filter": [
            {}
        ]
    }}
}}"#,
        join(filters)
    ));

    move |children: &[Fragment]| join(std::iter::once(&block).chain(children))
}

/// Aggregation tree: `"aggs": { named aggregations... }`.
pub fn aggs<I>(children: I) -> Fragment
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    format!(
        r#""aggs": {{
    {}
}}"#,
        join(children)
    )
    .into()
}

/// A named aggregation wrapping a type definition and optionally a nested
/// [`aggs`] tree.
///
/// Sibling names are not checked; a repeated name keeps only its last
/// definition once the document is normalized.
pub fn agg<I>(name: &str, children: I) -> Fragment
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    format!(
        r#"{}: {{
    {}
}}"#,
        quote(name),
        join(children)
    )
    .into()
}
