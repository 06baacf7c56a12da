//! Fragments and the rules for joining them.
//!
//! A fragment is a piece of document text that is complete at the position it
//! is spliced into: a `"key": value` member, an object, or an array element.
//! The empty fragment means "leave me out"; [`join`] drops it so optional
//! pieces vanish without leaving a stray comma behind.

use std::fmt;

/// Separator placed between joined fragments.
pub const SEPARATOR: &str = ",\n";

/// A piece of serialized document text, or nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Fragment(String);

impl Fragment {
    /// The eliding fragment.
    pub fn empty() -> Self {
        Fragment(String::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Fragment {
    fn from(s: String) -> Self {
        Fragment(s)
    }
}

impl From<&str> for Fragment {
    fn from(s: &str) -> Self {
        Fragment(s.to_string())
    }
}

impl From<&Fragment> for Fragment {
    fn from(f: &Fragment) -> Self {
        f.clone()
    }
}

impl PartialEq<str> for Fragment {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Fragment {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Joins fragments with [`SEPARATOR`], skipping empty ones.
///
/// ```
/// use esq_dsl::join;
///
/// assert_eq!(join(["a", "", "b"]), "a,\nb");
/// assert_eq!(join(["", ""]), "");
/// ```
pub fn join<I>(fragments: I) -> Fragment
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    let kept: Vec<String> = fragments
        .into_iter()
        .map(Into::into)
        .filter(|f| !f.is_empty())
        .map(Fragment::into_string)
        .collect();
    Fragment(kept.join(SEPARATOR))
}

/// Returns the joined `fragments` when `cond` holds, the empty fragment
/// otherwise.
///
/// ```
/// use esq_dsl::{join, when};
///
/// assert_eq!(when(true, ["a", "b"]), join(["a", "b"]));
/// assert_eq!(when(false, ["a", "b"]), "");
/// ```
pub fn when<I>(cond: bool, fragments: I) -> Fragment
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    if cond { join(fragments) } else { Fragment::empty() }
}

/// Renders `s` as a JSON string literal.
pub fn quote(s: &str) -> String {
    // Serializing a str cannot fail
    serde_json::to_string(s).unwrap_or_default()
}
