use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;

use crate::util::sort::compare_tag_names;

/// Owned tag name whose ordering is [`compare_tag_names`]
///
/// Equality follows the same order, so `"1"` and `"01"` are equal tag names.
/// There is deliberately no `Hash` or `Borrow<str>` impl: both would have to
/// agree with plain string equality, which this type does not.
///
/// ```
/// use std::collections::BTreeSet;
/// use tagsort_core::core::tag::TagName;
///
/// let tags: BTreeSet<TagName> = ["loss/10", "loss/2", "accuracy"]
///     .into_iter()
///     .map(TagName::from)
///     .collect();
/// let ordered: Vec<&str> = tags.iter().map(|t| t.as_str()).collect();
/// assert_eq!(ordered, ["accuracy", "loss/2", "loss/10"]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagName(String);

impl TagName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl PartialEq for TagName {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for TagName {}

impl PartialOrd for TagName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TagName {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_tag_names(&self.0, &other.0)
    }
}

impl Deref for TagName {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TagName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TagName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&str> for TagName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<TagName> for String {
    fn from(tag: TagName) -> Self {
        tag.0
    }
}
