//! Attribute value sets
//!
//! An [`AttributeValueSet`] holds the distinct attribute *values* of one
//! element. Attribute names are discarded, so `class="submit"` and
//! `data-role="submit"` contribute the same member. Values are compared as
//! opaque strings: `class="btn btn-success"` is the single member
//! `"btn btn-success"`, not two class tokens.

use std::fmt;

use indexmap::IndexSet;
use serde::Serialize;

/// The set of distinct attribute values belonging to one element
///
/// Members keep first-seen order for display, but equality ignores order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AttributeValueSet {
    values: IndexSet<String>,
}

impl AttributeValueSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(value)
    }

    /// Iterate the values in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    /// Count of values present in both sets
    ///
    /// Plain cardinality of the intersection: no weighting and no
    /// normalization by set size.
    pub fn intersection_size(&self, other: &AttributeValueSet) -> usize {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.iter().filter(|value| large.contains(value)).count()
    }
}

impl<S: Into<String>> FromIterator<S> for AttributeValueSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for AttributeValueSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}
