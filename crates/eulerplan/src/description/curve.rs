//! Curve labels.

use std::fmt;

/// An abstract curve: an opaque label with lexicographic order.
///
/// Two curves are the same curve iff their labels are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AbstractCurve {
    label: String,
}

impl AbstractCurve {
    #[inline]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl From<char> for AbstractCurve {
    fn from(ch: char) -> Self {
        Self::new(ch.to_string())
    }
}

impl From<&str> for AbstractCurve {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl fmt::Display for AbstractCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
