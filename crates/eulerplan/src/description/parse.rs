//! Text format: whitespace-separated zones, one character per curve label.
//!
//! `"a b ab"` names curves `a`, `b` and the zones `{a}`, `{b}`, `{a,b}`; the
//! outside zone is always present, so the empty string is the empty description.
//! Any non-whitespace character labels a curve (`"a _ a_"` is two curves).

use std::convert::Infallible;
use std::str::FromStr;

use super::curve::AbstractCurve;
use super::types::Description;
use super::zone::Zone;

impl Description {
    /// Parse the whitespace-separated zone list. Every input is a description.
    pub fn from_informal(text: &str) -> Self {
        Self::from_zones(
            text.split_whitespace()
                .map(|token| Zone::from_curves(token.chars().map(AbstractCurve::from))),
        )
    }
}

impl FromStr for Description {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_informal(s))
    }
}
