//! Inclusive range filtering of the series pair
//!
//! Bound texts come straight from the input fields. An empty lower bound is
//! -inf, an empty upper bound is +inf. Anything else is parsed as an `f64`;
//! unparseable text becomes NaN, and since every comparison against NaN is
//! false, a malformed bound excludes every element.

use crate::data::SeriesPair;

/// Numeric bounds derived from the two input texts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub lower: f64,
    pub upper: f64,
}

impl Bounds {
    /// No filtering at all
    pub const UNBOUNDED: Bounds = Bounds {
        lower: f64::NEG_INFINITY,
        upper: f64::INFINITY,
    };

    pub fn from_texts(lower: &str, upper: &str) -> Self {
        Self {
            lower: parse_lower(lower),
            upper: parse_upper(upper),
        }
    }

    /// `lower <= value <= upper`
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

/// Empty text is -inf. Uses Rust `f64` syntax: `inf`/`nan` parse, whitespace-only text is NaN.
pub fn parse_lower(text: &str) -> f64 {
    parse_bound(text, f64::NEG_INFINITY)
}

/// Empty text is +inf; otherwise parsed like [`parse_lower`].
pub fn parse_upper(text: &str) -> f64 {
    parse_bound(text, f64::INFINITY)
}

fn parse_bound(text: &str, when_empty: f64) -> f64 {
    if text.is_empty() {
        return when_empty;
    }
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}

pub fn filter_series(values: &[f64], bounds: &Bounds) -> Vec<f64> {
    values
        .iter()
        .copied()
        .filter(|v| bounds.contains(*v))
        .collect()
}

/// Filter both series independently with the same bounds
pub fn filter_pair(raw: &SeriesPair, bounds: &Bounds) -> SeriesPair {
    SeriesPair {
        dataset_one: filter_series(&raw.dataset_one, bounds),
        dataset_two: filter_series(&raw.dataset_two, bounds),
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod filter_tests;
