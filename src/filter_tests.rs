//! Tests for range filtering

use super::*;
use proptest::prelude::*;

fn sample_pair() -> SeriesPair {
    SeriesPair::new(vec![10.0, 55.0, 30.0], vec![5.0, 60.0, 25.0])
}

#[test]
fn test_empty_texts_are_unbounded() {
    let bounds = Bounds::from_texts("", "");
    assert_eq!(bounds, Bounds::UNBOUNDED);
}

#[test]
fn test_parse_numeric_texts() {
    assert_eq!(parse_lower("20"), 20.0);
    assert_eq!(parse_upper("50.5"), 50.5);
    assert_eq!(parse_lower("-3"), -3.0);
    assert_eq!(parse_upper("1e3"), 1000.0);
}

#[test]
fn test_parse_trims_surrounding_whitespace() {
    assert_eq!(parse_lower(" 20 "), 20.0);
}

#[test]
fn test_unparseable_text_is_nan() {
    assert!(parse_lower("abc").is_nan());
    assert!(parse_upper("12abc").is_nan());
}

#[test]
fn test_whitespace_only_text_is_nan() {
    assert!(parse_lower("   ").is_nan());
}

#[test]
fn test_rust_float_keywords_are_accepted() {
    assert_eq!(parse_lower("inf"), f64::INFINITY);
    assert_eq!(parse_upper("-infinity"), f64::NEG_INFINITY);
    assert!(parse_upper("nan").is_nan());
    assert_eq!(parse_lower("1e3"), 1000.0);
}

#[test]
fn test_bounds_are_inclusive() {
    let bounds = Bounds::from_texts("20", "50");
    assert!(bounds.contains(20.0));
    assert!(bounds.contains(50.0));
    assert!(!bounds.contains(19.999));
    assert!(!bounds.contains(50.001));
}

#[test]
fn test_filter_scenario_20_to_50() {
    let filtered = filter_pair(&sample_pair(), &Bounds::from_texts("20", "50"));
    assert_eq!(filtered.dataset_one, vec![30.0]);
    assert_eq!(filtered.dataset_two, vec![25.0]);
}

#[test]
fn test_filter_with_empty_bounds_returns_raw() {
    let raw = sample_pair();
    let filtered = filter_pair(&raw, &Bounds::from_texts("", ""));
    assert_eq!(filtered, raw);
}

#[test]
fn test_filter_with_malformed_lower_excludes_everything() {
    let filtered = filter_pair(&sample_pair(), &Bounds::from_texts("abc", "100"));
    assert!(filtered.is_empty());
}

#[test]
fn test_filter_only_lower_bound() {
    let filtered = filter_pair(&sample_pair(), &Bounds::from_texts("30", ""));
    assert_eq!(filtered.dataset_one, vec![55.0, 30.0]);
    assert_eq!(filtered.dataset_two, vec![60.0]);
}

#[test]
fn test_filter_series_lengths_may_diverge() {
    let raw = SeriesPair::new(vec![1.0, 2.0, 3.0], vec![100.0, 2.0, 300.0]);
    let filtered = filter_pair(&raw, &Bounds::from_texts("", "3"));
    assert_eq!(filtered.dataset_one.len(), 3);
    assert_eq!(filtered.dataset_two.len(), 1);
}

#[test]
fn test_filter_inverted_bounds_is_empty() {
    let filtered = filter_pair(&sample_pair(), &Bounds::from_texts("50", "20"));
    assert!(filtered.is_empty());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every kept element satisfies the bounds, and every dropped one does not
    #[test]
    fn prop_filter_keeps_exactly_in_range_elements(
        values in prop::collection::vec(-1000.0f64..1000.0, 0..50),
        lower in -1000.0f64..1000.0,
        upper in -1000.0f64..1000.0,
    ) {
        let bounds = Bounds { lower, upper };
        let filtered = filter_series(&values, &bounds);

        prop_assert!(filtered.iter().all(|v| lower <= *v && *v <= upper));
        let expected = values.iter().filter(|v| lower <= **v && **v <= upper).count();
        prop_assert_eq!(filtered.len(), expected);
    }

    /// Filtering preserves the original order of kept elements
    #[test]
    fn prop_filter_preserves_order(
        values in prop::collection::vec(-100i32..100, 0..50),
        lower in -100i32..100,
    ) {
        let values: Vec<f64> = values.into_iter().map(f64::from).collect();
        let bounds = Bounds { lower: f64::from(lower), upper: f64::INFINITY };
        let filtered = filter_series(&values, &bounds);
        let expected: Vec<f64> =
            values.iter().copied().filter(|v| *v >= f64::from(lower)).collect();
        prop_assert_eq!(filtered, expected);
    }

    /// Letter-only lower bounds (NaN or inf) exclude every finite element
    #[test]
    fn prop_malformed_bound_excludes_all(
        values in prop::collection::vec(-1000.0f64..1000.0, 0..20),
        junk in "[a-zA-Z]{1,8}",
    ) {
        let filtered = filter_series(&values, &Bounds::from_texts(&junk, ""));
        prop_assert!(filtered.is_empty());
    }
}
