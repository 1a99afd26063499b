//! Assertion utilities for testing.
//!
//! This module provides helper functions for making assertions in tests,
//! particularly for floating-point comparisons.

#![allow(dead_code)]

/// Default epsilon for floating-point comparisons
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Assert that two floating-point values are approximately equal.
///
/// # Panics
///
/// Panics if the absolute difference between `actual` and `expected` is greater than `epsilon`.
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: Option<f64>) {
    let epsilon = epsilon.unwrap_or(DEFAULT_EPSILON);
    let diff = (actual - expected).abs();

    assert!(
        diff <= epsilon,
        "Values not approximately equal: actual = {}, expected = {}, diff = {}, epsilon = {}",
        actual,
        expected,
        diff,
        epsilon
    );
}

/// Assert that a `[min, avg, max]` summary is ordered.
///
/// # Panics
///
/// Panics if any entry is not a number or if `min <= avg <= max` does not hold.
pub fn assert_ordered_summary(values: &serde_json::Value) {
    let values = values
        .as_array()
        .unwrap_or_else(|| panic!("Summary is not an array: {}", values));
    assert_eq!(values.len(), 3, "Summary must hold min, avg and max: {:?}", values);

    let numbers: Vec<f64> = values
        .iter()
        .map(|v| v.as_f64().unwrap_or_else(|| panic!("Not a number: {}", v)))
        .collect();

    assert!(
        numbers[0] <= numbers[1] && numbers[1] <= numbers[2],
        "Summary out of order: min = {}, avg = {}, max = {}",
        numbers[0],
        numbers[1],
        numbers[2]
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_approx_eq() {
        assert_approx_eq(1.0, 1.0, None);
        assert_approx_eq(71.5, 71.5000000001, None);
        assert_approx_eq(1.0, 1.001, Some(0.01));
    }

    #[test]
    fn test_assert_ordered_summary() {
        assert_ordered_summary(&serde_json::json!([58.0, 71.5, 83.0]));
        assert_ordered_summary(&serde_json::json!([70.0, 70.0, 70.0]));
    }
}
