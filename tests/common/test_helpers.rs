//! Helper functions for integration tests

use molarity::config::RangeWithValue;
use molarity::model::Solution;

/// Assert the derived values of a solution agree with its inputs
pub fn assert_solution_consistent(solution: &Solution, message: &str) {
    let saturated = solution.solute().saturated_concentration();
    let concentration = solution.concentration();
    let precipitate = solution.precipitate_amount();
    let ratio = solution.solute_amount() / solution.volume();

    assert!(
        (0.0..=saturated).contains(&concentration),
        "{}: concentration {} outside [0, {}]",
        message, concentration, saturated
    );
    assert!(
        precipitate >= 0.0,
        "{}: negative precipitate {}",
        message, precipitate
    );
    assert_eq!(
        precipitate > 0.0,
        ratio > saturated,
        "{}: precipitate {} inconsistent with n/V = {}",
        message, precipitate, ratio
    );
    assert_eq!(solution.is_saturated(), precipitate > 0.0, "{}", message);
}

/// `steps + 1` evenly spaced values across `range`, both ends included
pub fn sample_grid(range: &RangeWithValue, steps: usize) -> Vec<f64> {
    (0..=steps)
        .map(|i| range.min + range.length() * i as f64 / steps as f64)
        .collect()
}
