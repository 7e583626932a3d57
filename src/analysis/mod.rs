//! Offline analysis of the solution model
//!
//! Evaluates the model over whole input ranges instead of one user action at a time:
//!
//! | Type                 | Sweeps                 | Storage                 |
//! |----------------------|------------------------|-------------------------|
//! | [`SaturationCurve`]  | volume                 | `Vec` of curve points   |
//! | [`ConcentrationMap`] | solute amount × volume | `ndarray::Array2` grids |
//!
//! Both use the same derivation functions as [`Solution`](crate::model::Solution),
//! so a sampled point always matches what the live model reports for those inputs.

pub mod curve;
pub mod map;

pub use curve::{CurvePoint, SaturationCurve};
pub use map::ConcentrationMap;

use crate::config::{RangeWithValue, round_to_places};
use crate::error::{MolarityError, MolarityResult};

/// Evenly spaced samples of `range`, both ends included, rounded to `decimal_places`
pub(crate) fn sample_range(
    range: &RangeWithValue,
    points: usize,
    decimal_places: u32,
) -> MolarityResult<Vec<f64>> {
    if points < 2 {
        return Err(MolarityError::InvalidConfiguration(format!(
            "at least 2 sample points are needed, got {}",
            points
        )));
    }

    let step = range.length() / (points - 1) as f64;
    Ok((0..points)
        .map(|i| range.clamp(round_to_places(range.min + step * i as f64, decimal_places)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_range() {
        let range = RangeWithValue::new(0.2, 1.0, 0.5);
        let samples = sample_range(&range, 5, 3).unwrap();

        assert_eq!(samples, vec![0.2, 0.4, 0.6, 0.8, 1.0]);
        assert!(sample_range(&range, 1, 3).is_err());
    }
}
