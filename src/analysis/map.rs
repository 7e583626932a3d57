//! Concentration map
//!
//! The model over the whole input plane: row `i` is the i-th solute amount, column
//! `j` the j-th volume. Both grids share the axes:
//!
//! ```text
//!               volume →
//!   amount   ┌ C(n₀,V₀) C(n₀,V₁) … ┐
//!     ↓      │ C(n₁,V₀) C(n₁,V₁) … │
//!            └ …                   ┘
//! ```

use ndarray::{Array1, Array2};

use crate::analysis::sample_range;
use crate::chemistry::Solute;
use crate::config::SimulationConfig;
use crate::error::MolarityResult;
use crate::model::Solution;

/// Concentration and precipitate over amount × volume
#[derive(Debug, Clone)]
pub struct ConcentrationMap {
    saturated_concentration: f64,
    amounts: Array1<f64>,
    volumes: Array1<f64>,
    concentration: Array2<f64>,
    precipitate: Array2<f64>,
}

impl ConcentrationMap {
    /// # Errors
    ///
    /// `InvalidConfiguration` for an invalid config or fewer than 2 points on an axis.
    pub fn compute(
        solute: &Solute,
        config: &SimulationConfig,
        amount_points: usize,
        volume_points: usize,
    ) -> MolarityResult<Self> {
        config.validate()?;

        let amounts = Array1::from(sample_range(
            &config.solute_amount_range,
            amount_points,
            config.solute_amount_decimal_places,
        )?);
        let volumes = Array1::from(sample_range(
            &config.volume_range,
            volume_points,
            config.volume_decimal_places,
        )?);

        let saturated_concentration = solute.saturated_concentration();
        let shape = (amounts.len(), volumes.len());

        let concentration = Array2::from_shape_fn(shape, |(i, j)| {
            Solution::compute_concentration(
                volumes[j],
                amounts[i],
                saturated_concentration,
                config.concentration_decimal_places,
            )
        });
        let precipitate = Array2::from_shape_fn(shape, |(i, j)| {
            Solution::compute_precipitate_amount(volumes[j], amounts[i], saturated_concentration)
        });

        log::debug!(
            "Computed {}x{} concentration map of {}",
            shape.0,
            shape.1,
            solute.name()
        );

        Ok(Self {
            saturated_concentration,
            amounts,
            volumes,
            concentration,
            precipitate,
        })
    }

    pub fn saturated_concentration(&self) -> f64 {
        self.saturated_concentration
    }

    /// Row axis \[mol\]
    pub fn amounts(&self) -> &Array1<f64> {
        &self.amounts
    }

    /// Column axis \[L\]
    pub fn volumes(&self) -> &Array1<f64> {
        &self.volumes
    }

    /// \[mol/L\]
    pub fn concentration(&self) -> &Array2<f64> {
        &self.concentration
    }

    /// \[mol\]
    pub fn precipitate(&self) -> &Array2<f64> {
        &self.precipitate
    }

    /// Share of grid points where solids are present
    pub fn saturated_fraction(&self) -> f64 {
        let saturated = self.precipitate.iter().filter(|p| **p != 0.0).count();
        saturated as f64 / self.precipitate.len() as f64
    }

    /// Concentration map as fractions of the saturation concentration, in `[0, 1]`
    pub fn relative_concentration(&self) -> Array2<f64> {
        self.concentration.mapv(|c| c / self.saturated_concentration)
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chemistry::Color;
    use approx::assert_relative_eq;

    fn create_solute(saturated: f64) -> Solute {
        Solute::new("Test", None, saturated, Color::rgb(0, 0, 0), Color::rgb(0, 255, 0), "green")
            .unwrap()
    }

    #[test]
    fn test_corners() {
        let map = ConcentrationMap::compute(&create_solute(5.0), &SimulationConfig::default(), 2, 2)
            .unwrap();

        assert_eq!(map.concentration().dim(), (2, 2));
        assert_eq!(map.amounts().to_vec(), vec![0.0, 7.33]);
        assert_eq!(map.volumes().to_vec(), vec![0.2, 1.0]);

        assert_eq!(map.concentration()[[0, 0]], 0.0);
        assert_eq!(map.concentration()[[0, 1]], 0.0);
        assert_eq!(map.concentration()[[1, 0]], 5.0);
        assert_eq!(map.concentration()[[1, 1]], 5.0);

        // 7.33 mol in 0.2 L at 5 mol/L
        assert_relative_eq!(map.precipitate()[[1, 0]], 6.33, epsilon = 1e-12);
        assert_relative_eq!(map.saturated_fraction(), 0.5);
    }

    #[test]
    fn test_grid_invariants() {
        let map = ConcentrationMap::compute(&create_solute(2.25), &SimulationConfig::default(), 30, 17)
            .unwrap();

        for ((i, j), c) in map.concentration().indexed_iter() {
            let p = map.precipitate()[[i, j]];
            assert!(*c >= 0.0 && *c <= 2.25);
            assert!(p >= 0.0);
            assert_eq!(p > 0.0, map.amounts()[i] / map.volumes()[j] > 2.25);
        }
        assert!(map.relative_concentration().iter().all(|r| (0.0..=1.0).contains(r)));
    }

    #[test]
    fn test_too_few_points_rejected() {
        let config = SimulationConfig::default();
        assert!(ConcentrationMap::compute(&create_solute(1.0), &config, 1, 10).is_err());
        assert!(ConcentrationMap::compute(&create_solute(1.0), &config, 10, 0).is_err());
    }
}
