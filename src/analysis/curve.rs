//! Saturation curve
//!
//! A fixed solute amount evaluated at evenly spaced volumes across the configured
//! volume range. Shrinking the volume raises `n / V` until it reaches the saturation
//! concentration; below that volume the solution is saturated and the excess stays
//! undissolved:
//!
//! ```text
//! C(V) = min(C_sat, n / V)        P(V) = max(0, n − C_sat · V)
//! ```
//!
//! Sampling runs on rayon when the `parallel` feature is enabled and the curve is
//! large enough to be worth the thread overhead.

use crate::analysis::sample_range;
use crate::chemistry::Solute;
use crate::config::{SimulationConfig, round_to_places};
use crate::error::{MolarityError, MolarityResult};
use crate::model::Solution;

/// Below this number of points, sequential sampling is faster
#[cfg(feature = "parallel")]
const PARALLEL_THRESHOLD: usize = 1000;

/// One sample of the curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    /// \[L\]
    pub volume: f64,
    /// \[mol/L\], rounded as the live model rounds it
    pub concentration: f64,
    /// \[mol\]
    pub precipitate_amount: f64,
    pub saturated: bool,
}

/// Concentration and precipitate as functions of volume
#[derive(Debug, Clone)]
pub struct SaturationCurve {
    solute: Solute,
    solute_amount: f64,
    points: Vec<CurvePoint>,
}

impl SaturationCurve {
    /// Sample the model at `points` volumes, both ends of the volume range included
    ///
    /// The solute amount is clamped and rounded like [`Solution::set_solute_amount`].
    ///
    /// # Errors
    ///
    /// - `InvalidConfiguration` for an invalid config or fewer than 2 points
    /// - `DomainViolation` for a non-finite solute amount
    pub fn sample(
        solute: &Solute,
        solute_amount: f64,
        config: &SimulationConfig,
        points: usize,
    ) -> MolarityResult<Self> {
        config.validate()?;
        if !solute_amount.is_finite() {
            return Err(MolarityError::DomainViolation {
                quantity: "solute amount",
                value: solute_amount,
            });
        }

        let solute_amount = config.solute_amount_range.clamp(round_to_places(
            solute_amount,
            config.solute_amount_decimal_places,
        ));
        let volumes = sample_range(&config.volume_range, points, config.volume_decimal_places)?;

        let saturated_concentration = solute.saturated_concentration();
        let places = config.concentration_decimal_places;
        let evaluate = |volume: f64| {
            let precipitate_amount =
                Solution::compute_precipitate_amount(volume, solute_amount, saturated_concentration);
            CurvePoint {
                volume,
                concentration: Solution::compute_concentration(
                    volume,
                    solute_amount,
                    saturated_concentration,
                    places,
                ),
                precipitate_amount,
                saturated: precipitate_amount != 0.0,
            }
        };

        #[cfg(feature = "parallel")]
        let points: Vec<CurvePoint> = if volumes.len() > PARALLEL_THRESHOLD {
            use rayon::prelude::*;
            volumes.par_iter().map(|v| evaluate(*v)).collect()
        } else {
            volumes.iter().map(|v| evaluate(*v)).collect()
        };
        #[cfg(not(feature = "parallel"))]
        let points: Vec<CurvePoint> = volumes.iter().map(|v| evaluate(*v)).collect();

        log::debug!(
            "Sampled saturation curve of {} at {} mol over {} volumes",
            solute.name(),
            solute_amount,
            points.len()
        );

        Ok(Self {
            solute: solute.clone(),
            solute_amount,
            points,
        })
    }

    pub fn solute(&self) -> &Solute {
        &self.solute
    }

    /// Solute amount after clamping and rounding \[mol\]
    pub fn solute_amount(&self) -> f64 {
        self.solute_amount
    }

    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn volumes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.volume).collect()
    }

    pub fn concentrations(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.concentration).collect()
    }

    pub fn precipitate_amounts(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.precipitate_amount).collect()
    }

    /// Largest sampled volume at which the solution is still saturated
    pub fn saturation_volume(&self) -> Option<f64> {
        self.points
            .iter()
            .filter(|p| p.saturated)
            .map(|p| p.volume)
            .reduce(f64::max)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
