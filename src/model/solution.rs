//! Solution model
//!
//! Three independent inputs (solute, solute amount, volume) and two derived values
//! (concentration, precipitate amount).
//!
//! # Derivation
//!
//! ```text
//! concentration       = round(min(C_sat, n / V))              V > 0
//! precipitate amount  = max(0, V · (n / V − C_sat))           V > 0
//! ```
//!
//! with `n` the solute amount \[mol\], `V` the volume \[L\] and `C_sat` the saturated
//! concentration of the selected solute \[mol/L\]. A non-positive volume is a degenerate
//! boundary: concentration is 0 and the whole amount is undissolved.
//!
//! The precipitate amount is computed from the unrounded inputs, so the saturation test
//! `precipitate != 0` never depends on display rounding.
//!
//! # Mutation
//!
//! Each setter clamps and rounds its input, recomputes the derived values once and
//! returns a single [`SolutionChange`], or `None` when nothing changed.
//!
//! ```rust
//! use molarity::chemistry::SoluteCatalog;
//! use molarity::config::SimulationConfig;
//! use molarity::model::Solution;
//!
//! let catalog = SoluteCatalog::standard().unwrap();
//! let mut solution = Solution::from_catalog(&catalog, SimulationConfig::default()).unwrap();
//!
//! let change = solution.set_volume(0.25).unwrap().expect("volume changed");
//! assert_eq!(change.before.volume, 0.5);
//! assert_eq!(solution.concentration(), 2.0);
//! ```

use crate::chemistry::{Color, Solute, SoluteCatalog, Solvent};
use crate::config::{RangeWithValue, SimulationConfig, round_to_places};
use crate::error::{MolarityError, MolarityResult};
use crate::model::change::{ChangeCause, SolutionChange, SolutionSnapshot};

/// The beaker contents
#[derive(Debug, Clone)]
pub struct Solution {
    config: SimulationConfig,
    solvent: Solvent,
    default_solute: Solute,

    // ==================== Inputs ====================
    solute: Solute,
    /// \[mol\]
    solute_amount: f64,
    /// \[L\]
    volume: f64,

    // ==================== Derived ====================
    /// \[mol/L\], rounded
    concentration: f64,
    /// \[mol\]
    precipitate_amount: f64,

    /// Number of derived-value recomputations
    revision: u64,
}

impl Solution {
    /// Create a solution with the configured defaults
    ///
    /// # Errors
    ///
    /// Configuration errors from [`SimulationConfig::validate`].
    pub fn new(default_solute: Solute, config: SimulationConfig) -> MolarityResult<Self> {
        config.validate()?;

        let mut solution = Self {
            solute_amount: config.solute_amount_range.default,
            volume: config.volume_range.default,
            solute: default_solute.clone(),
            default_solute,
            solvent: Solvent::default(),
            config,
            concentration: 0.0,
            precipitate_amount: 0.0,
            revision: 0,
        };
        solution.recompute();
        Ok(solution)
    }

    /// Create a solution whose default solute is the first catalog entry
    pub fn from_catalog(catalog: &SoluteCatalog, config: SimulationConfig) -> MolarityResult<Self> {
        Self::new(catalog.first().clone(), config)
    }

    /// Builder pattern: replace the solvent
    pub fn with_solvent(mut self, solvent: Solvent) -> Self {
        self.solvent = solvent;
        self
    }

    // ========================================== Getters ==========================================

    pub fn solute(&self) -> &Solute {
        &self.solute
    }

    /// Solute amount \[mol\]
    pub fn solute_amount(&self) -> f64 {
        self.solute_amount
    }

    /// Volume \[L\]
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Concentration \[mol/L\], never above the solute's saturation concentration
    pub fn concentration(&self) -> f64 {
        self.concentration
    }

    /// Undissolved solute \[mol\]
    pub fn precipitate_amount(&self) -> f64 {
        self.precipitate_amount
    }

    pub fn solvent(&self) -> Solvent {
        self.solvent
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn snapshot(&self) -> SolutionSnapshot {
        SolutionSnapshot {
            solute: self.solute.clone(),
            solute_amount: self.solute_amount,
            volume: self.volume,
            concentration: self.concentration,
            precipitate_amount: self.precipitate_amount,
        }
    }

    // ========================================== Queries ==========================================

    pub fn is_saturated(&self) -> bool {
        self.precipitate_amount != 0.0
    }

    /// Beaker tint: solvent color without dissolved solute, otherwise the solute gradient
    /// scaled by concentration / saturation
    pub fn color(&self) -> Color {
        if self.concentration > 0.0 {
            self.solute.color_at(self.concentration)
        } else {
            self.solvent.color
        }
    }

    // ========================================= Mutations =========================================

    /// Select a solute
    pub fn set_solute(&mut self, solute: Solute) -> Option<SolutionChange> {
        if solute == self.solute {
            return None;
        }
        let before = self.snapshot();
        self.solute = solute;
        Some(self.commit(ChangeCause::Solute, before))
    }

    /// Set the solute amount \[mol\], clamped and rounded to the configured domain
    ///
    /// # Errors
    ///
    /// `DomainViolation` for NaN or infinite input; the solution is left untouched.
    pub fn set_solute_amount(&mut self, amount: f64) -> MolarityResult<Option<SolutionChange>> {
        let amount = accept(
            "solute amount",
            amount,
            &self.config.solute_amount_range,
            self.config.solute_amount_decimal_places,
        )?;
        if amount == self.solute_amount {
            return Ok(None);
        }
        let before = self.snapshot();
        self.solute_amount = amount;
        Ok(Some(self.commit(ChangeCause::SoluteAmount, before)))
    }

    /// Set the volume \[L\], clamped and rounded to the configured domain
    ///
    /// # Errors
    ///
    /// `DomainViolation` for NaN or infinite input; the solution is left untouched.
    pub fn set_volume(&mut self, volume: f64) -> MolarityResult<Option<SolutionChange>> {
        let volume = accept(
            "volume",
            volume,
            &self.config.volume_range,
            self.config.volume_decimal_places,
        )?;
        if volume == self.volume {
            return Ok(None);
        }
        let before = self.snapshot();
        self.volume = volume;
        Ok(Some(self.commit(ChangeCause::Volume, before)))
    }

    /// Restore the three inputs to their construction-time values
    ///
    /// The inputs are replaced together and the derived values recomputed once, so
    /// observers see a single transition from the current state to the defaults.
    pub fn reset(&mut self) -> Option<SolutionChange> {
        let amount = self.config.solute_amount_range.default;
        let volume = self.config.volume_range.default;

        if self.solute == self.default_solute
            && self.solute_amount == amount
            && self.volume == volume
        {
            return None;
        }

        let before = self.snapshot();
        self.solute = self.default_solute.clone();
        self.solute_amount = amount;
        self.volume = volume;

        log::info!("Solution reset to defaults");
        Some(self.commit(ChangeCause::Reset, before))
    }

    // ======================================== Derivation ========================================

    /// Concentration \[mol/L\] for the given inputs, rounded to `decimal_places`
    ///
    /// Capped at `saturated_concentration` after rounding.
    pub fn compute_concentration(
        volume: f64,
        solute_amount: f64,
        saturated_concentration: f64,
        decimal_places: u32,
    ) -> f64 {
        if volume > 0.0 {
            let raw = saturated_concentration.min(solute_amount / volume);
            round_to_places(raw, decimal_places).min(saturated_concentration)
        } else {
            0.0
        }
    }

    /// Undissolved solute \[mol\] for the given inputs
    pub fn compute_precipitate_amount(
        volume: f64,
        solute_amount: f64,
        saturated_concentration: f64,
    ) -> f64 {
        if volume > 0.0 {
            (volume * (solute_amount / volume - saturated_concentration)).max(0.0)
        } else {
            solute_amount
        }
    }

    fn commit(&mut self, cause: ChangeCause, before: SolutionSnapshot) -> SolutionChange {
        self.recompute();
        SolutionChange {
            cause,
            before,
            after: self.snapshot(),
        }
    }

    fn recompute(&mut self) {
        let saturated = self.solute.saturated_concentration();

        self.concentration = Self::compute_concentration(
            self.volume,
            self.solute_amount,
            saturated,
            self.config.concentration_decimal_places,
        );
        self.precipitate_amount =
            Self::compute_precipitate_amount(self.volume, self.solute_amount, saturated);
        self.revision += 1;

        log::debug!(
            "Recomputed solution #{}: {} mol in {} L -> {} mol/L, {} mol precipitate",
            self.revision,
            self.solute_amount,
            self.volume,
            self.concentration,
            self.precipitate_amount
        );
    }
}

/// Validate, round and clamp one input value
fn accept(
    quantity: &'static str,
    value: f64,
    range: &RangeWithValue,
    decimal_places: u32,
) -> MolarityResult<f64> {
    if !value.is_finite() {
        log::warn!("Rejected non-finite {}: {}", quantity, value);
        return Err(MolarityError::DomainViolation { quantity, value });
    }
    if !range.contains(value) {
        log::warn!(
            "{} {} outside [{}, {}], clamping",
            quantity,
            value,
            range.min,
            range.max
        );
    }
    Ok(range.clamp(round_to_places(value, decimal_places)))
}

// =================================================================================================
// Tests
// =================================================================================================
