//! Simulation configuration
//!
//! Domain ranges and decimal precision of the three independent inputs.
//! The defaults reproduce the named constants below; a custom configuration
//! must pass [`SimulationConfig::validate`] before a [`Solution`](crate::model::Solution)
//! accepts it.
//!
//! # Example
//!
//! ```rust
//! use molarity::config::{RangeWithValue, SimulationConfig};
//!
//! let config = SimulationConfig::default()
//!     .with_volume_range(RangeWithValue::new(0.1, 2.0, 1.0))
//!     .with_volume_decimal_places(2);
//!
//! assert!(config.validate().is_ok());
//! ```

use crate::error::{MolarityError, MolarityResult};

// =================================================================================================
// Named constants
// =================================================================================================

/// Solute amount domain (mol)
pub const SOLUTE_AMOUNT_RANGE: RangeWithValue = RangeWithValue::new(0.0, 7.33, 0.5);

/// Solution volume domain (L). The lower bound keeps concentration defined.
pub const SOLUTION_VOLUME_RANGE: RangeWithValue = RangeWithValue::new(0.2, 1.0, 0.5);

/// Decimal places kept on the concentration value
pub const CONCENTRATION_DECIMAL_PLACES: u32 = 3;

/// Decimal places accepted on the volume input
pub const VOLUME_DECIMAL_PLACES: u32 = 3;

/// Decimal places accepted on the solute amount input
pub const SOLUTE_AMOUNT_DECIMAL_PLACES: u32 = 3;

/// Above this, `10^places` stops being exact in f64 arithmetic
const MAX_DECIMAL_PLACES: u32 = 10;

/// Round `value` to a fixed number of decimal places
pub fn round_to_places(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

// =================================================================================================
// Range with default value
// =================================================================================================

/// Closed numeric range with the value used at construction and reset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeWithValue {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl RangeWithValue {
    pub const fn new(min: f64, max: f64, default: f64) -> Self {
        Self { min, max, default }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    /// Check bounds are finite, ordered and contain the default
    pub fn validate(&self, name: &str) -> MolarityResult<()> {
        if !(self.min.is_finite() && self.max.is_finite() && self.default.is_finite()) {
            return Err(MolarityError::InvalidConfiguration(format!(
                "{} range must be finite, got [{}, {}] default {}",
                name, self.min, self.max, self.default
            )));
        }
        if self.min > self.max {
            return Err(MolarityError::InvalidConfiguration(format!(
                "{} range is inverted: min {} > max {}",
                name, self.min, self.max
            )));
        }
        if !self.contains(self.default) {
            return Err(MolarityError::InvalidConfiguration(format!(
                "{} default {} is outside [{}, {}]",
                name, self.default, self.min, self.max
            )));
        }
        Ok(())
    }
}

// =================================================================================================
// Simulation configuration
// =================================================================================================

/// Ranges and precision of the solution inputs
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Solute amount range (mol)
    pub solute_amount_range: RangeWithValue,

    /// Volume range (L), strictly positive
    pub volume_range: RangeWithValue,

    /// Decimal places accepted on the solute amount
    pub solute_amount_decimal_places: u32,

    /// Decimal places accepted on the volume
    pub volume_decimal_places: u32,

    /// Decimal places kept on the concentration
    pub concentration_decimal_places: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            solute_amount_range: SOLUTE_AMOUNT_RANGE,
            volume_range: SOLUTION_VOLUME_RANGE,
            solute_amount_decimal_places: SOLUTE_AMOUNT_DECIMAL_PLACES,
            volume_decimal_places: VOLUME_DECIMAL_PLACES,
            concentration_decimal_places: CONCENTRATION_DECIMAL_PLACES,
        }
    }
}

impl SimulationConfig {
    /// Builder pattern: set solute amount range
    pub fn with_solute_amount_range(mut self, range: RangeWithValue) -> Self {
        self.solute_amount_range = range;
        self
    }

    /// Builder pattern: set volume range
    pub fn with_volume_range(mut self, range: RangeWithValue) -> Self {
        self.volume_range = range;
        self
    }

    /// Builder pattern: set volume precision
    pub fn with_volume_decimal_places(mut self, places: u32) -> Self {
        self.volume_decimal_places = places;
        self
    }

    /// Builder pattern: set solute amount precision
    pub fn with_solute_amount_decimal_places(mut self, places: u32) -> Self {
        self.solute_amount_decimal_places = places;
        self
    }

    /// Builder pattern: set concentration precision
    pub fn with_concentration_decimal_places(mut self, places: u32) -> Self {
        self.concentration_decimal_places = places;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> MolarityResult<()> {
        self.solute_amount_range.validate("solute amount")?;
        self.volume_range.validate("volume")?;

        if self.solute_amount_range.min < 0.0 {
            return Err(MolarityError::InvalidConfiguration(format!(
                "solute amount cannot be negative, range starts at {}",
                self.solute_amount_range.min
            )));
        }
        if self.volume_range.min <= 0.0 {
            return Err(MolarityError::InvalidConfiguration(format!(
                "volume must stay positive, range starts at {}",
                self.volume_range.min
            )));
        }

        for (name, places) in [
            ("solute amount", self.solute_amount_decimal_places),
            ("volume", self.volume_decimal_places),
            ("concentration", self.concentration_decimal_places),
        ] {
            if places > MAX_DECIMAL_PLACES {
                return Err(MolarityError::InvalidConfiguration(format!(
                    "{} precision of {} decimal places exceeds {}",
                    name, places, MAX_DECIMAL_PLACES
                )));
            }
        }
        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
