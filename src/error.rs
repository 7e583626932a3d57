//! Error types
//!
//! The crate distinguishes three families of failure:
//!
//! - **Configuration errors** (`InvalidSolute`, `InvalidRegionTable`, `InvalidConfiguration`):
//!   detected while building catalogs, tables and configurations. They are fatal and must
//!   prevent the simulation from starting.
//! - **Domain violations** (`DomainViolation`): an input that cannot be brought back into its
//!   range by clamping (NaN, infinities). Finite out-of-range values are clamped and logged
//!   instead of being reported as errors.
//! - **Invariant violations** (`InvariantViolation`): internal-consistency errors. They
//!   trigger a debug assertion in development builds and degrade to a no-op in release builds.

use thiserror::Error;

/// Result type used across the crate
pub type MolarityResult<T> = Result<T, MolarityError>;

/// Molarity simulation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MolarityError {
    /// Solute definition rejected at load time
    #[error("invalid solute '{name}': {reason}")]
    InvalidSolute { name: String, reason: String },

    /// Region table with gaps, overlaps or mismatched labels
    #[error("invalid region table '{table}': {reason}")]
    InvalidRegionTable { table: &'static str, reason: String },

    /// Ranges or precision constants that cannot describe a valid simulation
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Input that cannot be clamped into its domain
    #[error("{quantity} cannot be set to {value}")]
    DomainViolation { quantity: &'static str, value: f64 },

    /// Internal-consistency error
    #[error("internal consistency error in {context}: {details}")]
    InvariantViolation { context: &'static str, details: String },
}

impl MolarityError {
    pub fn invalid_solute(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSolute {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_table(table: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidRegionTable {
            table,
            reason: reason.into(),
        }
    }

    pub fn invariant(context: &'static str, details: impl Into<String>) -> Self {
        Self::InvariantViolation {
            context,
            details: details.into(),
        }
    }

    /// True for the errors that must stop the simulation from launching
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidSolute { .. }
                | Self::InvalidRegionTable { .. }
                | Self::InvalidConfiguration(_)
        )
    }
}

// =================================================================================================
// Tests
// =================================================================================================
