//! Change notifications emitted by the solution model
//!
//! Every accepted mutation produces exactly one [`SolutionChange`] holding the
//! complete state before and after the mutation. Downstream consumers never see a
//! partially updated solution.

use crate::chemistry::Solute;

/// Which input triggered a change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeCause {
    Solute,
    SoluteAmount,
    Volume,
    /// All three inputs restored at once
    Reset,
}

/// Complete, consistent view of the solution at one instant
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionSnapshot {
    pub solute: Solute,
    /// Solute amount \[mol\]
    pub solute_amount: f64,
    /// Volume \[L\]
    pub volume: f64,
    /// Rounded concentration \[mol/L\]
    pub concentration: f64,
    /// Undissolved solute \[mol\]
    pub precipitate_amount: f64,
}

impl SolutionSnapshot {
    pub fn is_saturated(&self) -> bool {
        self.precipitate_amount != 0.0
    }
}

/// One accepted mutation of the solution
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionChange {
    pub cause: ChangeCause,
    pub before: SolutionSnapshot,
    pub after: SolutionSnapshot,
}

impl SolutionChange {
    pub fn solute_changed(&self) -> bool {
        self.before.solute != self.after.solute
    }

    pub fn solute_amount_changed(&self) -> bool {
        self.before.solute_amount != self.after.solute_amount
    }

    pub fn volume_changed(&self) -> bool {
        self.before.volume != self.after.volume
    }

    pub fn concentration_changed(&self) -> bool {
        self.before.concentration != self.after.concentration
    }

    pub fn precipitate_changed(&self) -> bool {
        self.before.precipitate_amount != self.after.precipitate_amount
    }

    pub fn saturation_changed(&self) -> bool {
        self.before.is_saturated() != self.after.is_saturated()
    }

    pub fn is_reset(&self) -> bool {
        self.cause == ChangeCause::Reset
    }
}
