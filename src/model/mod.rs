//! Solution model
//!
//! The single source of truth of the simulation. [`Solution`] owns the three
//! independent inputs and keeps the derived quantities consistent with them:
//!
//! ```text
//! solute ─────────┐
//! solute amount ──┼──► concentration, precipitate amount ──► saturation, color
//! volume ─────────┘
//! ```
//!
//! The dependency graph is fixed and evaluated synchronously on every accepted
//! mutation. Mutations report what happened through [`SolutionChange`] values;
//! consumers (classifiers, narration, sound) only read them.

pub mod change;
pub mod solution;

pub use change::{ChangeCause, SolutionChange, SolutionSnapshot};
pub use solution::Solution;
