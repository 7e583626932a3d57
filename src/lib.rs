//! molarity: Solution Molarity Simulation
//!
//! The core of an interactive molarity simulation: a beaker of solution whose
//! concentration follows the user's choice of solute, solute amount and volume,
//! together with the qualitative classifiers and narration that describe it.
//!
//! # Architecture
//!
//! molarity is built on two core principles:
//!
//! 1. **One source of truth**
//!    - [`model::Solution`] owns the inputs and derives concentration and precipitate
//!    - Everything else reads the [`model::SolutionChange`] a mutation returns
//!
//! 2. **Composition over hierarchy**
//!    - One region classifier parameterized by its table, four describers built on it
//!    - Narration strings are injected, never looked up globally
//!
//! # Quick Start
//!
//! ```rust
//! use molarity::prelude::*;
//!
//! # fn main() -> MolarityResult<()> {
//! // 1. Standard catalog, default ranges, English narration
//! let mut simulation = MolaritySimulation::standard()?;
//!
//! // 2. User actions return at most one announcement
//! simulation.set_solute_amount(4.0)?;
//! let text = simulation.set_volume(0.6)?;
//! assert!(text.is_some());
//!
//! // 3. Read the model
//! let solution = simulation.solution();
//! assert!(solution.concentration() <= solution.solute().saturated_concentration());
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`chemistry`]: solutes, solvent and the catalog
//! - [`model`]: the solution and its change events
//! - [`describers`]: qualitative region classifiers
//! - [`narration`]: strings, slider lifecycle and the alert orchestrator
//! - [`simulation`]: the event sequencer tying them together
//! - [`analysis`]: saturation curves and concentration maps
//! - [`output`]: CSV export

pub mod config;
pub mod error;

// Core modules
pub mod chemistry;
pub mod describers;
pub mod model;
pub mod narration;
pub mod simulation;

pub mod analysis;
pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use molarity::prelude::*;
    //! ```
    pub use crate::chemistry::{Color, Solute, SoluteCatalog, Solvent};
    pub use crate::config::{RangeWithValue, SimulationConfig};
    pub use crate::describers::Describers;
    pub use crate::error::{MolarityError, MolarityResult};
    pub use crate::model::{ChangeCause, Solution, SolutionChange, SolutionSnapshot};
    pub use crate::narration::{AlertOrchestrator, Control, NarrationStrings};
    pub use crate::simulation::{MolaritySimulation, SolutionObserver};
}
