//! Simulation sequencer
//!
//! [`MolaritySimulation`] owns the solution, its classifiers and the orchestrator,
//! and serializes every user action:
//!
//! ```text
//! input mutation → recompute → classifiers → narration → observers
//! ```
//!
//! Each step completes before the next action is processed. Observers (sound
//! producers, loggers, test probes) only read the change and the solution.
//!
//! # Example
//!
//! ```rust
//! use molarity::simulation::MolaritySimulation;
//!
//! let mut simulation = MolaritySimulation::standard().unwrap();
//!
//! let text = simulation.set_volume(0.9).unwrap();
//! assert_eq!(
//!     text.as_deref(),
//!     Some("Beaker holds more solution, now nearly full. Solution less concentrated, now very slightly concentrated.")
//! );
//!
//! // Reset is never announced
//! assert!(simulation.reset().is_none());
//! ```

use crate::chemistry::{Solute, SoluteCatalog};
use crate::config::SimulationConfig;
use crate::describers::Describers;
use crate::error::{MolarityError, MolarityResult};
use crate::model::{ChangeCause, Solution, SolutionChange};
use crate::narration::{AlertOrchestrator, Control, NarrationStrings};

/// Consumer of accepted solution changes
///
/// Not called while a reset is in progress.
pub trait SolutionObserver {
    fn solution_changed(&mut self, change: &SolutionChange, solution: &Solution);
}

impl<F> SolutionObserver for F
where
    F: FnMut(&SolutionChange, &Solution),
{
    fn solution_changed(&mut self, change: &SolutionChange, solution: &Solution) {
        self(change, solution)
    }
}

/// Single-threaded event sequencer
pub struct MolaritySimulation {
    catalog: SoluteCatalog,
    solution: Solution,
    describers: Describers,
    orchestrator: AlertOrchestrator,
    observers: Vec<Box<dyn SolutionObserver>>,
    reset_in_progress: bool,
}

impl MolaritySimulation {
    /// Assemble a simulation; the first catalog entry is the default solute
    ///
    /// # Errors
    ///
    /// Any configuration error: invalid ranges, classifier tables or narration strings.
    pub fn new(
        catalog: SoluteCatalog,
        config: SimulationConfig,
        strings: NarrationStrings,
    ) -> MolarityResult<Self> {
        let solution = Solution::from_catalog(&catalog, config)?;
        let describers = Describers::new(&solution)?;
        let orchestrator = AlertOrchestrator::new(strings)?;

        Ok(Self {
            catalog,
            solution,
            describers,
            orchestrator,
            observers: Vec::new(),
            reset_in_progress: false,
        })
    }

    /// Standard catalog, default ranges and English strings
    pub fn standard() -> MolarityResult<Self> {
        Self::new(
            SoluteCatalog::standard()?,
            SimulationConfig::default(),
            NarrationStrings::default(),
        )
    }

    pub fn add_observer(&mut self, observer: Box<dyn SolutionObserver>) {
        self.observers.push(observer);
    }

    // ========================================== Getters ==========================================

    pub fn catalog(&self) -> &SoluteCatalog {
        &self.catalog
    }

    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    pub fn describers(&self) -> &Describers {
        &self.describers
    }

    pub fn orchestrator(&self) -> &AlertOrchestrator {
        &self.orchestrator
    }

    pub fn is_reset_in_progress(&self) -> bool {
        self.reset_in_progress
    }

    // ========================================== Actions ==========================================

    /// Select the catalog entry at `index`
    ///
    /// # Errors
    ///
    /// `InvalidSolute` if the catalog has no such entry.
    pub fn select_solute(&mut self, index: usize) -> MolarityResult<Option<String>> {
        let solute = self.catalog.get(index).cloned().ok_or_else(|| {
            MolarityError::invalid_solute(
                format!("#{}", index),
                format!("catalog holds {} solutes", self.catalog.len()),
            )
        })?;
        Ok(self.set_solute(solute))
    }

    /// Select a catalog entry by name
    ///
    /// # Errors
    ///
    /// `InvalidSolute` if no catalog entry has this name.
    pub fn select_solute_by_name(&mut self, name: &str) -> MolarityResult<Option<String>> {
        let solute = self
            .catalog
            .find(name)
            .cloned()
            .ok_or_else(|| MolarityError::invalid_solute(name, "not in catalog"))?;
        Ok(self.set_solute(solute))
    }

    pub fn set_solute(&mut self, solute: Solute) -> Option<String> {
        let change = self.solution.set_solute(solute)?;
        self.dispatch(change)
    }

    /// # Errors
    ///
    /// `DomainViolation` for non-finite input.
    pub fn set_solute_amount(&mut self, amount: f64) -> MolarityResult<Option<String>> {
        Ok(match self.solution.set_solute_amount(amount)? {
            Some(change) => self.dispatch(change),
            None => None,
        })
    }

    /// # Errors
    ///
    /// `DomainViolation` for non-finite input.
    pub fn set_volume(&mut self, volume: f64) -> MolarityResult<Option<String>> {
        Ok(match self.solution.set_volume(volume)? {
            Some(change) => self.dispatch(change),
            None => None,
        })
    }

    pub fn focus(&mut self, control: Control) -> Option<String> {
        self.orchestrator
            .on_focus(control, &self.solution, &self.describers)
    }

    pub fn blur(&mut self, control: Control) {
        self.orchestrator.on_blur(control);
    }

    pub fn set_show_values(&mut self, show_values: bool) {
        self.orchestrator.set_show_values(show_values);
    }

    /// Restore the defaults
    ///
    /// Classifiers are reinitialized; narration and observers are skipped.
    pub fn reset(&mut self) -> Option<String> {
        self.reset_in_progress = true;

        if let Some(change) = self.solution.reset() {
            self.dispatch(change);
        }
        // A reset from the defaults emits no change but still ends the drag history
        if let Err(err) = self.describers.reinitialize(&self.solution) {
            log::error!("Classifier reinitialization failed on reset: {}", err);
        }
        let narration = self.orchestrator.on_reset();

        self.reset_in_progress = false;
        narration
    }

    // ========================================= Sequencing ========================================

    fn dispatch(&mut self, change: SolutionChange) -> Option<String> {
        if let Err(err) = self.describers.observe(&change) {
            log::error!("Classifier update failed for {:?}: {}", change.cause, err);
        }

        if self.reset_in_progress {
            log::debug!("Reset in progress, narration and observers skipped");
            return None;
        }

        let narration = match change.cause {
            ChangeCause::Solute => self
                .orchestrator
                .on_solute_changed(&self.solution, &self.describers),
            ChangeCause::SoluteAmount => self.orchestrator.on_solute_amount_changed(
                &change,
                &self.solution,
                &self.describers,
            ),
            ChangeCause::Volume => {
                self.orchestrator
                    .on_volume_changed(&change, &self.solution, &self.describers)
            }
            ChangeCause::Reset => None,
        };

        for observer in self.observers.iter_mut() {
            observer.solution_changed(&change, &self.solution);
        }
        narration
    }
}

impl std::fmt::Debug for MolaritySimulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MolaritySimulation")
            .field("solute", &self.solution.solute().name())
            .field("solute amount", &self.solution.solute_amount())
            .field("volume", &self.solution.volume())
            .field("observers", &self.observers.len())
            .field("reset in progress", &self.reset_in_progress)
            .finish()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
