//! All classifiers of one simulation, updated together

use crate::describers::concentration::ConcentrationDescriber;
use crate::describers::solids::SolidsDescriber;
use crate::describers::solute_amount::SoluteAmountDescriber;
use crate::describers::volume::VolumeDescriber;
use crate::error::MolarityResult;
use crate::model::{Solution, SolutionChange};

/// The four classifiers, one per observed quantity
#[derive(Debug, Clone)]
pub struct Describers {
    pub concentration: ConcentrationDescriber,
    pub volume: VolumeDescriber,
    pub solute_amount: SoluteAmountDescriber,
    pub solids: SolidsDescriber,
}

impl Describers {
    pub fn new(solution: &Solution) -> MolarityResult<Self> {
        Ok(Self {
            concentration: ConcentrationDescriber::new(solution)?,
            volume: VolumeDescriber::new(solution.volume())?,
            solute_amount: SoluteAmountDescriber::new(
                &solution.config().solute_amount_range,
                solution.solute_amount(),
            )?,
            solids: SolidsDescriber::new(solution)?,
        })
    }

    /// Route one change to every classifier
    ///
    /// All classifiers are updated even if one of them reports an error; the first
    /// error is returned.
    pub fn observe(&mut self, change: &SolutionChange) -> MolarityResult<()> {
        let concentration = self.concentration.observe(change);
        let volume = self.volume.observe(change);
        let solute_amount = self.solute_amount.observe(change);
        let solids = self.solids.observe(change);

        concentration.and(volume).and(solute_amount).and(solids)
    }

    /// Restart every classifier from the current state of `solution`
    ///
    /// Clears all transition and direction flags, whether or not the state moved.
    pub fn reinitialize(&mut self, solution: &Solution) -> MolarityResult<()> {
        self.volume.reinitialize(solution.volume());
        self.solute_amount.reinitialize(solution.solute_amount());
        self.concentration.reinitialize(solution)?;
        self.solids.reinitialize(solution)
    }

    /// Whether the saturation state flipped on the last event
    pub fn saturation_state_just_changed(&self) -> bool {
        self.concentration.saturation_state_just_changed()
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chemistry::SoluteCatalog;
    use crate::config::SimulationConfig;

    #[test]
    fn test_transition_flags_follow_classification() {
        let catalog = SoluteCatalog::standard().unwrap();
        let mut solution = Solution::from_catalog(&catalog, SimulationConfig::default()).unwrap();
        let mut describers = Describers::new(&solution).unwrap();

        let volumes = [0.55, 0.6, 0.8, 0.95, 1.0, 0.45, 0.3, 0.2];
        for volume in volumes {
            let before = describers.volume.classify(solution.volume());
            let change = solution.set_volume(volume).unwrap().unwrap();
            describers.observe(&change).unwrap();

            let after = describers.volume.classify(volume);
            assert_eq!(
                describers.volume.tracker().just_changed_region(),
                before != after,
                "volume {}",
                volume
            );
        }
    }

    #[test]
    fn test_only_moved_quantities_change_region() {
        let catalog = SoluteCatalog::standard().unwrap();
        let mut solution = Solution::from_catalog(&catalog, SimulationConfig::default()).unwrap();
        let mut describers = Describers::new(&solution).unwrap();

        let change = solution.set_solute_amount(7.0).unwrap().unwrap();
        describers.observe(&change).unwrap();

        assert!(describers.solute_amount.tracker().just_changed_region());
        assert!(!describers.volume.tracker().just_changed_region());
        assert!(describers.saturation_state_just_changed());
    }

    #[test]
    fn test_reinitialize_clears_all_flags() {
        let catalog = SoluteCatalog::standard().unwrap();
        let mut solution = Solution::from_catalog(&catalog, SimulationConfig::default()).unwrap();
        let mut describers = Describers::new(&solution).unwrap();

        let change = solution.set_solute_amount(7.0).unwrap().unwrap();
        describers.observe(&change).unwrap();
        let change = solution.set_volume(0.3).unwrap().unwrap();
        describers.observe(&change).unwrap();

        describers.reinitialize(&solution).unwrap();

        assert!(!describers.saturation_state_just_changed());
        assert!(!describers.solids.saturation_state_just_changed());
        assert_eq!(describers.volume.tracker().just_increased(), None);
        assert_eq!(describers.solute_amount.tracker().just_increased(), None);
        assert_eq!(describers.concentration.tracker().just_increased(), None);
        assert_eq!(describers.solids.tracker().just_increased(), None);
        assert!(!describers.volume.tracker().just_changed_region());
        assert_eq!(
            describers.solids.tracker().current_region(),
            describers.solids.classify(solution.precipitate_amount())
        );
    }
}
