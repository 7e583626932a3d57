//! Precipitate ("solids") classifier
//!
//! Five equal upper-inclusive slices of `(0, P_max]`, where `P_max` is the largest
//! precipitate amount the configured ranges allow for the selected solute:
//!
//! ```text
//! P_max = n_max − C_sat · V_min
//! ```
//!
//! A solute that can never precipitate within the ranges (`P_max ≤ 0`) gets a nominal
//! 1 mol scale; its precipitate is always 0 and stays in region 0.

use crate::config::SimulationConfig;
use crate::describers::region::{RegionTable, RegionTracker};
use crate::error::MolarityResult;
use crate::model::{ChangeCause, Solution, SolutionChange};
use crate::narration::NarrationStrings;

pub const SOLIDS_REGION_COUNT: usize = 5;

const NOMINAL_SCALE: f64 = 1.0;

/// Precision of the slice bounds; precipitate amounts derive from 3-place inputs
const BOUND_DECIMAL_PLACES: u32 = 6;

/// Qualitative classifier for the undissolved solute
#[derive(Debug, Clone)]
pub struct SolidsDescriber {
    config: SimulationConfig,
    tracker: RegionTracker,
    saturation_state_just_changed: bool,
}

impl SolidsDescriber {
    /// Largest reachable precipitate amount \[mol\]
    pub fn max_precipitate(saturated_concentration: f64, config: &SimulationConfig) -> f64 {
        Solution::compute_precipitate_amount(
            config.volume_range.min,
            config.solute_amount_range.max,
            saturated_concentration,
        )
    }

    pub fn table(saturated_concentration: f64, config: &SimulationConfig) -> MolarityResult<RegionTable> {
        let top = Self::max_precipitate(saturated_concentration, config);
        let top = if top > 0.0 { top } else { NOMINAL_SCALE };
        RegionTable::uniform("solids", top, SOLIDS_REGION_COUNT, false, BOUND_DECIMAL_PLACES)
    }

    pub fn new(solution: &Solution) -> MolarityResult<Self> {
        let config = solution.config().clone();
        let table = Self::table(solution.solute().saturated_concentration(), &config)?;
        Ok(Self {
            tracker: RegionTracker::new(table, solution.precipitate_amount()),
            config,
            saturation_state_just_changed: false,
        })
    }

    /// Restart from the current state of `solution`, without transition history
    pub fn reinitialize(&mut self, solution: &Solution) -> MolarityResult<()> {
        let table = Self::table(solution.solute().saturated_concentration(), &self.config)?;
        self.tracker = RegionTracker::new(table, solution.precipitate_amount());
        self.saturation_state_just_changed = false;
        Ok(())
    }

    pub fn classify(&self, precipitate_amount: f64) -> usize {
        self.tracker.table().classify(precipitate_amount)
    }

    pub fn update(&mut self, new_amount: f64, old_amount: f64) -> MolarityResult<()> {
        self.tracker.update(new_amount, old_amount)
    }

    pub fn observe(&mut self, change: &SolutionChange) -> MolarityResult<()> {
        let (before, after) = (&change.before, &change.after);

        if change.cause == ChangeCause::Reset {
            let table = Self::table(after.solute.saturated_concentration(), &self.config)?;
            self.tracker = RegionTracker::new(table, after.precipitate_amount);
            self.saturation_state_just_changed = false;
            return Ok(());
        }

        self.saturation_state_just_changed = before.is_saturated() != after.is_saturated();

        if change.solute_changed() {
            let table = Self::table(after.solute.saturated_concentration(), &self.config)?;
            self.tracker
                .retable(table, before.precipitate_amount, after.precipitate_amount);
            Ok(())
        } else {
            self.tracker
                .follow(after.precipitate_amount, before.precipitate_amount)
        }
    }

    pub fn tracker(&self) -> &RegionTracker {
        &self.tracker
    }

    pub fn saturation_state_just_changed(&self) -> bool {
        self.saturation_state_just_changed
    }

    pub fn label<'a>(&self, strings: &'a NarrationStrings) -> &'a str {
        &strings.solids_regions[self.tracker.current_region()]
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chemistry::{Color, Solute, SoluteCatalog};
    use crate::config::round_to_places;
    use approx::assert_relative_eq;

    fn create_solution(saturated: f64) -> Solution {
        let solute = Solute::new("Test", None, saturated, Color::rgb(0, 0, 0), Color::rgb(0, 0, 0), "gray")
            .unwrap();
        Solution::new(solute, SimulationConfig::default()).unwrap()
    }

    #[test]
    fn test_max_precipitate() {
        let config = SimulationConfig::default();
        // 7.33 mol in 0.2 L at 5 mol/L leaves 6.33 mol undissolved
        assert_relative_eq!(SolidsDescriber::max_precipitate(5.0, &config), 6.33, epsilon = 1e-12);
    }

    #[test]
    fn test_solids_regions() {
        let solution = create_solution(5.0);
        let describer = SolidsDescriber::new(&solution).unwrap();
        let slice = 6.33 / 5.0;

        assert_eq!(describer.tracker().table().region_count(), SOLIDS_REGION_COUNT);
        assert_eq!(describer.classify(0.0), 0);
        assert_eq!(describer.classify(0.5 * slice), 0);
        assert_eq!(describer.classify(1.5 * slice), 1);
        assert_eq!(describer.classify(4.5 * slice), 4);
        assert_eq!(describer.classify(6.33), 4);
    }

    #[test]
    fn test_unreachable_saturation_uses_nominal_scale() {
        let config = SimulationConfig::default();
        assert!(SolidsDescriber::max_precipitate(40.0, &config) <= 0.0);

        let table = SolidsDescriber::table(40.0, &config).unwrap();
        assert_eq!(table.classify(0.0), 0);
    }

    #[test]
    fn test_slice_edges_of_catalog_solutes() {
        let config = SimulationConfig::default();
        let catalog = SoluteCatalog::standard().unwrap();

        for solute in catalog.list_solutes() {
            let saturated = solute.saturated_concentration();
            let top = SolidsDescriber::max_precipitate(saturated, &config);
            if top <= 0.0 {
                continue;
            }
            let table = SolidsDescriber::table(saturated, &config).unwrap();

            for k in 1..SOLIDS_REGION_COUNT {
                let edge = round_to_places(top * k as f64 / 5.0, BOUND_DECIMAL_PLACES);
                assert_eq!(table.classify(edge), k - 1, "{} at {} mol", solute.name(), edge);
                assert_eq!(table.classify(edge + 1e-5), k, "{} above {} mol", solute.name(), edge);
            }
        }
    }

    #[test]
    fn test_precipitate_tracking() {
        let mut solution = create_solution(1.0);
        let mut describer = SolidsDescriber::new(&solution).unwrap();

        let change = solution.set_solute_amount(3.0).unwrap().unwrap();
        describer.observe(&change).unwrap();

        assert!(describer.saturation_state_just_changed());
        assert_eq!(describer.tracker().just_increased(), Some(true));
        // 3.0 − 1.0 × 0.5 = 2.5 mol on a 7.13 mol scale
        assert_eq!(describer.tracker().current_region(), 1);
        assert_eq!(describer.label(&NarrationStrings::default()), "some");
    }
}
