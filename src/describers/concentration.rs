//! Concentration classifier
//!
//! Seven regions relative to the selected solute's saturation concentration
//! `C_sat`: exactly zero, then six equal upper-inclusive slices of `(0, C_sat]`.
//! The table is rebuilt whenever the solute changes, since the scale follows the
//! saturation ceiling even when the concentration value stays put.
//!
//! The classifier also reports whether the last event flipped the saturation state.

use crate::describers::region::{RegionTable, RegionTracker};
use crate::error::MolarityResult;
use crate::model::{ChangeCause, Solution, SolutionChange};
use crate::narration::NarrationStrings;

pub const CONCENTRATION_REGION_COUNT: usize = 7;

/// Qualitative concentration classifier
#[derive(Debug, Clone)]
pub struct ConcentrationDescriber {
    decimal_places: u32,
    tracker: RegionTracker,
    saturated: bool,
    saturation_state_just_changed: bool,
}

impl ConcentrationDescriber {
    /// Bounds are rounded to `decimal_places`, the precision concentrations are kept at
    pub fn table(saturated_concentration: f64, decimal_places: u32) -> MolarityResult<RegionTable> {
        RegionTable::uniform(
            "concentration",
            saturated_concentration,
            CONCENTRATION_REGION_COUNT - 1,
            true,
            decimal_places,
        )
    }

    pub fn new(solution: &Solution) -> MolarityResult<Self> {
        let decimal_places = solution.config().concentration_decimal_places;
        let table = Self::table(solution.solute().saturated_concentration(), decimal_places)?;
        Ok(Self {
            decimal_places,
            tracker: RegionTracker::new(table, solution.concentration()),
            saturated: solution.is_saturated(),
            saturation_state_just_changed: false,
        })
    }

    /// Restart from the current state of `solution`, without transition history
    pub fn reinitialize(&mut self, solution: &Solution) -> MolarityResult<()> {
        let table = Self::table(solution.solute().saturated_concentration(), self.decimal_places)?;
        self.tracker = RegionTracker::new(table, solution.concentration());
        self.saturated = solution.is_saturated();
        self.saturation_state_just_changed = false;
        Ok(())
    }

    pub fn classify(&self, concentration: f64) -> usize {
        self.tracker.table().classify(concentration)
    }

    pub fn update(&mut self, new_concentration: f64, old_concentration: f64) -> MolarityResult<()> {
        self.tracker.update(new_concentration, old_concentration)
    }

    pub fn observe(&mut self, change: &SolutionChange) -> MolarityResult<()> {
        let (before, after) = (&change.before, &change.after);

        if change.cause == ChangeCause::Reset {
            let table = Self::table(after.solute.saturated_concentration(), self.decimal_places)?;
            self.tracker = RegionTracker::new(table, after.concentration);
            self.saturated = after.is_saturated();
            self.saturation_state_just_changed = false;
            return Ok(());
        }

        self.saturation_state_just_changed = before.is_saturated() != after.is_saturated();
        self.saturated = after.is_saturated();

        if change.solute_changed() {
            let table = Self::table(after.solute.saturated_concentration(), self.decimal_places)?;
            self.tracker
                .retable(table, before.concentration, after.concentration);
            Ok(())
        } else {
            self.tracker.follow(after.concentration, before.concentration)
        }
    }

    pub fn tracker(&self) -> &RegionTracker {
        &self.tracker
    }

    pub fn is_saturated(&self) -> bool {
        self.saturated
    }

    pub fn saturation_state_just_changed(&self) -> bool {
        self.saturation_state_just_changed
    }

    pub fn label<'a>(&self, strings: &'a NarrationStrings) -> &'a str {
        &strings.concentration_regions[self.tracker.current_region()]
    }
}

// =================================================================================================
// Tests
// =================================================================================================
