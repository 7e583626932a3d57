//! Solute amount classifier
//!
//! Regions are fractions of the configured solute amount range, so the same
//! table describes any range:
//!
//! | Region | Fraction of range | Default label        |
//! |--------|-------------------|----------------------|
//! | 0      | 0 (minimum)       | no                   |
//! | 1      | ≤ 5 %             | a tiny amount of     |
//! | 2      | ≤ 25 %            | a small amount of    |
//! | 3      | ≤ 50 %            | some                 |
//! | 4      | ≤ 75 %            | a bunch of           |
//! | 5      | < 100 %           | a lot of             |
//! | 6      | maximum           | the maximum amount of|

use crate::config::RangeWithValue;
use crate::describers::region::{RegionBound, RegionTable, RegionTracker};
use crate::error::{MolarityError, MolarityResult};
use crate::model::{ChangeCause, SolutionChange};
use crate::narration::NarrationStrings;

pub const SOLUTE_AMOUNT_REGION_COUNT: usize = 7;

const FRACTIONS: [f64; 4] = [0.05, 0.25, 0.5, 0.75];

/// Quantity classifier for the solute amount slider
#[derive(Debug, Clone)]
pub struct SoluteAmountDescriber {
    tracker: RegionTracker,
}

impl SoluteAmountDescriber {
    pub fn table(range: &RangeWithValue) -> MolarityResult<RegionTable> {
        if range.length() <= 0.0 {
            return Err(MolarityError::invalid_table(
                "solute amount",
                format!("range [{}, {}] has no extent", range.min, range.max),
            ));
        }

        let mut bounds = vec![RegionBound::at_most(range.min)];
        bounds.extend(
            FRACTIONS
                .iter()
                .map(|f| RegionBound::at_most(range.min + f * range.length())),
        );
        bounds.push(RegionBound::below(range.max));

        RegionTable::new("solute amount", bounds)
    }

    pub fn new(range: &RangeWithValue, solute_amount: f64) -> MolarityResult<Self> {
        Ok(Self {
            tracker: RegionTracker::new(Self::table(range)?, solute_amount),
        })
    }

    pub fn classify(&self, solute_amount: f64) -> usize {
        self.tracker.table().classify(solute_amount)
    }

    pub fn update(&mut self, new_amount: f64, old_amount: f64) -> MolarityResult<()> {
        self.tracker.update(new_amount, old_amount)
    }

    pub fn observe(&mut self, change: &SolutionChange) -> MolarityResult<()> {
        match change.cause {
            ChangeCause::Reset => {
                self.tracker.reinitialize(change.after.solute_amount);
                Ok(())
            }
            _ => self
                .tracker
                .follow(change.after.solute_amount, change.before.solute_amount),
        }
    }

    pub fn reinitialize(&mut self, solute_amount: f64) {
        self.tracker.reinitialize(solute_amount);
    }

    pub fn tracker(&self) -> &RegionTracker {
        &self.tracker
    }

    pub fn label<'a>(&self, strings: &'a NarrationStrings) -> &'a str {
        &strings.solute_amount_regions[self.tracker.current_region()]
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SOLUTE_AMOUNT_RANGE;

    #[test]
    fn test_amount_regions_on_unit_range() {
        let range = RangeWithValue::new(0.0, 1.0, 0.5);
        let describer = SoluteAmountDescriber::new(&range, 0.5).unwrap();

        assert_eq!(describer.classify(0.0), 0);
        assert_eq!(describer.classify(0.05), 1);
        assert_eq!(describer.classify(0.2), 2);
        assert_eq!(describer.classify(0.5), 3);
        assert_eq!(describer.classify(0.75), 4);
        assert_eq!(describer.classify(0.999), 5);
        assert_eq!(describer.classify(1.0), 6);
    }

    #[test]
    fn test_default_range_labels() {
        let describer = SoluteAmountDescriber::new(&SOLUTE_AMOUNT_RANGE, 0.5).unwrap();
        let strings = NarrationStrings::default();

        assert_eq!(describer.tracker().table().region_count(), SOLUTE_AMOUNT_REGION_COUNT);
        // 0.5 of 7.33 mol is under 25 %
        assert_eq!(describer.label(&strings), "a small amount of");
        assert_eq!(strings.solute_amount_regions[describer.classify(7.33)], "the maximum amount of");
    }

    #[test]
    fn test_empty_range_rejected() {
        let range = RangeWithValue::new(1.0, 1.0, 1.0);
        assert!(SoluteAmountDescriber::new(&range, 1.0).is_err());
    }
}
