//! Volume classifier
//!
//! One canonical table over the beaker fill level:
//!
//! | Region | Volume (L)          | Default label    |
//! |--------|---------------------|------------------|
//! | 0      | ≤ 0.200             | nearly empty     |
//! | 1      | (0.200, 0.350]      | low              |
//! | 2      | (0.350, 0.499]      | under half full  |
//! | 3      | (0.499, 0.500]      | half full        |
//! | 4      | (0.500, 0.750]      | over half full   |
//! | 5      | (0.750, 0.999]      | nearly full      |
//! | 6      | > 0.999             | full             |

use crate::describers::region::{RegionBound, RegionTable, RegionTracker};
use crate::error::MolarityResult;
use crate::model::{ChangeCause, SolutionChange};
use crate::narration::NarrationStrings;

pub const VOLUME_REGION_COUNT: usize = 7;

/// Fill-level classifier for the volume slider
#[derive(Debug, Clone)]
pub struct VolumeDescriber {
    tracker: RegionTracker,
}

impl VolumeDescriber {
    pub fn table() -> MolarityResult<RegionTable> {
        RegionTable::new(
            "volume",
            vec![
                RegionBound::at_most(0.200),
                RegionBound::at_most(0.350),
                RegionBound::at_most(0.499),
                RegionBound::at_most(0.500),
                RegionBound::at_most(0.750),
                RegionBound::at_most(0.999),
            ],
        )
    }

    pub fn new(volume: f64) -> MolarityResult<Self> {
        Ok(Self {
            tracker: RegionTracker::new(Self::table()?, volume),
        })
    }

    pub fn classify(&self, volume: f64) -> usize {
        self.tracker.table().classify(volume)
    }

    pub fn update(&mut self, new_volume: f64, old_volume: f64) -> MolarityResult<()> {
        self.tracker.update(new_volume, old_volume)
    }

    pub fn observe(&mut self, change: &SolutionChange) -> MolarityResult<()> {
        match change.cause {
            ChangeCause::Reset => {
                self.tracker.reinitialize(change.after.volume);
                Ok(())
            }
            _ => self.tracker.follow(change.after.volume, change.before.volume),
        }
    }

    pub fn reinitialize(&mut self, volume: f64) {
        self.tracker.reinitialize(volume);
    }

    pub fn tracker(&self) -> &RegionTracker {
        &self.tracker
    }

    pub fn label<'a>(&self, strings: &'a NarrationStrings) -> &'a str {
        &strings.volume_regions[self.tracker.current_region()]
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_boundaries() {
        let describer = VolumeDescriber::new(0.5).unwrap();
        let strings = NarrationStrings::default();

        let expected = [
            (0.200, "nearly empty"),
            (0.201, "low"),
            (0.350, "low"),
            (0.351, "under half full"),
            (0.499, "under half full"),
            (0.500, "half full"),
            (0.501, "over half full"),
            (0.750, "over half full"),
            (0.999, "nearly full"),
            (1.000, "full"),
        ];

        for (volume, label) in expected {
            let region = describer.classify(volume);
            assert_eq!(strings.volume_regions[region], label, "volume {}", volume);
        }
    }

    #[test]
    fn test_half_full_label() {
        let describer = VolumeDescriber::new(0.5).unwrap();
        assert_eq!(describer.label(&NarrationStrings::default()), "half full");
        assert_eq!(describer.tracker().table().region_count(), VOLUME_REGION_COUNT);
    }

    #[test]
    fn test_volume_transitions() {
        let mut describer = VolumeDescriber::new(0.5).unwrap();

        describer.update(0.6, 0.5).unwrap();
        assert!(describer.tracker().just_changed_region());
        assert_eq!(describer.tracker().just_increased(), Some(true));

        describer.update(0.7, 0.6).unwrap();
        assert!(!describer.tracker().just_changed_region());
    }
}
