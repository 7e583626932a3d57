//! Alert orchestration
//!
//! Decides, for each event, whether to announce something and composes a single
//! sentence group from the classifier flags and the solution state.
//!
//! # Rules
//!
//! - **Solute change**: always describe the new solute's color and saturation state;
//!   append a solids clause only when the swap flipped the saturation state.
//! - **Volume / solute amount change**: say "more" or "less" from the slider's
//!   direction flag, then the concentration state (qualitative labels, or values when
//!   "show values" is on). In qualitative mode an event that moved no region and did
//!   not flip saturation is not announced.
//! - **Focus**: one description per transition out of `Idle`.
//! - **Reset**: never announced; every control goes back to `Idle`.
//!
//! Each entry point returns at most one string, so a logical event is never narrated
//! twice.

use crate::describers::{Describers, RegionTracker};
use crate::error::MolarityResult;
use crate::model::{Solution, SolutionChange};
use crate::narration::lifecycle::{Control, SliderLifecycle};
use crate::narration::strings::{NarrationStrings, fill_in};

/// Composes narration from classifier state
#[derive(Debug, Clone)]
pub struct AlertOrchestrator {
    strings: NarrationStrings,
    show_values: bool,
    lifecycle: SliderLifecycle,
}

impl AlertOrchestrator {
    /// # Errors
    ///
    /// Configuration error if a pattern misses one of its placeholders.
    pub fn new(strings: NarrationStrings) -> MolarityResult<Self> {
        strings.validate()?;
        Ok(Self {
            strings,
            show_values: false,
            lifecycle: SliderLifecycle::default(),
        })
    }

    pub fn strings(&self) -> &NarrationStrings {
        &self.strings
    }

    pub fn show_values(&self) -> bool {
        self.show_values
    }

    /// Toggle between qualitative labels and numeric values
    pub fn set_show_values(&mut self, show_values: bool) {
        self.show_values = show_values;
    }

    pub fn lifecycle(&self) -> &SliderLifecycle {
        &self.lifecycle
    }

    // ======================================= Entry points =======================================

    pub fn on_solute_changed(
        &mut self,
        solution: &Solution,
        describers: &Describers,
    ) -> Option<String> {
        self.lifecycle.value_changed(Control::SoluteSelector);

        let mut text = fill_in(
            &self.strings.solute_selected_pattern,
            &[
                ("solute", solution.solute().name()),
                ("state", self.state_text(solution, describers).as_str()),
            ],
        );

        if describers.saturation_state_just_changed() {
            text.push(' ');
            text.push_str(if solution.is_saturated() {
                &self.strings.solids_formed_clause
            } else {
                &self.strings.solids_dissolved_clause
            });
        }
        Some(text)
    }

    pub fn on_volume_changed(
        &mut self,
        change: &SolutionChange,
        solution: &Solution,
        describers: &Describers,
    ) -> Option<String> {
        self.on_quantity_changed(Control::Volume, change, solution, describers)
    }

    pub fn on_solute_amount_changed(
        &mut self,
        change: &SolutionChange,
        solution: &Solution,
        describers: &Describers,
    ) -> Option<String> {
        self.on_quantity_changed(Control::SoluteAmount, change, solution, describers)
    }

    pub fn on_focus(
        &mut self,
        control: Control,
        solution: &Solution,
        describers: &Describers,
    ) -> Option<String> {
        if !self.lifecycle.focus(control) {
            return None;
        }

        let text = match control {
            Control::Volume => fill_in(
                &self.strings.volume_focus_pattern,
                &[("volume", self.volume_text(solution, describers).as_str())],
            ),
            Control::SoluteAmount => fill_in(
                &self.strings.solute_amount_focus_pattern,
                &[("amount", self.solute_amount_text(solution, describers).as_str())],
            ),
            Control::SoluteSelector => fill_in(
                &self.strings.solute_focus_pattern,
                &[("solute", solution.solute().name())],
            ),
        };
        Some(text)
    }

    pub fn on_blur(&mut self, control: Control) {
        self.lifecycle.blur(control);
    }

    /// Reset is not a user-meaningful change: nothing is announced
    pub fn on_reset(&mut self) -> Option<String> {
        self.lifecycle.reset();
        self.show_values = false;
        log::debug!("Narration suppressed for reset");
        None
    }

    // ======================================== Composition ========================================

    fn on_quantity_changed(
        &mut self,
        control: Control,
        change: &SolutionChange,
        solution: &Solution,
        describers: &Describers,
    ) -> Option<String> {
        self.lifecycle.value_changed(control);

        let tracker: &RegionTracker = match control {
            Control::Volume => describers.volume.tracker(),
            _ => describers.solute_amount.tracker(),
        };

        let saturation_flipped = describers.saturation_state_just_changed();
        let region_moved = tracker.just_changed_region()
            || describers.concentration.tracker().just_changed_region()
            || (solution.is_saturated() && describers.solids.tracker().just_changed_region());

        if !self.show_values && !region_moved && !saturation_flipped {
            log::debug!("{:?} change within the same regions, not announced", control);
            return None;
        }

        let direction = self.direction_word(tracker.just_increased()?);
        let quantity = match control {
            Control::Volume => fill_in(
                &self.strings.volume_changed_pattern,
                &[("change", direction), ("volume", self.volume_text(solution, describers).as_str())],
            ),
            _ => fill_in(
                &self.strings.solute_amount_changed_pattern,
                &[
                    ("change", direction),
                    ("amount", self.solute_amount_text(solution, describers).as_str()),
                ],
            ),
        };

        let concentration = self.concentration_clause(change, solution, describers);
        Some(format!("{} {}", quantity, concentration))
    }

    fn concentration_clause(
        &self,
        change: &SolutionChange,
        solution: &Solution,
        describers: &Describers,
    ) -> String {
        let solids = describers.solids.label(&self.strings);
        let concentration = self.concentration_text(solution, describers);

        if describers.saturation_state_just_changed() {
            if solution.is_saturated() {
                fill_in(&self.strings.saturation_reached_pattern, &[("solids", solids)])
            } else {
                fill_in(
                    &self.strings.saturation_lost_pattern,
                    &[("concentration", concentration.as_str())],
                )
            }
        } else if solution.is_saturated() {
            fill_in(&self.strings.still_saturated_pattern, &[("solids", solids)])
        } else if change.concentration_changed() {
            let increased = change.after.concentration > change.before.concentration;
            fill_in(
                &self.strings.concentration_changed_pattern,
                &[
                    ("change", self.direction_word(increased)),
                    ("concentration", concentration.as_str()),
                ],
            )
        } else {
            fill_in(
                &self.strings.concentration_unchanged_pattern,
                &[("concentration", concentration.as_str())],
            )
        }
    }

    /// Color and saturation state of the beaker contents
    fn state_text(&self, solution: &Solution, describers: &Describers) -> String {
        if solution.concentration() == 0.0 && !solution.is_saturated() {
            self.strings.clear_state.clone()
        } else if solution.is_saturated() {
            fill_in(
                &self.strings.saturated_state_pattern,
                &[
                    ("color", solution.solute().color_name()),
                    ("solids", describers.solids.label(&self.strings)),
                ],
            )
        } else {
            fill_in(
                &self.strings.unsaturated_state_pattern,
                &[
                    ("color", solution.solute().color_name()),
                    ("concentration", self.concentration_text(solution, describers).as_str()),
                ],
            )
        }
    }

    fn direction_word(&self, increased: bool) -> &str {
        if increased {
            &self.strings.more
        } else {
            &self.strings.less
        }
    }

    fn volume_text(&self, solution: &Solution, describers: &Describers) -> String {
        if self.show_values {
            let places = solution.config().volume_decimal_places as usize;
            let value = format!("{:.*}", places, solution.volume());
            fill_in(&self.strings.volume_value_pattern, &[("value", value.as_str())])
        } else {
            describers.volume.label(&self.strings).to_string()
        }
    }

    fn solute_amount_text(&self, solution: &Solution, describers: &Describers) -> String {
        if self.show_values {
            let places = solution.config().solute_amount_decimal_places as usize;
            let value = format!("{:.*}", places, solution.solute_amount());
            fill_in(&self.strings.solute_amount_value_pattern, &[("value", value.as_str())])
        } else {
            fill_in(
                &self.strings.solute_amount_region_pattern,
                &[("region", describers.solute_amount.label(&self.strings))],
            )
        }
    }

    fn concentration_text(&self, solution: &Solution, describers: &Describers) -> String {
        if self.show_values {
            let places = solution.config().concentration_decimal_places as usize;
            let value = format!("{:.*}", places, solution.concentration());
            fill_in(&self.strings.concentration_value_pattern, &[("value", value.as_str())])
        } else {
            describers.concentration.label(&self.strings).to_string()
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chemistry::{Color, Solute};
    use crate::config::SimulationConfig;

    struct Fixture {
        solution: Solution,
        describers: Describers,
        orchestrator: AlertOrchestrator,
    }

    impl Fixture {
        fn new(saturated: f64) -> Self {
            let solute = Solute::new(
                "Cobalt (II) nitrate",
                Some("Co(NO3)2"),
                saturated,
                Color::rgb(255, 225, 225),
                Color::rgb(255, 0, 0),
                "red",
            )
            .unwrap();
            let solution = Solution::new(solute, SimulationConfig::default()).unwrap();
            let describers = Describers::new(&solution).unwrap();
            let orchestrator = AlertOrchestrator::new(NarrationStrings::default()).unwrap();
            Self { solution, describers, orchestrator }
        }

        fn volume(&mut self, volume: f64) -> Option<String> {
            let change = self.solution.set_volume(volume).unwrap()?;
            self.describers.observe(&change).unwrap();
            self.orchestrator
                .on_volume_changed(&change, &self.solution, &self.describers)
        }

        fn amount(&mut self, amount: f64) -> Option<String> {
            let change = self.solution.set_solute_amount(amount).unwrap()?;
            self.describers.observe(&change).unwrap();
            self.orchestrator
                .on_solute_amount_changed(&change, &self.solution, &self.describers)
        }
    }

    #[test]
    fn test_volume_change_qualitative() {
        let mut fixture = Fixture::new(5.0);

        let text = fixture.volume(0.8).unwrap();
        assert_eq!(
            text,
            "Beaker holds more solution, now nearly full. \
             Solution less concentrated, now very slightly concentrated."
        );
    }

    #[test]
    fn test_same_region_change_not_announced() {
        let mut fixture = Fixture::new(5.0);
        fixture.volume(0.8);

        // 0.5 mol in 0.8 L and 0.85 L both sit in the first concentration slice
        assert!(fixture.volume(0.85).is_none());
    }

    #[test]
    fn test_values_mode_always_announces() {
        let mut fixture = Fixture::new(5.0);
        fixture.orchestrator.set_show_values(true);

        fixture.volume(0.8);
        let text = fixture.volume(1.0).unwrap();
        assert_eq!(
            text,
            "Beaker holds more solution, now 1.000 liters. Solution less concentrated, now 0.500 moles per liter."
        );
    }

    #[test]
    fn test_saturation_transition_in_one_sentence() {
        let mut fixture = Fixture::new(5.0);

        let text = fixture.amount(3.0).unwrap();
        assert!(text.starts_with("Beaker holds more solute, now some solute."));
        assert!(text.ends_with("Solution now saturated, a few solids in beaker."));

        let text = fixture.amount(2.0).unwrap();
        assert!(text.contains("Solution no longer saturated"));
    }

    #[test]
    fn test_solute_change_description() {
        let mut fixture = Fixture::new(5.0);
        fixture.amount(2.0);

        let weak = Solute::new("Weak", None, 1.0, Color::rgb(0, 0, 0), Color::rgb(0, 0, 255), "blue")
            .unwrap();
        let change = fixture.solution.set_solute(weak).unwrap();
        fixture.describers.observe(&change).unwrap();

        let text = fixture
            .orchestrator
            .on_solute_changed(&fixture.solution, &fixture.describers)
            .unwrap();
        assert_eq!(
            text,
            "Weak selected. Solution is blue and saturated, some solids in beaker. Solids formed."
        );
    }

    #[test]
    fn test_focus_announced_once() {
        let mut fixture = Fixture::new(5.0);
        let Fixture { solution, describers, orchestrator } = &mut fixture;

        assert_eq!(
            orchestrator.on_focus(Control::Volume, solution, describers).as_deref(),
            Some("Solution volume, half full.")
        );
        assert!(orchestrator.on_focus(Control::Volume, solution, describers).is_none());

        orchestrator.on_blur(Control::Volume);
        assert!(orchestrator.on_focus(Control::Volume, solution, describers).is_some());
    }

    #[test]
    fn test_reset_is_silent() {
        let mut fixture = Fixture::new(5.0);
        fixture.orchestrator.set_show_values(true);

        assert!(fixture.orchestrator.on_reset().is_none());
        assert!(!fixture.orchestrator.show_values());
    }
}
