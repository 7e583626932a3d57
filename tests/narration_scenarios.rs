//! Integration tests: end-to-end scenarios through the simulation sequencer
//!
//! A 5.0 mol/L reference solute keeps the expected numbers round.

use approx::assert_relative_eq;

use molarity::chemistry::Solvent;
use molarity::model::ChangeCause;
use molarity::narration::Control;

mod common;
use common::{record_changes, scenario_simulation, scenario_solution};

// =================================================================================================
// Model scenarios
// =================================================================================================

#[test]
fn test_scenario_a_pure_water() {
    let mut solution = scenario_solution();
    solution.set_solute_amount(0.0).unwrap();
    solution.set_volume(1.0).unwrap();

    assert_eq!(solution.concentration(), 0.0);
    assert_eq!(solution.precipitate_amount(), 0.0);
    assert!(!solution.is_saturated());
    assert_eq!(solution.color(), Solvent::WATER.color);
}

#[test]
fn test_scenario_b_saturated() {
    let mut solution = scenario_solution();
    solution.set_volume(1.0).unwrap();
    solution.set_solute_amount(6.0).unwrap();

    assert_eq!(solution.concentration(), 5.0);
    assert_relative_eq!(solution.precipitate_amount(), 1.0, epsilon = 1e-12);
    assert!(solution.is_saturated());
}

#[test]
fn test_scenario_c_halving_volume() {
    // Saturation at 5.0 mol/L: 4.0 mol/L stays unsaturated
    let mut simulation = scenario_simulation();
    simulation.set_volume(1.0).unwrap();
    simulation.set_solute_amount(2.0).unwrap();
    assert_eq!(simulation.solution().concentration(), 2.0);

    simulation.set_volume(0.5).unwrap();
    assert_eq!(simulation.solution().concentration(), 4.0);
    assert!(!simulation.describers().saturation_state_just_changed());

    // Saturation at 3.0 mol/L: the same move saturates the solution
    let mut simulation = scenario_simulation();
    simulation.select_solute_by_name("Weak solute").unwrap();
    simulation.set_volume(1.0).unwrap();
    simulation.set_solute_amount(2.0).unwrap();

    let text = simulation.set_volume(0.5).unwrap();
    assert_eq!(simulation.solution().concentration(), 3.0);
    assert!(simulation.describers().saturation_state_just_changed());
    assert_eq!(
        text.as_deref(),
        Some("Beaker holds less solution, now half full. Solution now saturated, a few solids in beaker.")
    );
}

#[test]
fn test_scenario_d_reset() {
    let mut simulation = scenario_simulation();
    let changes = record_changes(&mut simulation);
    let defaults = simulation.solution().snapshot();

    simulation.select_solute(1).unwrap();
    simulation.set_solute_amount(5.5).unwrap();
    simulation.set_volume(0.3).unwrap();
    simulation.set_show_values(true);
    assert_eq!(changes.borrow().len(), 3);

    assert!(simulation.reset().is_none());

    assert_eq!(simulation.solution().snapshot(), defaults);
    assert_eq!(changes.borrow().len(), 3);
    assert!(!simulation.orchestrator().show_values());
}

// =================================================================================================
// Narration session
// =================================================================================================

#[test]
fn test_slider_session() {
    let mut simulation = scenario_simulation();

    // Focus announces the current value once
    assert_eq!(
        simulation.focus(Control::Volume).as_deref(),
        Some("Solution volume, half full.")
    );

    let text = simulation.set_volume(0.6).unwrap().unwrap();
    assert_eq!(
        text,
        "Beaker holds more solution, now over half full. Solution less concentrated, now very slightly concentrated."
    );

    // 0.833 and 0.769 mol/L share the first slice, 0.6 L and 0.65 L the same fill level
    assert!(simulation.set_volume(0.65).unwrap().is_none());

    let text = simulation.set_volume(0.25).unwrap().unwrap();
    assert_eq!(
        text,
        "Beaker holds less solution, now low. Solution more concentrated, now somewhat concentrated."
    );

    simulation.blur(Control::Volume);
    assert!(simulation.focus(Control::Volume).is_some());
}

#[test]
fn test_one_announcement_per_saturating_action() {
    let mut simulation = scenario_simulation();
    let changes = record_changes(&mut simulation);

    // 3.0 mol in 0.5 L exceeds 5.0 mol/L
    let text = simulation.set_solute_amount(3.0).unwrap().unwrap();
    assert_eq!(text.matches("saturated").count(), 1);
    assert!(text.starts_with("Beaker holds more solute, now some solute."));

    let changes = changes.borrow();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].cause, ChangeCause::SoluteAmount);
    assert!(changes[0].saturation_changed());
}

#[test]
fn test_solute_swap_narration() {
    let mut simulation = scenario_simulation();
    simulation.set_solute_amount(2.0).unwrap();

    // 4.0 mol/L is under 5.0 but over 3.0
    let text = simulation.select_solute_by_name("Weak solute").unwrap().unwrap();
    assert!(text.starts_with("Weak solute selected. Solution is blue and saturated,"));
    assert!(text.ends_with("Solids formed."));

    let text = simulation.select_solute(0).unwrap().unwrap();
    assert_eq!(
        text,
        "Cobalt(II) nitrate selected. Solution is red, very concentrated. Solids dissolved."
    );
}

#[test]
fn test_values_mode() {
    let mut simulation = scenario_simulation();
    simulation.set_show_values(true);

    let text = simulation.set_solute_amount(1.25).unwrap().unwrap();
    assert_eq!(
        text,
        "Beaker holds more solute, now 1.250 moles of solute. Solution more concentrated, now 2.500 moles per liter."
    );
}
