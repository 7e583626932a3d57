//! Shared solutes and simulations for integration tests

use std::cell::RefCell;
use std::rc::Rc;

use molarity::chemistry::{Color, Solute, SoluteCatalog};
use molarity::config::SimulationConfig;
use molarity::model::{Solution, SolutionChange};
use molarity::narration::NarrationStrings;
use molarity::simulation::MolaritySimulation;

/// Reference solute with a round 5.0 mol/L saturation concentration
pub fn cobalt_nitrate() -> Solute {
    Solute::new(
        "Cobalt(II) nitrate",
        Some("Co(NO3)2"),
        5.0,
        Color::rgb(255, 225, 225),
        Color::rgb(255, 0, 0),
        "red",
    )
    .expect("valid solute")
}

/// Saturates at 3.0 mol/L, inside the reachable concentration range
pub fn weak_solute() -> Solute {
    Solute::new(
        "Weak solute",
        Some("Ws"),
        3.0,
        Color::rgb(225, 225, 255),
        Color::rgb(0, 0, 255),
        "blue",
    )
    .expect("valid solute")
}

pub fn scenario_catalog() -> SoluteCatalog {
    SoluteCatalog::new(vec![cobalt_nitrate(), weak_solute()]).expect("valid catalog")
}

pub fn scenario_solution() -> Solution {
    Solution::new(cobalt_nitrate(), SimulationConfig::default()).expect("valid configuration")
}

pub fn scenario_simulation() -> MolaritySimulation {
    MolaritySimulation::new(
        scenario_catalog(),
        SimulationConfig::default(),
        NarrationStrings::default(),
    )
    .expect("valid simulation")
}

/// Register an observer that keeps every change it is handed
pub fn record_changes(simulation: &mut MolaritySimulation) -> Rc<RefCell<Vec<SolutionChange>>> {
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&changes);
    simulation.add_observer(Box::new(move |change: &SolutionChange, _: &Solution| {
        sink.borrow_mut().push(change.clone());
    }));
    changes
}
