//! Common utilities for integration tests

pub mod fixtures;
pub mod test_helpers;

// Re-export commonly used items
pub use fixtures::{
    cobalt_nitrate,
    record_changes,
    scenario_catalog,
    scenario_simulation,
    scenario_solution,
    weak_solute,
};
pub use test_helpers::{assert_solution_consistent, sample_grid};
