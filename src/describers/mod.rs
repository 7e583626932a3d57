//! Region classifiers
//!
//! Each classifier maps one continuous quantity of the solution into a small set of
//! ordered qualitative regions and remembers how the last event moved it. The
//! narration layer reads the resulting flags to decide what to announce.
//!
//! # Design
//!
//! There is a single classifier type underneath, [`RegionTracker`], parameterized by
//! its [`RegionTable`]. The quantity-specific describers only decide which table to
//! use and which value of a [`SolutionChange`](crate::model::SolutionChange) to follow:
//!
//! | Describer                  | Follows            | Regions | Table depends on          |
//! |----------------------------|--------------------|---------|---------------------------|
//! | [`ConcentrationDescriber`] | concentration      | 7       | solute saturation         |
//! | [`VolumeDescriber`]        | volume             | 7       | nothing                   |
//! | [`SoluteAmountDescriber`]  | solute amount      | 7       | configured amount range   |
//! | [`SolidsDescriber`]        | precipitate amount | 5       | solute saturation, ranges |
//!
//! Labels are not owned by the classifiers: `label` looks the current region up in the
//! injected [`NarrationStrings`](crate::narration::NarrationStrings).

pub mod concentration;
pub mod region;
pub mod set;
pub mod solids;
pub mod solute_amount;
pub mod volume;

pub use concentration::{CONCENTRATION_REGION_COUNT, ConcentrationDescriber};
pub use region::{RegionBound, RegionTable, RegionTracker};
pub use set::Describers;
pub use solids::{SOLIDS_REGION_COUNT, SolidsDescriber};
pub use solute_amount::{SOLUTE_AMOUNT_REGION_COUNT, SoluteAmountDescriber};
pub use volume::{VOLUME_REGION_COUNT, VolumeDescriber};
