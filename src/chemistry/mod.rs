//! Chemistry definitions
//!
//! Static data consumed by the solution model:
//!
//! - **Solute**: name, formula, saturation concentration and color gradient
//! - **Solvent**: the color of the beaker contents without solute
//! - **SoluteCatalog**: the ordered list of solutes, fixed at startup
//!
//! Nothing in this module is mutated after construction. A solute with a
//! non-positive saturation concentration is a configuration error and is rejected
//! when the catalog is loaded.

pub mod catalog;
pub mod color;
pub mod solute;

pub use catalog::SoluteCatalog;
pub use color::Color;
pub use solute::{Solute, Solvent};
