//! Solute catalog
//!
//! The ordered, immutable list of solutes offered to the user. The first entry is
//! the default selection of a new [`Solution`](crate::model::Solution).

use crate::chemistry::color::Color;
use crate::chemistry::solute::Solute;
use crate::error::{MolarityError, MolarityResult};

/// Ordered list of available solutes, fixed at startup
#[derive(Debug, Clone)]
pub struct SoluteCatalog {
    solutes: Vec<Solute>,
}

impl SoluteCatalog {
    /// Build a catalog from validated solutes
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if the list is empty or if two solutes share a name.
    pub fn new(solutes: Vec<Solute>) -> MolarityResult<Self> {
        if solutes.is_empty() {
            return Err(MolarityError::InvalidConfiguration(
                "solute catalog cannot be empty".to_string(),
            ));
        }

        for (i, solute) in solutes.iter().enumerate() {
            if solutes[..i].iter().any(|other| other.name() == solute.name()) {
                return Err(MolarityError::InvalidConfiguration(format!(
                    "solute '{}' is listed twice",
                    solute.name()
                )));
            }
        }

        log::info!("Solute catalog loaded with {} solutes", solutes.len());
        Ok(Self { solutes })
    }

    /// The standard catalog (drink mix first)
    pub fn standard() -> MolarityResult<Self> {
        let entry = |name: &str, formula: &str, sat: f64, min: Color, max: Color, color: &str| {
            Solute::new(name, Some(formula), sat, min, max, color)
        };

        Self::new(vec![
            Solute::drink_mix(
                "Drink mix",
                5.96,
                Color::rgb(255, 225, 225),
                Color::rgb(255, 0, 0),
                "red",
            )?,
            entry(
                "Cobalt (II) nitrate",
                "Co(NO3)2",
                5.64,
                Color::rgb(255, 225, 225),
                Color::rgb(255, 0, 0),
                "red",
            )?,
            entry(
                "Cobalt chloride",
                "CoCl2",
                4.33,
                Color::rgb(255, 242, 242),
                Color::rgb(255, 106, 106),
                "pink",
            )?,
            entry(
                "Potassium dichromate",
                "K2Cr2O7",
                0.51,
                Color::rgb(255, 204, 153),
                Color::rgb(255, 127, 0),
                "orange",
            )?,
            entry(
                "Gold (III) chloride",
                "AuCl3",
                2.25,
                Color::rgb(255, 255, 199),
                Color::rgb(255, 215, 0),
                "yellow",
            )?,
            entry(
                "Potassium chromate",
                "K2CrO4",
                3.35,
                Color::rgb(255, 255, 153),
                Color::rgb(255, 255, 0),
                "yellow",
            )?,
            entry(
                "Nickel (II) chloride",
                "NiCl2",
                5.21,
                Color::rgb(234, 244, 234),
                Color::rgb(0, 128, 0),
                "green",
            )?,
            entry(
                "Copper sulfate",
                "CuSO4",
                1.38,
                Color::rgb(200, 225, 255),
                Color::rgb(30, 144, 255),
                "blue",
            )?,
            entry(
                "Potassium permanganate",
                "KMnO4",
                0.48,
                Color::rgb(255, 0, 255),
                Color::rgb(80, 0, 80),
                "purple",
            )?,
        ])
    }

    /// All solutes in presentation order
    pub fn list_solutes(&self) -> &[Solute] {
        &self.solutes
    }

    /// Default selection
    pub fn first(&self) -> &Solute {
        &self.solutes[0]
    }

    pub fn get(&self, index: usize) -> Option<&Solute> {
        self.solutes.get(index)
    }

    pub fn find(&self, name: &str) -> Option<&Solute> {
        self.solutes.iter().find(|solute| solute.name() == name)
    }

    pub fn len(&self) -> usize {
        self.solutes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutes.is_empty()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
