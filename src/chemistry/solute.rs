//! Solute and solvent definitions

use crate::chemistry::color::Color;
use crate::error::{MolarityError, MolarityResult};

/// A dissolvable substance
///
/// Immutable value type: built once when the catalog is loaded, then only cloned
/// and compared.
///
/// # Example
///
/// ```rust
/// use molarity::chemistry::{Color, Solute};
///
/// let solute = Solute::new(
///     "Copper sulfate",
///     Some("CuSO4"),
///     1.38,
///     Color::rgb(200, 225, 255),
///     Color::rgb(30, 144, 255),
///     "blue",
/// ).unwrap();
///
/// assert_eq!(solute.display_formula(), "CuSO4");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Solute {
    name: String,
    /// `None` for the drink mix, which has no chemical formula
    formula: Option<String>,
    /// Saturation concentration \[mol/L\]
    saturated_concentration: f64,
    /// Tint at vanishing concentration
    min_color: Color,
    /// Tint at saturation
    max_color: Color,
    /// Plain color word used in narration ("red", "orange", ...)
    color_name: String,
    is_drink_mix: bool,
}

impl Solute {
    /// Create a solute with a chemical formula (or `None` for a formula-less substance)
    ///
    /// # Errors
    ///
    /// `InvalidSolute` if the saturated concentration is not a positive finite number
    /// or if the name is blank.
    pub fn new(
        name: impl Into<String>,
        formula: Option<&str>,
        saturated_concentration: f64,
        min_color: Color,
        max_color: Color,
        color_name: impl Into<String>,
    ) -> MolarityResult<Self> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(MolarityError::invalid_solute(name, "name cannot be blank"));
        }
        if !saturated_concentration.is_finite() || saturated_concentration <= 0.0 {
            return Err(MolarityError::invalid_solute(
                name,
                format!(
                    "saturated concentration must be positive, got {}",
                    saturated_concentration
                ),
            ));
        }

        Ok(Self {
            name,
            formula: formula.map(str::to_string),
            saturated_concentration,
            min_color,
            max_color,
            color_name: color_name.into(),
            is_drink_mix: false,
        })
    }

    /// Create the drink mix special case (no formula)
    pub fn drink_mix(
        name: impl Into<String>,
        saturated_concentration: f64,
        min_color: Color,
        max_color: Color,
        color_name: impl Into<String>,
    ) -> MolarityResult<Self> {
        let mut solute = Self::new(
            name,
            None,
            saturated_concentration,
            min_color,
            max_color,
            color_name,
        )?;
        solute.is_drink_mix = true;
        Ok(solute)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn formula(&self) -> Option<&str> {
        self.formula.as_deref()
    }

    /// Formula when there is one, name otherwise
    pub fn display_formula(&self) -> &str {
        self.formula.as_deref().unwrap_or(&self.name)
    }

    /// Saturation concentration \[mol/L\]
    pub fn saturated_concentration(&self) -> f64 {
        self.saturated_concentration
    }

    pub fn min_color(&self) -> Color {
        self.min_color
    }

    pub fn max_color(&self) -> Color {
        self.max_color
    }

    pub fn color_name(&self) -> &str {
        &self.color_name
    }

    pub fn is_drink_mix(&self) -> bool {
        self.is_drink_mix
    }

    /// Tint for a (non-zero) concentration, scaled by concentration / saturation
    pub fn color_at(&self, concentration: f64) -> Color {
        self.min_color
            .interpolate(self.max_color, concentration / self.saturated_concentration)
    }
}

/// The liquid filling the beaker when no solute is dissolved
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solvent {
    pub color: Color,
}

impl Solvent {
    pub const WATER: Solvent = Solvent {
        color: Color::rgb(224, 255, 255),
    };
}

impl Default for Solvent {
    fn default() -> Self {
        Self::WATER
    }
}

// =================================================================================================
// Tests
// =================================================================================================
