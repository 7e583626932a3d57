//! Narration string templates
//!
//! Every user-facing word goes through [`NarrationStrings`], handed to the
//! orchestrator at construction. Patterns use `{name}` placeholders filled by
//! [`fill_in`]. The `Default` implementation holds the English strings.

use crate::describers::{
    CONCENTRATION_REGION_COUNT, SOLIDS_REGION_COUNT, SOLUTE_AMOUNT_REGION_COUNT,
    VOLUME_REGION_COUNT,
};
use crate::error::{MolarityError, MolarityResult};

/// Replace each `{key}` of `pattern` with its value
///
/// ```rust
/// use molarity::narration::fill_in;
///
/// let text = fill_in("Beaker holds {change} solution.", &[("change", "more")]);
/// assert_eq!(text, "Beaker holds more solution.");
/// ```
pub fn fill_in(pattern: &str, values: &[(&str, &str)]) -> String {
    values.iter().fold(pattern.to_string(), |text, (key, value)| {
        text.replace(&format!("{{{}}}", key), value)
    })
}

/// Templates and labels used to compose narration
#[derive(Debug, Clone, PartialEq)]
pub struct NarrationStrings {
    // ==================== Region labels ====================
    pub volume_regions: [String; VOLUME_REGION_COUNT],
    pub solute_amount_regions: [String; SOLUTE_AMOUNT_REGION_COUNT],
    pub concentration_regions: [String; CONCENTRATION_REGION_COUNT],
    pub solids_regions: [String; SOLIDS_REGION_COUNT],

    // ==================== Direction words ====================
    pub more: String,
    pub less: String,

    // ==================== Values ====================
    /// `{value}`
    pub volume_value_pattern: String,
    /// `{value}`
    pub solute_amount_value_pattern: String,
    /// `{region}`
    pub solute_amount_region_pattern: String,
    /// `{value}`
    pub concentration_value_pattern: String,

    // ==================== Solute selection ====================
    /// `{solute}`, `{state}`
    pub solute_selected_pattern: String,
    pub clear_state: String,
    /// `{color}`, `{concentration}`
    pub unsaturated_state_pattern: String,
    /// `{color}`, `{solids}`
    pub saturated_state_pattern: String,
    pub solids_formed_clause: String,
    pub solids_dissolved_clause: String,

    // ==================== Slider changes ====================
    /// `{change}`, `{volume}`
    pub volume_changed_pattern: String,
    /// `{change}`, `{amount}`
    pub solute_amount_changed_pattern: String,
    /// `{change}`, `{concentration}`
    pub concentration_changed_pattern: String,
    /// `{concentration}`
    pub concentration_unchanged_pattern: String,
    /// `{solids}`
    pub still_saturated_pattern: String,
    /// `{solids}`
    pub saturation_reached_pattern: String,
    /// `{concentration}`
    pub saturation_lost_pattern: String,

    // ==================== Focus ====================
    /// `{volume}`
    pub volume_focus_pattern: String,
    /// `{amount}`
    pub solute_amount_focus_pattern: String,
    /// `{solute}`
    pub solute_focus_pattern: String,
}

impl Default for NarrationStrings {
    fn default() -> Self {
        let s = |text: &str| text.to_string();
        Self {
            volume_regions: [
                s("nearly empty"),
                s("low"),
                s("under half full"),
                s("half full"),
                s("over half full"),
                s("nearly full"),
                s("full"),
            ],
            solute_amount_regions: [
                s("no"),
                s("a tiny amount of"),
                s("a small amount of"),
                s("some"),
                s("a bunch of"),
                s("a lot of"),
                s("the maximum amount of"),
            ],
            concentration_regions: [
                s("not concentrated"),
                s("very slightly concentrated"),
                s("slightly concentrated"),
                s("somewhat concentrated"),
                s("concentrated"),
                s("very concentrated"),
                s("highly concentrated"),
            ],
            solids_regions: [
                s("a few"),
                s("some"),
                s("several"),
                s("many"),
                s("a lot of"),
            ],

            more: s("more"),
            less: s("less"),

            volume_value_pattern: s("{value} liters"),
            solute_amount_value_pattern: s("{value} moles of solute"),
            solute_amount_region_pattern: s("{region} solute"),
            concentration_value_pattern: s("{value} moles per liter"),

            solute_selected_pattern: s("{solute} selected. {state}"),
            clear_state: s("Solution is clear water."),
            unsaturated_state_pattern: s("Solution is {color}, {concentration}."),
            saturated_state_pattern: s("Solution is {color} and saturated, {solids} solids in beaker."),
            solids_formed_clause: s("Solids formed."),
            solids_dissolved_clause: s("Solids dissolved."),

            volume_changed_pattern: s("Beaker holds {change} solution, now {volume}."),
            solute_amount_changed_pattern: s("Beaker holds {change} solute, now {amount}."),
            concentration_changed_pattern: s("Solution {change} concentrated, now {concentration}."),
            concentration_unchanged_pattern: s("Concentration unchanged, {concentration}."),
            still_saturated_pattern: s("Solution still saturated, {solids} solids in beaker."),
            saturation_reached_pattern: s("Solution now saturated, {solids} solids in beaker."),
            saturation_lost_pattern: s("Solution no longer saturated, now {concentration}."),

            volume_focus_pattern: s("Solution volume, {volume}."),
            solute_amount_focus_pattern: s("Solute amount, {amount}."),
            solute_focus_pattern: s("Solute, {solute}."),
        }
    }
}

impl NarrationStrings {
    /// Check every pattern carries the placeholders the orchestrator fills
    pub fn validate(&self) -> MolarityResult<()> {
        let required: [(&str, &String, &[&str]); 18] = [
            ("volume_value_pattern", &self.volume_value_pattern, &["value"]),
            ("solute_amount_value_pattern", &self.solute_amount_value_pattern, &["value"]),
            ("solute_amount_region_pattern", &self.solute_amount_region_pattern, &["region"]),
            ("concentration_value_pattern", &self.concentration_value_pattern, &["value"]),
            ("solute_selected_pattern", &self.solute_selected_pattern, &["solute", "state"]),
            ("unsaturated_state_pattern", &self.unsaturated_state_pattern, &["color", "concentration"]),
            ("saturated_state_pattern", &self.saturated_state_pattern, &["color", "solids"]),
            ("volume_changed_pattern", &self.volume_changed_pattern, &["change", "volume"]),
            ("solute_amount_changed_pattern", &self.solute_amount_changed_pattern, &["change", "amount"]),
            ("concentration_changed_pattern", &self.concentration_changed_pattern, &["change", "concentration"]),
            ("concentration_unchanged_pattern", &self.concentration_unchanged_pattern, &["concentration"]),
            ("still_saturated_pattern", &self.still_saturated_pattern, &["solids"]),
            ("saturation_reached_pattern", &self.saturation_reached_pattern, &["solids"]),
            ("saturation_lost_pattern", &self.saturation_lost_pattern, &["concentration"]),
            ("volume_focus_pattern", &self.volume_focus_pattern, &["volume"]),
            ("solute_amount_focus_pattern", &self.solute_amount_focus_pattern, &["amount"]),
            ("solute_focus_pattern", &self.solute_focus_pattern, &["solute"]),
            ("clear_state", &self.clear_state, &[]),
        ];

        for (field, pattern, keys) in required {
            if pattern.trim().is_empty() {
                return Err(MolarityError::InvalidConfiguration(format!(
                    "narration string '{}' is empty",
                    field
                )));
            }
            if let Some(key) = keys.iter().find(|key| !pattern.contains(&format!("{{{}}}", key))) {
                return Err(MolarityError::InvalidConfiguration(format!(
                    "narration string '{}' is missing placeholder {{{}}}",
                    field, key
                )));
            }
        }
        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
