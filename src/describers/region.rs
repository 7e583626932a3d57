//! Region tables and transition tracking
//!
//! A [`RegionTable`] cuts a continuous quantity into an ordered set of regions with
//! one-sided comparisons, so every value (including exact boundary values) lands in
//! exactly one region:
//!
//! ```text
//!  region 0     region 1      region 2       region n
//! ─────────┤(──────────](───────────)[── ... ──────────►
//!       bound 0     bound 1      bound 2
//! ```
//!
//! Values below the first bound fall in region 0, values above the last bound fall
//! in the last region, which has no upper bound. A table with `k` bounds has `k + 1`
//! regions.
//!
//! A [`RegionTracker`] keeps the current region of one observed quantity and the
//! transition flags the narration layer reads after every update.

use crate::config::round_to_places;
use crate::error::{MolarityError, MolarityResult};

/// Upper end of one region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionBound {
    pub upper: f64,
    /// Whether `upper` itself belongs to the region
    pub inclusive: bool,
}

impl RegionBound {
    /// Region ends at `upper`, included
    pub const fn at_most(upper: f64) -> Self {
        Self { upper, inclusive: true }
    }

    /// Region ends just before `upper`
    pub const fn below(upper: f64) -> Self {
        Self { upper, inclusive: false }
    }

    fn admits(&self, value: f64) -> bool {
        if self.inclusive {
            value <= self.upper
        } else {
            value < self.upper
        }
    }

    /// Strict ordering of bounds: at equal `upper`, exclusive comes first
    fn precedes(&self, other: &RegionBound) -> bool {
        self.upper < other.upper
            || (self.upper == other.upper && !self.inclusive && other.inclusive)
    }
}

/// Ordered, gap-free partition of a numeric axis
#[derive(Debug, Clone, PartialEq)]
pub struct RegionTable {
    name: &'static str,
    bounds: Vec<RegionBound>,
}

impl RegionTable {
    /// Build a table from its region upper bounds, in increasing order
    ///
    /// # Errors
    ///
    /// `InvalidRegionTable` if a bound is not finite or if two consecutive bounds are
    /// not strictly increasing (which would leave an empty or overlapping region).
    pub fn new(name: &'static str, bounds: Vec<RegionBound>) -> MolarityResult<Self> {
        if let Some(bound) = bounds.iter().find(|b| !b.upper.is_finite()) {
            return Err(MolarityError::invalid_table(
                name,
                format!("bound {} is not finite", bound.upper),
            ));
        }
        for pair in bounds.windows(2) {
            if !pair[0].precedes(&pair[1]) {
                return Err(MolarityError::invalid_table(
                    name,
                    format!(
                        "bounds {:?} and {:?} overlap or are out of order",
                        pair[0], pair[1]
                    ),
                ));
            }
        }
        Ok(Self { name, bounds })
    }

    /// Optional zero region followed by `slices` equal upper-inclusive slices of `(0, top]`
    ///
    /// With `zero_region`, exactly 0 (and anything below) has a region of its own.
    /// Bounds are rounded to `decimal_places`, the precision of the classified
    /// quantity, so a value sitting exactly on `k · top / slices` closes slice `k`.
    ///
    /// # Errors
    ///
    /// `InvalidRegionTable` if `slices` is 0, `top` is not a positive finite number, or
    /// two bounds collapse at the given precision.
    pub fn uniform(
        name: &'static str,
        top: f64,
        slices: usize,
        zero_region: bool,
        decimal_places: u32,
    ) -> MolarityResult<Self> {
        if slices == 0 {
            return Err(MolarityError::invalid_table(name, "needs at least one slice"));
        }
        if !top.is_finite() || top <= 0.0 {
            return Err(MolarityError::invalid_table(
                name,
                format!("top must be positive, got {}", top),
            ));
        }

        let mut bounds = Vec::with_capacity(slices);
        if zero_region {
            bounds.push(RegionBound::at_most(0.0));
        }

        // The last slice has no upper bound
        for i in 1..slices {
            let upper = top * i as f64 / slices as f64;
            bounds.push(RegionBound::at_most(round_to_places(upper, decimal_places)));
        }
        Self::new(name, bounds)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn bounds(&self) -> &[RegionBound] {
        &self.bounds
    }

    pub fn region_count(&self) -> usize {
        self.bounds.len() + 1
    }

    /// Region index of `value`
    ///
    /// Total over the reals: values below the first bound map to 0, values above the
    /// last bound (and NaN) map to the last region.
    pub fn classify(&self, value: f64) -> usize {
        self.bounds
            .iter()
            .position(|bound| bound.admits(value))
            .unwrap_or(self.bounds.len())
    }
}

// =================================================================================================
// Region tracker
// =================================================================================================

/// Current region of an observed quantity and the flags of its last transition
#[derive(Debug, Clone)]
pub struct RegionTracker {
    table: RegionTable,
    current: usize,
    previous: usize,
    just_changed_region: bool,
    /// `None` until the first update after construction or reinitialization
    just_increased: Option<bool>,
}

impl RegionTracker {
    pub fn new(table: RegionTable, initial_value: f64) -> Self {
        let current = table.classify(initial_value);
        Self {
            table,
            current,
            previous: current,
            just_changed_region: false,
            just_increased: None,
        }
    }

    /// Forget the transition history and restart from `value`
    pub fn reinitialize(&mut self, value: f64) {
        self.current = self.table.classify(value);
        self.previous = self.current;
        self.just_changed_region = false;
        self.just_increased = None;
    }

    /// Record a change of the observed value from `old_value` to `new_value`
    ///
    /// # Errors
    ///
    /// `InvariantViolation` when both values are equal. Change notifications only fire
    /// on actual change, so this is an internal-consistency error: it asserts in debug
    /// builds and leaves the tracker untouched in release builds.
    pub fn update(&mut self, new_value: f64, old_value: f64) -> MolarityResult<()> {
        if new_value == old_value {
            let err = MolarityError::invariant(
                self.table.name(),
                format!("update called with unchanged value {}", new_value),
            );
            log::error!("{}", err);
            debug_assert!(false, "{}", err);
            return Err(err);
        }

        self.previous = self.table.classify(old_value);
        self.current = self.table.classify(new_value);
        self.just_changed_region = self.current != self.previous;
        self.just_increased = Some(new_value > old_value);

        if self.just_changed_region {
            log::debug!(
                "{} region {} -> {}",
                self.table.name(),
                self.previous,
                self.current
            );
        }
        Ok(())
    }

    /// Swap the table (the scale moved under the value) and classify `new_value` with it
    ///
    /// The region change is measured against the region held under the previous table.
    /// The direction flag only moves if the value itself moved.
    pub fn retable(&mut self, table: RegionTable, old_value: f64, new_value: f64) {
        self.table = table;
        self.previous = self.current;
        self.current = self.table.classify(new_value);
        self.just_changed_region = self.current != self.previous;
        if new_value != old_value {
            self.just_increased = Some(new_value > old_value);
        }
    }

    /// Update when the value moved, hold otherwise
    pub fn follow(&mut self, new_value: f64, old_value: f64) -> MolarityResult<()> {
        if new_value == old_value {
            self.hold();
            Ok(())
        } else {
            self.update(new_value, old_value)
        }
    }

    /// Record an event that left the observed value untouched
    pub fn hold(&mut self) {
        self.previous = self.current;
        self.just_changed_region = false;
    }

    pub fn table(&self) -> &RegionTable {
        &self.table
    }

    pub fn current_region(&self) -> usize {
        self.current
    }

    pub fn previous_region(&self) -> usize {
        self.previous
    }

    pub fn just_changed_region(&self) -> bool {
        self.just_changed_region
    }

    pub fn just_increased(&self) -> Option<bool> {
        self.just_increased
    }
}

// =================================================================================================
// Tests
// =================================================================================================
